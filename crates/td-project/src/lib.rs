//! td-project: case file format, validation and compilation into solver inputs.

pub mod compile;
pub mod migrate;
pub mod schema;
pub mod validate;

pub use compile::{CompiledCase, compile_case};
pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_case};

use std::fs;
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Model error: {0}")]
    Structure(#[from] td_structure::StructureError),

    #[error("Excitation error: {0}")]
    Excitation(#[from] td_excitation::ExcitationError),

    #[error("Solver error: {0}")]
    Solver(#[from] td_solver::SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Yaml,
    Json,
}

impl CaseFormat {
    /// `.json` files are JSON, anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    /// Decode, migrate to the latest version and validate.
    pub fn parse(self, content: &str) -> ProjectResult<CaseFile> {
        let case: CaseFile = match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        };
        let case = migrate_to_latest(case)?;
        validate_case(&case)?;
        Ok(case)
    }

    /// Validate, then encode. Invalid cases are never written out.
    pub fn render(self, case: &CaseFile) -> ProjectResult<String> {
        validate_case(case)?;
        Ok(match self {
            Self::Yaml => serde_yaml::to_string(case)?,
            Self::Json => serde_json::to_string_pretty(case)?,
        })
    }
}

fn read_as(path: &Path, format: CaseFormat) -> ProjectResult<CaseFile> {
    format.parse(&fs::read_to_string(path)?)
}

fn write_as(path: &Path, case: &CaseFile, format: CaseFormat) -> ProjectResult<()> {
    let content = format.render(case)?;
    fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<CaseFile> {
    read_as(path, CaseFormat::Yaml)
}

pub fn save_yaml(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    write_as(path, case, CaseFormat::Yaml)
}

pub fn load_json(path: &Path) -> ProjectResult<CaseFile> {
    read_as(path, CaseFormat::Json)
}

pub fn save_json(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    write_as(path, case, CaseFormat::Json)
}

/// Load a case file, choosing the format from the extension.
pub fn load_case(path: &Path) -> ProjectResult<CaseFile> {
    read_as(path, CaseFormat::from_path(path))
}
