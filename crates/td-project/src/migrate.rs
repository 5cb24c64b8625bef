//! Case file version migration.

use crate::ProjectError;
use crate::schema::CaseFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut case: CaseFile) -> Result<CaseFile, ProjectError> {
    while case.version < LATEST_VERSION {
        case = migrate_one_version(case)?;
    }
    Ok(case)
}

fn migrate_one_version(case: CaseFile) -> Result<CaseFile, ProjectError> {
    match case.version {
        0 => migrate_v0_to_v1(case),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files share the version 1 layout.
fn migrate_v0_to_v1(mut case: CaseFile) -> Result<CaseFile, ProjectError> {
    case.version = 1;
    Ok(case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ExcitationDef;

    #[test]
    fn v0_only_bumps_version() {
        let mut case = CaseFile {
            version: 0,
            name: "old".into(),
            stories: vec![Default::default()],
            tlcd: None,
            excitation: ExcitationDef::SineWave {
                frequency_rad_s: 1.0,
                amplitude_mps2: 1.0,
                excitation_duration_s: 1.0,
                analysis_duration_s: 1.0,
            },
            configuration: Default::default(),
        };
        case.configuration.damping_ratio = 0.02;
        let migrated = migrate_to_latest(case.clone()).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert_eq!(migrated.configuration, case.configuration);
        assert_eq!(migrated.stories, case.stories);
    }
}
