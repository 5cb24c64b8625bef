use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use td_project::{CompiledCase, ProjectResult, compile_case, load_case};
use td_solver::{
    DynamicResponse, IntegrationMethod, assemble_mass, assemble_stiffness, method_cases,
    mode_shapes, run_sweep,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "td-cli")]
#[command(about = "Time-domain response of shear buildings with liquid column dampers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and values
    Validate {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// Run the dynamic analysis and print peak responses
    Run {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
        /// Override the integration method (e.g. "Runge-Kutta Method")
        #[arg(long)]
        method: Option<String>,
        /// Override the time step in seconds
        #[arg(long)]
        dt: Option<f64>,
        /// Enable the nonlinear damper update
        #[arg(long)]
        nonlinear: bool,
    },
    /// Run the case once per integration method, in parallel
    Compare {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// Print natural frequencies and mode shapes of the assembled system
    Modes {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
}

fn main() -> ProjectResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Run {
            case_path,
            method,
            dt,
            nonlinear,
        } => cmd_run(&case_path, method.as_deref(), dt, nonlinear),
        Commands::Compare { case_path } => cmd_compare(&case_path),
        Commands::Modes { case_path } => cmd_modes(&case_path),
    }
}

fn load_compiled(case_path: &Path) -> ProjectResult<CompiledCase> {
    let case = load_case(case_path)?;
    tracing::debug!(path = %case_path.display(), version = case.version, "loaded case file");
    compile_case(&case)
}

fn cmd_validate(case_path: &Path) -> ProjectResult<()> {
    println!("Validating case: {}", case_path.display());
    let compiled = load_compiled(case_path)?;
    let layout = compiled.building.layout();
    println!(
        "✓ Case is valid: {} ({} stories, {} damper columns)",
        compiled.name, layout.stories, layout.dampers
    );
    Ok(())
}

fn cmd_run(
    case_path: &Path,
    method: Option<&str>,
    dt: Option<f64>,
    nonlinear: bool,
) -> ProjectResult<()> {
    let mut compiled = load_compiled(case_path)?;
    if let Some(name) = method {
        compiled.config.method = name.parse::<IntegrationMethod>()?;
    }
    if let Some(dt) = dt {
        compiled.config.time_step = dt;
    }
    compiled.config.nonlinear_analysis |= nonlinear;

    println!(
        "Running {} with {} (dt = {} s{})",
        compiled.name,
        compiled.config.method,
        compiled.config.time_step,
        if compiled.config.nonlinear_analysis {
            ", nonlinear damper"
        } else {
            ""
        }
    );
    let response = compiled.run()?;
    print_peaks(&response);
    Ok(())
}

fn print_peaks(response: &DynamicResponse) {
    println!(
        "✓ {} steps, {} DOFs",
        response.step_count(),
        response.dof_count()
    );
    println!(
        "  {:<10} {:>14} {:>14} {:>14}",
        "DOF", "|x| max (m)", "|v| max (m/s)", "|a| max (m/s²)"
    );
    for peak in response.peaks() {
        let label = if peak.dof < response.layout.stories {
            format!("story {}", peak.dof + 1)
        } else {
            format!("damper {}", peak.dof - response.layout.stories + 1)
        };
        println!(
            "  {:<10} {:>14.6e} {:>14.6e} {:>14.6e}",
            label, peak.displacement, peak.velocity, peak.acceleration
        );
    }
    if let Some(v) = &response.damper_velocity {
        let max = v.iter().fold(0.0_f64, |m, s| m.max(*s));
        println!("  peak damper liquid speed: {max:.6e} m/s");
    }
}

fn cmd_compare(case_path: &Path) -> ProjectResult<()> {
    let compiled = load_compiled(case_path)?;
    let top = compiled.building.layout().top_story();
    let cases = method_cases(&compiled.building, &compiled.excitation, &compiled.config);
    println!("Comparing {} methods on {}", cases.len(), compiled.name);
    for outcome in run_sweep(&cases) {
        match outcome.result {
            Ok(response) => {
                let peak = response
                    .peaks()
                    .get(top)
                    .map_or(0.0, |p| p.displacement);
                println!("  {:<30} top story |x| max = {:.6e} m", outcome.label, peak);
            }
            Err(e) => println!("  {:<30} failed: {}", outcome.label, e),
        }
    }
    Ok(())
}

fn cmd_modes(case_path: &Path) -> ProjectResult<()> {
    let compiled = load_compiled(case_path)?;
    let mass = assemble_mass(&compiled.building);
    let stiffness = assemble_stiffness(&compiled.building);
    let shapes = mode_shapes(&stiffness, &mass)?;

    println!("Modes of {}:", compiled.name);
    for (i, (w, period)) in shapes
        .natural_frequencies()
        .into_iter()
        .zip(shapes.periods())
        .enumerate()
    {
        let shape: Vec<String> = shapes
            .modes
            .column(i)
            .iter()
            .map(|v| format!("{v:+.4}"))
            .collect();
        println!(
            "  mode {}: ω = {:.4} rad/s, T = {:.4} s, φ = [{}]",
            i + 1,
            w,
            period,
            shape.join(", ")
        );
    }

    println!("Uncoupled story frequencies:");
    for (i, w) in compiled.building.story_frequencies().iter().enumerate() {
        println!("  story {}: ω = {:.4} rad/s", i + 1, w);
    }
    Ok(())
}
