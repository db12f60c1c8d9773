use clap::{Args, Parser, Subcommand};
use hs_app::{AppResult, EvaluateRequest, evaluate, evaluate_case, load_study, report, study_service};
use hs_model::{
    FormationType, InjectionScenario, ParameterRanges, SweepDefinition, ThermalCycling,
    ValidationPolicy,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(about = "h2store CLI - Hydrogen storage geomechanical risk screening", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict stress, displacement and risk for one scenario
    Predict {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Reject negative or non-finite inputs instead of extrapolating
        #[arg(long)]
        strict: bool,
    },
    /// Sweep injection pressure and print the response curve as CSV
    Sweep {
        /// Formation type (depleted_gas_field | salt_cavern)
        #[arg(long)]
        formation: FormationType,
        #[command(flatten)]
        thermal: ThermalArgs,
        #[command(flatten)]
        range: SweepArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate study file syntax and cases
    Validate {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
    },
    /// List cases in a study
    Cases {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
    },
    /// Evaluate one case from a study
    Run {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
        /// Case ID to evaluate
        case_id: String,
        /// Write the response curve to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ScenarioArgs {
    /// Injection pressure in MPa
    #[arg(long, allow_negative_numbers = true)]
    pressure: f64,
    /// Formation type (depleted_gas_field | salt_cavern)
    #[arg(long)]
    formation: FormationType,
    #[command(flatten)]
    thermal: ThermalArgs,
    #[command(flatten)]
    range: SweepArgs,
}

#[derive(Args)]
struct ThermalArgs {
    /// Include thermal cycling with default swing and cycle count
    #[arg(long)]
    thermal: bool,
    /// Temperature swing in °C (implies --thermal)
    #[arg(long, allow_negative_numbers = true)]
    delta_t: Option<f64>,
    /// Number of thermal cycles (implies --thermal)
    #[arg(long)]
    cycles: Option<u32>,
}

impl ThermalArgs {
    fn to_cycling(&self, ranges: &ParameterRanges) -> ThermalCycling {
        if !self.thermal && self.delta_t.is_none() && self.cycles.is_none() {
            return ThermalCycling::NONE;
        }
        let defaults = ranges.default_thermal();
        ThermalCycling::new(
            self.delta_t.unwrap_or(defaults.delta_t_c),
            self.cycles.unwrap_or(defaults.cycles),
        )
    }
}

#[derive(Args)]
struct SweepArgs {
    /// Sweep start pressure in MPa
    #[arg(long, default_value_t = 1.0)]
    low: f64,
    /// Sweep end pressure in MPa
    #[arg(long, default_value_t = 10.0)]
    high: f64,
    /// Number of sweep points
    #[arg(long, default_value_t = 100)]
    samples: usize,
}

impl SweepArgs {
    fn to_definition(&self) -> AppResult<SweepDefinition> {
        Ok(SweepDefinition::new(self.low, self.high, self.samples)?)
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr so CSV on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict { scenario, strict } => cmd_predict(&scenario, strict),
        Commands::Sweep {
            formation,
            thermal,
            range,
            output,
        } => cmd_sweep(formation, &thermal, &range, output.as_deref()),
        Commands::Validate { study_path } => cmd_validate(&study_path),
        Commands::Cases { study_path } => cmd_cases(&study_path),
        Commands::Run {
            study_path,
            case_id,
            export,
        } => cmd_run(&study_path, &case_id, export.as_deref()),
    }
}

fn cmd_predict(args: &ScenarioArgs, strict: bool) -> AppResult<()> {
    let ranges = ParameterRanges::default();
    let scenario = InjectionScenario::new(args.pressure, args.formation)
        .with_thermal(args.thermal.to_cycling(&ranges));
    let policy = if strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::Permissive
    };

    let request = EvaluateRequest::new(scenario)
        .with_sweep(args.range.to_definition()?)
        .with_policy(policy);
    let eval = evaluate(&request)?;

    print!("{}", report::format_report(&eval));
    Ok(())
}

fn cmd_sweep(
    formation: FormationType,
    thermal: &ThermalArgs,
    range: &SweepArgs,
    output: Option<&Path>,
) -> AppResult<()> {
    let def = range.to_definition()?;
    let thermal = thermal.to_cycling(&ParameterRanges::default());
    let curve = hs_model::execute_sweep(&def, formation, thermal);

    if let Some(path) = output {
        report::write_curve_csv(path, &curve)?;
        println!("✓ Exported {} points to {}", curve.len(), path.display());
    } else {
        print!("{}", report::curve_to_csv(&curve));
    }
    Ok(())
}

fn cmd_validate(study_path: &Path) -> AppResult<()> {
    println!("Validating study: {}", study_path.display());
    let study = load_study(study_path)?;
    study_service::validate_study(&study)?;
    println!("✓ Study is valid");
    Ok(())
}

fn cmd_cases(study_path: &Path) -> AppResult<()> {
    let study = load_study(study_path)?;
    let cases = study_service::list_cases(&study);

    if cases.is_empty() {
        println!("No cases found in study");
    } else {
        println!("Cases in study '{}':", study.name);
        for case in cases {
            println!(
                "  {} - {} ({}, {:.2} MPa{})",
                case.id,
                case.name,
                case.formation,
                case.pressure_mpa,
                if case.thermal_cycling { ", cycled" } else { "" }
            );
        }
    }
    Ok(())
}

fn cmd_run(study_path: &Path, case_id: &str, export: Option<&Path>) -> AppResult<()> {
    let study = load_study(study_path)?;
    study_service::validate_study(&study)?;

    let case = study_service::get_case(&study, case_id)?;
    println!("Case: {} ({})\n", case.name, case.id);

    let eval = evaluate_case(&study, case_id)?;
    print!("{}", report::format_report(&eval));

    if let Some(path) = export {
        report::write_curve_csv(path, &eval.curve)?;
        println!("\n✓ Exported {} points to {}", eval.curve.len(), path.display());
    }
    Ok(())
}
