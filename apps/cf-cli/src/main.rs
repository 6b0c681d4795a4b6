use cf_case::{CaseReport, CaseResult, StageReport};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(about = "combustflow CLI - chemical-equilibrium combustion solver", long_about = None)]
struct Cli {
    /// Log solver progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and values
    Validate {
        /// Path to the case YAML or JSON file
        case_path: PathBuf,
    },
    /// Solve a case: combustion, then each recombination stage
    Run {
        /// Path to the case YAML or JSON file
        case_path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CaseResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Run {
            case_path,
            json,
            output,
        } => cmd_run(&case_path, json, output.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_validate(case_path: &Path) -> CaseResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = cf_case::load(case_path)?;
    println!(
        "✓ Case '{}' is valid ({} recombination stages)",
        case.name,
        case.stages.len()
    );
    Ok(())
}

fn cmd_run(case_path: &Path, json: bool, output: Option<&Path>) -> CaseResult<()> {
    let case = cf_case::load(case_path)?;
    debug!(case = %case.name, reaction = %case.reaction, "loaded case");

    let start = Instant::now();
    let report = cf_case::run_case(&case)?;
    let elapsed = start.elapsed();

    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("✓ Report written to {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        print_report(&mut out, &report)?;
        writeln!(out, "Solved in {:.1} ms", elapsed.as_secs_f64() * 1000.0)?;
    }
    Ok(())
}

fn print_report(out: &mut impl Write, report: &CaseReport) -> io::Result<()> {
    writeln!(out, "Case: {} ({})", report.case, report.reaction)?;
    writeln!(
        out,
        "  Reactants: h = {:.2} kJ/kg, s = {:.4} kJ/(kg·K)",
        report.reactants_enthalpy, report.reactants_entropy
    )?;
    for stage in &report.stages {
        print_stage(out, stage)?;
    }
    Ok(())
}

fn print_stage(out: &mut impl Write, stage: &StageReport) -> io::Result<()> {
    let s = &stage.summary;
    writeln!(out)?;
    writeln!(out, "[{}] {:?}", stage.name, stage.kind)?;
    if !stage.combustion_occurs {
        writeln!(out, "  (no combustion: composition frozen)")?;
    }
    writeln!(out, "  T     = {:>10.2} K", s.temperature)?;
    writeln!(out, "  P     = {:>10.3} kPa", s.pressure)?;
    writeln!(out, "  MW    = {:>10.4} g/mol", s.molecular_weight)?;
    writeln!(out, "  gamma = {:>10.5}", s.gamma)?;
    writeln!(out, "  h     = {:>10.2} kJ/kg", s.enthalpy)?;
    writeln!(out, "  s     = {:>10.4} kJ/(kg·K)", s.entropy)?;
    writeln!(out, "  cp    = {:>10.4} kJ/(kg·K)", s.specific_heat)?;

    if let Some(interp) = &stage.interpolation {
        writeln!(
            out,
            "  Interpolated between {:.1} K and {:.1} K (weight {:.3})",
            interp.bracket_temperatures[0], interp.bracket_temperatures[1], interp.weight
        )?;
    }

    writeln!(out, "  Mole fractions:")?;
    for c in stage.composition.iter().filter(|c| c.mole_fraction > 0.0) {
        writeln!(out, "    {:<6} {:.6}", c.compound, c.mole_fraction)?;
    }

    let d = &stage.diagnostics;
    if d.soft_failures() > 0 {
        writeln!(
            out,
            "  Warnings: {} equilibrium caps, {} element imbalances, {} search caps, {} floor hits",
            d.equilibrium_not_converged,
            d.element_imbalance,
            d.search_cap_reached,
            d.temperature_floor_hits
        )?;
    }
    Ok(())
}
