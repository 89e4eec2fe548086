mod input;
mod logging;
mod report;

use clap::Parser;
use input::ModelDocument;
use lpbridge_highs::{Solution, SolveError, Solver, highs_version};
use lpbridge_solver::{ControlOptions, OptionKind, Solve, SolveOptions, Verbosity};
use report::SolutionReport;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "lpbridge",
    author,
    version,
    about = "Solve a JSON linear or quadratic model with HiGHS"
)]
struct Cli {
    /// JSON model document; read from stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Time limit in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Solver log verbosity (off, low, medium, high)
    #[arg(long, default_value = "off", value_parser = parse_verbosity)]
    verbosity: Verbosity,

    /// Absolute MIP gap
    #[arg(long)]
    mip_gap_absolute: Option<f64>,

    /// Relative MIP gap
    #[arg(long)]
    mip_gap_relative: Option<f64>,

    /// Boolean engine options as name=value pairs
    #[arg(long)]
    control_bool: Vec<String>,

    /// Float engine options as name=value pairs
    #[arg(long)]
    control_float: Vec<String>,

    /// Integer engine options as name=value pairs
    #[arg(long)]
    control_int: Vec<String>,

    /// String engine options as name=value pairs
    #[arg(long)]
    control_string: Vec<String>,
}

fn parse_verbosity(raw: &str) -> Result<Verbosity, String> {
    raw.parse().map_err(|err: lpbridge_solver::ConfigError| err.to_string())
}

impl Cli {
    fn solve_options(&self) -> Result<SolveOptions, Box<dyn std::error::Error>> {
        let mut options = SolveOptions::new().with_verbosity(self.verbosity);
        if let Some(seconds) = self.duration {
            let duration = Duration::try_from_secs_f64(seconds)
                .map_err(|err| format!("Invalid duration {seconds}: {err}"))?;
            options = options.with_duration(duration);
        }
        if let Some(gap) = self.mip_gap_absolute {
            options = options.with_mip_gap_absolute(gap);
        }
        if let Some(gap) = self.mip_gap_relative {
            options = options.with_mip_gap_relative(gap);
        }

        let mut control = ControlOptions::new();
        for (kind, entries) in [
            (OptionKind::Bool, &self.control_bool),
            (OptionKind::Float, &self.control_float),
            (OptionKind::Int, &self.control_int),
            (OptionKind::Str, &self.control_string),
        ] {
            for raw in entries {
                control.extend_from_str(kind, raw)?;
            }
        }
        Ok(options.with_control(control))
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let options = cli.solve_options()?;
    let raw = read_input(cli.input.as_ref())?;
    let model = ModelDocument::from_json(&raw)?.to_model()?;

    let mut solver = Solver::new(model);
    let (report, error) = solve_outcome(solver.solve(&options));
    if let Some(report) = report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    match error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Split a solve result into the report to print and the error to exit with.
///
/// Load and retrieval failures still report their unknown-status solution.
fn solve_outcome(
    result: Result<Solution, SolveError>,
) -> (Option<SolutionReport>, Option<String>) {
    match result {
        Ok(solution) => (Some(SolutionReport::new(&solution, highs_version())), None),
        Err(err) => {
            let message = err.to_string();
            let report = err
                .into_solution()
                .map(|solution| SolutionReport::new(&solution, highs_version()));
            (report, Some(message))
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("Failed to read {}: {err}", path.display()).into()),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
