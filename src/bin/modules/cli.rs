use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str =
    "A command-line tool for balancing chemical equations with exact integer arithmetic.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(
    version,
    about = ABOUT,
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The chemical equation to balance.
    ///
    /// Reactants and products are separated by ':', terms within a side by
    /// '+', for example "H2 + O2 : H2O". Use '-' to read the equation from
    /// standard input instead.
    #[arg(value_name = "EQUATION")]
    pub equation: String,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Also print the intermediate matrices of the balancing pipeline.
    ///
    /// Shows the atom list, the signed stoichiometric matrix, and its
    /// integer row-echelon reduction. Ignored for csv and json output.
    #[arg(long)]
    pub steps: bool,
}

/// Output format for the balancing results.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed tables with the balanced equation and per-term coefficients.
    Pretty,
    /// The balanced equation on a single line.
    Plain,
    /// Comma-separated values with columns: term, side, coefficient.
    Csv,
    /// JSON object containing the balanced equation and a terms array.
    Json,
}
