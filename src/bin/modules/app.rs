use super::cli::Cli;
use super::error::CliError;
use super::io;
use baleq::balance_trace;

pub fn run(args: Cli) -> Result<(), CliError> {
    let equation = io::read_equation(&args.equation)?;

    let source_name = if args.equation == "-" {
        "stdin".to_string()
    } else {
        "argument".to_string()
    };

    let trace = balance_trace(&equation)?;

    let writer = io::get_writer(&args.output.output)?;
    io::write_results(
        writer,
        &trace,
        &args.output.format,
        args.output.steps,
        &source_name,
    )?;

    Ok(())
}
