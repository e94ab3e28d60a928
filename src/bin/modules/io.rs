use super::cli::OutputFormat;
use super::error::CliError;
use baleq::BalanceTrace;
use num_bigint::BigUint;
use prettytable::*;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

pub fn read_equation(input_spec: &str) -> Result<String, CliError> {
    if input_spec != "-" {
        return Ok(input_spec.to_string());
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let equation = buffer.trim();
    if equation.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(equation.to_string())
}

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_results(
    mut writer: Box<dyn Write>,
    trace: &BalanceTrace,
    format: &OutputFormat,
    steps: bool,
    source_name: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, trace, steps, source_name),
        OutputFormat::Plain => write_plain(&mut writer, trace, steps),
        OutputFormat::Csv => write_csv(&mut writer, trace),
        OutputFormat::Json => write_json(&mut writer, trace),
    }
}

/// Per-term (text, side, coefficient) triples in column order.
fn term_rows(trace: &BalanceTrace) -> Vec<(&str, &'static str, &BigUint)> {
    let reactant_count = trace.equation.reactants().len();
    trace
        .equation
        .terms()
        .zip(trace.solution.coefficients.iter())
        .enumerate()
        .map(|(i, (term, coefficient))| {
            let side = if i < reactant_count {
                "reactant"
            } else {
                "product"
            };
            (term, side, coefficient)
        })
        .collect()
}

fn write_steps(writer: &mut dyn Write, trace: &BalanceTrace) -> Result<(), CliError> {
    writeln!(
        writer,
        "Terms (matrix column order): {}",
        trace.equation.terms().collect::<Vec<&str>>().join(", ")
    )?;
    writeln!(writer, "Atoms (matrix row order): {}", trace.atoms.join(", "))?;
    writeln!(writer)?;
    writeln!(writer, "Stoichiometric matrix (one row per atom):")?;
    write!(writer, "{}", trace.matrix)?;
    writeln!(writer)?;
    writeln!(writer, "Reduced matrix:")?;
    write!(writer, "{}", trace.reduced)?;
    writeln!(writer)?;
    Ok(())
}

fn write_pretty_table(
    writer: &mut dyn Write,
    trace: &BalanceTrace,
    steps: bool,
    source_name: &str,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let no_intern_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let balanced = baleq::format::format_equation(&trace.equation, &trace.solution);

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->"Baleq Equation Balancing Results"]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let mut summary_table = Table::new();
    summary_table.set_format(no_intern_format);
    summary_table.add_row(row![b->"Source:", source_name]);
    summary_table.add_row(row![b->"Terms:", trace.equation.term_count()]);
    summary_table.add_row(row![b->"Atoms:", trace.atoms.len()]);
    summary_table.add_row(row![b->"Balanced:", balanced]);
    summary_table.print(writer)?;
    writeln!(writer)?;

    if steps {
        write_steps(writer, trace)?;
    }

    let mut data_table = Table::new();
    data_table.set_format(box_format);
    data_table.set_titles(row![bc->"Term", bc->"Side", bc->"Coefficient"]);

    for (term, side, coefficient) in term_rows(trace) {
        data_table.add_row(row![l->term, l->side, r->coefficient]);
    }

    data_table.print(writer)?;

    Ok(())
}

fn write_plain(writer: &mut dyn Write, trace: &BalanceTrace, steps: bool) -> Result<(), CliError> {
    if steps {
        write_steps(writer, trace)?;
    }
    writeln!(
        writer,
        "{}",
        baleq::format::format_equation(&trace.equation, &trace.solution)
    )?;
    Ok(())
}

fn write_csv(writer: &mut dyn Write, trace: &BalanceTrace) -> Result<(), CliError> {
    writeln!(writer, "term,side,coefficient")?;
    for (term, side, coefficient) in term_rows(trace) {
        writeln!(writer, "{},{},{}", term, side, coefficient)?;
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, trace: &BalanceTrace) -> Result<(), CliError> {
    let rows = term_rows(trace);

    writeln!(writer, "{{")?;
    writeln!(
        writer,
        "  \"balanced\": \"{}\",",
        baleq::format::format_equation(&trace.equation, &trace.solution)
    )?;
    writeln!(
        writer,
        "  \"atoms\": [{}],",
        trace
            .atoms
            .iter()
            .map(|a| format!("\"{}\"", a))
            .collect::<Vec<String>>()
            .join(", ")
    )?;
    writeln!(writer, "  \"terms\": [")?;
    for (i, (term, side, coefficient)) in rows.iter().enumerate() {
        let comma = if i < rows.len() - 1 { "," } else { "" };
        writeln!(writer, "    {{")?;
        writeln!(writer, "      \"term\": \"{}\",", term)?;
        writeln!(writer, "      \"side\": \"{}\",", side)?;
        writeln!(writer, "      \"coefficient\": {}", coefficient)?;
        writeln!(writer, "    }}{}", comma)?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}
