use std::process::ExitCode;

use clap::Parser;

use jsontab::config::Settings;
use jsontab::error::PipelineResult;
use jsontab::parser::JsonSource;
use jsontab::writer::CsvSink;

/// Flatten nested JSON from standard input into a CSV file
///
/// Reads one JSON document from stdin and writes result.csv into the
/// directory named by the OUTPUT_DIRECTORY environment variable.
#[derive(Parser, Debug)]
#[command(name = "jsontab")]
#[command(about = "Flatten nested JSON from stdin into a CSV file")]
#[command(version)]
struct CliArgs {}

fn main() -> ExitCode {
    let _args = CliArgs::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.user_message());
            ExitCode::from(err.exit_code())
        }
    }
}

/// Resolve configuration, then parse, normalize, and persist.
///
/// The sink is only invoked after normalization succeeds, so no output file
/// is created for invalid input.
fn run() -> PipelineResult<()> {
    let settings = Settings::from_env()?;
    let sink = CsvSink::from_settings(&settings);

    let document = JsonSource::Stdin.parse()?;
    let table = jsontab::normalize_json(&document)?;
    sink.write(&table)?;

    Ok(())
}
