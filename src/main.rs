mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use stylish_report::finding::Totals;
use stylish_report::{config, input, output};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level is `stylish_report=debug` with `--debug`, otherwise `RUST_LOG`
/// or `stylish_report=warn`. Logs go to stderr; stdout carries the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stylish_report=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stylish_report=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("stylish-report starting with args: {:?}", cli);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> stylish_report::Result<ExitCode> {
    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(color) = cli.color {
        config.output.color = color;
    }
    if cli.strict {
        config.strict.enabled = true;
    }

    let results = input::read_results(cli.input.as_deref())?;
    let styler = config.output.color.styler();
    let formatted = output::format_report(&results, &styler);

    if let Some(out_path) = cli.output {
        std::fs::write(&out_path, &formatted)?;
        eprintln!("Output written to {}", out_path.display());
    } else {
        print!("{formatted}");
    }

    let totals = Totals::from_results(&results);
    let failed = totals.has_errors() || (config.strict.enabled && totals.has_warnings());
    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
