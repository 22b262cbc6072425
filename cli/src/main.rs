//! CLI entrypoint for legislation
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use legislation_application::{
    BuildChamberLayoutsUseCase, CountryCatalog, EditCommand, EditCompositionUseCase,
};
use legislation_domain::GridShape;
use legislation_infrastructure::{ConfigLoader, FileConfig, JsonCountryCatalog};
use legislation_presentation::{Cli, Command, ConsoleFormatter, OutputFormat, TuiApp};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        print!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    config.validate().context("Invalid configuration")?;

    let command = cli.command_or_default();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, &config, command == Command::Tui)?;

    info!("Starting legislation");

    // === Dependency Injection ===
    let catalog = Arc::new(JsonCountryCatalog::load_or_bundled(
        config.countries_file.as_deref().map(Path::new),
    ));

    match command {
        Command::Tui => {
            let mut app = TuiApp::new(
                catalog,
                config.composition(),
                config.display.to_display_config()?,
            );
            app.run().await?;
        }
        Command::Render {
            country,
            format,
            no_color,
        } => {
            if no_color {
                colored::control::set_override(false);
            }

            let mut composition = config.composition();
            if let Some(country) = country {
                EditCompositionUseCase::new(catalog)
                    .execute(&mut composition, EditCommand::SetCountry(Some(country)))?;
            }

            let layouts = BuildChamberLayoutsUseCase::new().execute(&composition);
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format(
                    composition.country.as_deref(),
                    &layouts,
                    &config.display.to_display_config()?,
                ),
                OutputFormat::Json => {
                    ConsoleFormatter::format_json(composition.country.as_deref(), &layouts)
                }
            };
            print!("{output}");
        }
        Command::Shape { total } => {
            let shape = GridShape::try_for_total(total)?;
            // try_for_total rejects anything outside u32
            let total = u32::try_from(total)?;
            println!("{}", ConsoleFormatter::format_shape(total, shape));
        }
        Command::Countries { refresh, write } => {
            let countries = if refresh {
                fetch_countries(cli.quiet).await?
            } else {
                catalog.countries().to_vec()
            };

            match write {
                Some(path) => write_countries(&path, &countries)?,
                None => print!("{}", ConsoleFormatter::format_countries(&countries)),
            }
        }
    }

    Ok(())
}

/// Initialize tracing.
///
/// The TUI owns the terminal, so it logs to a daily file; every other
/// command logs to stderr.
fn init_logging(verbose: u8, config: &FileConfig, to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 if to_file => EnvFilter::try_new(&config.log.level)?,
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let Some(directory) = config.log.log_directory() else {
        // No writable location; stay silent rather than draw over the TUI
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;
    let appender = tracing_appender::rolling::daily(&directory, "legislation.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

#[cfg(feature = "fetch-countries")]
async fn fetch_countries(quiet: bool) -> Result<Vec<String>> {
    use legislation_application::RefreshCountriesUseCase;
    use legislation_infrastructure::RestCountriesFetcher;
    use legislation_presentation::TaskSpinner;

    let fetcher = RestCountriesFetcher::new();
    let spinner = TaskSpinner::start(format!("Fetching {}", fetcher.endpoint()), quiet);

    match RefreshCountriesUseCase::new(Arc::new(fetcher)).execute().await {
        Ok(countries) => {
            spinner.succeed(format!("{} countries", countries.len()));
            Ok(countries)
        }
        Err(e) => {
            spinner.fail("Fetch failed");
            Err(e.into())
        }
    }
}

#[cfg(not(feature = "fetch-countries"))]
async fn fetch_countries(_quiet: bool) -> Result<Vec<String>> {
    tracing::warn!("Built without the fetch-countries feature");
    Err(anyhow!(
        "--refresh is unavailable: rebuild with the fetch-countries feature"
    ))
}

fn write_countries(path: &Path, countries: &[String]) -> Result<()> {
    JsonCountryCatalog::write_json(path, countries)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), count = countries.len(), "Wrote country list");
    println!("Wrote {} countries to {}", countries.len(), path.display());
    Ok(())
}
