//! Timestamp Renamer - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use timestamp_renamer::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_format_catalog, print_info,
        print_json_report, print_run_stats, print_success, print_warning,
    },
    FfprobeProbe, Renamer,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) if e.is_input_error() => {
            print_warning(&format!("{}", e));
            ExitCode::from(exit_codes::INVALID_INPUT as u8)
        }
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::TomlParse(_) | Error::TomlSerialize(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Relocate { .. } | Error::ReadDirectory { .. } => {
                    ExitCode::from(exit_codes::RENAME_ERROR as u8)
                }
                Error::SomeFilesFailed(_) => ExitCode::from(exit_codes::SOME_FILES_FAILED as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if args.list_formats {
        print_format_catalog();
        return Ok(());
    }

    let human_output = !args.json;
    if human_output && !args.quiet {
        print_banner();
    }

    // Load configuration
    let (mut config, config_path) = load_config(&args, human_output)?;

    // Merge CLI arguments into config; run-only switches are never saved
    args.merge_into_config(&mut config);
    let persisted = config.clone();
    args.apply_run_switches(&mut config);

    // Validate before touching anything
    let run_config = validate_config(&config)?;

    if args.save_config {
        match &config_path {
            Some(path) => {
                persisted.save(path)?;
                if human_output {
                    print_info(&format!("Saved configuration to {}", path.display()));
                }
            }
            None => print_warning("No configuration directory available; options not saved"),
        }
    }

    if human_output {
        print_config_summary(&run_config);
    }

    let probe = FfprobeProbe::from_config(&config.probe);
    tracing::debug!("Using probe {}", probe.program().display());

    let report = Renamer::new(probe, run_config).run().await?;

    if args.json {
        print_json_report(&report)?;
    } else {
        print_run_stats(&report);
    }

    if !report.is_success() {
        return Err(Error::SomeFilesFailed(report.failed_count));
    }

    if human_output {
        if report.dry_run {
            print_success("Dry run complete, no files were changed.");
        } else {
            print_success("Files renamed successfully!");
        }
    }

    Ok(())
}

/// Load the configuration file, falling back to defaults when it is absent.
///
/// Returns the path the configuration should be saved to, if any.
fn load_config(args: &Args, human_output: bool) -> Result<(Config, Option<PathBuf>)> {
    let explicit = args.config.is_some();
    let Some(path) = args.config.clone().or_else(Config::default_path) else {
        return Ok((Config::default(), None));
    };

    if path.exists() {
        tracing::debug!("Loading configuration from {}", path.display());
        return Ok((Config::load(&path)?, Some(path)));
    }

    if explicit && human_output {
        print_warning(&format!(
            "Configuration file not found: {}",
            path.display()
        ));
        print_info("Using default configuration with CLI arguments");
    }

    Ok((Config::default(), Some(path)))
}
