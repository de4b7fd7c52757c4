//! calendarize CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use calendarize_cli::actions;
use calendarize_cli::cli::{Cli, Command};
use calendarize_cli::error::{ClientError, ClientResult};
use calendarize_core::{ExportSession, TracingConfig, init_tracing};
use calendarize_service::{GenerateClient, normalize_record, normalize_records};

/// Tracing configuration for the CLI: debug mode gets the verbose preset,
/// normal runs stay quiet unless RUST_LOG says otherwise.
fn tracing_config(debug: bool) -> TracingConfig {
    if debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli_quiet()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(tracing_config(cli.debug)) {
        eprintln!("warning: failed to initialize tracing: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    match cli.command {
        Command::Convert {
            text,
            file,
            json,
            out_dir,
        } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => text.join(" "),
            };
            if input.trim().is_empty() {
                return Err(ClientError::Input(
                    "no text given; pass words or --file".into(),
                ));
            }

            let client = GenerateClient::new(&cli.endpoint, &cli.time_zone)?;
            let records = client.generate_from_text(&input).await?;

            let mut session = ExportSession::new();
            session.begin(normalize_records(&records));

            if !session.is_active() {
                println!("no events found in the input");
                return Ok(());
            }

            if json {
                let rendered = serde_json::to_string_pretty(session.events())
                    .map_err(|e| ClientError::Action(format!("failed to render JSON: {}", e)))?;
                println!("{}", rendered);
            } else {
                for event in session.events() {
                    actions::print_summary(event);
                    actions::print_links(event);
                }
            }

            if let Some(ref dir) = out_dir {
                std::fs::create_dir_all(dir)?;
                for event in session.events() {
                    actions::export_ics(event, dir, false)?;
                }
            }

            session.clear();
            Ok(())
        }

        Command::Export {
            event,
            google,
            outlook,
            ics,
            open,
            out_dir,
        } => {
            let content = std::fs::read_to_string(event)?;
            let record = serde_json::from_str(&content)
                .map_err(|e| ClientError::Input(format!("unreadable event file: {}", e)))?;
            let event = normalize_record(&record);

            // Bare `export` prints both deep links.
            let default_links = !google && !outlook && !ics;

            if google || default_links {
                actions::export_google(&event, open)?;
            }
            if outlook || default_links {
                actions::export_outlook(&event, open)?;
            }
            if ics {
                std::fs::create_dir_all(&out_dir)?;
                actions::export_ics(&event, &out_dir, open)?;
            }
            Ok(())
        }
    }
}
