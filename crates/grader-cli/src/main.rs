mod cli;

use anyhow::Context;
use clap::Parser;
use grader_core::{Composer, GradingRequest, RewardBreakdown};
use grader_server::ServerConfig;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

#[derive(Debug, Serialize)]
struct ScoreOutput {
    reward: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<RewardBreakdown>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Commands::Score {
            request,
            completion,
            answer,
            breakdown,
            pretty,
        } => {
            let request = load_request(request.as_deref(), completion, answer)?;
            let components = Composer::new().breakdown(&request);
            let output = ScoreOutput {
                reward: components.total(),
                components: breakdown.then_some(components),
            };

            let json = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{json}");
        }
        Commands::Serve {
            host,
            port,
            max_body_bytes,
        } => {
            let mut config = ServerConfig::from_env().context("invalid server environment")?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(limit) = max_body_bytes {
                config.max_body_bytes = limit;
            }

            grader_server::serve(config).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_request(
    path: Option<&Path>,
    completion: Option<String>,
    answer: Option<String>,
) -> anyhow::Result<GradingRequest> {
    match (path, completion) {
        (Some(path), _) if path != Path::new("-") => GradingRequest::from_file(path)
            .with_context(|| format!("failed to load request from {}", path.display())),
        (_, Some(completion)) => {
            let request = GradingRequest::new(Vec::new(), completion);
            Ok(match answer {
                Some(answer) => request.with_answer(answer),
                None => request,
            })
        }
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read request from stdin")?;
            GradingRequest::from_json(&input).context("invalid request on stdin")
        }
    }
}
