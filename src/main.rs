use clap::Parser;
use quickaid::{cli, client, config, error, output};
use cli::{Cli, Commands};
use client::BackendClient;
use config::Config;
use error::{QuickAidError, Result};
use quickaid_common::Endpoint;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const EMERGENCY_NUMBER: &str = "911";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let server = config.resolve_server(cli.server.as_deref());
    let client = BackendClient::new(server, Duration::from_secs(config.timeout_seconds))?;

    match cli.command {
        Commands::Health => {
            let spinner = output::spinner(Endpoint::Health.loading_message());
            let result = client.health().await;
            spinner.finish_and_clear();

            let health = result?;
            println!("✔ {}", health.notice());
            if let Some(message) = health.message {
                println!("  {}", message);
            }
            if let Some(version) = health.version {
                println!("  version: {}", version);
            }
        }

        Commands::Contacts => {
            show_reference(&client, Endpoint::EmergencyContacts).await?;
        }

        Commands::Guide => {
            show_reference(&client, Endpoint::FirstAidGuide).await?;
        }

        Commands::Image { path, output: save_to } => {
            println!("📸 QuickAid - image analysis\n");
            let endpoint = Endpoint::AnalyzeImage;
            let spinner = output::spinner(endpoint.loading_message());
            let result = client.analyze_image(&path).await;
            spinner.finish_and_clear();

            let data = result.map_err(|e| report_failure(endpoint, e))?;
            output::print_result(endpoint.title(), &data);
            if let Some(path) = save_to {
                output::save_result(&path, &data)?;
                println!("\n✔ Saved: {}", path.display());
            }
        }

        Commands::Symptoms { text, output: save_to } => {
            println!("📝 QuickAid - symptom analysis\n");
            let text = text.join(" ");
            let endpoint = Endpoint::AnalyzeSymptoms;
            let spinner = output::spinner(endpoint.loading_message());
            let result = client.analyze_symptoms(&text).await;
            spinner.finish_and_clear();

            let data = result.map_err(|e| report_failure(endpoint, e))?;
            output::print_result(endpoint.title(), &data);
            if let Some(path) = save_to {
                output::save_result(&path, &data)?;
                println!("\n✔ Saved: {}", path.display());
            }
        }

        Commands::Emergency { yes } => {
            let confirmed = yes
                || dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "🚨 EMERGENCY: this is for real emergencies only. Show how to call {}?",
                        EMERGENCY_NUMBER
                    ))
                    .default(false)
                    .interact()?;
            if !confirmed {
                return Err(QuickAidError::Cancelled);
            }

            println!("🚨 Call {} now.\n", EMERGENCY_NUMBER);
            println!("  • Use your phone to dial {}", EMERGENCY_NUMBER);
            println!("  • Stay calm and speak clearly");
            println!("  • Provide your location first\n");

            // 連絡先の取得に失敗しても案内は表示済み
            if let Err(e) = show_reference(&client, Endpoint::EmergencyContacts).await {
                tracing::warn!(error = %e, "emergency contacts unavailable");
            }
        }

        Commands::Config { set_server, set_timeout, show } => {
            let mut config = config;
            let changed = set_server.is_some() || set_timeout.is_some();

            if let Some(url) = set_server {
                config.set_server_url(url)?;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
            }
            if changed {
                config.save()?;
                println!("✔ Settings saved");
            }

            if show || !changed {
                println!("Settings:");
                println!("  server: {}", config.server_url);
                println!("  timeout: {}s", config.timeout_seconds);
                println!("  effective server: {}", client.base_url());
            }
        }
    }

    Ok(())
}

async fn show_reference(client: &BackendClient, endpoint: Endpoint) -> Result<()> {
    let spinner = output::spinner(endpoint.loading_message());
    let result = client.reference(endpoint).await;
    spinner.finish_and_clear();

    let data = result.map_err(|e| report_failure(endpoint, e))?;
    output::print_result(endpoint.title(), &data);
    Ok(())
}

/// 通信エラーを画面と同じ文言に揃える。検証エラーはそのまま
fn report_failure(endpoint: Endpoint, error: QuickAidError) -> QuickAidError {
    if error.is_validation() {
        return error;
    }
    tracing::debug!(error = ?error, path = endpoint.path(), "request failed");
    QuickAidError::Api(quickaid_common::Error::Network(
        endpoint.failure_message(&error.to_string()),
    ))
}
