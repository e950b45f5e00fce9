use std::{process::ExitCode, time::Duration};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use form_relay::config::load_settings;
use shared::{
    domain::{AccessKey, FormPayload},
    protocol::{UpstreamReply, ACCESS_KEY_FIELD},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const EXIT_NON_200: u8 = 2;
const EXIT_NO_RESPONSE: u8 = 3;

#[derive(Parser, Debug)]
#[command(about = "Operational helpers for the site's contact-form relay")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a sample application form and report the reply.
    Submit {
        #[arg(long, default_value = "http://127.0.0.1:8788/submit")]
        url: String,
        /// Extra or overriding fields as key=value.
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
        /// Attach an access key yourself, for posting straight to Web3Forms.
        #[arg(long)]
        access_key: Option<String>,
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
    /// Print the relay settings resolved from relay.toml and the environment.
    Settings,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("field name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn sample_payload(
    overrides: Vec<(String, String)>,
    access_key: Option<AccessKey>,
) -> FormPayload {
    let mut payload: FormPayload = [
        ("student-name", "Automated Test"),
        ("dob", "2010-01-01"),
        ("parent-goals", "E2E smoke test"),
    ]
    .into_iter()
    .collect();
    for (name, value) in overrides {
        payload.insert(name, value);
    }
    if let Some(key) = access_key {
        payload.insert(ACCESS_KEY_FIELD, key.expose());
    }
    payload
}

fn exit_status_for(reply: &UpstreamReply) -> u8 {
    if reply.status == 200 {
        0
    } else {
        EXIT_NON_200
    }
}

async fn submit(url: &str, payload: &FormPayload, timeout: Duration) -> Result<UpstreamReply> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build http client")?;
    let response = client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&payload.to_pairs())
        .send()
        .await
        .with_context(|| format!("no response from {url}"))?;
    let status = response.status().as_u16();
    let text = response.text().await.context("failed to read reply body")?;
    match UpstreamReply::from_slice(status, text.as_bytes()) {
        Ok(reply) => Ok(reply),
        Err(_) => UpstreamReply::from_value(status, &serde_json::Value::String(text))
            .context("failed to wrap non-JSON reply"),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Submit {
            url,
            fields,
            access_key,
            timeout_secs,
        } => {
            let access_key = match access_key {
                Some(raw) => Some(
                    AccessKey::parse(raw)
                        .ok_or_else(|| anyhow!("--access-key must not be blank"))?,
                ),
                None => None,
            };
            let payload = sample_payload(fields, access_key);
            info!(%url, fields = payload.len(), "submitting sample form");

            match submit(&url, &payload, Duration::from_secs(timeout_secs)).await {
                Ok(reply) => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&reply).context("failed to render reply")?
                    );
                    if let Some(message) = reply.message() {
                        info!(
                            status = reply.status,
                            upstream_message = %message,
                            "reply received"
                        );
                    }
                    Ok(ExitCode::from(exit_status_for(&reply)))
                }
                Err(error) => {
                    warn!(%error, "no response captured");
                    Ok(ExitCode::from(EXIT_NO_RESPONSE))
                }
            }
        }
        Command::Settings => {
            let settings = load_settings();
            println!("bind_addr = {}", settings.bind_addr);
            println!("upstream_url = {}", settings.upstream_url);
            println!(
                "access_key = {}",
                settings
                    .access_key
                    .as_ref()
                    .map(AccessKey::redacted)
                    .unwrap_or_else(|| "<unset>".to_string())
            );
            println!(
                "upstream_timeout_seconds = {}",
                settings.upstream_timeout_seconds
            );
            println!("max_body_bytes = {}", settings.max_body_bytes);
            Ok(ExitCode::SUCCESS)
        }
    }
}
