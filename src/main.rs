use std::env;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use pushkind_storefront::client::HttpInventoryApi;
use pushkind_storefront::models::config::{DEFAULT_CONFIG_PATH, load_config};
use pushkind_storefront::processing::Submission;
use pushkind_storefront::processing::bridge::FormBridge;
use pushkind_storefront::view::ConsoleView;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_path =
        env::var("STOREFRONT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration from {config_path}: {e}");
            std::process::exit(1);
        }
    };

    let api = match HttpInventoryApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Failed to create API client: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Using inventory API at {}", config.api_base);

    let bridge = Arc::new(FormBridge::new(api, ConsoleView, &config));
    bridge.load().await;

    // One JSON submission per line; each runs as its own task.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = vec![];
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read input: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Submission>(&line) {
            Ok(submission) => {
                let bridge = Arc::clone(&bridge);
                tasks.push(tokio::spawn(async move {
                    bridge.submit(submission).await;
                }));
            }
            Err(e) => log::error!("Failed to parse submission: {e}"),
        }
    }

    for result in futures::future::join_all(tasks).await {
        if let Err(e) = result {
            log::error!("Submission task failed: {e}");
        }
    }
}
