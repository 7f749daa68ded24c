//! Single-shot peg update: fetch prices for the monitored pools, send one
//! Telegram message, exit. Designed for cron-style schedulers.
//!
//! Required env: TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID.
//! Optional env: TELEGRAM_PEG_THREAD_ID, RUST_LOG.

use anyhow::{anyhow, Context, Result};
use clients_curve::{CurveClient, CurveClientConfig};
use clients_geckoterminal::{GeckoTerminalClient, GeckoTerminalClientConfig};
use clients_telegrambot::TelegramBot;
use pegwatch::{PegPoolConfig, PegWatch, PegWatchConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CURVE_API_URL: &str = "https://api.curve.finance";
const GECKOTERMINAL_API_URL: &str = "https://api.geckoterminal.com";

const USDS_ADDRESS: &str = "0xdC035D45d973E3EC169d2276DDab16f1e407384F";

fn monitored_pools() -> Vec<PegPoolConfig> {
    vec![
        PegPoolConfig {
            name: "USDS/USDC (Curve)".to_string(),
            address: "0x5fbA57a57657D2bE37f80702aE6B0EbD1b2b2d23".to_string(),
            is_metapool: true,
        },
        PegPoolConfig {
            name: "USDS/DAI (Curve)".to_string(),
            address: "0x9Baf29fD47cAcD6e414D25deA9d1d77b11bbbcb2".to_string(),
            is_metapool: false,
        },
        PegPoolConfig {
            name: "USDS/USDT (Uniswap)".to_string(),
            address: "0x3416cF6C708Da44DB2624D63ea0AAef7113527C6".to_string(),
            is_metapool: false,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bot_token = required_env("TELEGRAM_BOT_TOKEN")?;
    let chat_id = required_env("TELEGRAM_CHAT_ID")?;
    let peg_thread = optional_thread_id("TELEGRAM_PEG_THREAD_ID")?;

    let client = reqwest::Client::builder().build()?;
    let geckoterminal = GeckoTerminalClient::new(
        client.clone(),
        GeckoTerminalClientConfig {
            base_url: GECKOTERMINAL_API_URL.to_string(),
        },
    )?;
    let curve = CurveClient::new(
        client.clone(),
        CurveClientConfig {
            base_url: CURVE_API_URL.to_string(),
        },
    )?;
    let config = PegWatchConfig {
        reference_symbol: "USDS".to_string(),
        reference_address: USDS_ADDRESS.to_string(),
        pools: monitored_pools(),
    };
    let watch = PegWatch::new(config, geckoterminal, curve);
    let telegram = TelegramBot::new(client, bot_token, chat_id);

    let message = watch.report().await?;
    match peg_thread {
        Some(id) => telegram.push_message_to_thread(&message, id).await?,
        None => telegram.push_message(&message).await?,
    }
    info!("peg update sent");
    Ok(())
}

fn required_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow!("{} environment variable is required", key))
}

fn optional_thread_id(key: &str) -> Result<Option<i64>> {
    match std::env::var(key) {
        Ok(v) => v
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a numeric thread id", key)),
        Err(_) => Ok(None),
    }
}
