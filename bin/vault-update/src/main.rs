//! Single-shot vault/pool update: fetch metrics, send two Telegram
//! messages, exit. Designed for cron-style schedulers; exits non-zero
//! only when both branches fail.
//!
//! Required env: TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID.
//! Optional env: TELEGRAM_VAULT_THREAD_ID, TELEGRAM_POOL_THREAD_ID, RUST_LOG.

use anyhow::{anyhow, bail, Context, Result};
use clients_curve::{CurveClient, CurveClientConfig};
use clients_morpho::{MorphoClient, MorphoClientConfig};
use clients_telegrambot::TelegramBot;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vaultwatch::{VaultWatch, VaultWatchConfig};

const MORPHO_API_URL: &str = "https://blue-api.morpho.org/graphql";
const CURVE_API_URL: &str = "https://api.curve.finance";

const VAULT_ADDRESS: &str = "0xf42bca228D9bd3e2F8EE65Fec3d21De1063882d4";
const MARKET_ID: &str = "0x77e624dd9dd980810c2b804249e88f3598d9c7ec91f16aa5fbf6e3fdf6087f82";
const POOL_ADDRESS: &str = "0x5fbA57a57657D2bE37f80702aE6B0EbD1b2b2d23";

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
    let vault_thread = optional_thread_id("TELEGRAM_VAULT_THREAD_ID")?;
    let pool_thread = optional_thread_id("TELEGRAM_POOL_THREAD_ID")?;

    let client = reqwest::Client::builder().build()?;
    let morpho = MorphoClient::new(
        client.clone(),
        MorphoClientConfig {
            endpoint: MORPHO_API_URL.to_string(),
            vault_address: VAULT_ADDRESS.to_string(),
            market_id: MARKET_ID.to_string(),
        },
    )?;
    let curve = CurveClient::new(
        client.clone(),
        CurveClientConfig {
            base_url: CURVE_API_URL.to_string(),
        },
    )?;
    let config = VaultWatchConfig {
        asset_symbol: "USDS".to_string(),
        asset_decimals: 18,
        market_label: "stUSDS/USDS".to_string(),
        pool_address: POOL_ADDRESS.to_string(),
    };
    let watch = VaultWatch::new(config, morpho, curve);
    let telegram = TelegramBot::new(client, bot_token, chat_id);

    // Independent branches: one failing must not block the other.
    let vault_branch = async {
        let message = watch.vault_report().await?;
        send(&telegram, &message, vault_thread).await
    };
    let pool_branch = async {
        let message = watch.pool_report().await?;
        send(&telegram, &message, pool_thread).await
    };
    let (vault_result, pool_result) = tokio::join!(vault_branch, pool_branch);

    let mut delivered = 0;
    for (name, result) in [("vault", vault_result), ("pool", pool_result)] {
        match result {
            Ok(()) => {
                info!("{} update sent", name);
                delivered += 1;
            }
            Err(e) => error!("{} update failed: {:#}", name, e),
        }
    }
    if delivered == 0 {
        bail!("all update branches failed");
    }
    Ok(())
}

async fn send(telegram: &TelegramBot, message: &str, thread: Option<i64>) -> Result<()> {
    match thread {
        Some(id) => telegram.push_message_to_thread(message, id).await,
        None => telegram.push_message(message).await,
    }
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
