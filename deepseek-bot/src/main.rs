//! Binary for the DeepSeek relay bot. Config comes from the environment and `.env`; no CLI flags.

use anyhow::Result;
use deepseek_bot::{run_bot, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    run_bot(config).await
}
