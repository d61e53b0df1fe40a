//! Approve an agent for the wallet in `PRIVATE_KEY`, then change its
//! permissions.
//!
//! ```text
//! PRIVATE_KEY=0x... AGENT_ADDRESS=0x... cargo run --example approve_agent
//! ```

use std::env;

use asterkit::prelude::*;
use ethers::signers::LocalWallet;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "asterkit=debug".into()))
        .init();

    let wallet: LocalWallet = env::var("PRIVATE_KEY")?.parse()?;
    let agent = env::var("AGENT_ADDRESS")?;
    let host = env::var("ASTER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

    let client = AsterClient::builder().base_url(&host).build()?;
    println!("Main account: {}", wallet.account_address().unwrap_or_default());

    let approved = client
        .agents()
        .approve(
            &wallet,
            ApproveAgent::new(agent.as_str())
                .agent_name("demo-agent")
                .can_withdraw(false),
        )
        .await?;
    println!("approveAgent -> {} {}", approved.status, approved.data);

    let updated = client
        .agents()
        .update(&wallet, UpdateAgent::new(agent.as_str(), true, false, false))
        .await?;
    println!("updateAgent -> {} {}", updated.status, updated.data);

    Ok(())
}
