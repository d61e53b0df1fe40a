//! List the agents and builders of the wallet in `PRIVATE_KEY`.
//!
//! ```text
//! PRIVATE_KEY=0x... cargo run --example list_builders
//! ```

use std::env;

use asterkit::prelude::*;
use ethers::signers::LocalWallet;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "asterkit=info".into()))
        .init();

    let wallet: LocalWallet = env::var("PRIVATE_KEY")?.parse()?;
    let account = wallet
        .account_address()
        .ok_or("wallet has no account")?;
    let host = env::var("ASTER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

    let client = AsterClient::builder().base_url(&host).build()?;

    let builders = client
        .builders()
        .list(ListQuery::new(account.as_str(), account.as_str()), &wallet)
        .await?;
    println!("Builders of {}: {}", account, builders.data);

    let agents = client
        .agents()
        .list(ListQuery::new(account.as_str(), account.as_str()), &wallet)
        .await;
    match agents {
        Ok(agents) => println!("Agents of {}: {}", account, agents.data),
        Err(SdkError::Request(err)) => {
            eprintln!("Agent listing rejected ({}): {}", err.status, err.data)
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
