use hedera::PrivateKey;
use migrate_utils::log::setup_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logger(None)?;

    let supply_key = PrivateKey::generate_ed25519();
    log::info!("Your supply key: \"{}\"", supply_key);
    log::info!("Public key: \"{}\"", supply_key.public_key());
    Ok(())
}
