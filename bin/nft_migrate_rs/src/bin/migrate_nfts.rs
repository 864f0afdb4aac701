use std::env;

use migrate_utils::log::setup_logger;
use nft_migrate_rs::{
    constants::Env,
    core::{HederaLedger, KeyService, MigrationService},
    utils::{parse_cli_args, CliCommand, USAGE},
};
use provider_utils::{ledger_providers::LedgerProviders, mirror_providers::MirrorProviders};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_logger(None)?;

    let args: Vec<String> = env::args().collect();
    let token_ids = match parse_cli_args(&args)? {
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Migrate(token_ids) => token_ids,
    };

    let env = Env::new()?;
    let supply_key = KeyService::resolve_supply_key(&env, &token_ids)?;

    let source = MirrorProviders::get_provider(&env.source_network, env.mirror_url.as_deref())?;
    log::info!(
        "source {:?} mirror {} target {:?} operator {}",
        env.source_network,
        source.base_url(),
        env.target_network,
        env.operator_id
    );
    let client = LedgerProviders::get_operator_client(
        &env.target_network,
        env.operator_id,
        env.operator_key.clone(),
    );
    let ledger = HederaLedger::new(client, env.operator_id, supply_key);

    let migration_service = MigrationService::from_env(&env, source, ledger);
    let results = migration_service.migrate_all_tokens(&token_ids).await?;

    log::info!(
        "{} of {} tokens migrated\n{}",
        results.len(),
        token_ids.len(),
        results.join("\n")
    );
    Ok(())
}
