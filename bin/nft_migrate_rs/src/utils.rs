use anyhow::bail;
use migrate_utils::utils::split_comma_list;

pub const USAGE: &str = "Usage: migrate_nfts <TOKEN_IDS>

Migrates NFT collections from the source network to the target network.

Arguments:
  <TOKEN_IDS>  comma separated source token ids, e.g. 0.0.111,0.0.222

Environment:
  OPERATOR_ID              target network operator account (required)
  OPERATOR_KEY             target network operator private key (required)
  SUPPLY_KEY               supply key of the new tokens, generated and saved when unset
  SOURCE_NETWORK           HEDERA_MAINNET (default), HEDERA_TESTNET or HEDERA_PREVIEWNET
  TARGET_NETWORK           HEDERA_TESTNET (default), HEDERA_MAINNET or HEDERA_PREVIEWNET
  MIRROR_NODE_URL          source mirror node override, bare host without path
  PAGE_FETCH_MAX_ATTEMPTS  attempts per nft page before a token is skipped (default 3)
  MIGRATION_KEYS_DIR       directory of the generated key file (default .)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Help,
    Migrate(Vec<String>),
}

pub fn parse_cli_args(args: &[String]) -> anyhow::Result<CliCommand> {
    let Some(token_list) = args.get(1) else {
        bail!("missing token id list\n\n{}", USAGE);
    };
    if token_list == "-h" || token_list == "--help" {
        return Ok(CliCommand::Help);
    }

    let token_ids = split_comma_list(token_list);
    if token_ids.is_empty() {
        bail!("token id list {:?} is empty\n\n{}", token_list, USAGE);
    }
    Ok(CliCommand::Migrate(token_ids))
}
