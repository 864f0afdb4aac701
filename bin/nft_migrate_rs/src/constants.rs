use std::{path::PathBuf, str::FromStr};

use hedera::{AccountId, PrivateKey};
use migrate_utils::env::{get_optional_env, parse_env_or, try_get_env, EnvError};
use provider_utils::enums::ENetwork;

pub const NFT_TOKEN_TYPE: &str = "NON_FUNGIBLE_UNIQUE";
pub const NFT_PAGE_LIMIT: u32 = 100;
/// The ledger accepts at most 10 metadata entries per mint.
pub const MINT_BATCH_SIZE: usize = 10;
pub const MAX_TRANSACTION_FEE_HBAR: i64 = 80;
pub const DEFAULT_PAGE_FETCH_MAX_ATTEMPTS: u32 = 3;
pub const MIGRATION_KEYS_FILE_PREFIX: &str = "migration-keys-";

/// Process configuration, loaded once before any network call.
#[derive(Clone)]
pub struct Env {
    pub operator_id: AccountId,
    pub operator_key: PrivateKey,
    pub supply_key: Option<PrivateKey>,
    pub source_network: ENetwork,
    pub target_network: ENetwork,
    pub mirror_url: Option<String>,
    pub page_fetch_max_attempts: u32,
    pub migration_keys_dir: PathBuf,
}

impl Env {
    pub fn new() -> Result<Self, EnvError> {
        let operator_id = parse_account_id("OPERATOR_ID")?;
        let operator_key = parse_private_key("OPERATOR_KEY")?;
        let supply_key = match get_optional_env("SUPPLY_KEY") {
            Some(_) => Some(parse_private_key("SUPPLY_KEY")?),
            None => None,
        };

        let page_fetch_max_attempts =
            parse_env_or("PAGE_FETCH_MAX_ATTEMPTS", DEFAULT_PAGE_FETCH_MAX_ATTEMPTS)?;
        if page_fetch_max_attempts == 0 {
            return Err(EnvError::Invalid {
                key: "PAGE_FETCH_MAX_ATTEMPTS".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(Self {
            operator_id,
            operator_key,
            supply_key,
            source_network: parse_network("SOURCE_NETWORK", ENetwork::HederaMainnet)?,
            target_network: parse_network("TARGET_NETWORK", ENetwork::HederaTestnet)?,
            mirror_url: get_optional_env("MIRROR_NODE_URL"),
            page_fetch_max_attempts,
            migration_keys_dir: get_optional_env("MIGRATION_KEYS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

fn parse_account_id(key: &str) -> Result<AccountId, EnvError> {
    let value = try_get_env(key)?;
    AccountId::from_str(&value).map_err(|_| EnvError::Invalid {
        key: key.to_string(),
        value,
    })
}

fn parse_private_key(key: &str) -> Result<PrivateKey, EnvError> {
    let value = try_get_env(key)?;
    PrivateKey::from_str(&value).map_err(|_| EnvError::Invalid {
        key: key.to_string(),
        value: "<redacted>".to_string(),
    })
}

fn parse_network(key: &str, default_network: ENetwork) -> Result<ENetwork, EnvError> {
    match get_optional_env(key) {
        Some(value) => ENetwork::from_str(&value).map_err(|_| EnvError::Invalid {
            key: key.to_string(),
            value,
        }),
        None => Ok(default_network),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Env tests share the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 7] = [
        "OPERATOR_ID",
        "OPERATOR_KEY",
        "SUPPLY_KEY",
        "SOURCE_NETWORK",
        "TARGET_NETWORK",
        "PAGE_FETCH_MAX_ATTEMPTS",
        "MIGRATION_KEYS_DIR",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn missing_operator_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let Err(err) = Env::new() else {
            panic!("env without operator must fail");
        };
        assert_eq!(err, EnvError::Missing("OPERATOR_ID".to_string()));

        std::env::set_var("OPERATOR_ID", "0.0.1001");
        let Err(err) = Env::new() else {
            panic!("env without operator key must fail");
        };
        assert_eq!(err, EnvError::Missing("OPERATOR_KEY".to_string()));
    }

    #[test]
    fn defaults_to_mainnet_to_testnet() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("OPERATOR_ID", "0.0.1001");
        std::env::set_var(
            "OPERATOR_KEY",
            PrivateKey::generate_ed25519().to_string(),
        );

        let Ok(env) = Env::new() else {
            panic!("env must load");
        };
        assert_eq!(env.operator_id.to_string(), "0.0.1001");
        assert!(env.supply_key.is_none());
        assert_eq!(env.source_network, ENetwork::HederaMainnet);
        assert_eq!(env.target_network, ENetwork::HederaTestnet);
        assert_eq!(env.page_fetch_max_attempts, DEFAULT_PAGE_FETCH_MAX_ATTEMPTS);
        assert_eq!(env.migration_keys_dir, PathBuf::from("."));
    }

    #[test]
    fn rejects_bad_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("OPERATOR_ID", "0.0.1001");
        std::env::set_var(
            "OPERATOR_KEY",
            PrivateKey::generate_ed25519().to_string(),
        );

        std::env::set_var("TARGET_NETWORK", "ETH_MAINNET");
        assert!(matches!(Env::new(), Err(EnvError::Invalid { .. })));
        std::env::remove_var("TARGET_NETWORK");

        std::env::set_var("PAGE_FETCH_MAX_ATTEMPTS", "0");
        assert!(matches!(Env::new(), Err(EnvError::Invalid { .. })));
        std::env::remove_var("PAGE_FETCH_MAX_ATTEMPTS");

        std::env::set_var("SUPPLY_KEY", "not-a-key");
        assert!(matches!(Env::new(), Err(EnvError::Invalid { .. })));
        clear_env();
    }
}
