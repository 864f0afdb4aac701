use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use hedera::PrivateKey;
use migrate_utils::utils::file_safe_timestamp;

use crate::constants::{Env, MIGRATION_KEYS_FILE_PREFIX};

pub struct KeyService;

impl KeyService {
    /// Returns `SUPPLY_KEY` when configured, otherwise generates a new key and
    /// saves it next to the tokens it will control before anything is sent.
    pub fn resolve_supply_key(env: &Env, token_ids: &[String]) -> io::Result<PrivateKey> {
        if let Some(supply_key) = &env.supply_key {
            log::info!(
                "using configured supply key, public key {}",
                supply_key.public_key()
            );
            return Ok(supply_key.clone());
        }

        let supply_key = PrivateKey::generate_ed25519();
        let contents = Self::migration_keys_contents(token_ids, &supply_key.to_string());
        let path = Self::persist_migration_keys(&env.migration_keys_dir, &contents, Utc::now())?;
        Self::confirm_migration_keys(&path, &contents);
        log::info!("generated supply key, public key {}", supply_key.public_key());
        Ok(supply_key)
    }

    pub fn migration_keys_file_name(now: DateTime<Utc>) -> String {
        format!(
            "{}{}.txt",
            MIGRATION_KEYS_FILE_PREFIX,
            file_safe_timestamp(now)
        )
    }

    pub fn migration_keys_contents(token_ids: &[String], supply_key: &str) -> String {
        format!(
            "Migrated tokens: {}\nSupply key: {}\n",
            token_ids.join(","),
            supply_key
        )
    }

    pub fn persist_migration_keys(
        dir: &Path,
        contents: &str,
        now: DateTime<Utc>,
    ) -> io::Result<PathBuf> {
        let path = dir.join(Self::migration_keys_file_name(now));
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Reads the key file back. When that fails the contents go to the console
    /// so the key is not lost.
    pub fn confirm_migration_keys(path: &Path, contents: &str) -> bool {
        match fs::read_to_string(path) {
            Ok(saved) if saved == contents => {
                log::info!("migration keys saved to {}", path.display());
                true
            }
            Ok(_) => {
                log::warn!(
                    "migration keys file {} differs, keep this copy:\n{}",
                    path.display(),
                    contents
                );
                false
            }
            Err(err) => {
                log::warn!(
                    "could not read back {} err={:?}, keep this copy:\n{}",
                    path.display(),
                    err,
                    contents
                );
                false
            }
        }
    }
}
