use provider_utils::{enums::ENetwork, networks::network_config};

use crate::{
    constants::Env,
    core::{InventoryService, ReplicationService, SourceIndex, SourceService, TargetLedger},
    types::MigrationError,
};

pub struct MigrationService<S: SourceIndex, L: TargetLedger> {
    source: S,
    ledger: L,
    source_network: ENetwork,
    target_network: ENetwork,
    page_fetch_max_attempts: u32,
}

impl<S: SourceIndex, L: TargetLedger> MigrationService<S, L> {
    pub fn new(
        source: S,
        ledger: L,
        source_network: ENetwork,
        target_network: ENetwork,
        page_fetch_max_attempts: u32,
    ) -> Self {
        Self {
            source,
            ledger,
            source_network,
            target_network,
            page_fetch_max_attempts,
        }
    }

    pub fn from_env(env: &Env, source: S, ledger: L) -> Self {
        Self::new(
            source,
            ledger,
            env.source_network,
            env.target_network,
            env.page_fetch_max_attempts,
        )
    }

    /// Migrate every token in order and return one report line per migrated
    /// token. Source side failures skip the token, ledger failures stop the run.
    pub async fn migrate_all_tokens(
        &self,
        token_ids: &[String],
    ) -> Result<Vec<String>, MigrationError> {
        let mut results = Vec::new();
        for (index, token_id) in token_ids.iter().enumerate() {
            log::info!(
                "migrate token {}/{} {} processing",
                index + 1,
                token_ids.len(),
                token_id
            );
            match self.migrate_token(token_id).await {
                Ok(result) => {
                    log::info!("{}", result);
                    results.push(result);
                }
                Err(err) if err.is_fatal() => {
                    log::error!("token {} migration aborted err={}", token_id, err);
                    return Err(err);
                }
                Err(err) => {
                    log::warn!("skip token {} because {}", token_id, err);
                }
            }
        }

        Ok(results)
    }

    /// Inspect, fetch the inventory, create the target token then mint.
    pub async fn migrate_token(&self, token_id: &str) -> Result<String, MigrationError> {
        let descriptor = SourceService::new(&self.source).inspect(token_id).await?;
        let inventory = InventoryService::new(&self.source, self.page_fetch_max_attempts)
            .fetch_inventory(token_id)
            .await?;

        let replication_service = ReplicationService::new(&self.ledger);
        let target_token_id = replication_service.replicate(&descriptor).await?;
        let summary = replication_service
            .mint_all(&target_token_id, &inventory)
            .await?;
        log::info!(
            "token {} replicated as {} batches={} minted={} burned={}",
            token_id,
            target_token_id,
            summary.batches,
            summary.minted,
            summary.burned
        );

        Ok(format!(
            "{} Token {} migrated to {} {}",
            network_config(&self.source_network).display_name,
            token_id,
            network_config(&self.target_network).display_name,
            target_token_id
        ))
    }
}
