use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use provider_utils::mirror_providers::{MirrorError, MirrorNodeClient};

use crate::types::{MigrationError, MirrorNftPage, MirrorTokenInfo, TokenDescriptor};

/// Read-only view of the source network's mirror node.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SourceIndex {
    async fn get_token(&self, token_id: &str) -> Result<MirrorTokenInfo, MirrorError>;

    /// `route` is either the first nft page or a `links.next` value.
    async fn get_nft_page(&self, route: &str) -> Result<MirrorNftPage, MirrorError>;
}

#[async_trait]
impl SourceIndex for MirrorNodeClient {
    async fn get_token(&self, token_id: &str) -> Result<MirrorTokenInfo, MirrorError> {
        self.get_json(&format!("/api/v1/tokens/{}", token_id)).await
    }

    async fn get_nft_page(&self, route: &str) -> Result<MirrorNftPage, MirrorError> {
        self.get_json(route).await
    }
}

pub struct SourceService<'a, S: SourceIndex> {
    source: &'a S,
}

impl<'a, S: SourceIndex> SourceService<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Reads the token definition and checks it can be migrated.
    pub async fn inspect(&self, token_id: &str) -> Result<TokenDescriptor, MigrationError> {
        let info = self.source.get_token(token_id).await.map_err(|source| {
            MigrationError::SourceUnavailable {
                token_id: token_id.to_string(),
                source,
            }
        })?;
        let descriptor = TokenDescriptor::from_mirror(token_id, info);
        log::info!(
            "token {} name={:?} symbol={:?} type={} max_supply={:?}",
            token_id,
            descriptor.name,
            descriptor.symbol,
            descriptor.token_type,
            descriptor.max_supply
        );

        if !descriptor.is_nft() {
            return Err(MigrationError::UnsupportedTokenType {
                token_id: token_id.to_string(),
                token_type: descriptor.token_type,
            });
        }
        Ok(descriptor)
    }
}
