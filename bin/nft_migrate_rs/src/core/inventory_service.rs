use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    constants::NFT_PAGE_LIMIT,
    core::SourceIndex,
    types::{MigrationError, MirrorNft, MirrorNftPage, NftInventory, NftRecord},
};

pub struct InventoryService<'a, S: SourceIndex> {
    source: &'a S,
    page_fetch_max_attempts: u32,
}

impl<'a, S: SourceIndex> InventoryService<'a, S> {
    pub fn new(source: &'a S, page_fetch_max_attempts: u32) -> Self {
        Self {
            source,
            page_fetch_max_attempts: page_fetch_max_attempts.max(1),
        }
    }

    pub fn first_page_route(token_id: &str) -> String {
        format!("/api/v1/tokens/{}/nfts?limit={}", token_id, NFT_PAGE_LIMIT)
    }

    /// Collects every NFT of `token_id` following `links.next`, then reverses
    /// the inventory so the first minted NFT comes first.
    pub async fn fetch_inventory(&self, token_id: &str) -> Result<NftInventory, MigrationError> {
        let mut inventory = NftInventory::new();
        let mut next_route = Some(Self::first_page_route(token_id));
        let mut page_count = 0;

        while let Some(route) = next_route {
            let page = self.fetch_page(&route).await?;
            page_count += 1;
            for nft in page.nfts {
                inventory.push(decode_nft(nft)?);
            }
            next_route = page.links.next;
        }

        inventory.reverse();
        log::info!(
            "token {} inventory fetched, pages={} nfts={} deleted={}",
            token_id,
            page_count,
            inventory.len(),
            inventory.deleted_count()
        );
        Ok(inventory)
    }

    async fn fetch_page(&self, route: &str) -> Result<MirrorNftPage, MigrationError> {
        let mut attempt = 1;
        loop {
            match self.source.get_nft_page(route).await {
                Ok(page) => return Ok(page),
                Err(err) if attempt < self.page_fetch_max_attempts => {
                    log::warn!(
                        "nft page {} attempt {}/{} failed err={:?}",
                        route,
                        attempt,
                        self.page_fetch_max_attempts,
                        err
                    );
                    attempt += 1;
                }
                Err(source) => {
                    return Err(MigrationError::InventoryUnavailable {
                        route: route.to_string(),
                        attempts: attempt,
                        source,
                    })
                }
            }
        }
    }
}

fn decode_nft(nft: MirrorNft) -> Result<NftRecord, MigrationError> {
    let metadata = STANDARD
        .decode(nft.metadata.as_bytes())
        .map_err(|source| MigrationError::InvalidMetadata {
            serial_number: nft.serial_number,
            source,
        })?;

    Ok(NftRecord {
        serial_number: nft.serial_number,
        metadata,
        deleted: nft.deleted,
    })
}
