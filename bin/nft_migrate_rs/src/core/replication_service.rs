use crate::{
    constants::MINT_BATCH_SIZE,
    core::{LedgerError, TargetLedger},
    types::{NftInventory, TokenCreationRequest, TokenDescriptor},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MintSummary {
    pub batches: usize,
    pub minted: usize,
    pub burned: usize,
}

pub struct ReplicationService<'a, L: TargetLedger> {
    ledger: &'a L,
}

impl<'a, L: TargetLedger> ReplicationService<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Creates the target token equivalent to `descriptor`.
    pub async fn replicate(&self, descriptor: &TokenDescriptor) -> Result<String, LedgerError> {
        let request = TokenCreationRequest::from_descriptor(descriptor);
        log::info!(
            "creating target token for {} supply={:?} royalty_fee={:?}",
            descriptor.token_id,
            request.supply,
            request.royalty_fee
        );
        if descriptor
            .fee_schedule
            .as_ref()
            .is_some_and(|schedule| schedule.royalty_fees.len() > 1)
        {
            log::warn!(
                "token {} has several royalty fees, only the first one is replicated",
                descriptor.token_id
            );
        }

        let token_id = self.ledger.create_token(&request).await?;
        log::info!("target token {} created", token_id);
        Ok(token_id)
    }

    /// Mints the inventory in order, batch by batch, burning the new serial of
    /// every NFT deleted on the source.
    pub async fn mint_all(
        &self,
        token_id: &str,
        inventory: &NftInventory,
    ) -> Result<MintSummary, LedgerError> {
        let mut summary = MintSummary::default();

        for batch in inventory.batches(MINT_BATCH_SIZE) {
            let minted_serials = self.ledger.mint(token_id, batch.metadata.to_vec()).await?;
            if minted_serials.len() != batch.len() {
                return Err(LedgerError::SerialCountMismatch {
                    expected: batch.len(),
                    actual: minted_serials.len(),
                });
            }
            log::info!(
                "token {} batch {} minted serials {:?} (source serials {:?})",
                token_id,
                batch.index,
                minted_serials,
                batch.serials
            );

            let burn_serials = batch.burn_serials(&minted_serials);
            if !burn_serials.is_empty() {
                self.ledger.burn(token_id, burn_serials.clone()).await?;
                log::info!(
                    "token {} batch {} burned serials {:?}",
                    token_id,
                    batch.index,
                    burn_serials
                );
            }

            summary.batches += 1;
            summary.minted += minted_serials.len();
            summary.burned += burn_serials.len();
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use mockall::{predicate::eq, Sequence};

    use super::*;
    use crate::{
        core::MockTargetLedger,
        types::{FeeSchedule, NftRecord, RoyaltyFee, SupplyLimit},
    };

    fn inventory(count: i64, deleted: &[usize]) -> NftInventory {
        (0..count)
            .map(|index| NftRecord {
                serial_number: 1000 + index,
                metadata: format!("meta-{}", index).into_bytes(),
                deleted: deleted.contains(&(index as usize)),
            })
            .collect()
    }

    /// Mock ledger assigning serials 1, 2, 3... in mint order.
    fn sequential_minter(ledger: &mut MockTargetLedger) {
        let next_serial = AtomicI64::new(1);
        ledger.expect_mint().returning(move |_, metadata| {
            Ok(metadata
                .iter()
                .map(|_| next_serial.fetch_add(1, Ordering::SeqCst))
                .collect())
        });
    }

    #[tokio::test]
    async fn replicate_creates_token_from_descriptor() {
        let mut ledger = MockTargetLedger::new();
        ledger
            .expect_create_token()
            .withf(|request| {
                request.name == "Foo"
                    && request.symbol == "FOO"
                    && request.supply == SupplyLimit::Finite(50)
                    && request.max_transaction_fee_hbar == 80
                    && request.royalty_fee
                        == Some(RoyaltyFee {
                            numerator: 1,
                            denominator: 10,
                            fallback_amount: None,
                        })
            })
            .times(1)
            .returning(|_| Ok("0.0.4242".to_string()));

        let descriptor = TokenDescriptor {
            token_id: "0.0.111".to_string(),
            name: "Foo".to_string(),
            symbol: "FOO".to_string(),
            max_supply: Some(50),
            fee_schedule: Some(FeeSchedule {
                royalty_fees: vec![
                    RoyaltyFee {
                        numerator: 1,
                        denominator: 10,
                        fallback_amount: None,
                    },
                    RoyaltyFee {
                        numerator: 3,
                        denominator: 10,
                        fallback_amount: None,
                    },
                ],
                fixed_fees: vec![],
            }),
            ..Default::default()
        };

        let token_id = ReplicationService::new(&ledger)
            .replicate(&descriptor)
            .await
            .unwrap();
        assert_eq!(token_id, "0.0.4242");
    }

    #[tokio::test]
    async fn empty_inventory_mints_nothing() {
        let mut ledger = MockTargetLedger::new();
        ledger.expect_mint().never();
        ledger.expect_burn().never();

        let summary = ReplicationService::new(&ledger)
            .mint_all("0.0.4242", &NftInventory::new())
            .await
            .unwrap();
        assert_eq!(summary, MintSummary::default());
    }

    #[tokio::test]
    async fn twenty_five_nfts_mint_in_three_batches_without_burns() {
        let mut ledger = MockTargetLedger::new();
        let mut seq = Sequence::new();
        for size in [10usize, 10, 5] {
            ledger
                .expect_mint()
                .withf(move |token_id, metadata| token_id == "0.0.4242" && metadata.len() == size)
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _| Ok((1..=size as i64).collect()));
        }
        ledger.expect_burn().never();

        let summary = ReplicationService::new(&ledger)
            .mint_all("0.0.4242", &inventory(25, &[]))
            .await
            .unwrap();
        assert_eq!(
            summary,
            MintSummary {
                batches: 3,
                minted: 25,
                burned: 0,
            }
        );
    }

    #[tokio::test]
    async fn metadata_is_minted_in_inventory_order() {
        let mut ledger = MockTargetLedger::new();
        ledger
            .expect_mint()
            .withf(|_, metadata| {
                metadata.first() == Some(&b"meta-0".to_vec())
                    && metadata.last() == Some(&b"meta-2".to_vec())
            })
            .times(1)
            .returning(|_, _| Ok(vec![1, 2, 3]));

        ReplicationService::new(&ledger)
            .mint_all("0.0.4242", &inventory(3, &[]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn deleted_nfts_burn_their_new_serials() {
        let mut ledger = MockTargetLedger::new();
        sequential_minter(&mut ledger);
        let mut seq = Sequence::new();
        ledger
            .expect_burn()
            .with(eq("0.0.4242"), eq(vec![1i64]))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        ledger
            .expect_burn()
            .with(eq("0.0.4242"), eq(vec![12i64]))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let summary = ReplicationService::new(&ledger)
            .mint_all("0.0.4242", &inventory(12, &[0, 11]))
            .await
            .unwrap();
        assert_eq!(
            summary,
            MintSummary {
                batches: 2,
                minted: 12,
                burned: 2,
            }
        );
    }

    #[tokio::test]
    async fn mint_failure_stops_minting() {
        let mut ledger = MockTargetLedger::new();
        ledger
            .expect_mint()
            .times(1)
            .returning(|_, _| Err(LedgerError::MissingTokenId("Foo".to_string())));
        ledger.expect_burn().never();

        let result = ReplicationService::new(&ledger)
            .mint_all("0.0.4242", &inventory(25, &[3]))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn short_mint_receipt_is_rejected() {
        let mut ledger = MockTargetLedger::new();
        ledger.expect_mint().returning(|_, _| Ok(vec![1, 2]));

        let err = ReplicationService::new(&ledger)
            .mint_all("0.0.4242", &inventory(3, &[]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::SerialCountMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }
}
