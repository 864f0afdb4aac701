use std::str::FromStr;

use async_trait::async_trait;
use hedera::{
    AccountId, AnyCustomFee, Client, Fee, FixedFeeData, Hbar, PrivateKey, RoyaltyFeeData,
    TokenBurnTransaction, TokenCreateTransaction, TokenId, TokenMintTransaction, TokenSupplyType,
    TokenType,
};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::{
    constants::MAX_TRANSACTION_FEE_HBAR,
    types::{RoyaltyFee, SupplyLimit, TokenCreationRequest},
};

/// Errors for target network writes. All of them abort the run.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Submission, signing or receipt failure reported by the SDK.
    #[error(transparent)]
    Sdk(#[from] hedera::Error),
    #[error("creation receipt of {0:?} carried no token id")]
    MissingTokenId(String),
    #[error("minted {actual} serials for a batch of {expected}")]
    SerialCountMismatch { expected: usize, actual: usize },
}

/// Write side of the target network. Every call waits for the receipt.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TargetLedger {
    /// Creates the token and returns its id.
    async fn create_token(&self, request: &TokenCreationRequest) -> Result<String, LedgerError>;

    /// Mints one NFT per metadata entry and returns the new serials in mint order.
    async fn mint(&self, token_id: &str, metadata: Vec<Vec<u8>>) -> Result<Vec<i64>, LedgerError>;

    async fn burn(&self, token_id: &str, serials: Vec<i64>) -> Result<(), LedgerError>;
}

/// Ledger session of the operator, holding the supply key of migrated tokens.
pub struct HederaLedger {
    client: Client,
    operator_id: AccountId,
    supply_key: PrivateKey,
}

impl HederaLedger {
    pub fn new(client: Client, operator_id: AccountId, supply_key: PrivateKey) -> Self {
        Self {
            client,
            operator_id,
            supply_key,
        }
    }

    fn royalty_fee(&self, royalty_fee: &RoyaltyFee) -> AnyCustomFee {
        AnyCustomFee {
            fee: Fee::Royalty(RoyaltyFeeData {
                numerator: royalty_fee.numerator,
                denominator: royalty_fee.denominator,
                fallback_fee: royalty_fee.fallback_amount.map(|amount| FixedFeeData {
                    amount,
                    denominating_token_id: None,
                }),
            }),
            fee_collector_account_id: Some(self.operator_id),
            all_collectors_are_exempt: false,
        }
    }

    /// NFT with zero supply, treasury and auto renew on the operator, minted
    /// with the supply key.
    fn token_create_transaction(&self, request: &TokenCreationRequest) -> TokenCreateTransaction {
        let mut transaction = TokenCreateTransaction::new();
        transaction
            .name(request.name.as_str())
            .symbol(request.symbol.as_str())
            .token_memo(request.memo.as_str())
            .token_type(TokenType::NonFungibleUnique)
            .decimals(0)
            .initial_supply(0)
            .treasury_account_id(self.operator_id)
            .auto_renew_account_id(self.operator_id)
            .supply_key(self.supply_key.public_key())
            .max_transaction_fee(Hbar::new(request.max_transaction_fee_hbar));
        match request.supply {
            SupplyLimit::Finite(max_supply) => {
                transaction
                    .supply_type(TokenSupplyType::Finite)
                    .max_supply(max_supply);
            }
            SupplyLimit::Infinite => {
                transaction.supply_type(TokenSupplyType::Infinite);
            }
        }
        if let Some(royalty_fee) = &request.royalty_fee {
            transaction.custom_fees([self.royalty_fee(royalty_fee)]);
        }
        transaction
    }
}

fn max_transaction_fee() -> Hbar {
    Hbar::new(MAX_TRANSACTION_FEE_HBAR)
}

fn token_mint_transaction(
    token_id: &str,
    metadata: Vec<Vec<u8>>,
) -> Result<TokenMintTransaction, LedgerError> {
    let mut transaction = TokenMintTransaction::new();
    transaction
        .token_id(TokenId::from_str(token_id)?)
        .metadata(metadata)
        .max_transaction_fee(max_transaction_fee());
    Ok(transaction)
}

fn token_burn_transaction(
    token_id: &str,
    serials: Vec<i64>,
) -> Result<TokenBurnTransaction, LedgerError> {
    let mut transaction = TokenBurnTransaction::new();
    transaction
        .token_id(TokenId::from_str(token_id)?)
        .serials(serials)
        .max_transaction_fee(max_transaction_fee());
    Ok(transaction)
}

#[async_trait]
impl TargetLedger for HederaLedger {
    async fn create_token(&self, request: &TokenCreationRequest) -> Result<String, LedgerError> {
        let mut transaction = self.token_create_transaction(request);

        let receipt = transaction
            .execute(&self.client)
            .await?
            .get_receipt(&self.client)
            .await?;
        let token_id = receipt
            .token_id
            .ok_or_else(|| LedgerError::MissingTokenId(request.name.clone()))?;
        Ok(token_id.to_string())
    }

    async fn mint(&self, token_id: &str, metadata: Vec<Vec<u8>>) -> Result<Vec<i64>, LedgerError> {
        let mut transaction = token_mint_transaction(token_id, metadata)?;
        transaction
            .freeze_with(&self.client)?
            .sign(self.supply_key.clone());

        let receipt = transaction
            .execute(&self.client)
            .await?
            .get_receipt(&self.client)
            .await?;
        Ok(receipt.serials)
    }

    async fn burn(&self, token_id: &str, serials: Vec<i64>) -> Result<(), LedgerError> {
        let mut transaction = token_burn_transaction(token_id, serials)?;
        transaction
            .freeze_with(&self.client)?
            .sign(self.supply_key.clone());

        transaction
            .execute(&self.client)
            .await?
            .get_receipt(&self.client)
            .await?;
        Ok(())
    }
}
