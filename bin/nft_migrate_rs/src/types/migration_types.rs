use crate::{
    constants::{MAX_TRANSACTION_FEE_HBAR, NFT_TOKEN_TYPE},
    types::{MirrorCustomFees, MirrorTokenInfo},
};

/// Token definition read from the source mirror node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub token_id: String,
    pub name: String,
    pub symbol: String,
    pub memo: String,
    /// `None` when the source supply is unbounded.
    pub max_supply: Option<u64>,
    pub token_type: String,
    pub fee_schedule: Option<FeeSchedule>,
}

impl TokenDescriptor {
    pub fn from_mirror(token_id: &str, info: MirrorTokenInfo) -> Self {
        let max_supply = info
            .max_supply
            .as_deref()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|value| *value > 0);

        Self {
            token_id: token_id.to_string(),
            name: info.name,
            symbol: info.symbol,
            memo: info.memo,
            max_supply,
            token_type: info.token_type,
            fee_schedule: info.custom_fees.map(FeeSchedule::from),
        }
    }

    pub fn is_nft(&self) -> bool {
        self.token_type == NFT_TOKEN_TYPE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeSchedule {
    pub royalty_fees: Vec<RoyaltyFee>,
    pub fixed_fees: Vec<FixedFee>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoyaltyFee {
    pub numerator: u64,
    pub denominator: u64,
    /// Fallback charged in tinybars when no fungible value is exchanged.
    pub fallback_amount: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedFee {
    pub amount: i64,
    pub denominating_token_id: Option<String>,
}

impl From<MirrorCustomFees> for FeeSchedule {
    fn from(fees: MirrorCustomFees) -> Self {
        Self {
            royalty_fees: fees
                .royalty_fees
                .into_iter()
                .map(|fee| RoyaltyFee {
                    numerator: fee.amount.numerator,
                    denominator: fee.amount.denominator,
                    fallback_amount: fee.fallback_fee.map(|fallback| fallback.amount),
                })
                .collect(),
            fixed_fees: fees
                .fixed_fees
                .into_iter()
                .map(|fee| FixedFee {
                    amount: fee.amount,
                    denominating_token_id: fee.denominating_token_id,
                })
                .collect(),
        }
    }
}

impl FeeSchedule {
    /// Collapses the schedule into at most one royalty fee.
    ///
    /// The first royalty fee's fraction is kept. Its fallback is the first fixed
    /// fee's amount when the source had fixed fees, otherwise the royalty fee's
    /// own fallback. Schedules without a royalty fee produce nothing.
    pub fn collapse(&self) -> Option<RoyaltyFee> {
        let royalty_fee = self.royalty_fees.first()?;
        let fallback_amount = match self.fixed_fees.first() {
            Some(fixed_fee) => Some(fixed_fee.amount),
            None => royalty_fee.fallback_amount,
        };

        Some(RoyaltyFee {
            numerator: royalty_fee.numerator,
            denominator: royalty_fee.denominator,
            fallback_amount,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SupplyLimit {
    #[default]
    Infinite,
    Finite(u64),
}

/// Network independent token creation request. Treasury, auto renew account
/// and supply key are filled in by the ledger from its operator context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCreationRequest {
    pub name: String,
    pub symbol: String,
    pub memo: String,
    pub supply: SupplyLimit,
    pub royalty_fee: Option<RoyaltyFee>,
    pub max_transaction_fee_hbar: i64,
}

impl TokenCreationRequest {
    pub fn from_descriptor(descriptor: &TokenDescriptor) -> Self {
        let supply = match descriptor.max_supply {
            Some(max_supply) => SupplyLimit::Finite(max_supply),
            None => SupplyLimit::Infinite,
        };

        Self {
            name: descriptor.name.clone(),
            symbol: descriptor.symbol.clone(),
            memo: descriptor.memo.clone(),
            supply,
            royalty_fee: descriptor
                .fee_schedule
                .as_ref()
                .and_then(FeeSchedule::collapse),
            max_transaction_fee_hbar: MAX_TRANSACTION_FEE_HBAR,
        }
    }
}
