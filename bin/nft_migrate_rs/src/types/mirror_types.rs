use serde::{Deserialize, Serialize};

/// `GET /api/v1/tokens/{id}`
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorTokenInfo {
    pub token_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub memo: String,
    pub max_supply: Option<String>,
    #[serde(rename = "type", default)]
    pub token_type: String,
    pub custom_fees: Option<MirrorCustomFees>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorCustomFees {
    #[serde(default)]
    pub fixed_fees: Vec<MirrorFixedFee>,
    #[serde(default)]
    pub royalty_fees: Vec<MirrorRoyaltyFee>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorFixedFee {
    pub amount: i64,
    pub collector_account_id: Option<String>,
    pub denominating_token_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorRoyaltyFee {
    pub amount: MirrorFraction,
    pub collector_account_id: Option<String>,
    pub fallback_fee: Option<MirrorFallbackFee>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorFraction {
    pub numerator: u64,
    pub denominator: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorFallbackFee {
    pub amount: i64,
    pub denominating_token_id: Option<String>,
}

/// `GET /api/v1/tokens/{id}/nfts`, newest serial first.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorNftPage {
    #[serde(default)]
    pub nfts: Vec<MirrorNft>,
    #[serde(default)]
    pub links: MirrorLinks,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorNft {
    pub serial_number: i64,
    /// base64
    #[serde(default)]
    pub metadata: String,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MirrorLinks {
    pub next: Option<String>,
}
