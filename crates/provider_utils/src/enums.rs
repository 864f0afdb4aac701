use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, VariantNames};

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ENetwork {
    #[default]
    HederaMainnet,
    HederaTestnet,
    HederaPreviewnet,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::VariantNames;

    use super::*;

    #[test]
    fn parses_screaming_snake_case() {
        assert_eq!(
            ENetwork::from_str("HEDERA_TESTNET"),
            Ok(ENetwork::HederaTestnet)
        );
        assert!(ENetwork::from_str("hedera-testnet").is_err());
        assert_eq!(
            ENetwork::VARIANTS,
            &["HEDERA_MAINNET", "HEDERA_TESTNET", "HEDERA_PREVIEWNET"]
        );
    }
}
