use std::{collections::HashMap, sync::LazyLock};

use crate::enums::ENetwork;

#[derive(Debug, Clone, Default)]
pub struct NetworkConfig {
    pub network: ENetwork,
    /// Human readable name used in migration reports.
    pub display_name: String,
    pub mirror_url: String,
}

pub static NETWORKS: LazyLock<HashMap<ENetwork, NetworkConfig>> = LazyLock::new(|| {
    HashMap::from([
        (
            ENetwork::HederaMainnet,
            NetworkConfig {
                network: ENetwork::HederaMainnet,
                display_name: "Mainnet".to_string(),
                mirror_url: "https://mainnet-public.mirrornode.hedera.com".to_string(),
            },
        ),
        (
            ENetwork::HederaTestnet,
            NetworkConfig {
                network: ENetwork::HederaTestnet,
                display_name: "Testnet".to_string(),
                mirror_url: "https://testnet.mirrornode.hedera.com".to_string(),
            },
        ),
        (
            ENetwork::HederaPreviewnet,
            NetworkConfig {
                network: ENetwork::HederaPreviewnet,
                display_name: "Previewnet".to_string(),
                mirror_url: "https://previewnet.mirrornode.hedera.com".to_string(),
            },
        ),
    ])
});

pub fn network_config(network: &ENetwork) -> &'static NetworkConfig {
    let Some(config) = NETWORKS.get(network) else {
        panic!("NETWORKS {:?} not found", network);
    };
    config
}
