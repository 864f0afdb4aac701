use hedera::{AccountId, Client, PrivateKey};

use crate::enums::ENetwork;

pub struct LedgerProviders;

impl LedgerProviders {
    /// Ledger client for `network` paying with the operator account.
    pub fn get_operator_client(
        network: &ENetwork,
        operator_id: AccountId,
        operator_key: PrivateKey,
    ) -> Client {
        let client = match network {
            ENetwork::HederaMainnet => Client::for_mainnet(),
            ENetwork::HederaTestnet => Client::for_testnet(),
            ENetwork::HederaPreviewnet => Client::for_previewnet(),
        };
        log::debug!("ledger client for {:?} operator {}", network, operator_id);
        client.set_operator(operator_id, operator_key);
        client
    }
}
