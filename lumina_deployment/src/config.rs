use std::collections::BTreeMap;

use ethers::types::Address;

use crate::{error::DeployError, networks::KnownNetwork};

#[derive(Clone, Debug, PartialEq)]
pub struct ContractNetworkConfig {
    pub network_name: String,
    pub rpc_url: String,
    /// `None` for networks this crate has no chain ID for.
    pub chain_id: Option<u64>,
}

impl ContractNetworkConfig {
    pub fn new(network_name: impl Into<String>, rpc_url: impl Into<String>) -> Self {
        let network_name = network_name.into();
        let chain_id = KnownNetwork::from_name(&network_name).map(|n| n.chain_id());
        Self {
            network_name,
            rpc_url: rpc_url.into(),
            chain_id,
        }
    }
}

/// Network identifier -> mailbox address literal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MailboxTable(BTreeMap<String, String>);

impl MailboxTable {
    /// The mailboxes of every [`KnownNetwork`].
    pub fn known_networks() -> Self {
        KnownNetwork::ALL
            .into_iter()
            .map(|n| (n.name().to_owned(), n.default_mailbox().to_owned()))
            .collect()
    }

    pub fn with_entry(mut self, network: impl Into<String>, address: impl Into<String>) -> Self {
        self.0.insert(network.into(), address.into());
        self
    }

    pub fn get(&self, network: &str) -> Option<&str> {
        self.0.get(network).map(String::as_str)
    }

    /// Look up and parse the mailbox of `network`. Blank entries count as missing.
    pub fn resolve(&self, network: &str) -> Result<Address, DeployError> {
        let address = self
            .get(network)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| DeployError::UnknownNetwork(network.to_owned()))?;

        address
            .parse()
            .map_err(|_| DeployError::InvalidAddress {
                network: network.to_owned(),
                address: address.to_owned(),
            })
    }
}

impl FromIterator<(String, String)> for MailboxTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
