pub const BASE_SEPOLIA: &str = "baseSepolia";
pub const SEPOLIA: &str = "sepolia";

/// Hyperlane domain of Base Sepolia. Same value as its chain ID.
pub const BASE_SEPOLIA_DOMAIN: u32 = 84532;
/// Hyperlane domain of Ethereum Sepolia. Same value as its chain ID.
pub const SEPOLIA_DOMAIN: u32 = 11155111;

const BASE_SEPOLIA_MAILBOX: &str = "0x6966b0E55883d49BFB24539356a2f8A673E02039";
const SEPOLIA_MAILBOX: &str = "0xfFAEF09B3cd11D9b20d1a19bECca54EEC2884766";

/// Side of the cross-chain link a deployment plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkRole {
    Source,
    Destination,
}

impl NetworkRole {
    pub fn label(&self) -> &'static str {
        match self {
            NetworkRole::Source => "source",
            NetworkRole::Destination => "destination",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownNetwork {
    BaseSepolia,
    Sepolia,
}

impl KnownNetwork {
    pub const ALL: [KnownNetwork; 2] = [KnownNetwork::BaseSepolia, KnownNetwork::Sepolia];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|network| network.name() == name)
    }

    /// Identifier used by the network selection, e.g. `baseSepolia`.
    pub fn name(&self) -> &'static str {
        match self {
            KnownNetwork::BaseSepolia => BASE_SEPOLIA,
            KnownNetwork::Sepolia => SEPOLIA,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            KnownNetwork::BaseSepolia => "Base Sepolia",
            KnownNetwork::Sepolia => "Ethereum Sepolia",
        }
    }

    pub fn domain_id(&self) -> u32 {
        match self {
            KnownNetwork::BaseSepolia => BASE_SEPOLIA_DOMAIN,
            KnownNetwork::Sepolia => SEPOLIA_DOMAIN,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.domain_id() as u64
    }

    pub fn role(&self) -> NetworkRole {
        match self {
            KnownNetwork::BaseSepolia => NetworkRole::Source,
            KnownNetwork::Sepolia => NetworkRole::Destination,
        }
    }

    pub fn default_mailbox(&self) -> &'static str {
        match self {
            KnownNetwork::BaseSepolia => BASE_SEPOLIA_MAILBOX,
            KnownNetwork::Sepolia => SEPOLIA_MAILBOX,
        }
    }
}
