use std::path::PathBuf;

use anyhow::{anyhow, Context};
use lumina_deployment::{
    config::ContractNetworkConfig,
    contracts::{artifact::DEFAULT_ARTIFACT_PATH, lumina_protocol::DEFAULT_CONFIRMATIONS},
};

const NETWORK_ENV_VAR: &str = "HARDHAT_NETWORK";
const FALLBACK_NETWORK_ENV_VAR: &str = "NETWORK";
const RPC_URL_ENV_VAR: &str = "RPC_URL";
const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";
const MNEMONIC_ENV_VAR: &str = "MNEMONIC";
const MNEMONIC_INDEX_ENV_VAR: &str = "MNEMONIC_INDEX";
const ARTIFACT_ENV_VAR: &str = "LUMINA_ARTIFACT";
const CONFIRMATIONS_ENV_VAR: &str = "DEPLOY_CONFIRMATIONS";

const DEFAULT_MNEMONIC_INDEX: u32 = 0;

pub enum SignerSource {
    PrivateKey(String),
    Mnemonic { phrase: String, index: u32 },
}

pub struct DeployConfig {
    pub network: ContractNetworkConfig,
    pub signer: SignerSource,
    pub artifact_path: PathBuf,
    pub confirmations: usize,
}

/// Lookup backed by the process environment, after `.env` has been loaded.
pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl DeployConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let network_name = network_name(&lookup)?;
        let rpc_url = lookup(RPC_URL_ENV_VAR)
            .ok_or_else(|| anyhow!("missing env var {RPC_URL_ENV_VAR}"))?;

        let signer = match (lookup(PRIVATE_KEY_ENV_VAR), lookup(MNEMONIC_ENV_VAR)) {
            (Some(key), _) => SignerSource::PrivateKey(key),
            (None, Some(phrase)) => {
                let index = match lookup(MNEMONIC_INDEX_ENV_VAR) {
                    Some(index) => index
                        .parse()
                        .with_context(|| format!("invalid {MNEMONIC_INDEX_ENV_VAR}: {index}"))?,
                    None => DEFAULT_MNEMONIC_INDEX,
                };
                SignerSource::Mnemonic { phrase, index }
            }
            (None, None) => {
                return Err(anyhow!(
                    "missing env var {PRIVATE_KEY_ENV_VAR} or {MNEMONIC_ENV_VAR}"
                ))
            }
        };

        let artifact_path = lookup(ARTIFACT_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_ARTIFACT_PATH.to_owned())
            .into();

        let confirmations = match lookup(CONFIRMATIONS_ENV_VAR) {
            Some(c) => c
                .parse()
                .with_context(|| format!("invalid {CONFIRMATIONS_ENV_VAR}: {c}"))?,
            None => DEFAULT_CONFIRMATIONS,
        };

        Ok(Self {
            network: ContractNetworkConfig::new(network_name, rpc_url),
            signer,
            artifact_path,
            confirmations,
        })
    }
}

pub fn network_name(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    lookup(NETWORK_ENV_VAR)
        .or_else(|| lookup(FALLBACK_NETWORK_ENV_VAR))
        .filter(|n| !n.is_empty())
        .ok_or_else(|| anyhow!("missing env var {NETWORK_ENV_VAR}"))
}
