use std::sync::Arc;

use anyhow::Context;
use ethers::{
    core::k256::ecdsa::SigningKey,
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer, Wallet},
};
use tracing::info;

use crate::config::{DeployConfig, SignerSource};

pub type EtherSigner = SignerMiddleware<Provider<Http>, Wallet<SigningKey>>;

pub fn get_writer_ethers_client(config: &DeployConfig) -> anyhow::Result<Arc<EtherSigner>> {
    let wallet = match &config.signer {
        SignerSource::PrivateKey(key) => key
            .parse::<LocalWallet>()
            .context("invalid PRIVATE_KEY")?,
        SignerSource::Mnemonic { phrase, index } => MnemonicBuilder::<English>::default()
            .phrase(phrase.as_str())
            .index(*index)
            .context("invalid MNEMONIC_INDEX")?
            .build()
            .context("invalid MNEMONIC")?,
    };

    let wallet = match config.network.chain_id {
        Some(chain_id) => wallet.with_chain_id(chain_id),
        None => wallet,
    };

    let provider = Provider::<Http>::try_from(config.network.rpc_url.as_str())
        .with_context(|| format!("invalid RPC_URL: {}", config.network.rpc_url))?;

    info!(deployer = ?wallet.address(), chain_id = wallet.chain_id(), "loaded deployer wallet");

    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}
