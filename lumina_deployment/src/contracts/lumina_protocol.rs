use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use ethers::{
    abi::Token,
    contract::ContractFactory,
    providers::Middleware,
    types::Address,
};
use tracing::info;

use super::artifact::ContractArtifact;
use crate::{deployer::ContractDeployer, error::DeployError};

pub const DEFAULT_CONFIRMATIONS: usize = 1;

/// Deploys the compiled `LuminaProtocol` through an ethers client.
///
/// The artifact is read on each deploy, after the mailbox has been resolved.
pub struct EthersContractDeployer<M> {
    client: Arc<M>,
    artifact_path: PathBuf,
    confirmations: usize,
}

impl<M: Middleware> EthersContractDeployer<M> {
    pub fn new(client: Arc<M>, artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            artifact_path: artifact_path.into(),
            confirmations: DEFAULT_CONFIRMATIONS,
        }
    }

    pub fn with_confirmations(mut self, confirmations: usize) -> Self {
        self.confirmations = confirmations;
        self
    }
}

#[async_trait]
impl<M> ContractDeployer for EthersContractDeployer<M>
where
    M: Middleware + 'static,
{
    async fn deploy(&self, mailbox: Address) -> Result<Address, DeployError> {
        let artifact = ContractArtifact::load(&self.artifact_path)?;
        let factory = ContractFactory::new(artifact.abi, artifact.bytecode, self.client.clone());

        let deployer = factory
            .deploy_tokens(vec![Token::Address(mailbox)])
            .map_err(|e| DeployError::Deployment(e.to_string()))?
            .confirmations(self.confirmations);

        info!(
            contract = %artifact.contract_name,
            confirmations = self.confirmations,
            "sending deployment transaction"
        );

        let (contract, receipt) = deployer
            .send_with_receipt()
            .await
            .map_err(|e| DeployError::Deployment(e.to_string()))?;

        info!(
            tx = ?receipt.transaction_hash,
            block = ?receipt.block_number,
            gas_used = ?receipt.gas_used,
            "deployment confirmed"
        );

        Ok(contract.address())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, sync::Arc};

    use ethers::providers::{Http, Provider};

    use super::*;

    fn deployer(artifact_path: PathBuf) -> EthersContractDeployer<Provider<Http>> {
        let provider = Provider::<Http>::try_from("http://localhost:8545").unwrap();
        EthersContractDeployer::new(Arc::new(provider), artifact_path)
    }

    #[tokio::test]
    async fn test_missing_artifact_fails_before_sending() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));

        let err = deployer(path).deploy(Address::repeat_byte(1)).await.unwrap_err();

        assert!(matches!(err, DeployError::Artifact { .. }));
    }

    #[tokio::test]
    async fn test_abi_without_constructor_rejects_mailbox_argument() {
        let path = std::env::temp_dir().join(format!("lumina-{}.json", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            r#"{ "contractName": "LuminaProtocol", "abi": [], "bytecode": "0x60806040" }"#,
        )
        .unwrap();

        // encoding fails, so no request reaches the provider
        let err = deployer(path.clone())
            .deploy(Address::repeat_byte(1))
            .await
            .unwrap_err();
        fs::remove_file(path).ok();

        assert!(matches!(err, DeployError::Deployment(_)));
    }
}
