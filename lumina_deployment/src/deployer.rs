use std::sync::Arc;

use async_trait::async_trait;
use ethers::types::Address;
use tracing::{error, info};

use crate::{config::MailboxTable, error::DeployError};

/// Something able to deploy the contract given its mailbox constructor argument,
/// returning the address once the deployment is confirmed.
#[async_trait]
pub trait ContractDeployer: Send + Sync {
    async fn deploy(&self, mailbox: Address) -> Result<Address, DeployError>;
}

#[async_trait]
impl<T> ContractDeployer for Arc<T>
where
    T: ContractDeployer + ?Sized,
{
    async fn deploy(&self, mailbox: Address) -> Result<Address, DeployError> {
        (**self).deploy(mailbox).await
    }
}

#[derive(Debug)]
pub enum DeploymentStatus {
    Deployed { address: Address },
    Failed { error: DeployError },
}

/// Result of a single deployer run.
#[derive(Debug)]
pub struct DeploymentOutcome {
    pub network: String,
    /// `None` when the run failed before the mailbox was resolved.
    pub mailbox: Option<Address>,
    pub status: DeploymentStatus,
}

impl DeploymentOutcome {
    pub fn failed(network: impl Into<String>, mailbox: Option<Address>, error: DeployError) -> Self {
        Self {
            network: network.into(),
            mailbox,
            status: DeploymentStatus::Failed { error },
        }
    }
}

pub struct Deployer<D> {
    network_name: String,
    mailboxes: MailboxTable,
    contract_deployer: D,
}

impl<D> Deployer<D>
where
    D: ContractDeployer,
{
    pub fn new(network_name: impl Into<String>, mailboxes: MailboxTable, contract_deployer: D) -> Self {
        Self {
            network_name: network_name.into(),
            mailboxes,
            contract_deployer,
        }
    }

    pub fn resolve_mailbox(&self) -> Result<Address, DeployError> {
        self.mailboxes.resolve(&self.network_name)
    }

    /// Resolve the mailbox of the active network, then deploy against it and wait
    /// for confirmation. Nothing is deployed when the lookup fails.
    pub async fn run(&self) -> DeploymentOutcome {
        match self.resolve_mailbox() {
            Ok(mailbox) => self.deploy_to(mailbox).await,
            Err(error) => {
                error!(network = %self.network_name, %error, "mailbox lookup failed");
                DeploymentOutcome::failed(&self.network_name, None, error)
            }
        }
    }

    /// Deploy against an already resolved `mailbox`.
    pub async fn deploy_to(&self, mailbox: Address) -> DeploymentOutcome {
        info!(network = %self.network_name, ?mailbox, "deploying contract");

        match self.contract_deployer.deploy(mailbox).await {
            Ok(address) => {
                info!(network = %self.network_name, ?address, "contract deployed");
                DeploymentOutcome {
                    network: self.network_name.clone(),
                    mailbox: Some(mailbox),
                    status: DeploymentStatus::Deployed { address },
                }
            }
            Err(error) => {
                error!(network = %self.network_name, %error, "deployment failed");
                DeploymentOutcome::failed(&self.network_name, Some(mailbox), error)
            }
        }
    }
}
