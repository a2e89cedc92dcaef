mod config;
mod ethers_client;
mod logging;

use ethers::types::Address;
use lumina_deployment::{
    config::MailboxTable,
    contracts::lumina_protocol::EthersContractDeployer,
    deployer::{DeploymentOutcome, Deployer},
    report::{self, DeploymentReport},
};

use crate::{config::DeployConfig, ethers_client::get_writer_ethers_client};

/// Network and mailbox of a run, known before any signer or RPC setting is read.
struct Target {
    network: String,
    mailboxes: MailboxTable,
    mailbox: Address,
}

#[tokio::main]
async fn main() {
    logging::initialize(logging::DEFAULT_FILTER);
    dotenv::dotenv().ok();

    let report = match resolve_target(config::env_var) {
        Ok(target) => {
            print_lines(
                &report::preamble(Some(&target.network), Some(&target.mailbox)),
                &[],
            );
            deploy(target, config::env_var).await
        }
        Err(report) => report,
    };

    print_lines(&report.stdout, &report.stderr);
    std::process::exit(report.exit_code);
}

fn print_lines(stdout: &[String], stderr: &[String]) {
    for line in stdout {
        println!("{line}");
    }
    for line in stderr {
        eprintln!("{line}");
    }
}

/// Read the network and resolve its mailbox. The `Err` report is complete.
fn resolve_target(lookup: impl Fn(&str) -> Option<String>) -> Result<Target, DeploymentReport> {
    let network = config::network_name(&lookup)
        .map_err(|e| DeploymentReport::setup_failed(None, format!("{e:#}")))?;

    let mailboxes = MailboxTable::known_networks();
    match mailboxes.resolve(&network) {
        Ok(mailbox) => Ok(Target {
            network,
            mailboxes,
            mailbox,
        }),
        Err(error) => Err(DeploymentReport::render(&DeploymentOutcome::failed(
            network, None, error,
        ))),
    }
}

/// Everything after the preamble: the returned report leaves it out.
async fn deploy(target: Target, lookup: impl Fn(&str) -> Option<String>) -> DeploymentReport {
    match try_deploy(target, lookup).await {
        Ok(outcome) => DeploymentReport::summary(&outcome),
        Err(e) => DeploymentReport::failed(format!("{e:#}")),
    }
}

async fn try_deploy(
    target: Target,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<DeploymentOutcome> {
    let config = DeployConfig::from_lookup(lookup)?;
    tracing::info!(
        network = %config.network.network_name,
        rpc_url = %config.network.rpc_url,
        "loaded deploy config"
    );

    let client = get_writer_ethers_client(&config)?;
    let contract_deployer = EthersContractDeployer::new(client, config.artifact_path)
        .with_confirmations(config.confirmations);

    let deployer = Deployer::new(target.network, target.mailboxes, contract_deployer);

    Ok(deployer.deploy_to(target.mailbox).await)
}
