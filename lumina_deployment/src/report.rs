use std::fmt::Display;

use ethers::types::Address;

use crate::{
    deployer::{DeploymentOutcome, DeploymentStatus},
    networks::KnownNetwork,
    utils::format_address,
};

pub const SUCCESS_EXIT_CODE: i32 = 0;
pub const FAILURE_EXIT_CODE: i32 = 1;

const NEXT_STEPS: [&str; 4] = [
    "Deploy to both networks",
    "Configure cross-chain contracts using setCrossChainContract()",
    "Update frontend with new addresses",
    "Test the fixed cross-chain confirmation!",
];

/// Console transcript of a deployment run, split by output stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentReport {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub exit_code: i32,
}

impl DeploymentReport {
    /// The whole transcript: [`preamble`] followed by [`DeploymentReport::summary`].
    pub fn render(outcome: &DeploymentOutcome) -> Self {
        let mut report = Self::summary(outcome);
        let mut stdout = preamble(Some(&outcome.network), outcome.mailbox.as_ref());
        stdout.append(&mut report.stdout);
        report.stdout = stdout;
        report
    }

    /// Only the lines that follow the preamble, for when it was printed up front.
    pub fn summary(outcome: &DeploymentOutcome) -> Self {
        match &outcome.status {
            DeploymentStatus::Deployed { address } => {
                let address = format_address(address);
                let mut stdout = vec![format!("✅ LuminaProtocol (Fixed) deployed to: {address}")];
                if let Some(mailbox) = &outcome.mailbox {
                    stdout.push(format!("🔗 Mailbox: {}", format_address(mailbox)));
                }
                stdout.push(format!("🌐 Network: {}", outcome.network));

                // networks without a known role get no banner
                if let Some(network) = KnownNetwork::from_name(&outcome.network) {
                    stdout.push(String::new());
                    stdout.push(format!(
                        "🌟 {} FIXED CONTRACT DEPLOYED",
                        network.display_name().to_uppercase()
                    ));
                    stdout.push(format!(
                        "💫 This is your new {} contract",
                        network.role().label()
                    ));
                    stdout.push(format!("📍 Contract Address: {address}"));
                }

                stdout.extend(guidance());

                Self {
                    stdout,
                    stderr: vec![],
                    exit_code: SUCCESS_EXIT_CODE,
                }
            }
            DeploymentStatus::Failed { error } => Self::failed(error),
        }
    }

    /// Error banner alone.
    pub fn failed(detail: impl Display) -> Self {
        Self {
            stdout: vec![],
            stderr: vec![failure_line(detail)],
            exit_code: FAILURE_EXIT_CODE,
        }
    }

    /// Report for a run that failed while setting up, before the deployer ran.
    pub fn setup_failed(network: Option<&str>, detail: impl Display) -> Self {
        Self {
            stdout: preamble(network, None),
            ..Self::failed(detail)
        }
    }
}

/// Start banner, network and, once resolved, the mailbox in use.
pub fn preamble(network: Option<&str>, mailbox: Option<&Address>) -> Vec<String> {
    let mut lines = vec!["🌟 Deploying LuminaProtocol (Fixed Version)...".to_owned()];
    if let Some(network) = network {
        lines.push(format!("Network: {network}"));
    }
    if let Some(mailbox) = mailbox {
        lines.push(format!("Using Mailbox: {}", format_address(mailbox)));
    }
    lines
}

fn failure_line(detail: impl Display) -> String {
    format!("❌ Deployment failed: {detail}")
}

/// Static follow-up information, the same for every network.
pub fn guidance() -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "💡 Domain IDs for cross-chain messaging:".to_owned(),
    ];
    lines.extend(
        KnownNetwork::ALL
            .iter()
            .map(|n| format!("{} Domain: {}", n.display_name(), n.domain_id())),
    );

    lines.push(String::new());
    lines.push("🔧 Next steps:".to_owned());
    lines.extend(
        NEXT_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1)),
    );

    lines.push(String::new());
    lines.push("📝 Remember to save this address for cross-chain setup!".to_owned());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeployError;

    fn deployed(network: &str, address: Address) -> DeploymentOutcome {
        DeploymentOutcome {
            network: network.to_owned(),
            mailbox: Some(Address::repeat_byte(0x11)),
            status: DeploymentStatus::Deployed { address },
        }
    }

    #[test]
    fn test_guidance_lines() {
        let lines = guidance();

        assert!(lines.contains(&"Base Sepolia Domain: 84532".to_owned()));
        assert!(lines.contains(&"Ethereum Sepolia Domain: 11155111".to_owned()));
        assert!(lines.contains(
            &"2. Configure cross-chain contracts using setCrossChainContract()".to_owned()
        ));
        assert!(lines.contains(&"4. Test the fixed cross-chain confirmation!".to_owned()));
    }

    #[test]
    fn test_success_report_labels_role() {
        let address = Address::repeat_byte(0xab);

        let report = DeploymentReport::render(&deployed("sepolia", address));

        assert_eq!(report.exit_code, SUCCESS_EXIT_CODE);
        assert!(report.stderr.is_empty());
        assert!(report
            .stdout
            .contains(&"🌟 ETHEREUM SEPOLIA FIXED CONTRACT DEPLOYED".to_owned()));
        assert!(report
            .stdout
            .contains(&"💫 This is your new destination contract".to_owned()));
        assert!(report
            .stdout
            .contains(&format!("📍 Contract Address: {}", format_address(&address))));
    }

    #[test]
    fn test_guidance_identical_across_networks() {
        let address = Address::repeat_byte(0xab);
        let base = DeploymentReport::render(&deployed("baseSepolia", address));
        let sepolia = DeploymentReport::render(&deployed("sepolia", address));
        let guidance = guidance();

        assert!(base.stdout.ends_with(&guidance));
        assert!(sepolia.stdout.ends_with(&guidance));
    }

    #[test]
    fn test_network_without_role_has_no_banner() {
        let report = DeploymentReport::render(&deployed("localhost", Address::repeat_byte(1)));

        assert_eq!(report.exit_code, SUCCESS_EXIT_CODE);
        assert!(!report.stdout.iter().any(|l| l.contains("FIXED CONTRACT DEPLOYED")));
        assert!(report.stdout.contains(&"🌐 Network: localhost".to_owned()));
        assert!(report.stdout.ends_with(&guidance()));
    }

    #[test]
    fn test_failure_report() {
        let outcome = DeploymentOutcome {
            network: "unknownNet".to_owned(),
            mailbox: None,
            status: DeploymentStatus::Failed {
                error: DeployError::UnknownNetwork("unknownNet".to_owned()),
            },
        };

        let report = DeploymentReport::render(&outcome);

        assert_eq!(report.exit_code, FAILURE_EXIT_CODE);
        assert_eq!(
            report.stdout,
            vec![
                "🌟 Deploying LuminaProtocol (Fixed Version)...".to_owned(),
                "Network: unknownNet".to_owned(),
            ]
        );
        assert_eq!(
            report.stderr,
            vec!["❌ Deployment failed: No mailbox for network: unknownNet".to_owned()]
        );
    }

    #[test]
    fn test_setup_failure_report() {
        let report = DeploymentReport::setup_failed(None, "missing RPC_URL");

        assert_eq!(report.exit_code, FAILURE_EXIT_CODE);
        assert_eq!(report.stdout.len(), 1);
        assert_eq!(report.stderr, vec!["❌ Deployment failed: missing RPC_URL".to_owned()]);
    }

    #[test]
    fn test_render_is_preamble_then_summary() {
        let outcome = deployed("baseSepolia", Address::repeat_byte(0xab));

        let full = DeploymentReport::render(&outcome);
        let summary = DeploymentReport::summary(&outcome);

        let mut expected = preamble(Some("baseSepolia"), outcome.mailbox.as_ref());
        assert_eq!(expected.len(), 3);
        expected.extend(summary.stdout.clone());
        assert_eq!(full.stdout, expected);
        assert_eq!(full.exit_code, summary.exit_code);
        assert!(summary.stdout[0].starts_with("✅ LuminaProtocol (Fixed) deployed to: "));
    }

    #[test]
    fn test_failed_summary_has_only_the_banner() {
        let outcome = DeploymentOutcome::failed(
            "sepolia",
            Some(Address::repeat_byte(0x11)),
            DeployError::Deployment("nonce too low".to_owned()),
        );

        let summary = DeploymentReport::summary(&outcome);

        assert!(summary.stdout.is_empty());
        assert_eq!(summary.stderr, vec!["❌ Deployment failed: nonce too low".to_owned()]);
        assert_eq!(summary.exit_code, FAILURE_EXIT_CODE);
    }
}
