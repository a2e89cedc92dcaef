use std::{fs, path::Path};

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;

use crate::{error::DeployError, utils::hex_to_bytes};

/// Location of the compiled contract relative to the contracts project root.
pub const DEFAULT_ARTIFACT_PATH: &str =
    "artifacts/contracts/LuminaProtocol.sol/LuminaProtocol.json";

/// The parts of a Hardhat build artifact needed to deploy a contract.
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    contract_name: String,
    abi: Abi,
    bytecode: String,
}

impl ContractArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeployError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| artifact_error(path, e))?;
        Self::from_json(path, &json)
    }

    /// `path` is only used to label errors.
    pub fn from_json(path: impl AsRef<Path>, json: &str) -> Result<Self, DeployError> {
        let path = path.as_ref();
        let artifact: HardhatArtifact =
            serde_json::from_str(json).map_err(|e| artifact_error(path, e))?;

        let bytecode = hex_to_bytes(&artifact.bytecode).map_err(|e| artifact_error(path, e))?;
        if bytecode.is_empty() {
            // abstract contracts and interfaces compile to empty bytecode
            return Err(artifact_error(
                path,
                format!("{} has no deployable bytecode", artifact.contract_name),
            ));
        }

        Ok(Self {
            contract_name: artifact.contract_name,
            abi: artifact.abi,
            bytecode: bytecode.into(),
        })
    }
}

fn artifact_error(path: &Path, reason: impl ToString) -> DeployError {
    DeployError::Artifact {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
