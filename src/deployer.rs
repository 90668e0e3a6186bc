//! The deployer handle over which deployment requests are issued
//!
//! Scripts never talk to the chain themselves; they hand a [`DeploymentSpec`]
//! to a [`Deployer`] and are done. The RPC-backed implementation below owns
//! artifact resolution, calldata construction, transaction submission, and
//! the confirmation wait.

use std::path::PathBuf;

use alloy::{
    hex::FromHex,
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use tracing::info;

use crate::{
    constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
    registry::ArtifactRegistry,
    types::DeploymentSpec,
    utils::{constructor_calldata, write_deployment},
};

/// A handle capable of executing a contract deployment, given an artifact
/// reference and constructor arguments
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Execute the deployment described by the spec, returning the address of
    /// the deployed instance
    async fn deploy(&self, spec: DeploymentSpec) -> Result<Address, ScriptError>;
}

/// A deployer submitting real deployment transactions over an RPC provider
pub struct RpcDeployer {
    /// The provider with which deployment transactions are signed and sent
    provider: DynProvider,
    /// The registry resolving contract names to compiled artifacts
    registry: ArtifactRegistry,
    /// The path of the file deployed addresses are recorded in
    deployments_path: PathBuf,
}

impl RpcDeployer {
    /// Create a deployer over the given provider, artifact registry, and
    /// deployments file
    pub fn new(
        provider: DynProvider,
        registry: ArtifactRegistry,
        deployments_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            provider,
            registry,
            deployments_path: deployments_path.into(),
        }
    }
}

impl Deployer for RpcDeployer {
    async fn deploy(&self, spec: DeploymentSpec) -> Result<Address, ScriptError> {
        let artifact = self.registry.require(&spec.contract)?;

        // Creation code is the artifact bytecode followed by the ABI-encoded
        // constructor arguments
        let bytecode = Bytes::from_hex(&artifact.bytecode)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        let calldata = constructor_calldata(&artifact.abi, &spec.constructor_args)?;
        let deploy_code = Bytes::from([bytecode.to_vec(), calldata].concat());

        info!(
            "deploying {} with constructor args {:?}",
            spec.contract, spec.constructor_args
        );

        let tx = TransactionRequest::default().with_deploy_code(deploy_code);
        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
            .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(
                "deployment receipt carries no contract address".to_string(),
            )
        })?;

        info!("{} deployed at {:#x}", spec.contract, address);
        write_deployment(&self.deployments_path, &spec.contract, address)?;

        Ok(address)
    }
}
