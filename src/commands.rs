//! Implementations of the deploy scripts

use crate::{
    cli::DeployStakingArgs, constants::STAKING_CONTRACT_ARTIFACT, deployer::Deployer,
    errors::ScriptError, types::DeploymentSpec,
};

/// Deploy the staking contract, parameterized by the staking token address.
///
/// Issues exactly one deployment request. The address string is forwarded to
/// the deployer untouched, and the deployed instance is discarded; a failed
/// deployment simply propagates.
pub async fn deploy_staking(
    args: DeployStakingArgs,
    deployer: &impl Deployer,
) -> Result<(), ScriptError> {
    let spec = DeploymentSpec::new(STAKING_CONTRACT_ARTIFACT, vec![args.staking_token]);
    deployer.deploy(spec).await?;

    Ok(())
}
