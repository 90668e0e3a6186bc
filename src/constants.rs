//! Constants used in the deploy scripts

/// The name of the compiled staking contract artifact
pub const STAKING_CONTRACT_ARTIFACT: &str = "StakingContract";

/// The directory the contract toolchain writes compiled artifacts to
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// The default path of the file deployed addresses are recorded in
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The file extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;
