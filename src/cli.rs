//! Definitions of CLI arguments and commands for the deploy scripts

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::deploy_staking,
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH},
    deployer::Deployer,
    errors::ScriptError,
};

/// The top-level CLI for the deploy scripts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: String,

    /// Path of the file deployed addresses are recorded in
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the staking contract
    DeployStaking(DeployStakingArgs),
}

impl Command {
    /// Run the command against the given deployer handle
    pub async fn run(self, deployer: &impl Deployer) -> Result<(), ScriptError> {
        match self {
            Command::DeployStaking(args) => deploy_staking(args, deployer).await,
        }
    }
}

/// Deploy the staking contract, pointing it at the token it escrows
#[derive(Args)]
pub struct DeployStakingArgs {
    /// Address of the staking token, in hex
    #[arg(short, long, env = "STAKING_TOKEN_ADDRESS")]
    pub staking_token: String,
}
