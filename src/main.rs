use clap::Parser;
use staking_scripts::{
    cli::Cli, deployer::RpcDeployer, errors::ScriptError, registry::ArtifactRegistry,
    utils::setup_client,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts_dir,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url)?;
    let registry = ArtifactRegistry::new(&artifacts_dir);
    let deployer = RpcDeployer::new(client, registry, &deployments_path);

    command.run(&deployer).await
}
