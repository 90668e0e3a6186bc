//! Type definitions used throughout the deploy scripts

/// A single deployment request: which compiled artifact to deploy, and the
/// ordered constructor arguments to deploy it with.
///
/// A spec is built fresh for every script invocation and consumed exactly
/// once by the deployer. Arguments are carried as raw strings; the script
/// layer never interprets them, leaving validation to the deployer side of
/// the seam.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentSpec {
    /// Name of the compiled contract artifact to deploy
    pub contract: String,
    /// Constructor arguments, in declaration order, as unparsed strings
    pub constructor_args: Vec<String>,
}

impl DeploymentSpec {
    /// Build a spec for the given artifact name and constructor arguments
    pub fn new(contract: impl Into<String>, constructor_args: Vec<String>) -> Self {
        Self {
            contract: contract.into(),
            constructor_args,
        }
    }
}
