//! Scripts for deploying and initializing the staking contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod registry;
pub mod types;
pub mod utils;
