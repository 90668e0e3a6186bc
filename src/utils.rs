//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    dyn_abi::{JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::Address,
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde_json::Value;

use crate::errors::ScriptError;

/// Set up the client with which to submit deployment transactions, signing
/// with the given private key and talking to the given RPC endpoint
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);
    Ok(DynProvider::new(provider))
}

/// ABI-encode the given raw argument strings against the constructor of the
/// given ABI
///
/// Each argument is coerced to the type the constructor declares for its
/// position; a contract without a constructor accepts only an empty argument
/// list.
pub fn constructor_calldata(abi: &JsonAbi, args: &[String]) -> Result<Vec<u8>, ScriptError> {
    let constructor = match abi.constructor.as_ref() {
        Some(constructor) => constructor,
        None if args.is_empty() => return Ok(Vec::new()),
        None => {
            return Err(ScriptError::CalldataConstruction(
                "constructor arguments given for a contract without a constructor".to_string(),
            ))
        }
    };

    if constructor.inputs.len() != args.len() {
        return Err(ScriptError::CalldataConstruction(format!(
            "constructor expects {} arguments, got {}",
            constructor.inputs.len(),
            args.len()
        )));
    }

    let values = constructor
        .inputs
        .iter()
        .zip(args)
        .map(|(input, raw)| {
            let ty = input
                .resolve()
                .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
            ty.coerce_str(raw)
                .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
        })
        .collect::<Result<Vec<_>, ScriptError>>()?;

    constructor
        .abi_encode_input(&values)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Record a deployed contract address in the deployments file, keyed by
/// contract name
///
/// The file is created if it does not exist; entries for other contracts are
/// preserved.
pub fn write_deployment(
    path: &Path,
    contract: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut deployments: Value = if path.exists() {
        let contents = fs::read_to_string(path)
            .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))?
    } else {
        Value::Object(Default::default())
    };

    let entries = deployments.as_object_mut().ok_or_else(|| {
        ScriptError::WriteDeployments("deployments file is not a JSON object".to_string())
    })?;
    entries.insert(contract.to_string(), Value::String(format!("{address:#x}")));

    let contents = serde_json::to_string_pretty(&deployments)
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    /// An ABI whose constructor takes the staking token address
    const STAKING_ABI: &str = r#"[
        {
            "inputs": [{ "name": "_stakingToken", "type": "address" }],
            "stateMutability": "nonpayable",
            "type": "constructor"
        }
    ]"#;

    /// An ABI with no constructor entry
    const NO_CONSTRUCTOR_ABI: &str = r#"[
        {
            "inputs": [],
            "name": "totalStaked",
            "outputs": [{ "name": "", "type": "uint256" }],
            "stateMutability": "view",
            "type": "function"
        }
    ]"#;

    /// Parse an ABI literal
    fn abi(raw: &str) -> JsonAbi {
        serde_json::from_str(raw).unwrap()
    }

    /// A unique scratch path for deployments-file tests
    fn scratch_deployments_file(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("deployments-{tag}-{}.json", std::process::id()))
    }

    /// An address argument encodes to a single left-padded 32-byte word
    #[test]
    fn test_constructor_calldata_encodes_address() {
        let token = "0x335446FF2B9bab408840d87AB6A21C9C0C6615C5";
        let calldata =
            constructor_calldata(&abi(STAKING_ABI), &[token.to_string()]).unwrap();

        assert_eq!(calldata.len(), 32);
        assert!(calldata[..12].iter().all(|b| *b == 0));
        assert_eq!(&calldata[12..], Address::from_str(token).unwrap().as_slice());
    }

    /// A non-address argument string is rejected when the calldata is built,
    /// not before
    #[test]
    fn test_constructor_calldata_rejects_malformed_address() {
        let err = constructor_calldata(
            &abi(STAKING_ABI),
            &["Your staking token address".to_string()],
        )
        .unwrap_err();

        assert!(matches!(err, ScriptError::CalldataConstruction(_)));
    }

    /// Argument count must match the constructor arity
    #[test]
    fn test_constructor_calldata_checks_arity() {
        let err = constructor_calldata(&abi(STAKING_ABI), &[]).unwrap_err();

        assert!(matches!(err, ScriptError::CalldataConstruction(_)));
    }

    /// A constructor-less ABI yields empty calldata, and rejects stray
    /// arguments
    #[test]
    fn test_constructor_calldata_without_constructor() {
        let no_constructor = abi(NO_CONSTRUCTOR_ABI);
        assert!(constructor_calldata(&no_constructor, &[]).unwrap().is_empty());

        let err = constructor_calldata(&no_constructor, &["0x00".to_string()]).unwrap_err();
        assert!(matches!(err, ScriptError::CalldataConstruction(_)));
    }

    /// Deployments are recorded keyed by contract name, preserving existing
    /// entries
    #[test]
    fn test_write_deployment_records_addresses() {
        let path = scratch_deployments_file("records");
        let token = Address::from_str("0x335446FF2B9bab408840d87AB6A21C9C0C6615C5").unwrap();

        write_deployment(&path, "StakingToken", token).unwrap();
        write_deployment(&path, "StakingContract", Address::ZERO).unwrap();

        let recorded: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            recorded["StakingToken"].as_str().unwrap(),
            format!("{token:#x}")
        );
        assert_eq!(
            recorded["StakingContract"].as_str().unwrap(),
            format!("{:#x}", Address::ZERO)
        );

        fs::remove_file(&path).unwrap();
    }
}
