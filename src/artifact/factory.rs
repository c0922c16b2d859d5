//! Contract factory: turns a compiled artifact into a deployable
//! creation transaction.
//!
//! Constructor arguments arrive pre-encoded (hex on the CLI) and are
//! appended to the creation bytecode, which is how EVM init code is laid
//! out: `bytecode ‖ abi_encoded_args`.

use alloy::json_abi::JsonAbi;
use alloy::network::TransactionBuilder;
use alloy::primitives::Bytes;
use alloy::rpc::types::TransactionRequest;

use crate::artifact::store::{Artifact, ArtifactError};

/// A deployable instance of a named contract.
#[derive(Debug, Clone)]
pub struct ContractFactory {
    name: String,
    abi: JsonAbi,
    bytecode: Bytes,
}

impl ContractFactory {
    /// Build a factory from a parsed artifact.
    ///
    /// Rejects artifacts without creation bytecode (interfaces, abstract
    /// contracts) before any network traffic happens.
    pub fn from_artifact(artifact: Artifact) -> Result<Self, ArtifactError> {
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::NoBytecode(artifact.contract_name));
        }

        Ok(Self {
            name: artifact.contract_name,
            abi: artifact.abi,
            bytecode: artifact.bytecode,
        })
    }

    /// Contract name this factory deploys.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contract ABI.
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Creation init code: bytecode followed by the encoded constructor args.
    pub fn init_code(&self, constructor_args: &[u8]) -> Bytes {
        if constructor_args.is_empty() {
            return self.bytecode.clone();
        }

        let mut code = Vec::with_capacity(self.bytecode.len() + constructor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(constructor_args);
        code.into()
    }

    /// Build the contract-creation transaction request.
    pub fn deploy_request(&self, constructor_args: &[u8]) -> TransactionRequest {
        let takes_args = self
            .abi
            .constructor
            .as_ref()
            .map(|c| !c.inputs.is_empty())
            .unwrap_or(false);
        if takes_args && constructor_args.is_empty() {
            tracing::warn!(
                contract = %self.name,
                "Constructor declares parameters but no arguments were supplied"
            );
        }

        TransactionRequest::default().with_deploy_code(self.init_code(constructor_args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::TxKind;

    fn artifact(bytecode: &str) -> Artifact {
        serde_json::from_str(&format!(
            r#"{{"contractName":"Bridge","abi":[],"bytecode":"{bytecode}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_factory_rejects_empty_bytecode() {
        let err = ContractFactory::from_artifact(artifact("0x")).unwrap_err();
        assert!(matches!(err, ArtifactError::NoBytecode(_)));
    }

    #[test]
    fn test_init_code_without_args() {
        let factory = ContractFactory::from_artifact(artifact("0x608060")).unwrap();
        assert_eq!(factory.init_code(&[]).as_ref(), &[0x60, 0x80, 0x60]);
    }

    #[test]
    fn test_init_code_appends_args() {
        let factory = ContractFactory::from_artifact(artifact("0x6080")).unwrap();
        let code = factory.init_code(&[0xaa, 0xbb]);
        assert_eq!(code.as_ref(), &[0x60, 0x80, 0xaa, 0xbb]);
    }

    #[test]
    fn test_deploy_request_is_creation() {
        let factory = ContractFactory::from_artifact(artifact("0x6080")).unwrap();
        let request = factory.deploy_request(&[]);
        assert_eq!(request.to, Some(TxKind::Create));
        assert_eq!(request.input.input().unwrap().as_ref(), &[0x60, 0x80]);
    }
}
