//! Local wallet: in-process secp256k1 signing via `ethers`.
//!
//! Only available with the `local-wallet` feature.

use std::collections::BTreeMap;

use async_trait::async_trait;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::transaction::eip712::{EIP712Domain, Eip712, Eip712DomainType, TypedData};
use ethers::types::{Address, U256};
use ethers::utils::to_checksum;

use crate::error::SigningError;
use crate::shared::ParamValue;
use crate::signing::{SigningDomain, TypedDataPayload, TypedDataSigner};

#[async_trait]
impl TypedDataSigner for LocalWallet {
    fn account_address(&self) -> Option<String> {
        Some(to_checksum(&Signer::address(self), None))
    }

    async fn sign_typed_data(&self, payload: &TypedDataPayload) -> Result<String, SigningError> {
        let typed_data = to_typed_data(payload)?;
        let signature = Signer::sign_typed_data(self, &typed_data)
            .await
            .map_err(|e| SigningError::Wallet(e.to_string()))?;
        Ok(format!("0x{}", hex::encode(signature.to_vec())))
    }
}

/// Convert a payload into `ethers`' dynamic typed-data representation.
pub fn to_typed_data(payload: &TypedDataPayload) -> Result<TypedData, SigningError> {
    let domain = to_domain(&payload.domain)?;

    let members = payload
        .fields
        .iter()
        .map(|f| Eip712DomainType {
            name: f.name.clone(),
            r#type: f.kind.as_str().to_string(),
        })
        .collect();
    let mut types = BTreeMap::new();
    types.insert(payload.primary_type.clone(), members);

    let message = payload
        .message
        .iter()
        .map(|(name, value)| (name.clone(), to_json(value)))
        .collect();

    Ok(TypedData {
        domain,
        types,
        primary_type: payload.primary_type.clone(),
        message,
    })
}

/// EIP-712 digest of `payload`, as signed by [`LocalWallet`].
pub fn typed_data_hash(payload: &TypedDataPayload) -> Result<[u8; 32], SigningError> {
    to_typed_data(payload)?
        .encode_eip712()
        .map_err(|e| SigningError::Eip712(e.to_string()))
}

fn to_domain(domain: &SigningDomain) -> Result<EIP712Domain, SigningError> {
    let verifying_contract: Address = domain
        .verifying_contract
        .parse()
        .map_err(|e| SigningError::Eip712(format!("verifying contract: {}", e)))?;

    Ok(EIP712Domain {
        name: Some(domain.name.to_string()),
        version: Some(domain.version.to_string()),
        chain_id: Some(U256::from(domain.chain_id)),
        verifying_contract: Some(verifying_contract),
        salt: None,
    })
}

fn to_json(value: &ParamValue) -> serde_json::Value {
    match value {
        ParamValue::Bool(b) => serde_json::Value::Bool(*b),
        ParamValue::Uint(n) => serde_json::Value::from(*n),
        ParamValue::Str(s) => serde_json::Value::String(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ParamSet;
    use crate::signing::{sign_message, sign_structured};
    use ethers::types::{Signature, H256};
    use std::str::FromStr;

    // Key was randomly generated for testing and shouldn't be used with any real funds
    const TEST_KEY: &str = "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e";

    fn wallet() -> LocalWallet {
        TEST_KEY.parse().unwrap()
    }

    fn recover(signature: &str, payload: &TypedDataPayload) -> Address {
        let signature = Signature::from_str(signature).unwrap();
        let hash = typed_data_hash(payload).unwrap();
        signature.recover(H256::from(hash)).unwrap()
    }

    #[test]
    fn test_account_address_is_checksummed() {
        let w = wallet();
        let address = w.account_address().unwrap();
        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 42);
        assert_eq!(address.to_lowercase(), format!("{:?}", Signer::address(&w)));
    }

    #[test]
    fn test_typed_data_mirrors_payload() {
        let params = ParamSet::new()
            .with("agentAddress", "0x3333333333333333333333333333333333333333")
            .with("canWithdraw", false)
            .with("nonce", 123u64);
        let payload = TypedDataPayload::structured(&params, "UpdateAgent");

        let typed = to_typed_data(&payload).unwrap();
        assert_eq!(typed.primary_type, "UpdateAgent");
        assert_eq!(typed.domain.chain_id, Some(U256::from(56u64)));
        assert_eq!(typed.domain.verifying_contract, Some(Address::zero()));
        let members: Vec<(&str, &str)> = typed.types["UpdateAgent"]
            .iter()
            .map(|t| (t.name.as_str(), t.r#type.as_str()))
            .collect();
        assert_eq!(
            members,
            vec![
                ("AgentAddress", "string"),
                ("CanWithdraw", "bool"),
                ("Nonce", "uint256"),
            ]
        );
        assert_eq!(typed.message["Nonce"], serde_json::json!(123));
    }

    #[tokio::test]
    async fn test_structured_signature_recovers_to_wallet() {
        let w = wallet();
        let params = ParamSet::new()
            .with("builder", "0xc2af13e1B1de3A015252A115309A0F9DEEDCFa0A")
            .with("maxFeeRate", "0.00001")
            .with("builderName", "ivan3")
            .with("asterChain", "Mainnet")
            .with("user", w.account_address().unwrap())
            .with("nonce", 1_700_000_000_000_000u64);

        let signature = sign_structured(&w, &params, "ApproveBuilder").await.unwrap();
        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 2 + 130);

        let payload = TypedDataPayload::structured(&params, "ApproveBuilder");
        assert_eq!(recover(&signature, &payload), Signer::address(&w));
    }

    #[tokio::test]
    async fn test_message_signature_recovers_to_wallet() {
        let w = wallet();
        let query = "asterChain=Mainnet&user=0x1111111111111111111111111111111111111111&nonce=1";

        let signature = sign_message(&w, query).await.unwrap();
        assert_eq!(recover(&signature, &TypedDataPayload::message(query)), Signer::address(&w));
    }

    #[test]
    fn test_domains_produce_different_digests() {
        let params = ParamSet::new().with("msg", "same");
        let structured = TypedDataPayload::structured(&params, "Message");
        let message = TypedDataPayload::message("same");

        assert_ne!(
            typed_data_hash(&structured).unwrap(),
            typed_data_hash(&message).unwrap()
        );
    }
}
