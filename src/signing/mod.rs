//! EIP-712 signing: schema inference, signing domains, and the signer seam.
//!
//! ## Signing modes
//!
//! - **Structured** (`Main` domain): the request's own parameters are the
//!   typed-data message. Field names are capitalized and each field's type is
//!   taken from its [`ParamValue`] tag, so the schema always matches exactly
//!   the set of fields that is transmitted.
//! - **Message** (`Message` domain): an already-built query string is signed
//!   as the single `msg: string` field of a `Message` struct. Used by the
//!   listing endpoints.
//!
//! The private key lives behind [`TypedDataSigner`]; the SDK only builds the
//! payload. [`local`] provides an implementation for an in-process key.

#[cfg(feature = "local-wallet")]
pub mod local;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{SdkError, SigningError};
use crate::shared::{ParamSet, ParamValue};

// ============================================================================
// Domains
// ============================================================================

/// The `EIP712Domain` a signature is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningDomain {
    pub name: &'static str,
    pub version: &'static str,
    pub chain_id: u64,
    pub verifying_contract: &'static str,
}

/// Domain for structured actions (approve/update/delete).
pub const MAIN_DOMAIN: SigningDomain = SigningDomain {
    name: "AsterSignTransaction",
    version: "1",
    chain_id: 56,
    verifying_contract: "0x0000000000000000000000000000000000000000",
};

/// Domain for opaque query-string messages.
pub const MESSAGE_DOMAIN: SigningDomain = SigningDomain {
    name: "AsterSignTransaction",
    version: "1",
    chain_id: 1666,
    verifying_contract: "0x0000000000000000000000000000000000000000",
};

/// Primary type used for opaque messages.
pub const MESSAGE_PRIMARY_TYPE: &str = "Message";

// ============================================================================
// Schema
// ============================================================================

/// EIP-712 field type of a request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "uint256")]
    Uint256,
    #[serde(rename = "string")]
    String,
}

impl FieldType {
    pub fn of(value: &ParamValue) -> Self {
        match value {
            ParamValue::Bool(_) => Self::Bool,
            ParamValue::Uint(_) => Self::Uint256,
            ParamValue::Str(_) => Self::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Uint256 => "uint256",
            Self::String => "string",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member of the primary struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedDataField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
}

/// Everything a signer needs: domain, primary type, its members, and the
/// message values in member order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataPayload {
    pub domain: SigningDomain,
    pub primary_type: String,
    pub fields: Vec<TypedDataField>,
    pub message: Vec<(String, ParamValue)>,
}

impl TypedDataPayload {
    /// Structured payload over `params`, bound to [`MAIN_DOMAIN`].
    pub fn structured(params: &ParamSet, primary_type: &str) -> Self {
        let mut fields = Vec::with_capacity(params.len());
        let mut message = Vec::with_capacity(params.len());
        for (name, value) in params.iter() {
            let name = capitalize(name);
            fields.push(TypedDataField {
                name: name.clone(),
                kind: FieldType::of(value),
            });
            message.push((name, value.clone()));
        }

        Self {
            domain: MAIN_DOMAIN,
            primary_type: primary_type.to_string(),
            fields,
            message,
        }
    }

    /// `Message { msg: string }` payload bound to [`MESSAGE_DOMAIN`].
    pub fn message(msg: &str) -> Self {
        Self {
            domain: MESSAGE_DOMAIN,
            primary_type: MESSAGE_PRIMARY_TYPE.to_string(),
            fields: vec![TypedDataField {
                name: "msg".to_string(),
                kind: FieldType::String,
            }],
            message: vec![("msg".to_string(), ParamValue::Str(msg.to_string()))],
        }
    }

    /// Canonical EIP-712 type string, e.g. `DelAgent(string AgentAddress,uint256 Nonce)`.
    pub fn encode_type(&self) -> String {
        let members = self
            .fields
            .iter()
            .map(|f| format!("{} {}", f.kind, f.name))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({})", self.primary_type, members)
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Signer seam
// ============================================================================

/// A wallet able to produce EIP-712 signatures.
#[async_trait]
pub trait TypedDataSigner: Send + Sync {
    /// Address of the signing account, `None` if the wallet has no account.
    fn account_address(&self) -> Option<String>;

    /// Sign `payload` and return the `0x`-prefixed hex signature.
    async fn sign_typed_data(&self, payload: &TypedDataPayload) -> Result<String, SigningError>;
}

/// Address of `signer`'s account, or a configuration error.
pub fn require_account(signer: &dyn TypedDataSigner) -> Result<String, SdkError> {
    signer.account_address().ok_or_else(|| {
        SdkError::Configuration(
            "account is required; create the signer with an account".to_string(),
        )
    })
}

/// Sign `params` as a `primary_type` struct over the `Main` domain.
pub async fn sign_structured(
    signer: &dyn TypedDataSigner,
    params: &ParamSet,
    primary_type: &str,
) -> Result<String, SdkError> {
    require_account(signer)?;
    let payload = TypedDataPayload::structured(params, primary_type);
    tracing::debug!(encoded_type = %payload.encode_type(), "signing structured payload");
    Ok(signer.sign_typed_data(&payload).await?)
}

/// Sign an opaque message (a canonical query string) over the `Message` domain.
pub async fn sign_message(signer: &dyn TypedDataSigner, message: &str) -> Result<String, SdkError> {
    require_account(signer)?;
    let payload = TypedDataPayload::message(message);
    Ok(signer.sign_typed_data(&payload).await?)
}
