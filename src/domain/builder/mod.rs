//! Builder domain: registering fee-sharing integrators.

pub mod client;

use crate::shared::ParamSet;

pub const APPROVE_BUILDER_TYPE: &str = "ApproveBuilder";
pub const UPDATE_BUILDER_TYPE: &str = "UpdateBuilder";

/// `POST /fapi/v3/approveBuilder`.
///
/// `max_fee_rate` is a decimal string (e.g. `"0.00001"`) and is signed as a
/// `string`, not a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApproveBuilder {
    pub builder: String,
    pub max_fee_rate: String,
    pub builder_name: String,
    pub aster_chain: Option<String>,
    pub nonce: Option<u64>,
    pub signature_chain_id: Option<u64>,
}

impl ApproveBuilder {
    pub fn new(
        builder: impl Into<String>,
        max_fee_rate: impl Into<String>,
        builder_name: impl Into<String>,
    ) -> Self {
        Self {
            builder: builder.into(),
            max_fee_rate: max_fee_rate.into(),
            builder_name: builder_name.into(),
            ..Self::default()
        }
    }

    pub fn aster_chain(mut self, chain: impl Into<String>) -> Self {
        self.aster_chain = Some(chain.into());
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn signature_chain_id(mut self, chain_id: u64) -> Self {
        self.signature_chain_id = Some(chain_id);
        self
    }

    pub(crate) fn to_params(&self, user: String, aster_chain: String, nonce: u64) -> ParamSet {
        ParamSet::new()
            .with("builder", self.builder.clone())
            .with("maxFeeRate", self.max_fee_rate.clone())
            .with("builderName", self.builder_name.clone())
            .with("asterChain", aster_chain)
            .with("user", user)
            .with("nonce", nonce)
    }
}

/// `POST /fapi/v3/updateBuilder`: change the maximum fee rate of an approved
/// builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBuilder {
    pub builder: String,
    pub max_fee_rate: String,
    pub aster_chain: Option<String>,
    pub nonce: Option<u64>,
    pub signature_chain_id: Option<u64>,
}

impl UpdateBuilder {
    pub fn new(builder: impl Into<String>, max_fee_rate: impl Into<String>) -> Self {
        Self {
            builder: builder.into(),
            max_fee_rate: max_fee_rate.into(),
            ..Self::default()
        }
    }

    pub fn aster_chain(mut self, chain: impl Into<String>) -> Self {
        self.aster_chain = Some(chain.into());
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn signature_chain_id(mut self, chain_id: u64) -> Self {
        self.signature_chain_id = Some(chain_id);
        self
    }

    pub(crate) fn to_params(&self, user: String, aster_chain: String, nonce: u64) -> ParamSet {
        ParamSet::new()
            .with("builder", self.builder.clone())
            .with("maxFeeRate", self.max_fee_rate.clone())
            .with("asterChain", aster_chain)
            .with("user", user)
            .with("nonce", nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::build_query_string;
    use crate::signing::{FieldType, TypedDataPayload};

    const USER: &str = "0x1111111111111111111111111111111111111111";
    const BUILDER: &str = "0xc2af13e1B1de3A015252A115309A0F9DEEDCFa0A";

    #[test]
    fn test_approve_layout() {
        let params = ApproveBuilder::new(BUILDER, "0.00001", "ivan3")
            .to_params(USER.into(), "Mainnet".into(), 123456);
        assert_eq!(
            build_query_string(&params),
            format!(
                "builder={BUILDER}&maxFeeRate=0.00001&builderName=ivan3&asterChain=Mainnet&user={USER}&nonce=123456"
            )
        );
    }

    #[test]
    fn test_fee_rate_is_signed_as_string() {
        let params = ApproveBuilder::new(BUILDER, "0.00001", "ivan3")
            .to_params(USER.into(), "Mainnet".into(), 1);
        let payload = TypedDataPayload::structured(&params, APPROVE_BUILDER_TYPE);
        let fee = payload.fields.iter().find(|f| f.name == "MaxFeeRate").unwrap();
        assert_eq!(fee.kind, FieldType::String);
        assert_eq!(
            payload.encode_type(),
            "ApproveBuilder(string Builder,string MaxFeeRate,string BuilderName,string AsterChain,string User,uint256 Nonce)"
        );
    }

    #[test]
    fn test_update_layout() {
        let params = UpdateBuilder::new(BUILDER, "0.0002")
            .to_params(USER.into(), "Testnet".into(), 2);
        assert_eq!(
            build_query_string(&params),
            format!("builder={BUILDER}&maxFeeRate=0.0002&asterChain=Testnet&user={USER}&nonce=2")
        );
    }
}
