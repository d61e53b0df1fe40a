//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Request types and their parameter-set layout
//! - `client.rs`: Sub-client with one method per endpoint

pub mod agent;
pub mod builder;

use chrono::{DateTime, Duration, Months, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SdkError;
use crate::shared::ParamSet;

/// Result of a successful request.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    /// Response body, passed through uninterpreted.
    pub data: serde_json::Value,
    /// Full request URL, query string included.
    pub url: String,
    /// The parameters as sent, signature included.
    pub params: ParamSet,
}

impl ApiResponse {
    /// Deserialize `data` into a caller-chosen type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    /// The `signature` parameter that was sent.
    pub fn signature(&self) -> Option<&str> {
        self.params.get("signature").and_then(|v| v.as_str())
    }
}

/// Query for the listing endpoints (`GET /fapi/v3/agent`, `GET /fapi/v3/builder`).
///
/// Signed over its canonical query string unless `signature` is supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Main account whose delegations are listed.
    pub user: String,
    /// Address that signs the query.
    pub signer: String,
    pub aster_chain: Option<String>,
    pub nonce: Option<u64>,
    /// Precomputed signature; skips signing.
    pub signature: Option<String>,
}

impl ListQuery {
    pub fn new(user: impl Into<String>, signer: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            signer: signer.into(),
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

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Unsigned parameters: `asterChain`, `user`, `signer`, `nonce`.
    pub(crate) fn to_params(&self, aster_chain: String, nonce: u64) -> ParamSet {
        ParamSet::new()
            .with("asterChain", aster_chain)
            .with("user", self.user.clone())
            .with("signer", self.signer.clone())
            .with("nonce", nonce)
    }
}

/// Unix milliseconds one calendar month after `now`.
///
/// Clamps to the last day of a shorter month: Jan 31 becomes Feb 28/29.
pub(crate) fn one_month_after(now: DateTime<Utc>) -> u64 {
    let later = now
        .checked_add_months(Months::new(1))
        .unwrap_or_else(|| now + Duration::days(30));
    later.timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_list_query_param_order() {
        let params = ListQuery::new("0x1", "0x2").to_params("Mainnet".to_string(), 9);
        let names: Vec<&str> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["asterChain", "user", "signer", "nonce"]);
    }

    #[test]
    fn test_one_month_after() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        assert_eq!(one_month_after(now), expected.timestamp_millis() as u64);
    }

    #[test]
    fn test_data_as() {
        #[derive(serde::Deserialize)]
        struct Ack {
            ok: bool,
        }

        let response = ApiResponse {
            status: 200,
            data: serde_json::json!({ "ok": true }),
            url: String::new(),
            params: ParamSet::new().with("signature", "0xabc"),
        };
        assert!(response.data_as::<Ack>().unwrap().ok);
        assert_eq!(response.signature(), Some("0xabc"));
    }
}
