//! High-level client: `AsterClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This module
//! keeps the builder, the shared request defaults, and the two request shapes
//! every endpoint reduces to: a structured-signed action and a message-signed
//! listing query.

use std::sync::Arc;

use crate::domain::agent::client::Agents;
use crate::domain::builder::client::Builders;
use crate::domain::ApiResponse;
use crate::error::{HttpError, RequestError, SdkError};
use crate::http::{HttpRequest, HttpTransport, Method};
use crate::network;
use crate::shared::{build_query_string, NonceGenerator, ParamSet};
use crate::signing::{require_account, sign_message, sign_structured, TypedDataSigner};

// Re-export sub-client types for convenience.
pub use crate::domain::agent::client::Agents as AgentsClient;
pub use crate::domain::builder::client::Builders as BuildersClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.agents()`, `client.builders()`.
#[derive(Clone)]
pub struct AsterClient {
    pub(crate) http: Arc<dyn HttpTransport>,
    pub(crate) nonces: Arc<NonceGenerator>,
    base_url: String,
    user_agent: String,
    aster_chain: String,
    signature_chain_id: u64,
}

impl std::fmt::Debug for AsterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsterClient")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("aster_chain", &self.aster_chain)
            .field("signature_chain_id", &self.signature_chain_id)
            .finish_non_exhaustive()
    }
}

impl AsterClient {
    pub fn builder() -> AsterClientBuilder {
        AsterClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn agents(&self) -> Agents<'_> {
        Agents { client: self }
    }

    pub fn builders(&self) -> Builders<'_> {
        Builders { client: self }
    }

    // ── Defaults ─────────────────────────────────────────────────────────

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn aster_chain(&self) -> &str {
        &self.aster_chain
    }

    pub fn signature_chain_id(&self) -> u64 {
        self.signature_chain_id
    }

    /// Caller-supplied nonce, or the next one from this client's generator.
    pub(crate) fn nonce_or_next(&self, nonce: Option<u64>) -> u64 {
        nonce.unwrap_or_else(|| self.nonces.next())
    }

    pub(crate) fn chain_or_default(&self, aster_chain: Option<String>) -> String {
        aster_chain.unwrap_or_else(|| self.aster_chain.clone())
    }

    // ── Request shapes ───────────────────────────────────────────────────

    /// Sign `params` as `primary_type`, append `signature` and
    /// `signatureChainId`, and send everything in the query string.
    pub(crate) async fn send_structured(
        &self,
        method: Method,
        path: &str,
        signer: &dyn TypedDataSigner,
        mut params: ParamSet,
        primary_type: &str,
        signature_chain_id: Option<u64>,
    ) -> Result<ApiResponse, SdkError> {
        let signature = sign_structured(signer, &params, primary_type).await?;
        params
            .push("signature", signature)
            .push(
                "signatureChainId",
                signature_chain_id.unwrap_or(self.signature_chain_id),
            );

        let url = format!("{}{}?{}", self.base_url, path, build_query_string(&params));
        self.execute(method, url, params).await
    }

    /// Send a listing query signed over its canonical query string, or with a
    /// precomputed `signature`.
    ///
    /// `params` must carry the `signer` field; a signing wallet must own that
    /// address.
    pub(crate) async fn send_listing(
        &self,
        path: &str,
        params: ParamSet,
        signature: Option<String>,
        signer: Option<&dyn TypedDataSigner>,
    ) -> Result<ApiResponse, SdkError> {
        let query = build_query_string(&params);

        // An empty signature counts as absent.
        let signature = match signature.filter(|s| !s.is_empty()) {
            Some(signature) => signature,
            None => {
                let wallet = signer.ok_or_else(|| {
                    SdkError::Configuration(format!(
                        "{} requires either a signature or a signer to sign the query",
                        path
                    ))
                })?;
                let account = require_account(wallet)?;
                let expected = params
                    .get("signer")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                if !account.eq_ignore_ascii_case(expected) {
                    return Err(SdkError::Validation(
                        "signer must match wallet account".to_string(),
                    ));
                }
                sign_message(wallet, &query).await?
            }
        };

        let url = format!("{}{}?{}&signature={}", self.base_url, path, query, signature);
        let mut signed = params;
        signed.push("signature", signature);
        self.execute(Method::Get, url, signed).await
    }

    /// Issue one request and decode the JSON body.
    async fn execute(
        &self,
        method: Method,
        url: String,
        params: ParamSet,
    ) -> Result<ApiResponse, SdkError> {
        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: vec![
                ("Content-Type".to_string(), network::CONTENT_TYPE.to_string()),
                ("User-Agent".to_string(), self.user_agent.clone()),
            ],
            body: match method {
                Method::Post => Some(String::new()),
                Method::Get | Method::Delete => None,
            },
        };

        tracing::debug!(%method, %url, "sending request");
        let response = self.http.send(request).await?;
        let status = response.status;
        tracing::debug!(%method, %url, status, "received response");

        let data: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|e| HttpError::InvalidJson {
                status,
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !response.is_success() {
            tracing::warn!(%method, %url, status, "request rejected");
            return Err(RequestError { status, url, data }.into());
        }

        Ok(ApiResponse {
            status,
            data,
            url,
            params,
        })
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AsterClientBuilder {
    base_url: String,
    user_agent: String,
    aster_chain: String,
    signature_chain_id: u64,
    transport: Option<Arc<dyn HttpTransport>>,
    nonces: Option<Arc<NonceGenerator>>,
}

impl Default for AsterClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_HOST.to_string(),
            user_agent: network::DEFAULT_USER_AGENT.to_string(),
            aster_chain: network::DEFAULT_ASTER_CHAIN.to_string(),
            signature_chain_id: network::DEFAULT_SIGNATURE_CHAIN_ID,
            transport: None,
            nonces: None,
        }
    }
}

impl AsterClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Default `asterChain` tag for requests that do not set one.
    pub fn aster_chain(mut self, chain: &str) -> Self {
        self.aster_chain = chain.to_string();
        self
    }

    /// Default `signatureChainId` for structured requests.
    pub fn signature_chain_id(mut self, chain_id: u64) -> Self {
        self.signature_chain_id = chain_id;
        self
    }

    /// Use a custom transport instead of the `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Share a nonce generator between clients.
    pub fn nonce_generator(mut self, nonces: Arc<NonceGenerator>) -> Self {
        self.nonces = Some(nonces);
        self
    }

    pub fn build(self) -> Result<AsterClient, SdkError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };

        Ok(AsterClient {
            http,
            nonces: self.nonces.unwrap_or_default(),
            base_url: self.base_url,
            user_agent: self.user_agent,
            aster_chain: self.aster_chain,
            signature_chain_id: self.signature_chain_id,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn HttpTransport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new()))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn HttpTransport>, SdkError> {
    Err(SdkError::Configuration(
        "no transport configured; enable the `http` feature or call `transport(..)`".to_string(),
    ))
}
