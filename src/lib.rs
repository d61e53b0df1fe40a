//! # AsterKit
//!
//! Rust SDK for the Aster futures API's agent and builder delegation
//! endpoints. A main wallet signs EIP-712 typed data to approve, update, or
//! revoke agents and builders; every call is one signed REST round trip.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Parameter sets, canonical query strings, nonces
//! 2. **Signing**: Typed-data schema inference and the `TypedDataSigner` seam
//! 3. **HTTP**: `HttpTransport` with a `reqwest` implementation
//! 4. **High-Level Client**: `AsterClient` with `agents()` / `builders()` sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use asterkit::prelude::*;
//! use ethers::signers::LocalWallet;
//!
//! let wallet: LocalWallet = std::env::var("PRIVATE_KEY")?.parse()?;
//! let client = AsterClient::builder().build()?;
//!
//! let approved = client
//!     .agents()
//!     .approve(&wallet, ApproveAgent::new("0x3333333333333333333333333333333333333333"))
//!     .await?;
//! println!("{} -> {}", approved.url, approved.data);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Parameter sets, query strings, nonces.
pub mod shared;

/// Request types per domain.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Host, endpoint, and default constants.
pub mod network;

// ── Layer 2: Signing ─────────────────────────────────────────────────────────

/// EIP-712 payloads, signing domains, and signer implementations.
pub mod signing;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Transport trait and the `reqwest` transport.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `AsterClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{build_query_string, NonceGenerator, ParamSet, ParamValue};

    // Domain types
    pub use crate::domain::agent::{ApproveAgent, DeleteAgent, UpdateAgent};
    pub use crate::domain::builder::{ApproveBuilder, UpdateBuilder};
    pub use crate::domain::{ApiResponse, ListQuery};

    // Errors
    pub use crate::error::{HttpError, RequestError, SdkError, SigningError};

    // Network
    pub use crate::network::{DEFAULT_ASTER_CHAIN, DEFAULT_HOST, DEFAULT_SIGNATURE_CHAIN_ID};

    // Signing
    pub use crate::signing::{
        FieldType, SigningDomain, TypedDataPayload, TypedDataSigner, MAIN_DOMAIN, MESSAGE_DOMAIN,
    };

    // HTTP
    pub use crate::http::{HttpRequest, HttpResponse, HttpTransport, Method};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Client + sub-clients
    pub use crate::client::{AgentsClient, AsterClient, AsterClientBuilder, BuildersClient};
}
