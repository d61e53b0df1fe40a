//! Network constants and request defaults for the Aster futures API.

/// Default REST API host.
pub const DEFAULT_HOST: &str = "https://fapi.asterdex.com";

/// Chain id reported as `signatureChainId` on structured requests.
pub const DEFAULT_SIGNATURE_CHAIN_ID: u64 = 56;

/// Default `asterChain` tag.
pub const DEFAULT_ASTER_CHAIN: &str = "Mainnet";

/// Display name used when approving an agent without an explicit name.
pub const DEFAULT_AGENT_NAME: &str = "2dkkd0001";

/// Client identifier sent as `User-Agent`.
pub const DEFAULT_USER_AGENT: &str = "AsterKit/1.0";

/// All requests carry their parameters in the query string.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// ── Endpoint paths ───────────────────────────────────────────────────────────

pub const APPROVE_AGENT_PATH: &str = "/fapi/v3/approveAgent";
pub const UPDATE_AGENT_PATH: &str = "/fapi/v3/updateAgent";
pub const AGENT_PATH: &str = "/fapi/v3/agent";
pub const APPROVE_BUILDER_PATH: &str = "/fapi/v3/approveBuilder";
pub const UPDATE_BUILDER_PATH: &str = "/fapi/v3/updateBuilder";
pub const BUILDER_PATH: &str = "/fapi/v3/builder";
