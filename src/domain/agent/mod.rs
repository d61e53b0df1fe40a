//! Agent domain: delegating scoped trading permissions to a secondary signer.
//!
//! Field order inside each parameter set is part of the wire contract: it is
//! both the EIP-712 member order and the query-string order.

pub mod client;

use crate::network::DEFAULT_AGENT_NAME;
use crate::shared::ParamSet;

/// EIP-712 primary types of the agent actions.
pub const APPROVE_AGENT_TYPE: &str = "ApproveAgent";
pub const UPDATE_AGENT_TYPE: &str = "UpdateAgent";
pub const DELETE_AGENT_TYPE: &str = "DelAgent";

// ============================================================================
// Approve
// ============================================================================

/// `POST /fapi/v3/approveAgent`.
///
/// Unset fields default to: name `"2dkkd0001"`, expiry one month from now,
/// spot and perp trading allowed, withdrawals denied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApproveAgent {
    pub agent_address: String,
    pub agent_name: Option<String>,
    /// Trimmed before sending; omitted when blank.
    pub ip_whitelist: Option<String>,
    /// Expiry in unix milliseconds.
    pub expired: Option<u64>,
    pub can_spot_trade: Option<bool>,
    pub can_perp_trade: Option<bool>,
    pub can_withdraw: Option<bool>,
    pub aster_chain: Option<String>,
    pub nonce: Option<u64>,
    pub signature_chain_id: Option<u64>,
}

impl ApproveAgent {
    pub fn new(agent_address: impl Into<String>) -> Self {
        Self {
            agent_address: agent_address.into(),
            ..Self::default()
        }
    }

    pub fn agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = Some(name.into());
        self
    }

    pub fn ip_whitelist(mut self, ips: impl Into<String>) -> Self {
        self.ip_whitelist = Some(ips.into());
        self
    }

    pub fn expired(mut self, unix_millis: u64) -> Self {
        self.expired = Some(unix_millis);
        self
    }

    pub fn can_spot_trade(mut self, allowed: bool) -> Self {
        self.can_spot_trade = Some(allowed);
        self
    }

    pub fn can_perp_trade(mut self, allowed: bool) -> Self {
        self.can_perp_trade = Some(allowed);
        self
    }

    pub fn can_withdraw(mut self, allowed: bool) -> Self {
        self.can_withdraw = Some(allowed);
        self
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

    pub(crate) fn to_params(
        &self,
        user: String,
        aster_chain: String,
        nonce: u64,
        default_expired: u64,
    ) -> ParamSet {
        let ip_whitelist = self
            .ip_whitelist
            .as_deref()
            .map(str::trim)
            .filter(|ips| !ips.is_empty())
            .map(str::to_string);

        ParamSet::new()
            .with(
                "agentName",
                self.agent_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_AGENT_NAME.to_string()),
            )
            .with("agentAddress", self.agent_address.clone())
            .with("expired", self.expired.unwrap_or(default_expired))
            .with("canSpotTrade", self.can_spot_trade.unwrap_or(true))
            .with("canPerpTrade", self.can_perp_trade.unwrap_or(true))
            .with("canWithdraw", self.can_withdraw.unwrap_or(false))
            .with("asterChain", aster_chain)
            .with("user", user)
            .with("nonce", nonce)
            .with_opt("ipWhitelist", ip_whitelist)
    }
}

// ============================================================================
// Update
// ============================================================================

/// `POST /fapi/v3/updateAgent`. All three permission flags are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAgent {
    pub agent_address: String,
    pub can_spot_trade: bool,
    pub can_perp_trade: bool,
    pub can_withdraw: bool,
    /// Sent verbatim when set.
    pub ip_whitelist: Option<String>,
    pub aster_chain: Option<String>,
    pub nonce: Option<u64>,
    pub signature_chain_id: Option<u64>,
}

impl UpdateAgent {
    pub fn new(
        agent_address: impl Into<String>,
        can_spot_trade: bool,
        can_perp_trade: bool,
        can_withdraw: bool,
    ) -> Self {
        Self {
            agent_address: agent_address.into(),
            can_spot_trade,
            can_perp_trade,
            can_withdraw,
            ..Self::default()
        }
    }

    pub fn ip_whitelist(mut self, ips: impl Into<String>) -> Self {
        self.ip_whitelist = Some(ips.into());
        self
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
            .with("agentAddress", self.agent_address.clone())
            .with("canSpotTrade", self.can_spot_trade)
            .with("canPerpTrade", self.can_perp_trade)
            .with("canWithdraw", self.can_withdraw)
            .with("asterChain", aster_chain)
            .with("user", user)
            .with("nonce", nonce)
            .with_opt("ipWhitelist", self.ip_whitelist.clone())
    }
}

// ============================================================================
// Delete
// ============================================================================

/// `DELETE /fapi/v3/agent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteAgent {
    pub agent_address: String,
    pub aster_chain: Option<String>,
    pub nonce: Option<u64>,
    pub signature_chain_id: Option<u64>,
}

impl DeleteAgent {
    pub fn new(agent_address: impl Into<String>) -> Self {
        Self {
            agent_address: agent_address.into(),
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
            .with("agentAddress", self.agent_address.clone())
            .with("asterChain", aster_chain)
            .with("user", user)
            .with("nonce", nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::build_query_string;

    const USER: &str = "0x2222222222222222222222222222222222222222";
    const AGENT: &str = "0x3333333333333333333333333333333333333333";

    #[test]
    fn test_approve_defaults() {
        let params = ApproveAgent::new(AGENT).to_params(USER.into(), "Mainnet".into(), 7, 1_000);
        assert_eq!(
            build_query_string(&params),
            format!(
                "agentName=2dkkd0001&agentAddress={AGENT}&expired=1000&canSpotTrade=true&canPerpTrade=true&canWithdraw=false&asterChain=Mainnet&user={USER}&nonce=7"
            )
        );
    }

    #[test]
    fn test_approve_overrides() {
        let params = ApproveAgent::new(AGENT)
            .agent_name("bot")
            .expired(5)
            .can_spot_trade(false)
            .can_withdraw(true)
            .to_params(USER.into(), "Testnet".into(), 1, 1_000);

        assert_eq!(params.get("agentName").unwrap().as_str(), Some("bot"));
        assert_eq!(params.get("expired").unwrap().as_u64(), Some(5));
        assert_eq!(params.get("canSpotTrade").unwrap().as_bool(), Some(false));
        assert_eq!(params.get("canPerpTrade").unwrap().as_bool(), Some(true));
        assert_eq!(params.get("canWithdraw").unwrap().as_bool(), Some(true));
        assert_eq!(params.get("asterChain").unwrap().as_str(), Some("Testnet"));
    }

    #[test]
    fn test_approve_ip_whitelist_trimmed_and_last() {
        let params = ApproveAgent::new(AGENT)
            .ip_whitelist("  1.2.3.4,5.6.7.8 ")
            .to_params(USER.into(), "Mainnet".into(), 1, 1_000);
        let last = params.iter().last().unwrap();
        assert_eq!(last.0, "ipWhitelist");
        assert_eq!(last.1.as_str(), Some("1.2.3.4,5.6.7.8"));

        let blank = ApproveAgent::new(AGENT)
            .ip_whitelist("   ")
            .to_params(USER.into(), "Mainnet".into(), 1, 1_000);
        assert!(!blank.contains("ipWhitelist"));
    }

    #[test]
    fn test_update_layout() {
        let params = UpdateAgent::new(AGENT, false, true, false)
            .ip_whitelist(" 10.0.0.1 ")
            .to_params(USER.into(), "Mainnet".into(), 123);
        assert_eq!(
            build_query_string(&params),
            format!(
                "agentAddress={AGENT}&canSpotTrade=false&canPerpTrade=true&canWithdraw=false&asterChain=Mainnet&user={USER}&nonce=123&ipWhitelist= 10.0.0.1 "
            )
        );
    }

    #[test]
    fn test_delete_layout() {
        let params = DeleteAgent::new(AGENT).to_params(USER.into(), "Mainnet".into(), 5);
        assert_eq!(
            build_query_string(&params),
            format!("agentAddress={AGENT}&asterChain=Mainnet&user={USER}&nonce=5")
        );
    }
}
