//! Agents sub-client: approve, list, update, delete.

use chrono::Utc;

use crate::client::AsterClient;
use crate::domain::agent::{
    ApproveAgent, DeleteAgent, UpdateAgent, APPROVE_AGENT_TYPE, DELETE_AGENT_TYPE,
    UPDATE_AGENT_TYPE,
};
use crate::domain::{one_month_after, ApiResponse, ListQuery};
use crate::error::SdkError;
use crate::http::Method;
use crate::network::{AGENT_PATH, APPROVE_AGENT_PATH, UPDATE_AGENT_PATH};
use crate::signing::{require_account, TypedDataSigner};

/// Sub-client for agent delegation.
pub struct Agents<'a> {
    pub(crate) client: &'a AsterClient,
}

impl<'a> Agents<'a> {
    /// Authorize `request.agent_address` to trade for `wallet`'s account.
    pub async fn approve(
        &self,
        wallet: &dyn TypedDataSigner,
        request: ApproveAgent,
    ) -> Result<ApiResponse, SdkError> {
        let user = require_account(wallet)?;
        let params = request.to_params(
            user,
            self.client.chain_or_default(request.aster_chain.clone()),
            self.client.nonce_or_next(request.nonce),
            one_month_after(Utc::now()),
        );

        self.client
            .send_structured(
                Method::Post,
                APPROVE_AGENT_PATH,
                wallet,
                params,
                APPROVE_AGENT_TYPE,
                request.signature_chain_id,
            )
            .await
    }

    /// List the agents of `query.user`, signing the query with `wallet`
    /// unless `query.signature` is already set.
    pub async fn list(
        &self,
        query: ListQuery,
        wallet: &dyn TypedDataSigner,
    ) -> Result<ApiResponse, SdkError> {
        self.fetch(query, Some(wallet)).await
    }

    /// List the agents of `query.user` with a precomputed `query.signature`.
    pub async fn list_presigned(&self, query: ListQuery) -> Result<ApiResponse, SdkError> {
        self.fetch(query, None).await
    }

    /// Change the permissions of an approved agent.
    pub async fn update(
        &self,
        wallet: &dyn TypedDataSigner,
        request: UpdateAgent,
    ) -> Result<ApiResponse, SdkError> {
        let user = require_account(wallet)?;
        let params = request.to_params(
            user,
            self.client.chain_or_default(request.aster_chain.clone()),
            self.client.nonce_or_next(request.nonce),
        );

        self.client
            .send_structured(
                Method::Post,
                UPDATE_AGENT_PATH,
                wallet,
                params,
                UPDATE_AGENT_TYPE,
                request.signature_chain_id,
            )
            .await
    }

    /// Revoke an agent.
    pub async fn delete(
        &self,
        wallet: &dyn TypedDataSigner,
        request: DeleteAgent,
    ) -> Result<ApiResponse, SdkError> {
        let user = require_account(wallet)?;
        let params = request.to_params(
            user,
            self.client.chain_or_default(request.aster_chain.clone()),
            self.client.nonce_or_next(request.nonce),
        );

        self.client
            .send_structured(
                Method::Delete,
                AGENT_PATH,
                wallet,
                params,
                DELETE_AGENT_TYPE,
                request.signature_chain_id,
            )
            .await
    }

    async fn fetch(
        &self,
        query: ListQuery,
        wallet: Option<&dyn TypedDataSigner>,
    ) -> Result<ApiResponse, SdkError> {
        let params = query.to_params(
            self.client.chain_or_default(query.aster_chain.clone()),
            self.client.nonce_or_next(query.nonce),
        );
        self.client
            .send_listing(AGENT_PATH, params, query.signature, wallet)
            .await
    }
}
