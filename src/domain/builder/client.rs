//! Builders sub-client: approve, list, update.

use crate::client::AsterClient;
use crate::domain::builder::{
    ApproveBuilder, UpdateBuilder, APPROVE_BUILDER_TYPE, UPDATE_BUILDER_TYPE,
};
use crate::domain::{ApiResponse, ListQuery};
use crate::error::SdkError;
use crate::http::Method;
use crate::network::{APPROVE_BUILDER_PATH, BUILDER_PATH, UPDATE_BUILDER_PATH};
use crate::signing::{require_account, TypedDataSigner};

/// Sub-client for builder registration.
pub struct Builders<'a> {
    pub(crate) client: &'a AsterClient,
}

impl<'a> Builders<'a> {
    pub async fn approve(
        &self,
        wallet: &dyn TypedDataSigner,
        request: ApproveBuilder,
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
                APPROVE_BUILDER_PATH,
                wallet,
                params,
                APPROVE_BUILDER_TYPE,
                request.signature_chain_id,
            )
            .await
    }

    pub async fn list(
        &self,
        query: ListQuery,
        wallet: &dyn TypedDataSigner,
    ) -> Result<ApiResponse, SdkError> {
        self.fetch(query, Some(wallet)).await
    }

    pub async fn list_presigned(&self, query: ListQuery) -> Result<ApiResponse, SdkError> {
        self.fetch(query, None).await
    }

    pub async fn update(
        &self,
        wallet: &dyn TypedDataSigner,
        request: UpdateBuilder,
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
                UPDATE_BUILDER_PATH,
                wallet,
                params,
                UPDATE_BUILDER_TYPE,
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
            .send_listing(BUILDER_PATH, params, query.signature, wallet)
            .await
    }
}
