//! HTTP client helpers (REST).

use crate::core::actions::{ActionMethod, BulkAction};
use crate::core::controller::TaskApi;
use crate::core::error::ApiError;
use crate::core::logic::{
    PageWindow, collection_page_path, collections_path, join_url, membership_item_path,
    membership_path, task_status_path,
};
use crate::features::companies::actions::MembershipChange;
use gloo_net::http::{Request, Response};
use jam_api_models::{
    CollectionMetadata, CompanyPage, ErrorDetail, MembershipRequest, TaskHandle, TaskStatus,
};
use serde::de::DeserializeOwned;
use std::future::Future;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(transport)?;
        decode(checked(response).await?).await
    }

    pub(crate) async fn fetch_collections(&self) -> Result<Vec<CollectionMetadata>, ApiError> {
        self.get_json(collections_path()).await
    }

    pub(crate) async fn fetch_collection_page(
        &self,
        collection_id: &str,
        window: PageWindow,
    ) -> Result<CompanyPage, ApiError> {
        self.get_json(&collection_page_path(collection_id, window))
            .await
    }

    pub(crate) async fn add_to_collection(
        &self,
        collection_id: &str,
        company_id: i64,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&membership_path(collection_id)))
            .json(&MembershipRequest { company_id })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        checked(response).await.map(drop)
    }

    pub(crate) async fn remove_from_collection(
        &self,
        collection_id: &str,
        company_id: i64,
    ) -> Result<(), ApiError> {
        let path = membership_item_path(collection_id, company_id);
        let response = Request::delete(&self.url(&path))
            .send()
            .await
            .map_err(transport)?;
        checked(response).await.map(drop)
    }

    pub(crate) async fn apply_membership(&self, change: &MembershipChange) -> Result<(), ApiError> {
        match change {
            MembershipChange::Like {
                collection_id,
                company_id,
            } => self.add_to_collection(collection_id, *company_id).await,
            MembershipChange::Unlike {
                collection_id,
                company_id,
            } => self.remove_from_collection(collection_id, *company_id).await,
        }
    }

    pub(crate) async fn post_action(&self, action: &BulkAction) -> Result<TaskHandle, ApiError> {
        let url = self.url(action.path());
        let request = match action.method() {
            ActionMethod::Post => Request::post(&url),
            ActionMethod::Delete => Request::delete(&url),
        };
        let response = request
            .json(&action.body())
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(checked(response).await?).await
    }

    pub(crate) async fn fetch_task_status(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        self.get_json(&task_status_path(task_id)).await
    }
}

impl TaskApi for ApiClient {
    fn start_action(
        &self,
        action: &BulkAction,
    ) -> impl Future<Output = Result<TaskHandle, ApiError>> {
        self.post_action(action)
    }

    fn task_status(&self, task_id: &str) -> impl Future<Output = Result<TaskStatus, ApiError>> {
        self.fetch_task_status(task_id)
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Pass 2xx responses through; turn anything else into [`ApiError::Status`].
async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = response
        .json::<ErrorDetail>()
        .await
        .ok()
        .and_then(|body| body.detail);
    Err(ApiError::Status { status, detail })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
