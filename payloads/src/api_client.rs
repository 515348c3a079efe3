use crate::{
    CampaignId, DiscountCodeId, MalformedPage, PageResult, SessionIdentity,
    requests, responses,
};
use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path)).query(query);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Get the identity of the signed-in user.
    pub async fn current_session(
        &self,
    ) -> Result<SessionIdentity, ClientError> {
        let response = self.empty_get("session").await?;
        ok_body(response).await
    }

    /// List vendors (admin only).
    pub async fn list_vendors(
        &self,
        query: &requests::ListQuery,
    ) -> Result<PageResult<responses::Vendor>, ClientError> {
        let response = self.get_with_query("vendors", query).await?;
        ok_page(response).await
    }

    pub async fn list_campaigns(
        &self,
        query: &requests::ListQuery,
    ) -> Result<PageResult<responses::Campaign>, ClientError> {
        let response = self.get_with_query("campaigns", query).await?;
        ok_page(response).await
    }

    pub async fn list_promotions(
        &self,
        query: &requests::ListQuery,
    ) -> Result<PageResult<responses::Promotion>, ClientError> {
        let response = self.get_with_query("promotions", query).await?;
        ok_page(response).await
    }

    pub async fn list_products(
        &self,
        query: &requests::ListQuery,
    ) -> Result<PageResult<responses::Product>, ClientError> {
        let response = self.get_with_query("products", query).await?;
        ok_page(response).await
    }

    pub async fn list_discount_codes(
        &self,
        query: &requests::ListQuery,
    ) -> Result<PageResult<responses::DiscountCode>, ClientError> {
        let response = self.get_with_query("discount_codes", query).await?;
        ok_page(response).await
    }

    pub async fn delete_campaign(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_campaign", campaign_id).await?;
        ok_empty(response).await
    }

    pub async fn delete_discount_code(
        &self,
        discount_code_id: &DiscountCodeId,
    ) -> Result<(), ClientError> {
        let response =
            self.post("delete_discount_code", discount_code_id).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The server answered with a success status but the body isn't JSON.
    #[error("server returned a non-JSON response")]
    NonJson(#[source] serde_json::Error),
    /// The body is JSON but doesn't have the expected shape.
    #[error("invalid response format: {0}")]
    Malformed(#[from] MalformedPage),
}

impl ClientError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
            Self::NonJson(_) | Self::Malformed(_) => None,
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

/// Validate a list response against the page envelope.
///
/// The body is read as text first so that a non-JSON body (an HTML error
/// page from a proxy, say) is told apart from a JSON body of the wrong
/// shape.
pub async fn ok_page<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<PageResult<T>, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::APIError(status, body));
    }
    let value: serde_json::Value =
        serde_json::from_str(&body).map_err(ClientError::NonJson)?;
    Ok(PageResult::from_json(value)?)
}
