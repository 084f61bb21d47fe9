use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::rc::Rc;

use crate::{
    api::types::{ApiError, RefreshRequest, RefreshResponse},
    config,
    state::session::TokenStore,
};

/// REST client shared by every page.
///
/// Cloning is cheap; clones share the HTTP connection pool and the token
/// store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn default_token_store() -> Rc<dyn TokenStore> {
    Rc::new(crate::state::session::BrowserTokenStore)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_token_store() -> Rc<dyn TokenStore> {
    Rc::new(crate::state::session::StaticTokenStore::anonymous())
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: default_token_store(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: config::normalize_base_url(&base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_token_store(mut self, tokens: Rc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Sends a request with the current access token.
    ///
    /// A `401` triggers one refresh and one retry; if the refresh fails the
    /// original response is returned. `build` is called once per attempt.
    pub(crate) async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let response = self.send_once(build()?, self.tokens.access_token()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        match self.refresh_access_token().await {
            Some(access) => self.send_once(build()?, Some(access)).await,
            None => Ok(response),
        }
    }

    async fn send_once(
        &self,
        request: RequestBuilder,
        token: Option<String>,
    ) -> Result<Response, ApiError> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        request.send().await.map_err(|err| {
            log::warn!("request failed: {}", err);
            ApiError::request_failed(format!("Request failed: {}", err))
        })
    }

    async fn refresh_access_token(&self) -> Option<String> {
        let refresh = self.tokens.refresh_token()?;
        let base_url = self.resolved_base_url().await;
        log::debug!("access token rejected, refreshing");
        let response = self
            .client
            .post(format!("{}/auth/refresh/", base_url))
            .json(&RefreshRequest { refresh })
            .send()
            .await
            .ok()?;
        if !response.status().is_success() {
            log::warn!("token refresh answered {}", response.status());
            // The refresh token itself was rejected; the session is over.
            if matches!(
                response.status(),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
            ) {
                self.tokens.clear();
            }
            return None;
        }
        let access = response.json::<RefreshResponse>().await.ok()?.access?;
        self.tokens.store_access_token(&access);
        Some(access)
    }

    /// Decodes a 2xx body as `T`, or turns any other status into an
    /// [`ApiError`]. An empty 2xx body decodes as JSON `null`.
    pub(crate) async fn map_json_response<T>(&self, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {}", err)))?;
        if status.is_success() {
            let body = if body.trim().is_empty() { "null" } else { &body };
            serde_json::from_str(body)
                .map_err(|err| ApiError::unknown(format!("Failed to parse response: {}", err)))
        } else {
            let error = ApiError::from_response(status.as_u16(), &body);
            log::debug!("{} answered {}: {}", status, error.code, error.error);
            Err(error)
        }
    }
}
