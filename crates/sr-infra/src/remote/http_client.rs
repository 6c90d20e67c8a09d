//! HTTP adapter for the BeReal token and moment endpoints.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use sr_core::config::ApiConfig;
use sr_core::moment::Moment;
use sr_core::ports::{RemoteApiPort, RemoteError, TokenPair};
use sr_core::session::{Credentials, Region};

const DEVICE_ID_HEADER: &str = "bereal-device-id";

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
    refresh_token: String,
}

pub struct HttpRemoteApi {
    client: Client,
    auth_base_url: String,
    api_base_url: String,
    client_id: String,
    client_secret: String,
}

impl HttpRemoteApi {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("build http client failed")?;

        Ok(Self {
            client,
            auth_base_url: config.auth_base_url.trim_end_matches('/').to_string(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    fn token_url(&self) -> String {
        format!("{}/token", self.auth_base_url)
    }

    fn last_moment_url(&self, region: &Region) -> String {
        format!("{}/bereal/moments/last/{}", self.api_base_url, region)
    }
}

#[async_trait]
impl RemoteApiPort for HttpRemoteApi {
    async fn refresh_tokens(&self, credentials: &Credentials) -> Result<TokenPair, RemoteError> {
        let body = RefreshRequest {
            grant_type: "refresh_token",
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            refresh_token: &credentials.refresh_token,
        };

        let response = self
            .client
            .post(self.token_url())
            .query(&[("grant_type", "refresh_token")])
            .header(DEVICE_ID_HEADER, &credentials.device_id)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(%status, "token endpoint answered");
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                Err(RemoteError::InvalidGrant(error_text(response).await))
            }
            status if !status.is_success() => Err(unavailable(status, response).await),
            _ => {
                let tokens: RefreshResponse = decode(response).await?;
                Ok(TokenPair {
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                })
            }
        }
    }

    async fn fetch_last_moment(
        &self,
        credentials: &Credentials,
        region: &Region,
    ) -> Result<Moment, RemoteError> {
        let response = self
            .client
            .get(self.last_moment_url(region))
            .bearer_auth(&credentials.access_token)
            .header(DEVICE_ID_HEADER, &credentials.device_id)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(%status, %region, "moment endpoint answered");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(RemoteError::Unauthorized),
            status if !status.is_success() => Err(unavailable(status, response).await),
            _ => decode(response).await,
        }
    }
}

fn transport_error(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Unavailable(format!("request timed out: {err}"))
    } else {
        RemoteError::Unavailable(err.to_string())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|err| RemoteError::Decode(err.to_string()))
}

async fn error_text(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => status.to_string(),
    }
}

async fn unavailable(status: StatusCode, response: Response) -> RemoteError {
    RemoteError::Unavailable(format!("{status}: {}", error_text(response).await))
}
