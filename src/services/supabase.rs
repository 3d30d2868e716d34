//! Supabase REST client implementing [`Provider`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use serde::Serialize;
use serde_json::Value;

use crate::common::ProviderError;
use crate::models::{ProviderSession, ProviderUser, SignUpMetadata};
use crate::services::Provider;

/// Keys Supabase uses for error text, most specific first.
const ERROR_KEYS: [&str; 4] = ["msg", "message", "error_description", "error"];

#[derive(Clone)]
pub struct SupabaseProvider {
    base_url: String,
    anon_key: String,
    client: Client,
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a SignUpMetadata,
}

#[derive(Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
    create_user: bool,
}

impl SupabaseProvider {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("culturahub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn object_path(bucket: &str, key: &str) -> String {
        format!("{}/{}", urlencoding::encode(bucket), urlencoding::encode(key))
    }

    /// Attach the project key; `bearer` defaults to the anon key.
    fn authorize(
        &self,
        request: RequestBuilder,
        bearer: Option<&str>,
    ) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer.unwrap_or(&self.anon_key))
    }

    async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<Response, ProviderError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body, status);
        log::warn!("Provider request failed with {}: {}", status, message);
        Err(ProviderError::api(status.as_u16(), message))
    }
}

/// Error text from a Supabase error body, or the status reason.
fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            ERROR_KEYS.iter().find_map(|key| {
                json.get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

#[async_trait]
impl Provider for SupabaseProvider {
    async fn get_user(
        &self,
        access_token: &str,
    ) -> Result<ProviderUser, ProviderError> {
        let request = self.authorize(
            self.client.get(self.url("/auth/v1/user")),
            Some(access_token),
        );
        let response = self.send(request).await?;

        response
            .json::<ProviderUser>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProviderError> {
        let url = self.url("/auth/v1/token?grant_type=password");
        let request = self
            .authorize(self.client.post(url), None)
            .json(&PasswordCredentials { email, password });
        let response = self.send(request).await?;

        response
            .json::<ProviderSession>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<(), ProviderError> {
        let request = self
            .authorize(self.client.post(self.url("/auth/v1/signup")), None)
            .json(&SignUpRequest {
                email,
                password,
                data: metadata,
            });
        self.send(request).await?;
        Ok(())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError> {
        let request = self.authorize(
            self.client.post(self.url("/auth/v1/logout")),
            Some(access_token),
        );
        self.send(request).await?;
        Ok(())
    }

    async fn send_magic_link(&self, email: &str) -> Result<(), ProviderError> {
        let request = self
            .authorize(self.client.post(self.url("/auth/v1/otp")), None)
            .json(&OtpRequest {
                email,
                create_user: true,
            });
        self.send(request).await?;
        Ok(())
    }

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ProviderError> {
        let url = self.url(&format!(
            "/storage/v1/object/{}",
            Self::object_path(bucket, key)
        ));
        let request = self
            .authorize(self.client.post(url), None)
            .header(header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes);
        self.send(request).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        self.url(&format!(
            "/storage/v1/object/public/{}",
            Self::object_path(bucket, key)
        ))
    }
}
