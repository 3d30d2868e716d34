use async_trait::async_trait;

use crate::common::ProviderError;
use crate::models::{ProviderSession, ProviderUser, SignUpMetadata};

/// The external authentication and object storage service.
///
/// Identity and file persistence are delegated here entirely; the site
/// only reads sessions and forwards registrations.
#[async_trait]
pub trait Provider: Send + Sync {
    /// User behind an access token.
    async fn get_user(
        &self,
        access_token: &str,
    ) -> Result<ProviderUser, ProviderError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProviderError>;

    /// Create an account; `metadata` is stored verbatim as the account's
    /// user metadata.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<(), ProviderError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError>;

    /// Email a one-time sign-in link.
    async fn send_magic_link(&self, email: &str) -> Result<(), ProviderError>;

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ProviderError>;

    /// Publicly reachable URL of a stored object. Does not check the object
    /// exists.
    fn public_url(&self, bucket: &str, key: &str) -> String;
}
