use std::sync::Arc;

use crate::common::ProviderError;
use crate::models::{SignUpMetadata, Submission};
use crate::services::Provider;

/// Storage key for a payment screenshot: `<roll>-<millis>.<ext>`.
pub fn evidence_key(
    roll_number: &str,
    unix_millis: i64,
    extension: &str,
) -> String {
    format!("{}-{}.{}", roll_number, unix_millis, extension)
}

/// Turns a validated wizard submission into a provider account.
pub struct RegistrationService {
    provider: Arc<dyn Provider>,
    bucket: String,
}

impl RegistrationService {
    pub fn new(provider: Arc<dyn Provider>, bucket: impl Into<String>) -> Self {
        Self {
            provider,
            bucket: bucket.into(),
        }
    }

    /// Upload the evidence, then create the account with its public URL in
    /// the metadata.
    ///
    /// Steps run strictly in order and stop at the first failure. An
    /// uploaded file is left in place if sign-up fails.
    pub async fn complete(
        &self,
        submission: &Submission,
        unix_millis: i64,
    ) -> Result<(), ProviderError> {
        let evidence = &submission.evidence;
        let key = evidence_key(
            &submission.participation.roll_number,
            unix_millis,
            evidence.extension(),
        );

        self.provider
            .upload(
                &self.bucket,
                &key,
                &evidence.content_type,
                evidence.bytes.clone(),
            )
            .await
            .inspect_err(|e| {
                log::error!("Evidence upload failed for {}: {}", key, e)
            })?;

        let url = self.provider.public_url(&self.bucket, &key);
        let metadata = SignUpMetadata::new(submission, url);

        self.provider
            .sign_up(
                &submission.personal.email,
                &submission.personal.password,
                &metadata,
            )
            .await
            .inspect_err(|e| {
                log::error!("Sign-up failed after uploading {}: {}", key, e)
            })?;

        log::info!("Registered {}", submission.personal.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_key_joins_roll_millis_and_extension() {
        assert_eq!(
            evidence_key("21CS01", 1_700_000_000_000, "png"),
            "21CS01-1700000000000.png"
        );
    }
}
