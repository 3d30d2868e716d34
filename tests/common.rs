#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use culturahub::common::ProviderError;
use culturahub::config::Config;
use culturahub::models::*;
use culturahub::services::{DetailsFields, PersonalFields, Provider, Wizard};
use culturahub::web::AppState;

pub const TEST_BUCKET: &str = "payment-screenshots";
pub const MULTIPART_BOUNDARY: &str = "----culturahub-test-boundary";

/// One recorded upload: bucket, key, content type, byte count.
pub type UploadRecord = (String, String, String, usize);

/// In-memory provider. Failures are configured up front; every call is
/// recorded by name.
#[derive(Default)]
pub struct MockProvider {
    pub users: HashMap<String, ProviderUser>,
    pub fail_sign_in: Option<String>,
    pub fail_sign_up: Option<String>,
    pub fail_upload: Option<String>,
    pub fail_magic_link: Option<String>,

    pub calls: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<UploadRecord>>,
    pub sign_ups: Mutex<Vec<(String, SignUpMetadata)>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: &str, user: ProviderUser) -> Self {
        self.users.insert(token.to_string(), user);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == name).count()
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn get_user(
        &self,
        access_token: &str,
    ) -> Result<ProviderUser, ProviderError> {
        self.record("get_user");
        self.users
            .get(access_token)
            .cloned()
            .ok_or_else(|| ProviderError::api(401, "invalid JWT"))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<ProviderSession, ProviderError> {
        self.record("sign_in_with_password");
        if let Some(message) = &self.fail_sign_in {
            return Err(ProviderError::api(400, message.clone()));
        }

        Ok(ProviderSession {
            access_token: format!("token-{}", email),
            refresh_token: Some("refresh".to_string()),
            expires_in: 3600,
            user: seed_user(email, "Asha Verma"),
        })
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<(), ProviderError> {
        self.record("sign_up");
        if let Some(message) = &self.fail_sign_up {
            return Err(ProviderError::api(400, message.clone()));
        }

        self.sign_ups
            .lock()
            .unwrap()
            .push((email.to_string(), metadata.clone()));
        Ok(())
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), ProviderError> {
        self.record("sign_out");
        Ok(())
    }

    async fn send_magic_link(&self, _email: &str) -> Result<(), ProviderError> {
        self.record("send_magic_link");
        match &self.fail_magic_link {
            Some(message) => Err(ProviderError::api(429, message.clone())),
            None => Ok(()),
        }
    }

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ProviderError> {
        self.record("upload");
        if let Some(message) = &self.fail_upload {
            return Err(ProviderError::api(400, message.clone()));
        }

        self.uploads.lock().unwrap().push((
            bucket.to_string(),
            key.to_string(),
            content_type.to_string(),
            bytes.len(),
        ));
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("https://storage.test/{}/{}", bucket, key)
    }
}

pub fn seed_user(email: &str, full_name: &str) -> ProviderUser {
    ProviderUser {
        id: format!("id-{}", email),
        email: Some(email.to_string()),
        user_metadata: json!({ "fullName": full_name }),
    }
}

/// Config with the festival far in the future and no star field.
pub fn test_config() -> Config {
    let values: HashMap<&str, &str> = HashMap::from([
        ("SUPABASE_URL", "https://proj.supabase.test"),
        ("SUPABASE_ANON_KEY", "anon-key"),
        ("EVIDENCE_BUCKET", TEST_BUCKET),
        ("FESTIVAL_STARTS_AT", "2099-03-10T00:00:00+05:30"),
        ("AMBIENT_STAR_COUNT", "0"),
        ("MAX_EVIDENCE_BYTES", "1024"),
    ]);

    Config::from_lookup(|key| values.get(key).map(|v| v.to_string()))
        .expect("test config is valid")
}

pub fn test_state(provider: Arc<MockProvider>) -> AppState {
    AppState::new(test_config(), provider)
}

pub fn evidence(file_name: &str) -> EvidenceFile {
    EvidenceFile {
        file_name: file_name.to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

pub fn personal_fields() -> PersonalFields {
    PersonalFields {
        full_name: "Asha Verma".to_string(),
        gender: "female".to_string(),
        email: "asha@example.com".to_string(),
        mobile: "9876543210".to_string(),
        password: "secret123".to_string(),
        confirm_password: "secret123".to_string(),
    }
}

pub fn details_fields() -> DetailsFields {
    DetailsFields {
        participation_type: "online_only".to_string(),
        accommodation: "no".to_string(),
        tshirt_size: "M".to_string(),
        roll_number: "21CS01".to_string(),
        college: "SEC Supaul".to_string(),
    }
}

pub fn wizard_at_payment() -> Wizard {
    let mut wizard = Wizard::new();
    wizard.update_personal(personal_fields());
    wizard.advance().expect("personal step is valid");
    wizard.update_details(details_fields());
    wizard.advance().expect("details step is valid");
    wizard
}

/// `multipart/form-data` body with text fields and an optional file part
/// named `screenshot`.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                MULTIPART_BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"screenshot\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                MULTIPART_BOUNDARY, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(
        format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes(),
    );
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY)
}
