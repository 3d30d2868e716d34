mod common;

#[cfg(test)]
pub mod service_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::common::*;

    use culturahub::services::{RegistrationService, SessionService};

    #[actix_web::test]
    async fn test_session_lookup_is_cached() {
        let provider = Arc::new(MockProvider::new().with_user(
            "tok",
            seed_user("asha@example.com", "Asha Verma"),
        ));
        let sessions =
            SessionService::new(provider.clone(), Duration::from_secs(60));

        let first = sessions.current_user("tok").await.unwrap();
        let second = sessions.current_user("tok").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.display_name(), "Asha Verma");
        assert_eq!(provider.count("get_user"), 1);
    }

    #[actix_web::test]
    async fn test_expired_cache_entry_is_refetched() {
        let provider = Arc::new(MockProvider::new().with_user(
            "tok",
            seed_user("asha@example.com", "Asha Verma"),
        ));
        let sessions = SessionService::new(provider.clone(), Duration::ZERO);

        sessions.current_user("tok").await.unwrap();
        sessions.current_user("tok").await.unwrap();

        assert_eq!(provider.count("get_user"), 2);
    }

    #[actix_web::test]
    async fn test_rejected_token_is_anonymous() {
        let provider = Arc::new(MockProvider::new());
        let sessions =
            SessionService::new(provider.clone(), Duration::from_secs(60));

        assert!(sessions.current_user("stale").await.is_none());
        assert!(sessions.current_user("").await.is_none());
        assert_eq!(provider.count("get_user"), 1);
    }

    #[actix_web::test]
    async fn test_remembered_user_skips_provider_until_forgotten() {
        let provider = Arc::new(MockProvider::new());
        let sessions =
            SessionService::new(provider.clone(), Duration::from_secs(60));

        sessions.remember("fresh", seed_user("asha@example.com", "Asha Verma"));
        assert!(sessions.current_user("fresh").await.is_some());
        assert_eq!(provider.count("get_user"), 0);

        sessions.forget("fresh");
        assert!(sessions.current_user("fresh").await.is_none());
        assert_eq!(provider.count("get_user"), 1);
    }

    #[actix_web::test]
    async fn test_registration_uploads_then_signs_up() {
        let provider = Arc::new(MockProvider::new());
        let service = RegistrationService::new(provider.clone(), TEST_BUCKET);

        let mut wizard = wizard_at_payment();
        wizard.update_payment_method("upi".to_string());
        wizard.attach_evidence(Some(evidence("receipt.final.png")));
        let submission = wizard.submission().unwrap();

        service.complete(&submission, 1_741_500_000_000).await.unwrap();

        assert_eq!(provider.calls(), vec!["upload", "sign_up"]);

        let uploads = provider.uploads.lock().unwrap().clone();
        assert_eq!(
            uploads,
            vec![(
                TEST_BUCKET.to_string(),
                "21CS01-1741500000000.png".to_string(),
                "image/png".to_string(),
                4
            )]
        );

        let sign_ups = provider.sign_ups.lock().unwrap().clone();
        let (email, metadata) = &sign_ups[0];
        assert_eq!(email, "asha@example.com");
        assert_eq!(metadata.full_name, "Asha Verma");
        assert_eq!(metadata.payment_method, "upi");
        assert_eq!(
            metadata.payment_screenshot_url,
            "https://storage.test/payment-screenshots/21CS01-1741500000000.png"
        );
    }

    #[actix_web::test]
    async fn test_upload_failure_stops_before_sign_up() {
        let provider = Arc::new(MockProvider {
            fail_upload: Some("The resource already exists".to_string()),
            ..MockProvider::default()
        });
        let service = RegistrationService::new(provider.clone(), TEST_BUCKET);

        let mut wizard = wizard_at_payment();
        wizard.update_payment_method("card".to_string());
        wizard.attach_evidence(Some(evidence("receipt")));
        let submission = wizard.submission().unwrap();

        let err = service.complete(&submission, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "The resource already exists");
        assert_eq!(provider.calls(), vec!["upload"]);
    }

    #[actix_web::test]
    async fn test_sign_up_failure_keeps_uploaded_file() {
        let provider = Arc::new(MockProvider {
            fail_sign_up: Some("User already registered".to_string()),
            ..MockProvider::default()
        });
        let service = RegistrationService::new(provider.clone(), TEST_BUCKET);

        let mut wizard = wizard_at_payment();
        wizard.update_payment_method("upi".to_string());
        wizard.attach_evidence(Some(evidence("receipt")));
        let submission = wizard.submission().unwrap();

        let err = service.complete(&submission, 7).await.unwrap_err();
        assert_eq!(err.to_string(), "User already registered");
        assert_eq!(provider.uploads.lock().unwrap()[0].1, "21CS01-7.receipt");
    }
}
