mod common;

#[cfg(test)]
pub mod supabase_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{
        body_json, body_partial_json, header, method, path, query_param,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use culturahub::models::SignUpMetadata;
    use culturahub::services::{Provider, SupabaseProvider};

    const ANON_KEY: &str = "anon-key";

    async fn provider() -> (MockServer, SupabaseProvider) {
        let server = MockServer::start().await;
        let provider = SupabaseProvider::new(&server.uri(), ANON_KEY).unwrap();
        (server, provider)
    }

    fn user_json() -> serde_json::Value {
        json!({
            "id": "8d3c",
            "email": "asha@example.com",
            "user_metadata": { "fullName": "Asha Verma" }
        })
    }

    #[tokio::test]
    async fn test_password_sign_in_returns_session() {
        let (server, provider) = provider().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", ANON_KEY))
            .and(body_json(json!({
                "email": "asha@example.com",
                "password": "secret123",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "jwt",
                "refresh_token": "refresh",
                "expires_in": 3600,
                "token_type": "bearer",
                "user": user_json()
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = provider
            .sign_in_with_password("asha@example.com", "secret123")
            .await
            .unwrap();

        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.user.display_name(), "Asha Verma");
    }

    #[tokio::test]
    async fn test_sign_in_error_message_is_verbatim() {
        let (server, provider) = provider().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .mount(&server)
            .await;

        let err = provider
            .sign_in_with_password("asha@example.com", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid login credentials");
        assert!(!err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_get_user_sends_bearer_token() {
        let (server, provider) = provider().await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", "Bearer jwt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .mount(&server)
            .await;

        let user = provider.get_user("jwt").await.unwrap();
        assert_eq!(user.email_or_empty(), "asha@example.com");
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthorized() {
        let (server, provider) = provider().await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": 401,
                "msg": "invalid JWT: token is expired"
            })))
            .mount(&server)
            .await;

        let err = provider.get_user("old").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "invalid JWT: token is expired");
    }

    #[tokio::test]
    async fn test_sign_up_sends_metadata_as_data() {
        let (server, provider) = provider().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .and(body_partial_json(json!({
                "email": "asha@example.com",
                "data": {
                    "fullName": "Asha Verma",
                    "rollNumber": "21CS01",
                    "paymentScreenshotUrl": "https://cdn.test/21CS01-1.png"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(1)
            .mount(&server)
            .await;

        let metadata = SignUpMetadata {
            full_name: "Asha Verma".to_string(),
            gender: "female".to_string(),
            mobile: "9876543210".to_string(),
            participation_type: "all_events".to_string(),
            accommodation: "yes".to_string(),
            tshirt_size: "L".to_string(),
            roll_number: "21CS01".to_string(),
            college: "SEC Supaul".to_string(),
            payment_method: "upi".to_string(),
            payment_screenshot_url: "https://cdn.test/21CS01-1.png".to_string(),
        };

        provider
            .sign_up("asha@example.com", "secret123", &metadata)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_upload_posts_bytes_to_bucket_path() {
        let (server, provider) = provider().await;

        Mock::given(method("POST"))
            .and(path("/storage/v1/object/payment-screenshots/21CS01-1.png"))
            .and(header("content-type", "image/png"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Key": "payment-screenshots/21CS01-1.png"
            })))
            .expect(1)
            .mount(&server)
            .await;

        provider
            .upload(
                "payment-screenshots",
                "21CS01-1.png",
                "image/png",
                vec![1, 2, 3],
            )
            .await
            .unwrap();

        assert_eq!(
            provider.public_url("payment-screenshots", "21CS01-1.png"),
            format!(
                "{}/storage/v1/object/public/payment-screenshots/21CS01-1.png",
                server.uri()
            )
        );
    }

    #[tokio::test]
    async fn test_magic_link_and_sign_out() {
        let (server, provider) = provider().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/otp"))
            .and(body_partial_json(json!({ "email": "asha@example.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("authorization", "Bearer jwt"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        provider.send_magic_link("asha@example.com").await.unwrap();
        provider.sign_out("jwt").await.unwrap();
    }

    #[tokio::test]
    async fn test_rate_limited_magic_link_reports_message() {
        let (server, provider) = provider().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/otp"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "code": 429,
                "msg": "For security purposes, you can only request this after 60 seconds."
            })))
            .mount(&server)
            .await;

        let err = provider
            .send_magic_link("asha@example.com")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "For security purposes, you can only request this after 60 seconds."
        );
    }
}
