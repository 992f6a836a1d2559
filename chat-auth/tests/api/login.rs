use crate::helpers::{get_random_phone, TestContext, ACCESS_TTL, REFRESH_TTL, START};
use chat_auth::domain::{ErrorResponse, LoginResponse};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_with_tokens_for_valid_credentials(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let phone = get_random_phone();
    let user = app.seed_user(&phone, "Password123!").await;

    let response = app.login(&phone, "Password123!").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: LoginResponse = response.json().await.expect("Invalid login response");
    assert_eq!(body.user.id, user.id);
    assert_eq!(body.user.phone, phone);
    assert_eq!(body.user.full_name, "Test User");
    assert!(!body.access_token.is_empty());
    assert!(!body.refresh_token.is_empty());
    assert_eq!(body.access_expires_at, START + ACCESS_TTL);
    assert_eq!(body.refresh_expires_at, START + REFRESH_TTL);
}

#[test_context(TestContext)]
#[tokio::test]
async fn login_response_never_contains_password_hash(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let phone = get_random_phone();
    app.seed_user(&phone, "Password123!").await;

    let response = app.login(&phone, "Password123!").await;
    let body = response.text().await.unwrap();

    assert!(!body.contains("password"));
    assert!(!body.contains("$argon2"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_wrong_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let phone = get_random_phone();
    app.seed_user(&phone, "Password123!").await;

    let response = app.login(&phone, "NotThePassword").await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn unknown_phone_and_wrong_password_look_the_same(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let phone = get_random_phone();
    app.seed_user(&phone, "Password123!").await;

    let wrong_password = app.login(&phone, "NotThePassword").await;
    let unknown_phone = app.login("9700000001", "Password123!").await;

    assert_eq!(unknown_phone.status().as_u16(), 401);
    let wrong_password: ErrorResponse = wrong_password.json().await.unwrap();
    let unknown_phone: ErrorResponse = unknown_phone.json().await.unwrap();
    assert_eq!(wrong_password, unknown_phone);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_malformed_phone(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.login("not-a-phone", "Password123!").await;
    assert_eq!(response.status().as_u16(), 422);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.field.as_deref(), Some("phone"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_empty_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.login(&get_random_phone(), "").await;
    assert_eq!(response.status().as_u16(), 422);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.field.as_deref(), Some("password"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_body_is_missing_fields(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .post(format!("{}/login", &app.address))
        .json(&serde_json::json!({ "phone": get_random_phone() }))
        .send()
        .await
        .expect("Failed to execute login request.");

    assert_eq!(response.status().as_u16(), 422);
    let body: ErrorResponse = response.json().await.expect("Error body is not JSON");
    assert_eq!(body.error, "Request body is not a valid login request");
    assert_eq!(body.field, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_400_json_error_if_body_is_not_json(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .post(format!("{}/login", &app.address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute login request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorResponse = response.json().await.expect("Error body is not JSON");
    assert_eq!(body.error, "Request body is not a valid login request");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_415_json_error_without_content_type(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .post(format!("{}/login", &app.address))
        .body(r#"{"phone":"9800000000","password":"x"}"#)
        .send()
        .await
        .expect("Failed to execute login request.");

    assert_eq!(response.status().as_u16(), 415);
    let body: ErrorResponse = response.json().await.expect("Error body is not JSON");
    assert_eq!(body.error, "Request body is not a valid login request");
}
