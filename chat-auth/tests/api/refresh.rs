use crate::helpers::{bearer, get_random_phone, TestApp, TestContext, ACCESS_TTL, REFRESH_TTL, START};
use chat_auth::domain::{ErrorResponse, LoginResponse, RefreshResponse};
use test_context::test_context;

async fn logged_in(app: &TestApp) -> LoginResponse {
    let phone = get_random_phone();
    app.seed_user(&phone, "Password123!").await;
    app.login(&phone, "Password123!")
        .await
        .json()
        .await
        .expect("Invalid login response")
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_with_new_access_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let session = logged_in(app).await;

    app.clock.advance(30);
    let response = app.refresh(Some(&bearer(&session.refresh_token))).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: RefreshResponse = response.json().await.unwrap();
    assert_eq!(body.expires_at, START + 30 + ACCESS_TTL);
    assert_ne!(body.access_token, session.access_token);

    let response = app.verify_token(Some(&bearer(&body.access_token))).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn refresh_token_stays_usable_after_refresh(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let session = logged_in(app).await;

    for _ in 0..3 {
        app.clock.advance(10);
        let response = app.refresh(Some(&bearer(&session.refresh_token))).await;
        assert_eq!(response.status().as_u16(), 200);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_header_missing(ctx: &mut TestContext) {
    let response = ctx.test_app.refresh(None).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error, "Authorization token is required in header");
    assert_eq!(body.field, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_wrong_scheme(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let session = logged_in(app).await;

    let response = app
        .refresh(Some(&format!("Token {}", session.refresh_token)))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error, "Token type is required");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_access_token_presented(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let session = logged_in(app).await;

    let response = app.refresh(Some(&bearer(&session.access_token))).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn expired_and_forged_refresh_tokens_look_the_same(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let session = logged_in(app).await;

    let forged = app.refresh(Some(&bearer("not.a.token"))).await;
    assert_eq!(forged.status().as_u16(), 401);

    app.clock.advance(REFRESH_TTL);
    let expired = app.refresh(Some(&bearer(&session.refresh_token))).await;
    assert_eq!(expired.status().as_u16(), 401);

    let forged: ErrorResponse = forged.json().await.unwrap();
    let expired: ErrorResponse = expired.json().await.unwrap();
    assert_eq!(forged, expired);
}
