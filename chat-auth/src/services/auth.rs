//! Login and refresh flows.
//!
//! `AuthService` owns the only control logic of the token scheme:
//! - login: look up the user, check the password, mint an access and a
//!   refresh token from a single clock reading;
//! - refresh: verify a presented refresh token and mint a new access token
//!   for the same subject;
//! - access verification for protected routes.
//!
//! The service keeps no per-request state. The policy and clock are shared
//! read-only; the user store is only read here.
//!
//! Refresh tokens are never rotated: a refresh only produces an access token
//! and the presented refresh token stays valid until its own expiry.
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::app_state::{ClockType, TokenPolicyType, UserStoreType};
use crate::domain::{
    AccessGrant, Claims, IssuedTokens, LoginCredentials, Password, Phone, TokenKind, User,
    UserStoreError,
};
use crate::errors::{AuthFailure, LoginError, RefreshError, TokenError, VerifyTokenError};
use crate::services::password_hasher::{
    compare_hash_and_password, hash_password, verify_against_dummy,
};
use crate::services::token_codec;
use crate::utils::extract_bearer;

/// A successful login: who logged in and the tokens they received.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub tokens: IssuedTokens,
}

pub struct AuthService {
    policy: TokenPolicyType,
    user_store: UserStoreType,
    clock: ClockType,
}

impl AuthService {
    pub fn new(policy: TokenPolicyType, user_store: UserStoreType, clock: ClockType) -> Self {
        Self {
            policy,
            user_store,
            clock,
        }
    }

    /// Authenticate `credentials` and issue an access + refresh pair.
    ///
    /// Unknown phone numbers and wrong passwords both end in
    /// `AuthenticationFailed` after one argon2 verification; only the log
    /// line tells them apart.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<LoginOutcome, LoginError> {
        let user = self.check_credentials(&credentials).await?;

        let now = self.clock.now();
        let (access_token, access_expires_at) = self
            .issue(TokenKind::Access, &user.id, now)
            .map_err(|e| signing_failed(&user.id, e))
            .map_err(LoginError::Signing)?;
        let (refresh_token, refresh_expires_at) = self
            .issue(TokenKind::Refresh, &user.id, now)
            .map_err(|e| signing_failed(&user.id, e))
            .map_err(LoginError::Signing)?;

        tracing::info!(
            user_id = %user.id,
            access_expires_at,
            refresh_expires_at,
            "issued session tokens"
        );

        Ok(LoginOutcome {
            user,
            tokens: IssuedTokens {
                access_token,
                refresh_token,
                access_expires_at,
                refresh_expires_at,
            },
        })
    }

    /// Exchange a refresh token for a new access token.
    pub fn refresh(&self, presented: &str) -> Result<AccessGrant, RefreshError> {
        let now = self.clock.now();

        let claims = self.verify(presented, TokenKind::Refresh, now).map_err(|e| {
            tracing::warn!(reason = ?e, "refresh rejected: bad refresh token");
            RefreshError::Token(e)
        })?;

        let (access_token, expires_at) = self
            .issue(TokenKind::Access, claims.subject_id(), now)
            .map_err(|e| signing_failed(claims.subject_id(), e))
            .map_err(RefreshError::Signing)?;

        tracing::info!(user_id = %claims.subject_id(), expires_at, "refreshed access token");

        Ok(AccessGrant {
            access_token,
            expires_at,
        })
    }

    /// Verify the access token carried in `headers` and return its claims.
    pub fn verify_access_from_headers(
        &self,
        headers: &HeaderMap,
    ) -> Result<Claims, VerifyTokenError> {
        let presented = extract_bearer(headers)?;
        self.verify(&presented, TokenKind::Access, self.clock.now())
            .map_err(|e| {
                tracing::debug!(reason = ?e, "access token rejected");
                VerifyTokenError::Token(e)
            })
    }

    /// Hash `password` and add a new user to the store.
    pub async fn register_user(
        &self,
        phone: &Phone,
        full_name: &str,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let password_hash = hash_password(password.as_ref()).await.map_err(|e| {
            tracing::error!(error = %e, "failed to hash password");
            UserStoreError::UnexpectedError
        })?;
        let user = User::new(
            Uuid::new_v4().to_string(),
            phone.clone(),
            full_name.to_owned(),
            password_hash,
        );

        self.user_store.write().await.add_user(user.clone()).await?;
        Ok(user)
    }

    async fn check_credentials(&self, credentials: &LoginCredentials) -> Result<User, LoginError> {
        let found = self
            .user_store
            .read()
            .await
            .find_by_phone(&credentials.phone)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "user lookup failed");
                LoginError::UserStore(e)
            })?;

        let Some(user) = found else {
            if let Err(e) = verify_against_dummy(credentials.password.as_ref()).await {
                tracing::error!(error = %e, "dummy password check failed");
            }
            return Err(auth_failed(AuthFailure::UnknownIdentifier));
        };

        let matches =
            compare_hash_and_password(&user.password_hash, credentials.password.as_ref())
                .await
                .map_err(|e| {
                    tracing::error!(user_id = %user.id, error = %e, "password check failed");
                    LoginError::Internal(e)
                })?;
        if !matches {
            return Err(auth_failed(AuthFailure::WrongPassword));
        }

        Ok(user)
    }

    fn verify(
        &self,
        presented: &str,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let secret = self.policy.secret_for(kind);
        let decoded = token_codec::decode_at(presented, secret, now.timestamp())?;
        token_codec::authenticate(decoded, kind)
    }

    fn issue(
        &self,
        kind: TokenKind,
        subject_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(String, i64), TokenError> {
        let expires_at = (now + self.policy.ttl_for(kind)).timestamp();
        let claims = Claims::new(kind, subject_id, expires_at);
        let token = token_codec::mint(&claims, self.policy.secret_for(kind))?;
        Ok((token, expires_at))
    }
}

fn auth_failed(reason: AuthFailure) -> LoginError {
    tracing::warn!(?reason, "login rejected");
    LoginError::AuthenticationFailed(reason)
}

fn signing_failed(subject_id: &str, err: TokenError) -> TokenError {
    tracing::error!(user_id = %subject_id, error = %err, "failed to sign token");
    err
}
