//! `/auth` endpoints.

use kar_core::entities::User;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::ApiClient;
use crate::error::ApiError;
use crate::resource::One;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// What a successful sign-in returns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MeBody {
    Named { user: User },
    Data { data: User },
    Bare(User),
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for rejected credentials, otherwise
    /// [`ApiError`] on transport, status, or parse failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let one: One<LoginResponse> = self
            .send_json(Method::POST, "/auth/login", &Credentials { email, password })
            .await?;
        let response = one.into_inner();
        tracing::info!(
            user = response.user.as_ref().map(|u| u.email.as_str()),
            "signed in"
        );
        Ok(response)
    }

    /// End the server-side session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_empty(Method::POST, "/auth/logout").await?;
        self.cache().clear();
        Ok(())
    }

    /// The user the current token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn me(&self) -> Result<User, ApiError> {
        let body: MeBody = self.get_json("/auth/me").await?;
        Ok(match body {
            MeBody::Named { user } | MeBody::Data { data: user } | MeBody::Bare(user) => user,
        })
    }
}
