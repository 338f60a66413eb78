//! Auth-session state for the current operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and identity-aware components (header, login page)
//! to coordinate login redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! `AuthState` is a tagged variant, so "authenticated" and "has a user" cannot
//! drift apart. `AuthService` owns the login/logout protocol and always writes
//! storage before returning; `AuthContext` then publishes the new state
//! through an `RwSignal`, which is what observers subscribe to.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use thiserror::Error;

use super::session::{Session, SessionStore};
use crate::net::api::{ApiClient, ApiError, unwrap_envelope};
use crate::net::endpoints;
use crate::net::transport::{FetchTransport, HttpTransport};
use crate::net::types::{LoginData, LoginRequest, User};
use crate::util::storage::{KeyValueStore, LocalStorage};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to server. Please check if the server is running.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated {
        user: User,
    },
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(Session { user, .. }) => Self::Authenticated { user },
            None => Self::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user } => Some(user),
            Self::Anonymous => None,
        }
    }
}

/// Why a login attempt did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    /// The server answered and refused the credentials.
    #[error("{0}")]
    Rejected(String),
    /// No usable answer: network failure or a body that is not the login envelope.
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => {
                Self::Rejected(message.unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_owned()))
            }
            ApiError::Transport(_)
            | ApiError::InvalidBody { .. }
            | ApiError::Download { .. }
            | ApiError::Encode(_)
            | ApiError::Shape(_) => Self::Unreachable,
        }
    }
}

/// Login/logout protocol over the API client and the session store.
#[derive(Clone, Debug)]
pub struct AuthService<T, S> {
    api: ApiClient<T, S>,
    sessions: SessionStore<S>,
}

impl<T: HttpTransport, S: KeyValueStore> AuthService<T, S> {
    pub fn new(api: ApiClient<T, S>) -> Self {
        let sessions = SessionStore::new(api.store().clone());
        Self { api, sessions }
    }

    /// State implied by what is in storage right now.
    pub fn restore(&self) -> AuthState {
        AuthState::from_session(self.sessions.get())
    }

    /// Exchange credentials for a session. Storage is only touched on success.
    ///
    /// # Errors
    ///
    /// `LoginError::Rejected` carries the server message (default
    /// "Invalid credentials"); everything else is `LoginError::Unreachable`.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, LoginError> {
        let body = serde_json::to_value(LoginRequest { email, password }).map_err(|_| LoginError::Unreachable)?;
        let reply = self.api.post(endpoints::AUTH_LOGIN, body).await?;
        let LoginData { user, token } = unwrap_envelope::<LoginData>(reply)?;
        self.sessions.set(&Session { token, user: user.clone() });
        leptos::logging::log!("login succeeded for {}", user.display_name());
        Ok(user)
    }

    pub fn logout(&self) -> AuthState {
        self.sessions.clear();
        AuthState::Anonymous
    }
}

pub type AppAuthService = AuthService<FetchTransport, LocalStorage>;

/// Page-lifetime auth context provided at the application root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    service: StoredValue<AppAuthService>,
}

impl AuthContext {
    /// Restore from storage and start observing.
    pub fn new(service: AppAuthService) -> Self {
        let state = RwSignal::new(service.restore());
        Self { state, service: StoredValue::new(service) }
    }

    /// # Errors
    ///
    /// See `AuthService::login`; state is unchanged on error.
    pub async fn login(self, email: String, password: String) -> Result<(), LoginError> {
        let service = self.service.get_value();
        let user = service.login(&email, &password).await?;
        self.state.set(AuthState::Authenticated { user });
        Ok(())
    }

    pub fn logout(self) {
        let next = self.service.with_value(AuthService::logout);
        self.state.set(next);
    }
}
