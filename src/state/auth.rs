//! Auth store.
//!
//! Holds the signed-in user for the lifetime of the session. Nothing is
//! persisted: a fresh store starts anonymous and `check_auth` asks the data
//! service whether it still knows a session.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::loading::{InFlight, Loadable};
use crate::error::{AuthError, ErrorContext, FactoryResult, ResultExt};
use crate::models::User;
use crate::traits::DataService;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Snapshot of the auth store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthState {
    /// A running login or logout reports `Authenticating`, even over an
    /// existing session.
    pub fn phase(&self) -> AuthPhase {
        if self.is_loading {
            AuthPhase::Authenticating
        } else if self.is_authenticated {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        }
    }

    /// The signed-in user, for screens that need one.
    pub fn require_user(&self) -> Result<&User, AuthError> {
        self.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    fn set_user(&mut self, user: Option<User>) {
        self.is_authenticated = user.is_some();
        self.user = user;
    }
}

impl Loadable for AuthState {
    fn loading(&self) -> bool {
        self.is_loading
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

/// Store for the current session.
pub struct AuthStore {
    service: Arc<dyn DataService>,
    tx: watch::Sender<AuthState>,
    in_flight: InFlight,
}

impl AuthStore {
    pub fn new(service: Arc<dyn DataService>) -> Self {
        let (tx, _) = watch::channel(AuthState::default());
        Self {
            service,
            tx,
            in_flight: InFlight::new(),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> AuthState {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every republished state.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }

    /// Drop the session without telling the service.
    pub fn reset(&self) {
        self.tx.send_replace(AuthState::default());
        self.in_flight.sync(&self.tx);
    }

    /// Sign in.
    ///
    /// Fails only when the service reports an error. Any session already held
    /// is kept when sign-in fails or the service answers without a user.
    pub async fn login(&self, email: &str, password: &str) -> FactoryResult<()> {
        let _loading = self.in_flight.begin(&self.tx);
        debug!(email, "Signing in");

        let identity = self
            .service
            .sign_in(email, password)
            .await
            .context(ErrorContext::new("login").with_store("auth"))
            .map_err(|e| {
                error!(
                    code = e.error_code(),
                    category = %e.category(),
                    retryable = e.is_retryable(),
                    "Login error: {}",
                    e
                );
                e
            })?;

        match identity {
            Some(identity) => {
                let user = User::from_identity(identity);
                info!(user_id = %user.id, email = %user.email, "Signed in");
                self.tx.send_modify(|state| state.set_user(Some(user)));
            }
            None => warn!(email, "Sign-in returned no user, session unchanged"),
        }
        Ok(())
    }

    /// Sign out. The local session is cleared even if the service call fails.
    pub async fn logout(&self) {
        let _loading = self.in_flight.begin(&self.tx);

        if let Err(e) = self
            .service
            .sign_out()
            .await
            .context(ErrorContext::new("logout").with_store("auth"))
        {
            error!(
                code = e.error_code(),
                category = %e.category(),
                retryable = e.is_retryable(),
                "Logout error: {}",
                e
            );
        }

        self.tx.send_if_modified(|state| {
            let had_user = state.user.is_some();
            state.set_user(None);
            had_user
        });
        info!("Signed out");
    }

    /// Restore the session the service reports, if any.
    pub async fn check_auth(&self) {
        match self
            .service
            .current_user()
            .await
            .context(ErrorContext::new("check_auth").with_store("auth"))
        {
            Ok(Some(identity)) => {
                let user = User::from_identity(identity);
                info!(user_id = %user.id, "Restored session");
                self.tx.send_modify(|state| state.set_user(Some(user)));
            }
            Ok(None) => debug!("No session to restore"),
            Err(e) => warn!(
                code = e.error_code(),
                category = %e.category(),
                retryable = e.is_retryable(),
                "Auth check error: {}",
                e
            ),
        }
    }
}
