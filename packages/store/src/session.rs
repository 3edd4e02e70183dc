//! # Session store — who is logged in
//!
//! [`SessionStore`] is the two-state machine behind the auth screens:
//!
//! ```text
//!            sign_in / sign_up (ok)
//! Anonymous ───────────────────────▶ Authenticated
//!     ▲                                   │
//!     └────────────── sign_out ───────────┘
//! ```
//!
//! A failed `sign_in`/`sign_up` leaves the state untouched. Signing in while
//! already authenticated replaces the user.
//!
//! The store owns no storage. The app restores it from a
//! [`SessionVault`](crate::SessionVault) at startup and saves the new
//! [`Session`] after each successful mutation.
//!
//! Credential checks go through a [`Verifier`]. [`AcceptNonEmpty`] is the
//! placeholder used by the app: any non-empty credentials are accepted.

use thiserror::Error;

use crate::models::{Session, User};

/// Id given to every account by [`AcceptNonEmpty`].
pub const PLACEHOLDER_USER_ID: &str = "1";
/// Name given by [`AcceptNonEmpty`] on sign-in, where no name is entered.
pub const PLACEHOLDER_USER_NAME: &str = "John Doe";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid input")]
    InvalidInput,
}

/// Decides whether credentials are acceptable and which [`User`] they yield.
pub trait Verifier {
    fn verify_sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;
    fn verify_sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Accepts any non-empty credentials without checking them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AcceptNonEmpty;

impl Verifier for AcceptNonEmpty {
    fn verify_sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(User {
            id: PLACEHOLDER_USER_ID.to_string(),
            name: PLACEHOLDER_USER_NAME.to_string(),
            email: email.to_string(),
        })
    }

    fn verify_sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }
        Ok(User {
            id: PLACEHOLDER_USER_ID.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

/// The authoritative authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore<V = AcceptNonEmpty> {
    session: Session,
    verifier: V,
}

impl SessionStore {
    /// An anonymous store using the placeholder verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store resuming a previously persisted session.
    pub fn restore(session: Session) -> Self {
        Self {
            session,
            verifier: AcceptNonEmpty,
        }
    }
}

impl<V: Verifier> SessionStore<V> {
    pub fn with_verifier(session: Session, verifier: V) -> Self {
        Self { session, verifier }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.verifier.verify_sign_in(email, password)?;
        tracing::debug!("Signed in as {}", user.email);
        self.session = Session::Authenticated(user.clone());
        Ok(user)
    }

    pub fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.verifier.verify_sign_up(name, email, password)?;
        tracing::debug!("Signed up as {}", user.email);
        self.session = Session::Authenticated(user.clone());
        Ok(user)
    }

    pub fn sign_out(&mut self) {
        if self.session.is_authenticated() {
            tracing::debug!("Signed out");
        }
        self.session = Session::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_authenticates() {
        let mut store = SessionStore::new();
        assert!(!store.is_authenticated());

        let user = store.sign_in("dev@example.com", "hunter2").unwrap();
        assert_eq!(user.email, "dev@example.com");
        assert_eq!(user.id, PLACEHOLDER_USER_ID);
        assert_eq!(user.name, PLACEHOLDER_USER_NAME);

        assert!(store.is_authenticated());
        assert_eq!(store.user().unwrap().email, "dev@example.com");
    }

    #[test]
    fn test_sign_in_rejects_missing_fields() {
        for (email, password) in [("", "pw"), ("a@b.c", ""), ("", "")] {
            let mut store = SessionStore::new();
            assert_eq!(
                store.sign_in(email, password).unwrap_err(),
                AuthError::InvalidCredentials
            );
            assert_eq!(store.session(), &Session::Anonymous);
        }
    }

    #[test]
    fn test_failed_sign_in_keeps_existing_user() {
        let mut store = SessionStore::new();
        store.sign_in("first@example.com", "pw").unwrap();
        let before = store.session().clone();

        assert!(store.sign_in("", "pw").is_err());
        assert_eq!(store.session(), &before);
    }

    #[test]
    fn test_sign_in_replaces_user() {
        let mut store = SessionStore::new();
        store.sign_in("first@example.com", "pw").unwrap();
        store.sign_in("second@example.com", "pw").unwrap();
        assert_eq!(store.user().unwrap().email, "second@example.com");
    }

    #[test]
    fn test_sign_up() {
        let mut store = SessionStore::new();
        let user = store.sign_up("Ada", "ada@example.com", "pw").unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_sign_up_rejects_missing_fields() {
        for (name, email, password) in [
            ("", "a@b.c", "pw"),
            ("Ada", "", "pw"),
            ("Ada", "a@b.c", ""),
        ] {
            let mut store = SessionStore::new();
            assert_eq!(
                store.sign_up(name, email, password).unwrap_err(),
                AuthError::InvalidInput
            );
            assert!(!store.is_authenticated());
        }
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let mut store = SessionStore::new();
        store.sign_out();
        assert_eq!(store.session(), &Session::Anonymous);

        store.sign_in("dev@example.com", "pw").unwrap();
        store.sign_out();
        let once = store.session().clone();
        store.sign_out();
        assert_eq!(store.session(), &once);
        assert_eq!(once, Session::Anonymous);
    }

    #[test]
    fn test_custom_verifier() {
        struct OnlyAda;

        impl Verifier for OnlyAda {
            fn verify_sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
                if email == "ada@example.com" && password == "engine" {
                    Ok(User {
                        id: "42".to_string(),
                        name: "Ada".to_string(),
                        email: email.to_string(),
                    })
                } else {
                    Err(AuthError::InvalidCredentials)
                }
            }

            fn verify_sign_up(&self, _: &str, _: &str, _: &str) -> Result<User, AuthError> {
                Err(AuthError::InvalidInput)
            }
        }

        let mut store = SessionStore::with_verifier(Session::Anonymous, OnlyAda);
        assert!(store.sign_in("bob@example.com", "pw").is_err());
        assert_eq!(store.sign_in("ada@example.com", "engine").unwrap().id, "42");
        assert!(store.sign_up("Bob", "bob@example.com", "pw").is_err());
        assert_eq!(store.user().unwrap().name, "Ada");
    }
}
