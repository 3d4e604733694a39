//! Session
//!
//! Demo sign-in state. A placeholder token in storage means "signed in";
//! there is no server and no real credential check.

use thiserror::Error;

use crate::domain::UserProfile;
use crate::error::DomainError;
use crate::repository::{keys, StorageBackend};

/// Token written on a successful sign-in
pub const DEMO_TOKEN: &str = "mock_token_for_demo";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error(transparent)]
    Storage(#[from] DomainError),
}

/// Sign-in / sign-up form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only used by sign-up
    pub confirm_password: String,
}

impl Credentials {
    fn check_present(&self) -> Result<(), SessionError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    auth_token: Option<String>,
    profile: UserProfile,
}

impl Session {
    /// Read token and profile; a missing or unreadable profile is the default one
    pub fn init<S: StorageBackend>(storage: &S) -> Self {
        let profile = storage
            .get_item(keys::USER_PROFILE)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    log::warn!("Ignoring unreadable profile: {}", e);
                    None
                }
            })
            .unwrap_or_default();
        Self {
            auth_token: read_token(storage),
            profile,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Re-read the token after an external storage change. Returns whether
    /// the signed-in state flipped.
    pub fn refresh_auth<S: StorageBackend>(&mut self, storage: &S) -> bool {
        let was = self.is_authenticated();
        self.auth_token = read_token(storage);
        was != self.is_authenticated()
    }

    pub fn sign_in<S: StorageBackend>(
        &mut self,
        storage: &S,
        credentials: &Credentials,
    ) -> Result<(), SessionError> {
        credentials.check_present()?;
        storage.set_item(keys::AUTH_TOKEN, DEMO_TOKEN)?;
        self.auth_token = Some(DEMO_TOKEN.to_string());
        log::info!("Signed in as {}", credentials.email.trim());
        Ok(())
    }

    /// Accepts the form but does not sign in; the caller returns to sign-in
    pub fn sign_up(credentials: &Credentials) -> Result<(), SessionError> {
        credentials.check_present()?;
        if credentials.password != credentials.confirm_password {
            return Err(SessionError::PasswordMismatch);
        }
        Ok(())
    }

    /// Drop the token, the profile and the account's pets
    pub fn sign_out<S: StorageBackend>(&mut self, storage: &S) {
        for key in [keys::AUTH_TOKEN, keys::USER_PROFILE, keys::ACCOUNT_PETS] {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Failed to remove {}: {}", key, e);
            }
        }
        self.auth_token = None;
        self.profile = UserProfile::default();
        log::info!("Signed out");
    }

    pub fn save_profile<S: StorageBackend>(
        &mut self,
        storage: &S,
        profile: UserProfile,
    ) -> Result<(), SessionError> {
        let json = serde_json::to_string(&profile)
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        storage.set_item(keys::USER_PROFILE, &json)?;
        self.profile = profile;
        Ok(())
    }
}

fn read_token<S: StorageBackend>(storage: &S) -> Option<String> {
    storage
        .get_item(keys::AUTH_TOKEN)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStorage;

    fn credentials(email: &str, password: &str, confirm: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let storage = MemoryStorage::new();
        let mut session = Session::init(&storage);
        assert!(!session.is_authenticated());

        let err = session
            .sign_in(&storage, &credentials("a@b.c", "", ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required.");
        assert!(storage.get_item(keys::AUTH_TOKEN).is_none());

        session
            .sign_in(&storage, &credentials("a@b.c", "secret", ""))
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(storage.get_item(keys::AUTH_TOKEN).as_deref(), Some(DEMO_TOKEN));
    }

    #[test]
    fn test_sign_up_checks_confirmation() {
        assert_eq!(
            Session::sign_up(&credentials("a@b.c", "one", "two")),
            Err(SessionError::PasswordMismatch)
        );
        assert!(Session::sign_up(&credentials("a@b.c", "one", "one")).is_ok());
    }

    #[test]
    fn test_sign_out_clears_account_keys() {
        let storage = MemoryStorage::new();
        let mut session = Session::init(&storage);
        session
            .sign_in(&storage, &credentials("a@b.c", "pw", ""))
            .unwrap();
        session
            .save_profile(
                &storage,
                UserProfile {
                    name: "Ada".into(),
                    email: "ada@example.com".into(),
                },
            )
            .unwrap();
        storage.set_item(keys::ACCOUNT_PETS, "[]").unwrap();
        storage.set_item(keys::TRACKER_PETS, "[]").unwrap();

        session.sign_out(&storage);
        assert!(!session.is_authenticated());
        assert_eq!(session.profile(), &UserProfile::default());
        assert!(storage.get_item(keys::USER_PROFILE).is_none());
        assert!(storage.get_item(keys::ACCOUNT_PETS).is_none());
        assert!(storage.get_item(keys::TRACKER_PETS).is_some());
    }

    #[test]
    fn test_profile_survives_restart() {
        let storage = MemoryStorage::new();
        let mut session = Session::init(&storage);
        assert_eq!(session.profile().name, "John Doe");

        let profile = UserProfile {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        session.save_profile(&storage, profile.clone()).unwrap();
        assert_eq!(Session::init(&storage).profile(), &profile);

        storage.set_item(keys::USER_PROFILE, "oops").unwrap();
        assert_eq!(Session::init(&storage).profile(), &UserProfile::default());
    }

    #[test]
    fn test_refresh_auth_reports_change() {
        let storage = MemoryStorage::new();
        let mut session = Session::init(&storage);
        assert!(!session.refresh_auth(&storage));

        storage.set_item(keys::AUTH_TOKEN, DEMO_TOKEN).unwrap();
        assert!(session.refresh_auth(&storage));
        assert!(session.is_authenticated());
    }
}
