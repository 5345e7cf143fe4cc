use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::{FormFields, ValidationError};
use crate::notice::{Notice, NoticeSink};

use super::{KeyValueStore, StoreError};

pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";

pub const DEFAULT_USER_NAME: &str = "User Name";
pub const DEFAULT_USER_EMAIL: &str = "user@example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    Store(StoreError),
    Validation(ValidationError),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Store(err) => write!(f, "profile storage error: {}", err),
            ProfileError::Validation(err) => write!(f, "invalid profile: {}", err),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::Store(err) => Some(err),
            ProfileError::Validation(err) => Some(err),
        }
    }
}

impl From<StoreError> for ProfileError {
    fn from(err: StoreError) -> Self {
        ProfileError::Store(err)
    }
}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        ProfileError::Validation(err)
    }
}

/// Display name and email shown in the account menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_USER_NAME.to_string(),
            email: DEFAULT_USER_EMAIL.to_string(),
        }
    }
}

impl ProfileSettings {
    pub const NAME: &'static str = "name";
    pub const EMAIL: &'static str = "email";

    /// Read from `store`, falling back to the defaults per missing key.
    pub fn load<K: KeyValueStore + ?Sized>(store: &K) -> Result<Self, ProfileError> {
        let defaults = Self::default();
        Ok(Self {
            name: store.get(USER_NAME_KEY)?.unwrap_or(defaults.name),
            email: store.get(USER_EMAIL_KEY)?.unwrap_or(defaults.email),
        })
    }

    pub fn save<K: KeyValueStore + ?Sized>(&self, store: &K) -> Result<(), ProfileError> {
        store.set(USER_NAME_KEY, &self.name)?;
        store.set(USER_EMAIL_KEY, &self.email)?;
        Ok(())
    }

    /// Parse the settings form; both fields must be non-blank.
    pub fn from_form(form: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            name: form.required_text(Self::NAME)?,
            email: form.required_text(Self::EMAIL)?,
        })
    }
}

/// Settings-screen save: parse the form, persist it, then notify.
///
/// Nothing is written when the form is invalid.
pub fn update_profile<K, S>(
    store: &K,
    form: &FormFields,
    notices: &mut S,
) -> Result<ProfileSettings, ProfileError>
where
    K: KeyValueStore + ?Sized,
    S: NoticeSink,
{
    let profile = ProfileSettings::from_form(form)?;
    profile.save(store)?;
    tracing::debug!("profile saved");
    if let Err(e) = notices.deliver(&Notice::ProfileSaved) {
        tracing::warn!(error = %e, "notice delivery failed");
    }
    Ok(profile)
}
