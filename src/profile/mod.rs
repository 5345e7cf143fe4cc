//! Profile - the two account fields kept in client-side key-value storage.

mod settings;
mod store;

pub use settings::{
    update_profile, ProfileError, ProfileSettings, DEFAULT_USER_EMAIL, DEFAULT_USER_NAME,
    USER_EMAIL_KEY, USER_NAME_KEY,
};
pub use store::{InMemoryKeyValueStore, KeyValueStore, StoreError};
