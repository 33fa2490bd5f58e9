use crate::constants::key;
use thiserror::Error;

/// Filter configuration used by [`crate::EnvironmentFactory`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentOptions {
    /// Extra server keys to retain on top of the standard set and `HTTP_*` headers.
    pub additional_keys: Vec<String>,
}

impl EnvironmentOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for name in &self.additional_keys {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyAdditionalKey);
            }

            if name == key::COOKIE_HASH {
                return Err(ValidationError::ReservedAdditionalKey(name.clone()));
            }
        }

        Ok(())
    }

    pub(crate) fn retains(&self, name: &str) -> bool {
        self.additional_keys.iter().any(|allowed| allowed == name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("additional keys must not be empty or whitespace")]
    EmptyAdditionalKey,
    #[error("additional key '{0}' is reserved and populated from cookie data")]
    ReservedAdditionalKey(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
