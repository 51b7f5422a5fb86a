//! Error taxonomy for the simulation core.
//!
//! Nothing here is fatal. Callers that go through the permissive entry
//! points (`GameStore::update_item_level`, `Settings::set`) never see these;
//! the `try_*` variants hand them back for callers that want to know.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("item index {index} out of range (list has {len} items)")]
    InvalidIndex { index: usize, len: usize },

    #[error("invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}

impl CoreError {
    pub fn invalid_setting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = CoreError::InvalidIndex { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "item index 7 out of range (list has 3 items)"
        );
    }

    #[test]
    fn test_invalid_setting_message() {
        let err = CoreError::invalid_setting("time", "not a number");
        assert_eq!(err.to_string(), "invalid setting time: not a number");
    }
}
