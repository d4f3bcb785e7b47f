//! Contact-name validation — raw input → tri-state validity.
//!
//! Rules run in a fixed order and the first broken one wins, so the UI always
//! shows the most specific complaint. An empty field only counts as an error
//! once the user has touched it; before that it reports [`NameStatus::Undetermined`]
//! so the indicator can stay neutral.

use thiserror::Error;

/// Maximum accepted name length, in characters.
pub const MAX_NAME_LEN: usize = 22;

/// Tri-state validity signal consumed by the form's status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStatus {
    /// Name passed every rule.
    Valid,
    /// Name broke a rule; [`NameCheck::error`] says which.
    Invalid,
    /// Empty field the user has not touched yet.
    Undetermined,
}

/// Why a name was rejected. The display strings are shown verbatim in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// Names that look like raw addresses are rejected outright.
    #[error("The name cannot start with `0x`")]
    HexPrefix,
    #[error("The name cannot be longer than {} characters", MAX_NAME_LEN)]
    TooLong,
    /// A dot would collide with ENS-style labels.
    #[error("The name must not contain `.`")]
    ContainsDot,
    #[error("The name cannot be empty")]
    Empty,
}

/// Outcome of running a name through the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameCheck {
    /// Tri-state signal for the indicator component.
    pub status: NameStatus,
    /// Set exactly when `status` is [`NameStatus::Invalid`].
    pub error: Option<NameError>,
}

impl NameCheck {
    pub fn is_valid(&self) -> bool {
        self.status == NameStatus::Valid
    }

    /// User-facing message for the error label, if the name was rejected.
    pub fn message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    fn invalid(error: NameError) -> Self {
        NameCheck {
            status: NameStatus::Invalid,
            error: Some(error),
        }
    }

    fn clean(status: NameStatus) -> Self {
        NameCheck {
            status,
            error: None,
        }
    }
}

/// Run `input` through the name rules.
///
/// Pure function of `(input, touched)`; always returns, never panics.
pub fn check_name(input: &str, touched: bool) -> NameCheck {
    check_name_with(input, touched, |_| {})
}

/// Same as [`check_name`], additionally feeding the computed status to the
/// caller's indicator callback before returning.
pub fn check_name_with(
    input: &str,
    touched: bool,
    mut sink: impl FnMut(NameStatus),
) -> NameCheck {
    let check = if input.starts_with("0x") {
        NameCheck::invalid(NameError::HexPrefix)
    } else if input.chars().count() > MAX_NAME_LEN {
        NameCheck::invalid(NameError::TooLong)
    } else if input.contains('.') {
        NameCheck::invalid(NameError::ContainsDot)
    } else if touched && input.is_empty() {
        NameCheck::invalid(NameError::Empty)
    } else if input.is_empty() {
        NameCheck::clean(NameStatus::Undetermined)
    } else {
        NameCheck::clean(NameStatus::Valid)
    };

    sink(check.status);
    check
}
