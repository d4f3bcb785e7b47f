//! Form-state utilities for a wallet-dashboard frontend.
//!
//! Two independent, stateless pieces sit behind the UI's event handlers:
//!
//! ```text
//! keystroke → check_name  → { status, error }   (tri-state indicator + label)
//! form edit → QueryState  → "k=v&k2=a,b"        (address-bar reflection)
//! ```
//!
//! Each is a pure function of its inputs: no I/O, no shared state, no panics.
//! Invalid input is an ordinary return value, never an `Err` or an exception.

pub mod name;
pub mod query;

pub use name::{check_name, check_name_with, NameCheck, NameError, NameStatus, MAX_NAME_LEN};
pub use query::{QueryState, QueryValue};
