//! URL form-state serialization — ordered key→value state → query fragment.
//!
//! The fragment feeds the router's address-bar replacement, so the contract
//! is "never emit something malformed": entries that can't be represented are
//! silently dropped rather than reported. Percent-encoding is applied once to
//! the fully joined string, which is why the structural `&`, `=` and `,`
//! separators survive while spaces and the rest get escaped.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Everything `encodeURI` leaves alone besides alphanumerics: the mark
/// characters plus the URI-reserved separators.
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// A value the frontend can reflect into the address bar.
///
/// The untagged serde shape mirrors the plain JSON objects the state comes
/// from: `true`, `3`, `0.5`, `"usdc"`, `[1, 10, 137]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Flag(bool),
    /// Integer amounts (token IDs, chain IDs, raw wei-style quantities).
    Big(i128),
    Num(f64),
    Text(String),
    List(Vec<QueryValue>),
}

impl QueryValue {
    /// Loose truthiness inherited from the original frontend: falsy values
    /// drop out of the fragment entirely. Numeric zero is falsy too, so a
    /// meaningful `slippage=0` never serializes. Observed behavior, kept.
    fn is_falsy(&self) -> bool {
        match self {
            QueryValue::Flag(b) => !b,
            QueryValue::Big(n) => *n == 0,
            QueryValue::Num(n) => *n == 0.0 || n.is_nan(),
            QueryValue::Text(s) => s.is_empty(),
            QueryValue::List(items) => items.is_empty(),
        }
    }

    fn is_scalar(&self) -> bool {
        !matches!(self, QueryValue::List(_))
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Flag(b) => write!(f, "{b}"),
            QueryValue::Big(n) => write!(f, "{n}"),
            QueryValue::Num(n) => write!(f, "{n}"),
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        QueryValue::Flag(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Text(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Text(v)
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        QueryValue::Num(v)
    }
}

impl From<i32> for QueryValue {
    fn from(v: i32) -> Self {
        QueryValue::Big(v.into())
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Big(v.into())
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Big(v.into())
    }
}

impl From<u64> for QueryValue {
    fn from(v: u64) -> Self {
        QueryValue::Big(v.into())
    }
}

impl From<i128> for QueryValue {
    fn from(v: i128) -> Self {
        QueryValue::Big(v)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(items: Vec<T>) -> Self {
        QueryValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Insertion-ordered form state destined for the address bar.
///
/// [`QueryState::set`] on an existing key replaces the value in place and
/// keeps the key's original position, matching plain-object assignment in the
/// original frontend. Iteration and serialization follow insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    entries: Vec<(String, QueryValue)>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, or replace its value in place if already present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to a query fragment, without the leading `?`.
    ///
    /// Falsy entries and lists not headed by a scalar are skipped; surviving
    /// lists join their elements with `,`. The joined `k=v&k2=v2` string is
    /// percent-encoded once at the end.
    pub fn to_fragment(&self) -> String {
        let mut parts = Vec::new();
        for (key, value) in &self.entries {
            if value.is_falsy() {
                tracing::trace!("Skipping falsy entry: {}", key);
                continue;
            }
            if let QueryValue::List(items) = value {
                // Nonempty here; only a scalar head makes `k=a,b,c` well formed.
                if !items.first().is_some_and(QueryValue::is_scalar) {
                    tracing::trace!("Skipping list with non-scalar head: {}", key);
                    continue;
                }
            }
            parts.push(format!("{key}={value}"));
        }
        utf8_percent_encode(&parts.join("&"), ENCODE_URI).to_string()
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = QueryState::new();
        for (key, value) in iter {
            state.set(key, value);
        }
        state
    }
}
