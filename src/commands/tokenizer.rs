//! Tokenizer and binder for ex command arguments.
//!
//! Argument text is split on single spaces after collapsing longer runs of
//! spaces. There is no quoting. Tokens are then bound positionally to the
//! parameter names a command declares.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from parameter name to argument token.
///
/// Iteration follows the command's parameter declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    pairs: Vec<(String, String)>,
}

impl ArgMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the token bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if `name` has a bound token.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(name, token)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over bound parameter names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ArgMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Serialize for ArgMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Collapses every run of two or more spaces into a single space.
///
/// Only the space character is affected; tabs are left as they are.
pub fn collapse_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_space = false;

    for c in text.chars() {
        if c == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        result.push(c);
    }

    result
}

/// Splits argument text into tokens.
///
/// Runs of spaces are collapsed first, then the text is split on each single
/// space. Empty text yields one empty token, and leading or trailing spaces
/// yield empty tokens at the edges.
pub fn split_args(arg_text: &str) -> Vec<String> {
    collapse_spaces(arg_text)
        .split(' ')
        .map(str::to_string)
        .collect()
}

/// Binds tokens to parameter names pairwise, in order.
///
/// Binding stops at the shorter of the two sequences: surplus tokens are
/// dropped and surplus names stay unbound.
pub fn bind_args<P: AsRef<str>>(params: &[P], tokens: &[String]) -> ArgMap {
    params
        .iter()
        .zip(tokens)
        .map(|(name, token)| {
            let name: &str = name.as_ref();
            (name, token.as_str())
        })
        .collect()
}
