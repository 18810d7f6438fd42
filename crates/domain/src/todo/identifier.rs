//! Identifier value objects for todos and lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Selector name that addresses todos without a list.
pub const MAIN_LIST: &str = "main";

// =============================================================================
// TodoIdentifier
// =============================================================================

/// Numeric identifier of a todo.
///
/// Identifiers are assigned as `max + 1` over the whole collection, so they
/// are unique but not guaranteed to be contiguous.
///
/// # Examples
///
/// ```
/// use listy_domain::TodoIdentifier;
///
/// let identifier: TodoIdentifier = "42".parse().unwrap();
/// assert_eq!(identifier.value(), 42);
/// assert_eq!(identifier.next().value(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoIdentifier(u64);

impl TodoIdentifier {
    /// Identifier handed out when the collection is empty.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for TodoIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for TodoIdentifier {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|value| *value > 0)
            .map(Self)
            .ok_or_else(|| ValidationError::invalid_format("id", "a positive integer"))
    }
}

impl From<u64> for TodoIdentifier {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// =============================================================================
// ListIdentifier
// =============================================================================

/// Name of the list a todo belongs to.
///
/// Todos without a list live on the implicit "main" list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListIdentifier(String);

impl ListIdentifier {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Interprets a path or command selector.
    ///
    /// An empty selector or [`MAIN_LIST`] selects the main list and yields
    /// `None`; anything else names a list.
    ///
    /// # Examples
    ///
    /// ```
    /// use listy_domain::ListIdentifier;
    ///
    /// assert_eq!(ListIdentifier::from_selector("main"), None);
    /// assert_eq!(ListIdentifier::from_selector(""), None);
    /// assert_eq!(
    ///     ListIdentifier::from_selector("groceries"),
    ///     Some(ListIdentifier::new("groceries"))
    /// );
    /// ```
    #[must_use]
    pub fn from_selector(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        if selector.is_empty() || selector == MAIN_LIST {
            None
        } else {
            Some(Self::new(selector))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ListIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for ListIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Tests
// =============================================================================
