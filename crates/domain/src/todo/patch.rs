//! Three-state optional value for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Patch
// =============================================================================

/// A field in a partial update.
///
/// JSON distinguishes a missing key from an explicit `null`, and a plain
/// `Option` loses that distinction. Fields of this type must carry
/// `#[serde(default)]` so that a missing key becomes [`Patch::Absent`].
///
/// # Examples
///
/// ```
/// use listy_domain::Patch;
///
/// let mut value = 1;
/// Patch::Value(5).apply_to(&mut value);
/// assert_eq!(value, 5);
///
/// Patch::<i32>::Absent.apply_to(&mut value);
/// assert_eq!(value, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not sent; keep the stored value.
    Absent,
    /// The key was sent as `null`.
    Null,
    /// The key was sent with a value.
    Value(T),
}

impl<T> Patch<T> {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Writes the value into a non-nullable target.
    ///
    /// `Null` cannot clear a required field, so it is treated like `Absent`.
    pub fn apply_to(self, target: &mut T) {
        if let Self::Value(value) = self {
            *target = value;
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================
