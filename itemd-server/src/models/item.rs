//! Item name validation

use super::ValidationError;

/// Validated item name (required, non-empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name, rejecting the empty string.
    ///
    /// No length cap; names of arbitrary size are stored as-is.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_empty_name() {
        assert!(ItemName::new("Test Item").is_ok());
        assert!(ItemName::new("x").is_ok());
        assert!(ItemName::new(&"long ".repeat(1000)).is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = ItemName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn round_trips_inner_string() {
        let name = ItemName::new("widget").unwrap();
        assert_eq!(name.as_str(), "widget");
        assert_eq!(name.into_string(), "widget");
    }
}
