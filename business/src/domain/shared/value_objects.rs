use serde::{Deserialize, Serialize};

/// Opaque identifier of the cart owner. Used verbatim as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier cannot address a cart.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_identifier_verbatim() {
        let user_id = UserId::new("  user:42 ");
        assert_eq!(user_id.as_str(), "  user:42 ");
        assert_eq!(format!("{}", user_id), "  user:42 ");
    }

    #[test]
    fn should_report_blank_only_for_empty_identifier() {
        assert!(UserId::new("").is_blank());
        assert!(!UserId::new(" ").is_blank());
        assert!(!UserId::new("1").is_blank());
    }

    #[test]
    fn should_convert_from_owned_and_borrowed_strings() {
        let owned: UserId = "same-user".to_string().into();
        let borrowed: UserId = "same-user".into();

        assert_eq!(owned, borrowed);
        assert_ne!(owned, UserId::new("other-user"));
    }
}
