use std::env;

/// Cart engine behaviour switches
#[derive(Debug, Clone, Default)]
pub struct CartConfig {
    /// Serialize add/remove calls per user inside this process.
    pub serialize_mutations: bool,
}

impl CartConfig {
    /// Environment variables:
    /// - CART_SERIALIZE_MUTATIONS: "true"/"1" to enable (default: disabled)
    pub fn from_env() -> Self {
        Self {
            serialize_mutations: env::var("CART_SERIALIZE_MUTATIONS")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_common_truthy_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(parse_flag("on"));
    }

    #[test]
    fn should_treat_anything_else_as_disabled() {
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("enabled"));
    }
}
