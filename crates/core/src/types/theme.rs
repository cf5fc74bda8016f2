//! Colour scheme preference.

use serde::{Deserialize, Serialize};

/// Page colour scheme.
///
/// Persisted as the text flag `"true"` (dark) or `"false"` (light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Scheme for a stored dark-mode flag. Anything but `"true"` is light.
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        if flag == "true" { Self::Dark } else { Self::Light }
    }

    /// Stored dark-mode flag for this scheme.
    #[must_use]
    pub const fn as_flag(&self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    /// Whether this is the dark scheme.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid color scheme: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping() {
        assert_eq!(ColorScheme::from_flag("true"), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_flag("false"), ColorScheme::Light);
        assert_eq!(ColorScheme::from_flag("TRUE"), ColorScheme::Light);
        assert_eq!(ColorScheme::Dark.as_flag(), "true");
        assert_eq!(ColorScheme::Light.as_flag(), "false");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Light.to_string(), "light");
        assert!("dim".parse::<ColorScheme>().is_err());
    }
}
