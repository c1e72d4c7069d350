//! Strong type definitions for the Tollbit client.
//!
//! Identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An organization identifier (cuid) issued by Tollbit.
///
/// Supplied at client construction time and immutable for the lifetime of
/// the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(String);

impl OrgId {
    /// Create a new organization id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrgId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrgId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Settlement currency for rates and price ceilings.
///
/// The gateway currently settles in US dollars only; adding a currency is
/// an API change, not a runtime value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollars, in micros.
    #[default]
    Usd,
}

impl Currency {
    /// The wire name of the currency.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_id_display() {
        let org = OrgId::new("org123");
        assert_eq!(org.to_string(), "org123");
        assert_eq!(org.as_str(), "org123");
    }

    #[test]
    fn test_org_id_serde_transparent() {
        let org = OrgId::new("org123");
        assert_eq!(serde_json::to_string(&org).unwrap(), "\"org123\"");
        let back: OrgId = serde_json::from_str("\"org123\"").unwrap();
        assert_eq!(back, org);
    }

    #[test]
    fn test_currency_wire_name() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let back: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(back, Currency::Usd);
    }

    #[test]
    fn test_currency_rejects_unknown() {
        assert!(serde_json::from_str::<Currency>("\"EUR\"").is_err());
        assert!(serde_json::from_str::<Currency>("\"usd\"").is_err());
    }
}
