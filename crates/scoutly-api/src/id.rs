// ── Entity identity ──
//
// The backend issues UUIDs, but fixtures and older records carry opaque
// string keys. EntityId accepts both so path building never cares.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Canonical identifier for any backend entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Uuid(Uuid),
    Opaque(String),
}

impl EntityId {
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            Self::Opaque(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Opaque(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<Uuid> for EntityId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        match Uuid::parse_str(&s) {
            Ok(u) => Self::Uuid(u),
            Err(_) => Self::Opaque(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn uuid_strings_parse_as_uuid() {
        let raw = "6f1c2a0e-8d4b-4a57-9d0e-3c1f6b2e9a10";
        let id = EntityId::from(raw);
        assert!(id.as_uuid().is_some());
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn other_strings_stay_opaque() {
        let id: EntityId = "p1".parse().unwrap();
        assert_eq!(id, EntityId::Opaque("p1".into()));
        assert!(id.as_uuid().is_none());
    }

    #[test]
    fn deserializes_untagged() {
        let id: EntityId = serde_json::from_str("\"p1\"").unwrap();
        assert_eq!(id.to_string(), "p1");
    }
}
