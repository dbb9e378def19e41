//! Status enums for document collections.

use serde::{Deserialize, Serialize};

/// Triage status of a contact-form message.
///
/// New messages start as `New`; admins move them through `Read` and
/// `Replied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Read => write!(f, "read"),
            Self::Replied => write!(f, "replied"),
        }
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            _ => Err(format!("invalid contact status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_new() {
        assert_eq!(ContactStatus::default(), ContactStatus::New);
    }

    #[test]
    fn test_round_trip() {
        for status in [ContactStatus::New, ContactStatus::Read, ContactStatus::Replied] {
            assert_eq!(
                status.to_string().parse::<ContactStatus>().unwrap(),
                status
            );
        }
    }
}
