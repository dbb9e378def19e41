//! Catalog sort parameters.

use serde::{Deserialize, Serialize};

/// Field to sort a product listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Product name, compared case-insensitively.
    Name,
    /// Unit price.
    Price,
    /// Storage capacity label (e.g., "64GB"), compared case-insensitively.
    Storage,
}

/// Direction for a product listing sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "storage" => Ok(Self::Storage),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("rating".parse::<SortKey>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_default_order_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }
}
