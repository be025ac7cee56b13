//! The fixed expense category set
//!
//! Categories form a closed set; the entry form offers exactly these
//! choices and the ledger rejects anything else.

use std::fmt;
use std::str::FromStr;

use crate::error::OutlayError;

/// An expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Bills,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Get the name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = OutlayError;

    /// Case-insensitive lookup over the closed set
    ///
    /// Empty and unknown names both count as a missing category: the
    /// selector only offers valid names, so anything else means nothing
    /// was picked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(OutlayError::missing_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_display_order() {
        let names: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Food",
                "Transport",
                "Shopping",
                "Bills",
                "Entertainment",
                "Other"
            ]
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" TRANSPORT ".parse::<Category>().unwrap(), Category::Transport);
    }

    #[test]
    fn test_parse_rejects_empty_and_unknown() {
        assert!(matches!(
            "".parse::<Category>(),
            Err(OutlayError::MissingField("category"))
        ));
        assert!(matches!(
            "Groceries".parse::<Category>(),
            Err(OutlayError::MissingField("category"))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Entertainment.to_string(), "Entertainment");
    }
}
