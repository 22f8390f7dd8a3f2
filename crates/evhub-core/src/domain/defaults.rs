//! Sentinel "default" rows used as fallback foreign-key targets

use serde::{Deserialize, Serialize};

/// Tables that carry a lazily created default row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultKind {
    Venue,
    Group,
    SubGroup,
}

impl DefaultKind {
    pub const ALL: [DefaultKind; 3] = [DefaultKind::Venue, DefaultKind::Group, DefaultKind::SubGroup];

    /// Value of the name column that marks the default row.
    pub fn sentinel(&self) -> &'static str {
        match self {
            DefaultKind::Venue => "default venue",
            DefaultKind::Group => "default group",
            DefaultKind::SubGroup => "default subgroup",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            DefaultKind::Venue => "venues",
            DefaultKind::Group => "groups",
            DefaultKind::SubGroup => "subgroups",
        }
    }

    pub fn name_column(&self) -> &'static str {
        match self {
            DefaultKind::Venue => "venue_name",
            DefaultKind::Group => "group_name",
            DefaultKind::SubGroup => "display_name",
        }
    }

    pub fn entity(&self) -> &'static str {
        match self {
            DefaultKind::Venue => "Venue",
            DefaultKind::Group => "Group",
            DefaultKind::SubGroup => "SubGroup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_distinct() {
        let names: Vec<_> = DefaultKind::ALL.iter().map(|k| k.sentinel()).collect();
        assert_eq!(names, ["default venue", "default group", "default subgroup"]);
    }
}
