//! The finalized narrowing result.

use crate::LocalityCode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Separator placed between selections in a goal path.
pub const GOAL_PATH_SEPARATOR: &str = " > ";

/// Ordered selections plus the locality they apply to.
///
/// # Examples
///
/// ```
/// use concierge_core::{GoalDescriptor, LocalityCode};
///
/// let goal = GoalDescriptor::new(
///     vec!["A".into(), "B".into(), "Cを予約したい".into()],
///     LocalityCode::parse("1010021").unwrap(),
/// );
/// assert_eq!(goal.path(), "A > B > Cを予約したい");
/// assert_eq!(goal.last_segment(), Some("Cを予約したい"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GoalDescriptor {
    /// Selections in the order they were made.
    selections: Vec<String>,
    /// Where the goal should be carried out.
    locality: LocalityCode,
}

impl GoalDescriptor {
    /// Build a descriptor from ordered selections.
    pub fn new(selections: Vec<String>, locality: LocalityCode) -> Self {
        Self {
            selections,
            locality,
        }
    }

    /// Selections joined with [`GOAL_PATH_SEPARATOR`].
    pub fn path(&self) -> String {
        self.selections.join(GOAL_PATH_SEPARATOR)
    }

    /// The most specific selection.
    pub fn last_segment(&self) -> Option<&str> {
        self.selections.last().map(String::as_str)
    }
}
