//! Derived grid views. Never stored; recomputed per render.

use crate::model::project::ProjectStatus;
use serde::Serialize;
use std::collections::BTreeSet;

/// Week-local day index, `0 = Monday` .. `4 = Friday`.
pub type DayIndex = u8;

/// One assignment resolved for a single employee/day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemView {
    /// Assignment id.
    pub id: String,
    /// Project reference as stored on the assignment.
    pub project_id: String,
    /// Project name, or the raw project reference when unresolved.
    pub title: String,
    /// Visual category from the status palette.
    pub color: String,
    pub status: ProjectStatus,
}

/// Assignments of one project projected onto a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Project reference shared by the grouped assignments.
    pub id: String,
    pub title: String,
    pub color: String,
    pub days: BTreeSet<DayIndex>,
    /// Employee ids in first-appearance order, without duplicates.
    pub assigned_employee_ids: Vec<String>,
}

impl WorkItem {
    pub fn is_active_on(&self, day: DayIndex) -> bool {
        self.days.contains(&day)
    }

    pub fn first_day(&self) -> Option<DayIndex> {
        self.days.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::WorkItem;
    use std::collections::BTreeSet;

    #[test]
    fn day_queries_follow_the_day_set() {
        let item = WorkItem {
            id: "3001".to_string(),
            title: "Rathaus".to_string(),
            color: "bg-secondary".to_string(),
            days: BTreeSet::from([3, 1]),
            assigned_employee_ids: vec!["1001".to_string()],
        };
        assert!(item.is_active_on(1));
        assert!(item.is_active_on(3));
        assert!(!item.is_active_on(2));
        assert_eq!(item.first_day(), Some(1));

        let idle = WorkItem {
            days: BTreeSet::new(),
            ..item
        };
        assert!(!idle.is_active_on(0));
        assert_eq!(idle.first_day(), None);
    }
}
