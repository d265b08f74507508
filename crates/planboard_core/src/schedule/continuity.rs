//! Visual continuity of multi-day work items.
//!
//! A work item rendered on day `d` connects to its neighbours when `d-1` or
//! `d+1` are in its day set. An occurrence after a gap, with earlier days in
//! the same week, is a resumption rather than a fresh start.

use crate::model::employee::Employee;
use crate::model::work_item::{DayIndex, WorkItem};
use crate::schedule::board::EmployeeDirectory;
use serde::Serialize;
use std::collections::BTreeSet;

/// How many co-assignee badges a cell shows before collapsing into `+N`.
pub const DEFAULT_CO_ASSIGNEE_LIMIT: usize = 2;

/// Rendering hints for one work item on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuityHints {
    pub is_first_day: bool,
    pub continues_from_previous: bool,
    pub continues_to_next: bool,
    pub is_paused_and_resumed: bool,
}

/// Computes continuity hints for `day` against an item's day set.
pub fn analyze_continuity(days: &BTreeSet<DayIndex>, day: DayIndex) -> ContinuityHints {
    let is_first_day = days.first() == Some(&day);
    let continues_from_previous = day
        .checked_sub(1)
        .is_some_and(|previous| days.contains(&previous));
    let continues_to_next = day
        .checked_add(1)
        .is_some_and(|next| days.contains(&next));
    let has_earlier_day = days.range(..day).next().is_some();

    ContinuityHints {
        is_first_day,
        continues_from_previous,
        continues_to_next,
        is_paused_and_resumed: has_earlier_day && !continues_from_previous && !is_first_day,
    }
}

/// Other employees on `item`, resolved through `directory`.
///
/// Ids that do not resolve are dropped silently.
pub fn co_assignees<'d, D>(item: &WorkItem, current_employee_id: &str, directory: &'d D) -> Vec<&'d Employee>
where
    D: EmployeeDirectory + ?Sized,
{
    let current = directory.find_employee(current_employee_id);
    item.assigned_employee_ids
        .iter()
        .filter(|id| id.as_str() != current_employee_id)
        .filter_map(|id| directory.find_employee(id))
        .filter(|employee| current.map_or(true, |current| current.id != employee.id))
        .collect()
}

/// One co-assignee badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoAssignee {
    pub id: String,
    pub name: String,
    pub initial: Option<char>,
}

/// Capped co-assignee display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoAssigneeSummary {
    pub shown: Vec<CoAssignee>,
    /// Count collapsed into the `+N` badge.
    pub overflow: usize,
    /// All co-assignee names, for the tooltip.
    pub names: Vec<String>,
}

impl CoAssigneeSummary {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `+N` badge text, if anything overflowed.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }

    /// Tooltip line, e.g. `Ebenfalls zugewiesen: Anna, Max`.
    pub fn also_assigned_label(&self) -> Option<String> {
        (!self.names.is_empty()).then(|| format!("Ebenfalls zugewiesen: {}", self.names.join(", ")))
    }
}

/// Caps `employees` to `limit` badges and counts the rest.
pub fn summarize_co_assignees(employees: &[&Employee], limit: usize) -> CoAssigneeSummary {
    CoAssigneeSummary {
        shown: employees
            .iter()
            .take(limit)
            .map(|employee| CoAssignee {
                id: employee.id.clone(),
                name: employee.name.clone(),
                initial: employee.initial(),
            })
            .collect(),
        overflow: employees.len().saturating_sub(limit),
        names: employees.iter().map(|employee| employee.name.clone()).collect(),
    }
}
