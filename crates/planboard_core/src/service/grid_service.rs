//! Week grid render model.
//!
//! # Responsibility
//! - Combine week resolution, cell resolution, continuity analysis and
//!   co-assignee summaries into one serializable grid.
//!
//! # Invariants
//! - One row per active employee, in board order.
//! - Every row has exactly five cells, Monday first.
//! - Cell entries keep assignment insertion order.

use crate::config::PlannerConfig;
use crate::model::employee::Employee;
use crate::model::work_item::{DayIndex, WorkItem, WorkItemView};
use crate::schedule::board::PlanningBoard;
use crate::schedule::continuity::{
    analyze_continuity, co_assignees, summarize_co_assignees, CoAssigneeSummary,
    ContinuityHints, DEFAULT_CO_ASSIGNEE_LIMIT,
};
use crate::schedule::week::{week_days, WeekDay};
use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Grid build failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested week lies outside the representable calendar.
    WeekOutOfRange { today: NaiveDate, week_offset: i32 },
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeekOutOfRange { today, week_offset } => write!(
                f,
                "week offset {week_offset} from {today} leaves the supported date range"
            ),
        }
    }
}

impl Error for GridError {}

/// One resolved assignment inside a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellEntry {
    pub item: WorkItemView,
    pub continuity: ContinuityHints,
    pub co_assignees: CoAssigneeSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub index: DayIndex,
    pub date: NaiveDate,
    pub is_today: bool,
    pub entries: Vec<CellEntry>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub employee_id: String,
    pub employee_name: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    pub week_offset: i32,
    pub days: Vec<WeekDay>,
    /// Column of today, when today is a visible business day.
    pub today_index: Option<DayIndex>,
    pub rows: Vec<GridRow>,
}

/// Builds week grids over one board.
pub struct WeekGridService<'a> {
    board: &'a PlanningBoard,
    co_assignee_limit: usize,
}

impl<'a> WeekGridService<'a> {
    pub fn new(board: &'a PlanningBoard, config: &PlannerConfig) -> Self {
        Self {
            board,
            co_assignee_limit: config.co_assignee_display_limit,
        }
    }

    /// Service with the default co-assignee limit.
    pub fn with_defaults(board: &'a PlanningBoard) -> Self {
        Self {
            board,
            co_assignee_limit: DEFAULT_CO_ASSIGNEE_LIMIT,
        }
    }

    /// # Errors
    /// - [`GridError::WeekOutOfRange`] when the shifted week has no
    ///   representable dates.
    pub fn build_week_grid(&self, today: NaiveDate, week_offset: i32) -> Result<WeekGrid, GridError> {
        let started_at = Instant::now();
        let Some(days) = week_days(today, week_offset) else {
            warn!(
                "event=week_grid_built module=service status=error reason=week_out_of_range week_offset={}",
                week_offset
            );
            return Err(GridError::WeekOutOfRange { today, week_offset });
        };
        let dates: Vec<NaiveDate> = days.iter().map(|day| day.date).collect();
        let today_index = days.iter().find(|day| day.is_today).map(|day| day.index);

        let rows: Vec<GridRow> = self
            .board
            .active_employees()
            .map(|employee| self.build_row(employee, &days, &dates))
            .collect();

        info!(
            "event=week_grid_built module=service status=ok week_offset={} rows={} entries={} duration_ms={}",
            week_offset,
            rows.len(),
            rows.iter()
                .flat_map(|row| &row.cells)
                .map(|cell| cell.entries.len())
                .sum::<usize>(),
            started_at.elapsed().as_millis()
        );

        Ok(WeekGrid {
            week_offset,
            days,
            today_index,
            rows,
        })
    }

    fn build_row(&self, employee: &Employee, days: &[WeekDay], dates: &[NaiveDate]) -> GridRow {
        let items = self.board.work_items_for_week(dates, Some(&employee.id));
        let cells = days
            .iter()
            .map(|day| GridCell {
                index: day.index,
                date: day.date,
                is_today: day.is_today,
                entries: self
                    .board
                    .resolve_work_items_for_cell(&employee.id, day.date)
                    .into_iter()
                    .map(|view| self.build_entry(view, employee, day.index, &items))
                    .collect(),
            })
            .collect();

        GridRow {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            cells,
        }
    }

    fn build_entry(
        &self,
        view: WorkItemView,
        employee: &Employee,
        day: DayIndex,
        items: &[WorkItem],
    ) -> CellEntry {
        let project_id = self.board.canonical_project_id(&view.project_id);
        let (continuity, summary) = match items.iter().find(|item| item.id == project_id) {
            Some(item) => {
                let others = co_assignees(item, &employee.id, self.board);
                (
                    analyze_continuity(&item.days, day),
                    summarize_co_assignees(&others, self.co_assignee_limit),
                )
            }
            None => (ContinuityHints::default(), CoAssigneeSummary::default()),
        };
        CellEntry {
            item: view,
            continuity,
            co_assignees: summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GridError, WeekGridService};
    use crate::model::assignment::{
        Assignment, AssignmentPeriod, AssignmentSource, AssignmentSyncStatus,
    };
    use crate::model::employee::Employee;
    use crate::schedule::board::PlanningBoard;
    use chrono::NaiveDate;

    fn employee(id: &str, active: bool) -> Employee {
        Employee {
            id: id.to_string(),
            external_reference: format!("/v1/contacts/{id}"),
            name: format!("Person {id}"),
            skills: Vec::new(),
            home_location: "Köln".to_string(),
            primary_calendar_url: String::new(),
            absence_calendar_url: String::new(),
            active,
        }
    }

    #[test]
    fn inactive_employees_get_no_row() {
        let board = PlanningBoard::new(
            vec![employee("1", true), employee("2", false)],
            Vec::new(),
            vec![Assignment {
                id: "a".to_string(),
                employee_id: "1".to_string(),
                project_id: "p".to_string(),
                period: AssignmentPeriod::new("2026-01-27", "2026-01-27"),
                source: AssignmentSource::Manual,
                sync_status: AssignmentSyncStatus::Pending,
            }],
        );
        let today = NaiveDate::from_ymd_opt(2026, 1, 27).expect("valid date");
        let grid = WeekGridService::with_defaults(&board)
            .build_week_grid(today, 0)
            .expect("current week is in range");

        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.today_index, Some(1));
        assert_eq!(grid.rows[0].cells.len(), 5);
        assert_eq!(grid.rows[0].cells[1].entries.len(), 1);
        assert!(grid.rows[0].cells[1].entries[0].continuity.is_first_day);
        assert!(grid.rows[0].cells[0].is_empty());
    }

    #[test]
    fn extreme_offsets_are_reported_not_panicked() {
        let board = PlanningBoard::new(vec![employee("1", true)], Vec::new(), Vec::new());
        let today = NaiveDate::from_ymd_opt(2026, 1, 28).expect("valid date");
        let service = WeekGridService::with_defaults(&board);

        let err = service.build_week_grid(today, 20_000_000).unwrap_err();
        assert_eq!(
            err,
            GridError::WeekOutOfRange {
                today,
                week_offset: 20_000_000
            }
        );
        assert!(err.to_string().contains("20000000"));
        assert!(service.build_week_grid(today, i32::MIN).is_err());
    }
}
