//! In-memory planning board and per-cell assignment resolution.
//!
//! # Responsibility
//! - Hold one immutable snapshot of employees, projects and assignments.
//! - Resolve cell contents and week-level work item projections.
//!
//! # Invariants
//! - Assignment insertion order is preserved in every result.
//! - References resolve by exact id or exact external reference, never by a
//!   bare trailing number; a dangling reference falls back to itself.
//! - The board is never mutated after construction.

use crate::model::assignment::{format_iso_day, Assignment};
use crate::model::employee::Employee;
use crate::model::project::{Project, ProjectStatus};
use crate::model::work_item::{WorkItem, WorkItemView};
use crate::schedule::palette::StatusPalette;
use crate::schedule::week::day_index_of;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Employee lookup used by co-assignee resolution.
pub trait EmployeeDirectory {
    /// Finds an employee by id or external reference.
    fn find_employee(&self, reference: &str) -> Option<&Employee>;
}

/// One immutable planning snapshot.
#[derive(Debug, Clone)]
pub struct PlanningBoard {
    employees: Vec<Employee>,
    projects: Vec<Project>,
    assignments: Vec<Assignment>,
    employee_index: HashMap<String, usize>,
    project_index: HashMap<String, usize>,
    /// Canonical employee id per assignment, same order as `assignments`.
    assignment_employee_ids: Vec<String>,
    palette: StatusPalette,
}

impl PlanningBoard {
    /// Builds a board with the default status palette.
    pub fn new(employees: Vec<Employee>, projects: Vec<Project>, assignments: Vec<Assignment>) -> Self {
        Self::with_palette(employees, projects, assignments, StatusPalette::default())
    }

    pub fn with_palette(
        employees: Vec<Employee>,
        projects: Vec<Project>,
        assignments: Vec<Assignment>,
        palette: StatusPalette,
    ) -> Self {
        let employee_index = build_index(
            employees
                .iter()
                .map(|employee| (employee.id.as_str(), employee.external_reference.as_str())),
        );
        let project_index = build_index(
            projects
                .iter()
                .map(|project| (project.id.as_str(), project.external_reference.as_str())),
        );

        let mut board = Self {
            employees,
            projects,
            assignments,
            employee_index,
            project_index,
            assignment_employee_ids: Vec::new(),
            palette,
        };
        board.assignment_employee_ids = board
            .assignments
            .iter()
            .map(|assignment| board.canonical_employee_id(&assignment.employee_id))
            .collect();
        board
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Employees that get a grid row.
    pub fn active_employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|employee| employee.active)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn palette(&self) -> &StatusPalette {
        &self.palette
    }

    /// Finds a project by id or external reference.
    pub fn find_project(&self, reference: &str) -> Option<&Project> {
        lookup(&self.project_index, reference).map(|index| &self.projects[index])
    }

    /// Assignments of `employee_id` active on `day`, in insertion order.
    ///
    /// `employee_id` may be an id or a full contact reference.
    pub fn resolve_work_items_for_cell(&self, employee_id: &str, day: NaiveDate) -> Vec<WorkItemView> {
        let employee_id = self.canonical_employee_id(employee_id);
        let iso_day = format_iso_day(day);

        self.assignments_of(&employee_id)
            .filter(|assignment| assignment.period.covers_iso_day(&iso_day))
            .map(|assignment| {
                let display = self.project_display(&assignment.project_id);
                WorkItemView {
                    id: assignment.id.clone(),
                    project_id: assignment.project_id.clone(),
                    title: display.title,
                    color: display.color,
                    status: display.status,
                }
            })
            .collect()
    }

    /// Projects the assignments touching `week` into one work item per
    /// project, in first-appearance order.
    ///
    /// With `employee_id`, `days` only counts that employee's days and only
    /// their projects are returned; `assigned_employee_ids` always lists
    /// everyone booked on the project that week.
    pub fn work_items_for_week(&self, week: &[NaiveDate], employee_id: Option<&str>) -> Vec<WorkItem> {
        let focus = employee_id.map(|reference| self.canonical_employee_id(reference));
        let mut items: Vec<WorkItem> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (assignment, assignee) in self.assignments.iter().zip(&self.assignment_employee_ids) {
            let active_days: BTreeSet<u8> = week
                .iter()
                .filter(|date| assignment.period.covers(**date))
                .filter_map(|date| day_index_of(week, *date))
                .collect();
            if active_days.is_empty() {
                continue;
            }

            let key = self.canonical_project_id(&assignment.project_id);
            let position = *positions.entry(key.clone()).or_insert_with(|| {
                let display = self.project_display(&assignment.project_id);
                items.push(WorkItem {
                    id: key,
                    title: display.title,
                    color: display.color,
                    days: BTreeSet::new(),
                    assigned_employee_ids: Vec::new(),
                });
                items.len() - 1
            });

            let item = &mut items[position];
            if !item.assigned_employee_ids.contains(assignee) {
                item.assigned_employee_ids.push(assignee.clone());
            }
            if focus.as_ref().map_or(true, |focus| focus == assignee) {
                item.days.extend(active_days);
            }
        }

        if focus.is_some() {
            items.retain(|item| !item.days.is_empty());
        }
        items
    }

    fn assignments_of<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a Assignment> {
        self.assignments
            .iter()
            .zip(&self.assignment_employee_ids)
            .filter(move |(_, assignee)| assignee.as_str() == employee_id)
            .map(|(assignment, _)| assignment)
    }

    /// Employee id for a reference, or the trimmed reference when unresolved.
    fn canonical_employee_id(&self, reference: &str) -> String {
        self.find_employee(reference)
            .map(|employee| employee.id.clone())
            .unwrap_or_else(|| reference.trim().to_string())
    }

    /// Project id for a reference, or the trimmed reference when unresolved.
    pub fn canonical_project_id(&self, reference: &str) -> String {
        self.find_project(reference)
            .map(|project| project.id.clone())
            .unwrap_or_else(|| reference.trim().to_string())
    }

    fn project_display(&self, reference: &str) -> ProjectDisplay {
        match self.find_project(reference) {
            Some(project) => ProjectDisplay {
                title: project.name.clone(),
                color: self.palette.color_for(project.status).to_string(),
                status: project.status,
            },
            None => ProjectDisplay {
                title: reference.to_string(),
                color: self.palette.color_for(ProjectStatus::Unknown).to_string(),
                status: ProjectStatus::Unknown,
            },
        }
    }
}

impl EmployeeDirectory for PlanningBoard {
    fn find_employee(&self, reference: &str) -> Option<&Employee> {
        lookup(&self.employee_index, reference).map(|index| &self.employees[index])
    }
}

struct ProjectDisplay {
    title: String,
    color: String,
    status: ProjectStatus,
}

/// Indexes entities by id and external reference; earlier entities win.
fn build_index<'a>(keys: impl Iterator<Item = (&'a str, &'a str)>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (position, (id, reference)) in keys.enumerate() {
        index.entry(id.to_string()).or_insert(position);
        index.entry(reference.to_string()).or_insert(position);
    }
    index
}

fn lookup(index: &HashMap<String, usize>, reference: &str) -> Option<usize> {
    index.get(reference.trim()).copied()
}
