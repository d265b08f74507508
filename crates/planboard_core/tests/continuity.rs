use planboard_core::schedule::continuity::{co_assignees, summarize_co_assignees};
use planboard_core::{analyze_continuity, Employee, EmployeeDirectory, WorkItem};
use std::collections::BTreeSet;

fn days(values: &[u8]) -> BTreeSet<u8> {
    values.iter().copied().collect()
}

fn employee(id: &str, name: &str) -> Employee {
    Employee {
        id: id.to_string(),
        external_reference: format!("/v1/contacts/{id}"),
        name: name.to_string(),
        skills: Vec::new(),
        home_location: "Unbekannt".to_string(),
        primary_calendar_url: String::new(),
        absence_calendar_url: String::new(),
        active: true,
    }
}

struct Staff(Vec<Employee>);

impl EmployeeDirectory for Staff {
    fn find_employee(&self, reference: &str) -> Option<&Employee> {
        self.0.iter().find(|employee| employee.is_referenced_by(reference))
    }
}

fn item(assigned: &[&str]) -> WorkItem {
    WorkItem {
        id: "3001".to_string(),
        title: "Rathaus".to_string(),
        color: "bg-primary".to_string(),
        days: days(&[0, 1, 2]),
        assigned_employee_ids: assigned.iter().map(|id| id.to_string()).collect(),
    }
}

#[test]
fn resumed_occurrence_after_gap() {
    let hints = analyze_continuity(&days(&[1, 2, 4]), 4);
    assert!(!hints.continues_from_previous);
    assert!(!hints.continues_to_next);
    assert!(hints.is_paused_and_resumed);
    assert!(!hints.is_first_day);

    let middle = analyze_continuity(&days(&[1, 2, 4]), 2);
    assert!(middle.continues_from_previous);
    assert!(!middle.continues_to_next);
    assert!(!middle.is_paused_and_resumed);
}

#[test]
fn friday_has_no_next_day_inside_the_week() {
    let hints = analyze_continuity(&days(&[3, 4]), 4);
    assert!(hints.continues_from_previous);
    assert!(!hints.continues_to_next);
}

#[test]
fn co_assignees_exclude_current_and_unknown_ids() {
    let staff = Staff(vec![
        employee("1", "Anna"),
        employee("2", "Ben"),
        employee("3", "Cem"),
    ]);
    let others = co_assignees(&item(&["1", "2", "ghost", "3"]), "1", &staff);
    let names: Vec<&str> = others.iter().map(|employee| employee.name.as_str()).collect();
    assert_eq!(names, vec!["Ben", "Cem"]);

    let by_reference = co_assignees(&item(&["1", "2"]), "/v1/contacts/1", &staff);
    assert_eq!(by_reference.len(), 1);
    assert_eq!(by_reference[0].id, "2");
}

#[test]
fn summary_caps_badges_and_counts_overflow() {
    let staff = vec![
        employee("2", "Ben"),
        employee("3", "Cem"),
        employee("4", "Dana"),
        employee("5", "Emil"),
    ];
    let refs: Vec<&Employee> = staff.iter().collect();

    let summary = summarize_co_assignees(&refs, 2);
    assert_eq!(summary.shown.len(), 2);
    assert_eq!(summary.shown[0].initial, Some('B'));
    assert_eq!(summary.overflow, 2);
    assert_eq!(summary.overflow_label().as_deref(), Some("+2"));
    assert_eq!(
        summary.also_assigned_label().as_deref(),
        Some("Ebenfalls zugewiesen: Ben, Cem, Dana, Emil")
    );

    let small = summarize_co_assignees(&refs[..1], 2);
    assert_eq!(small.overflow, 0);
    assert_eq!(small.overflow_label(), None);

    let empty = summarize_co_assignees(&[], 2);
    assert!(empty.is_empty());
    assert_eq!(empty.also_assigned_label(), None);
}
