use planboard_core::mapper::{
    absence_calendar_url, map_contact_to_employee_with, primary_address, primary_calendar_url,
    MapperSettings,
};
use planboard_core::record::{decode_contact_record, decode_project_record, ContactAddress};
use planboard_core::{map_contact_to_employee, map_project_record_to_project, ProjectStatus};
use serde_json::{json, Value};

fn employee_from(value: Value) -> planboard_core::Employee {
    let record = decode_contact_record(&value).expect("fixture should decode");
    map_contact_to_employee(&record)
}

#[test]
fn maps_full_contact_to_employee() {
    let employee = employee_from(json!({
        "self": "/v1/contacts/1001",
        "first_name": " Anna ",
        "middle_name": "",
        "last_name": "Schmidt",
        "keywords": ["Elektro", "Sanitär"],
        "addresses": [
            { "city": "Köln", "state": "NRW", "country": "Deutschland" },
            { "city": "Bonn" }
        ],
        "urls": [{ "label": "Einsatzplan", "url": "https://cal.example/anna.ics" }]
    }));

    assert_eq!(employee.id, "1001");
    assert_eq!(employee.external_reference, "/v1/contacts/1001");
    assert_eq!(employee.name, "Anna Schmidt");
    assert_eq!(employee.skills, vec!["Elektro".to_string(), "Sanitär".to_string()]);
    assert_eq!(employee.home_location, "Köln, NRW, Deutschland");
    assert_eq!(employee.primary_calendar_url, "https://cal.example/anna.ics");
    assert_eq!(employee.absence_calendar_url, "");
    assert!(employee.active);
}

#[test]
fn name_falls_back_through_nickname_full_name_and_reference() {
    let nickname = employee_from(json!({
        "self": "/v1/contacts/1",
        "nickname": "Mo",
        "full_name": "Moritz Becker"
    }));
    assert_eq!(nickname.name, "Mo");

    let full_name = employee_from(json!({ "self": "/v1/contacts/2", "full_name": "Moritz Becker" }));
    assert_eq!(full_name.name, "Moritz Becker");

    let bare = employee_from(json!({ "self": "/v1/contacts/3", "first_name": "  " }));
    assert_eq!(bare.name, "/v1/contacts/3");
}

#[test]
fn location_uses_first_address_or_unknown_label() {
    let no_address = employee_from(json!({ "self": "/v1/contacts/1" }));
    assert_eq!(no_address.home_location, "Unbekannt");

    let empty_address = employee_from(json!({
        "self": "/v1/contacts/2",
        "addresses": [{ "street": "Hauptstr. 1" }, { "city": "Bonn" }]
    }));
    assert_eq!(empty_address.home_location, "Unbekannt");

    let record = decode_contact_record(&json!({ "self": "/v1/contacts/3" })).unwrap();
    let settings = MapperSettings {
        unknown_location_label: "n/a".to_string(),
        ..MapperSettings::default()
    };
    assert_eq!(map_contact_to_employee_with(&record, &settings).home_location, "n/a");
}

#[test]
fn primary_address_is_returned_without_remapping() {
    let record = decode_contact_record(&json!({
        "self": "/v1/contacts/1000",
        "addresses": [{
            "label": "Home",
            "street": "Musterstraße 1",
            "city": "Köln",
            "postal_code": "50667",
            "country": "Deutschland"
        }]
    }))
    .unwrap();

    assert_eq!(
        primary_address(&record),
        Some(&ContactAddress {
            label: Some("Home".to_string()),
            street: Some("Musterstraße 1".to_string()),
            city: Some("Köln".to_string()),
            postal_code: Some("50667".to_string()),
            country: Some("Deutschland".to_string()),
            ..ContactAddress::default()
        })
    );

    let bare = decode_contact_record(&json!({ "self": "/v1/contacts/1001" })).unwrap();
    assert_eq!(primary_address(&bare), None);
}

#[test]
fn whitespace_reference_maps_to_a_non_empty_id() {
    let employee = employee_from(json!({ "self": "  " }));
    assert_eq!(employee.id, "  ");
    assert_eq!(employee.name, "  ");
}

#[test]
fn calendar_flags_follow_resolved_urls() {
    let employee = employee_from(json!({
        "self": "/v1/contacts/12",
        "urls": [{ "label": "Urlaub iCal", "url": "https://cal.example/u.ics" }]
    }));
    assert!(!employee.has_primary_calendar());
    assert!(employee.has_absence_calendar());
}

#[test]
fn non_numeric_reference_is_kept_as_id() {
    let employee = employee_from(json!({ "self": "contact-anna", "first_name": "Anna" }));
    assert_eq!(employee.id, "contact-anna");
}

#[test]
fn extra_field_only_contact_resolves_calendar() {
    let record = decode_contact_record(&json!({
        "self": "/v1/contacts/7",
        "extra_fields": "{\"Einsatz_iCal\":{\"value\":\"https://cal.example/e.ics\"},\"Urlaub_iCal\":{\"value\":\"https://cal.example/u.ics\"}}"
    }))
    .unwrap();
    assert_eq!(primary_calendar_url(&record), "https://cal.example/e.ics");
    assert_eq!(absence_calendar_url(&record), "https://cal.example/u.ics");
}

#[test]
fn url_entries_win_over_extra_fields() {
    let record = decode_contact_record(&json!({
        "self": "/v1/contacts/8",
        "urls": [{ "label": "Primary", "url": "https://cal.example/from-urls.ics" }],
        "extra_fields": { "primary_ical": { "value": "https://cal.example/from-extra.ics" } }
    }))
    .unwrap();
    assert_eq!(primary_calendar_url(&record), "https://cal.example/from-urls.ics");
}

#[test]
fn malformed_extra_fields_are_ignored_as_a_whole() {
    let record = decode_contact_record(&json!({
        "self": "/v1/contacts/9",
        "extra_fields": {
            "einsatz_ical": { "value": "https://cal.example/e.ics" },
            "broken": "not-an-object"
        }
    }))
    .unwrap();
    assert_eq!(primary_calendar_url(&record), "");

    let invalid_json = decode_contact_record(&json!({
        "self": "/v1/contacts/10",
        "extra_fields": "{not json"
    }))
    .unwrap();
    assert_eq!(primary_calendar_url(&invalid_json), "");
}

#[test]
fn custom_vocabulary_drives_lookup() {
    let record = decode_contact_record(&json!({
        "self": "/v1/contacts/11",
        "urls": [{ "label": "Baustellenkalender", "url": "https://cal.example/b.ics" }]
    }))
    .unwrap();
    assert_eq!(map_contact_to_employee(&record).primary_calendar_url, "");

    let settings = MapperSettings {
        primary_calendar_terms: vec!["baustelle".to_string()],
        ..MapperSettings::default()
    };
    assert_eq!(
        map_contact_to_employee_with(&record, &settings).primary_calendar_url,
        "https://cal.example/b.ics"
    );
}

#[test]
fn mapped_reference_decodes_back_to_same_id() {
    let employee = employee_from(json!({ "self": "/v1/contacts/1001", "first_name": "Anna" }));
    let again = employee_from(json!({ "self": employee.external_reference, "first_name": employee.name }));
    assert!(!again.id.is_empty());
    assert_eq!(again.id, employee.id);
    assert_eq!(again.name, employee.name);
}

#[test]
fn project_status_is_narrowed_to_known_values() {
    let map = |status: Value| {
        let mut payload = json!({ "self": "/v1/projects/3001", "name": "Rathaus" });
        if !status.is_null() {
            payload["status"] = status;
        }
        map_project_record_to_project(&decode_project_record(&payload).unwrap())
    };

    assert_eq!(map(json!("in_progress")).status, ProjectStatus::InProgress);
    assert_eq!(map(json!("done")).status, ProjectStatus::Done);
    assert_eq!(map(json!(" Done ")).status, ProjectStatus::Unknown);
    assert_eq!(map(json!("IN_PROGRESS")).status, ProjectStatus::Unknown);
    assert_eq!(map(json!("paused")).status, ProjectStatus::Unknown);
    assert_eq!(map(Value::Null).status, ProjectStatus::Unknown);

    let project = map(json!("new"));
    assert_eq!(project.id, "3001");
    assert_eq!(project.external_reference, "/v1/projects/3001");
    assert_eq!(project.name, "Rathaus");

    let again = decode_project_record(&json!({
        "self": project.external_reference,
        "name": project.name,
        "status": project.status.as_str()
    }))
    .expect("mapped project fields pass the project guard");
    assert_eq!(map_project_record_to_project(&again), project);
}
