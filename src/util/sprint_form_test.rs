use super::*;

fn ids(raw: &[&str]) -> Vec<BugId> {
    raw.iter().map(|r| BugId::from(*r)).collect()
}

#[test]
fn field_names_match_sprint_form() {
    assert_eq!(field_name(BugAction::Add), "add_bugs");
    assert_eq!(field_name(BugAction::Remove), "remove_bugs");
}

#[test]
fn element_id_prefixes_field_name() {
    let field = HiddenField { name: "remove_bugs", value: "1".to_owned() };
    assert_eq!(field.element_id(), "id_remove_bugs");
}

#[test]
fn join_ids_keeps_order() {
    assert_eq!(join_ids(&ids(&["30", "10", "20"]), DEFAULT_ID_SEPARATOR), "30,10,20");
    assert_eq!(join_ids(&[], DEFAULT_ID_SEPARATOR), "");
}

#[test]
fn split_ids_drops_blank_segments() {
    assert_eq!(split_ids(" 4, ,5,", ","), ids(&["4", "5"]));
    assert!(split_ids("", ",").is_empty());
}

#[test]
fn split_reverses_join_for_custom_separator() {
    let original = ids(&["812", "9001"]);
    assert_eq!(split_ids(&join_ids(&original, "|"), "|"), original);
}

#[test]
fn hidden_fields_skip_empty_action_kinds() {
    let submission = SprintSubmission { add: Vec::new(), remove: ids(&["7", "8"]) };
    let fields = hidden_fields(&submission, ",").unwrap();
    assert_eq!(fields, vec![HiddenField { name: "remove_bugs", value: "7,8".to_owned() }]);
}

#[test]
fn hidden_fields_put_add_before_remove() {
    let submission = SprintSubmission { add: ids(&["1"]), remove: ids(&["2"]) };
    let names: Vec<&str> = hidden_fields(&submission, ",").unwrap().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["add_bugs", "remove_bugs"]);
}

#[test]
fn hidden_fields_reject_id_containing_separator() {
    let submission = SprintSubmission { add: ids(&["7,8"]), remove: Vec::new() };
    let err = hidden_fields(&submission, ",").unwrap_err();
    assert_eq!(err, TrackerError::SeparatorInId { bug_id: BugId::from("7,8"), separator: ",".to_owned() });
}

#[test]
fn hidden_fields_accept_id_that_only_contains_another_delimiter() {
    let submission = SprintSubmission { add: Vec::new(), remove: ids(&["7,8", "9"]) };
    let fields = hidden_fields(&submission, "|").unwrap();
    assert_eq!(fields, vec![HiddenField { name: "remove_bugs", value: "7,8|9".to_owned() }]);
    assert_eq!(split_ids(&fields[0].value, "|"), ids(&["7,8", "9"]));
}
