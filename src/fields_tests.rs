use crate::fields::{FIELDS, FLAGS, FieldKind, PRIORITIES, flag, is_priority, lookup};

#[test]
fn canonical_names_resolve() {
    assert_eq!(lookup("subject").unwrap().name, "subject");
    assert_eq!(lookup("maildir").unwrap().name, "maildir");
    assert_eq!(lookup("thread").unwrap().name, "thread");
}

#[test]
fn aliases_resolve_to_the_same_field() {
    assert_eq!(lookup("s").unwrap().name, "subject");
    assert_eq!(lookup("g").unwrap().name, "flag");
    assert_eq!(lookup("flags").unwrap().name, "flag");
    assert_eq!(lookup("priority").unwrap().name, "prio");
    assert_eq!(lookup("d").unwrap().name, "date");
    assert_eq!(lookup("z").unwrap().name, "size");
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    assert!(lookup("Subject").is_none());
    assert!(lookup("SUBJECT").is_none());
    assert!(lookup("subj").is_none());
    assert!(lookup("").is_none());
}

#[test]
fn exactly_two_fields_are_range_capable() {
    let ranges: Vec<_> = FIELDS
        .iter()
        .filter(|f| f.kind == FieldKind::Range)
        .map(|f| f.name)
        .collect();
    assert_eq!(ranges, ["date", "size"]);
}

#[test]
fn field_kinds() {
    assert_eq!(lookup("flag").unwrap().kind, FieldKind::Flag);
    assert_eq!(lookup("prio").unwrap().kind, FieldKind::Priority);
    assert_eq!(lookup("date").unwrap().kind, FieldKind::Range);
    assert_eq!(lookup("from").unwrap().kind, FieldKind::Generic);
}

#[test]
fn flag_vocabulary_has_fourteen_states() {
    assert_eq!(FLAGS.len(), 14);
}

#[test]
fn flags_resolve_by_name_and_shortcut() {
    assert_eq!(flag("seen").unwrap().shortcut, "S");
    assert_eq!(flag("T").unwrap().name, "trashed");
    assert!(flag("bogus").is_none());
}

#[test]
fn flag_shortcuts_are_case_sensitive() {
    // `s` is signed, `S` is seen.
    assert_eq!(flag("s").unwrap().name, "signed");
    assert_eq!(flag("S").unwrap().name, "seen");
}

#[test]
fn priority_tokens() {
    assert_eq!(PRIORITIES, ["low", "normal", "high"]);
    assert!(is_priority("normal"));
    assert!(!is_priority("High"));
    assert!(!is_priority("urgent"));
}
