//! Integration tests for the command loop

use coursebook::runtime::{Repl, Reply, RuntimeConfig, ScriptedEditor};

#[test]
fn scripted_session_transcript() {
    let editor = ScriptedEditor::new([
        "add-type Beginner",
        "add-course Piano",
        "offer t1 c2",
        "register o3 Alice",
        "register o3   ",
        "delete-course c2",
        "registrations",
    ]);
    let mut repl = Repl::with_editor(editor, RuntimeConfig::batch());
    let mut out = Vec::new();
    repl.run(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("registered r4 (Alice) for o3"));
    assert!(out.contains("error: student name must not be empty"));
    assert!(out.contains("deleted course c2 (removed 1 offering(s), 1 registration(s))"));
    assert!(out.contains("(none)"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn dump_lists_every_collection() {
    let mut repl = Repl::with_editor(ScriptedEditor::default(), RuntimeConfig::batch());
    repl.eval("add-type Beginner").unwrap();
    repl.eval("add-course Piano").unwrap();
    repl.eval("offer t1 c2").unwrap();

    let snapshot = repl.session().catalog().snapshot();
    let value = serde_json::to_value(snapshot).unwrap();
    assert_eq!(value["offerings"][0]["name"], "Beginner - Piano");
    assert_eq!(value["registrations"].as_array().unwrap().len(), 0);
}

#[test]
fn typed_names_lose_outer_whitespace_only() {
    let mut repl = Repl::with_editor(ScriptedEditor::default(), RuntimeConfig::batch());
    repl.eval("add-type   Early  Beginner  ").unwrap();

    let types = repl.session().catalog().course_types();
    assert_eq!(types.iter().next().unwrap().name, "Early  Beginner");
}

#[test]
fn listing_a_deleted_offering_is_empty() {
    let mut repl = Repl::with_editor(ScriptedEditor::default(), RuntimeConfig::batch());
    for line in ["add-type Beginner", "add-course Piano", "offer t1 c2", "register o3 Alice"] {
        repl.eval(line).unwrap();
    }
    repl.eval("delete-offering o3").unwrap();

    let Ok(Reply::Text(listing)) = repl.eval("registrations o3") else {
        panic!("expected a listing");
    };
    assert!(listing.contains("(no students)"));
    assert!(!listing.contains("Alice"));
}
