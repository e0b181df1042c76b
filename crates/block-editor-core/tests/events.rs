use block_editor_core::{
    ClickTarget, Dispatch, Editor, EditorChangeKind, EditorConfig, Tag, TokenRef, TokenSpec,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

fn call_program() -> Editor {
    let mut editor = Editor::new(EditorConfig::default());
    editor.insert_row(
        0,
        &[
            TokenSpec::new("print"),
            TokenSpec::with_kind("(", "openParen"),
            TokenSpec::new("x"),
            TokenSpec::with_kind(")", "closeParen"),
        ],
    );
    editor.insert_row(1, &[TokenSpec::with_kind("// done", "comment")]);
    editor
}

#[test]
fn test_enter_marks_and_leave_restores() {
    let mut editor = call_program();
    let before = editor.document().clone();

    let set = editor.pointer_enter(TokenRef::content(0, 0));
    assert_eq!(set.len(), 4);
    assert_eq!(editor.document().find_tagged(&Tag::Related), set.iter().collect::<Vec<_>>());

    let cleared = editor.pointer_leave(TokenRef::content(0, 0));
    assert_eq!(cleared, set);
    assert_eq!(editor.document(), &before);
}

#[test]
fn test_round_trip_on_every_token() {
    let mut editor = call_program();
    let before = editor.document().clone();
    let refs: Vec<TokenRef> = before
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(row, r)| (0..r.tokens().len()).map(move |col| TokenRef::new(row, col)))
        .collect();

    for at in refs {
        editor.pointer_enter(at);
        editor.pointer_leave(at);
        assert_eq!(editor.document(), &before, "hover over {at:?} left markings behind");
    }
}

#[test]
fn test_leave_recomputes_after_structural_change() {
    let mut editor = call_program();
    editor.pointer_enter(TokenRef::content(1, 0));
    // The comment row moves down; leaving the same position clears what that position resolves
    // to now, so the moved row keeps its markings.
    editor.insert_row(0, &[TokenSpec::new("new")]);
    let cleared = editor.pointer_leave(TokenRef::content(1, 0));
    assert_eq!(cleared.rows(), vec![1]);
    let stale = editor.document().find_tagged(&Tag::Related);
    assert_eq!(stale.len(), 3);
    assert!(stale.iter().all(|at| at.row == 2));
}

#[test]
fn test_click_forwards_to_listener_without_mutation() {
    let mut editor = call_program();
    let seen = Arc::new(Mutex::new(Vec::<ClickTarget>::new()));
    let seen_clone = Arc::clone(&seen);
    editor.set_click_listener(move |target| {
        seen_clone.lock().unwrap().push(target.clone());
    });

    let before = editor.document().clone();
    let version = editor.version();
    let target = editor.click(TokenRef::content(0, 2)).unwrap();

    assert_eq!(target.text, "x");
    assert!(target.tags.contains(&Tag::Code));
    assert_eq!(seen.lock().unwrap().as_slice(), &[target]);
    assert_eq!(editor.document(), &before);
    assert_eq!(editor.version(), version);
}

#[test]
fn test_events_on_missing_tokens_are_ignored() {
    let mut editor = call_program();
    let at = TokenRef::content(9, 0);
    assert_eq!(
        editor.handle_event(block_editor_core::PointerEvent::Enter(at)),
        Dispatch::Ignored
    );
    assert!(editor.click(at).is_none());
    assert!(editor.pointer_leave(at).is_empty());
}

#[test]
fn test_change_notifications() {
    let mut editor = Editor::new(EditorConfig::default());
    let seen = Arc::new(Mutex::new(Vec::<EditorChangeKind>::new()));
    let seen_clone = Arc::clone(&seen);
    editor.subscribe(move |change| {
        assert_eq!(change.new_version, change.old_version + 1);
        seen_clone.lock().unwrap().push(change.kind);
    });

    editor.insert_row(0, &[TokenSpec::new("a")]);
    editor.select_row(0);
    // Re-selecting the selected row changes nothing.
    assert!(editor.select_row(0));
    editor.select_and_highlight_row(0);
    editor.select_and_highlight_row(0);
    editor.pointer_enter(TokenRef::content(0, 0));
    editor.pointer_leave(TokenRef::content(0, 0));
    // Rejected operations do not notify.
    editor.delete_row(42);
    editor.select_row(42);

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[
            EditorChangeKind::RowsChanged,
            EditorChangeKind::SelectionChanged,
            EditorChangeKind::SelectionChanged,
            EditorChangeKind::HighlightChanged,
            EditorChangeKind::HighlightChanged,
        ]
    );
    assert_eq!(editor.version(), 5);
}

#[test]
fn test_insert_row_json() {
    let mut editor = Editor::new(EditorConfig::default());
    let applied = editor
        .insert_row_json(0, r#"[{"text": "{", "type": "openBrack"}]"#)
        .unwrap();
    assert!(applied);
    assert!(editor.document().has_tag(TokenRef::content(0, 0), &Tag::OpenBracket));
    assert!(editor.insert_row_json(0, "not json").is_err());
    assert_eq!(editor.get_row_count(), 2);
}

#[test]
fn test_from_json_config() {
    let editor = Editor::from_json_config(r#"{"useLineNumbers": false}"#).unwrap();
    assert_eq!(editor.document().row(0).unwrap().line_number(), None);
    assert!(Editor::from_json_config("42").is_err());
}
