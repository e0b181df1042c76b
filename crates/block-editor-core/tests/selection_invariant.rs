//! Randomized operation sequences: the single-selection invariant holds after every mutation.

use block_editor_core::{
    Editor, EditorConfig, INDICATOR_ARROW, INDICATOR_COLUMN, TokenRef, TokenSpec,
};
use rand::Rng;

fn assert_single_selection(editor: &Editor) {
    let doc = editor.document();
    assert!(doc.row_count() >= 1);
    assert!(doc.selected_row_index() < doc.row_count());

    let selected: Vec<usize> = doc
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.is_selected())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(selected, vec![doc.selected_row_index()]);

    let arrows = doc
        .rows()
        .iter()
        .filter(|row| row.tokens()[INDICATOR_COLUMN].text() == INDICATOR_ARROW)
        .count();
    assert_eq!(arrows, 1);
}

fn random_row(rng: &mut impl Rng) -> Vec<TokenSpec> {
    const KINDS: &[&str] = &[
        "",
        "openBracket",
        "closeBracket",
        "openParen",
        "closeParen",
        "comment",
    ];
    (0..rng.gen_range(0..4))
        .map(|i| {
            let kind = KINDS[rng.gen_range(0..KINDS.len())];
            if kind.is_empty() {
                TokenSpec::new(format!("t{i}"))
            } else {
                TokenSpec::with_kind(format!("k{i}"), kind)
            }
        })
        .collect()
}

fn run_random_operations(config: EditorConfig, operation_count: usize) {
    let mut rng = rand::thread_rng();
    let mut editor = Editor::new(config);

    for _ in 0..operation_count {
        let count = editor.get_row_count();
        let index = rng.gen_range(0..count + 2);
        match rng.gen_range(0..6) {
            0 | 1 => {
                let specs = random_row(&mut rng);
                editor.insert_row(index, &specs);
            }
            2 => {
                let was_last = index == count - 1 && count > 1;
                editor.delete_row(index);
                if was_last {
                    assert_eq!(editor.get_selected_row_index(), editor.get_row_count() - 1);
                }
            }
            3 => {
                editor.select_row(index);
            }
            4 => {
                editor.select_and_highlight_row(index);
            }
            _ => {
                let row = rng.gen_range(0..count);
                let column = rng.gen_range(0..6);
                let at = TokenRef::new(row, column);
                let before = editor.document().clone();
                editor.pointer_enter(at);
                editor.pointer_leave(at);
                assert_eq!(editor.document(), &before);
            }
        }
        assert_single_selection(&editor);
    }
}

#[test]
fn test_random_operations_unrestricted() {
    run_random_operations(EditorConfig::default(), 500);
}

#[test]
fn test_random_operations_restricted() {
    run_random_operations(EditorConfig::default().with_restrict_insert_to_end(true), 500);
}
