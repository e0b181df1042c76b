//! Build a small program row by row, then hover a few tokens and print what lights up.

use block_editor_core::{Editor, EditorConfig, TokenRef, TokenSpec};

fn render(editor: &Editor) {
    let snapshot = editor.snapshot();
    let width = snapshot.first_column_width;
    for row in &snapshot.rows {
        let mut line = String::new();
        for (column, cell) in row.cells.iter().enumerate() {
            let text = if column == 0 {
                format!("{:>width$} ", cell.text)
            } else {
                cell.text.clone()
            };
            if cell.classes.iter().any(|c| c == "related") {
                line.push_str(&format!("[{text}]"));
            } else {
                line.push_str(&text);
            }
            line.push(' ');
        }
        println!("{line}");
    }
    println!();
}

fn main() {
    let mut editor = Editor::new(EditorConfig::default());
    editor.set_click_listener(|target| {
        println!("clicked {:?} at {:?}", target.text, target.token);
    });

    let rows = vec![
        vec![
            TokenSpec::new("var"),
            TokenSpec::new("n"),
            TokenSpec::new("="),
            TokenSpec::new("3"),
        ],
        vec![TokenSpec::new("while"), TokenSpec::new("n > 0")],
        vec![TokenSpec::with_kind("{", "openBracket")],
        vec![
            TokenSpec::new("print"),
            TokenSpec::with_kind("(", "openParen"),
            TokenSpec::new("n"),
            TokenSpec::with_kind(")", "closeParen"),
        ],
        vec![TokenSpec::new("n--")],
        vec![TokenSpec::with_kind("}", "closeBracket")],
        vec![TokenSpec::with_kind("// end", "comment")],
    ];
    for (i, specs) in rows.iter().enumerate() {
        editor.insert_row(i, specs);
    }
    render(&editor);

    for at in [TokenRef::content(1, 0), TokenRef::content(3, 0), TokenRef::content(5, 0)] {
        println!("hover {:?}", at);
        editor.pointer_enter(at);
        render(&editor);
        editor.pointer_leave(at);
    }

    editor.click(TokenRef::content(3, 2));
}
