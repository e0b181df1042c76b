use block_editor_core::{Editor, EditorConfig, TokenRef, TokenSpec, resolve};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

/// A program of `depth` nested blocks, each holding a call statement.
fn nested_program(depth: usize) -> Editor {
    let mut editor = Editor::new(EditorConfig::default());
    let mut index = 0;
    let mut insert = |editor: &mut Editor, specs: Vec<TokenSpec>| {
        editor.insert_row(index, &specs);
        index += 1;
    };
    for i in 0..depth {
        insert(&mut editor, vec![TokenSpec::new("if"), TokenSpec::new(format!("c{i}"))]);
        insert(&mut editor, vec![TokenSpec::with_kind("{", "openBracket")]);
        insert(
            &mut editor,
            vec![
                TokenSpec::new("f"),
                TokenSpec::with_kind("(", "openParen"),
                TokenSpec::new("x"),
                TokenSpec::with_kind(")", "closeParen"),
            ],
        );
    }
    for _ in 0..depth {
        insert(&mut editor, vec![TokenSpec::with_kind("}", "closeBracket")]);
    }
    editor
}

fn bench_resolve_outer_block(c: &mut Criterion) {
    let editor = nested_program(2_000);
    c.bench_function("resolve/outer_block_2k", |b| {
        b.iter(|| {
            let set = resolve(editor.document(), black_box(TokenRef::content(1, 0)));
            black_box(set.len());
        })
    });
}

fn bench_resolve_last_close(c: &mut Criterion) {
    let editor = nested_program(2_000);
    let last = editor.get_row_count() - 2;
    c.bench_function("resolve/last_close_2k", |b| {
        b.iter(|| {
            let set = resolve(editor.document(), black_box(TokenRef::content(last, 0)));
            black_box(set.len());
        })
    });
}

fn bench_hover_round_trip(c: &mut Criterion) {
    c.bench_function("hover/enter_leave_call", |b| {
        b.iter_batched(
            || nested_program(200),
            |mut editor| {
                let at = TokenRef::content(2, 0);
                editor.pointer_enter(at);
                editor.pointer_leave(at);
                black_box(editor.version());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_resolve_outer_block,
    bench_resolve_last_close,
    bench_hover_round_trip
);
criterion_main!(benches);
