use criterion::{Criterion, black_box, criterion_group, criterion_main};
use layout_composer::{
    ComposerSession, Flexibility, HorizontalAlignment, Layout, Padding, PullBoundary, RowPatch,
    generate,
};

const ROWS: usize = 24;
const COLUMNS_PER_ROW: usize = 6;

fn build_layout() -> Layout {
    let mut layout = Layout::new();
    for row_idx in 0..ROWS {
        let row_id = if row_idx == 0 {
            layout.rows()[0].id.clone()
        } else {
            layout.add_row().id.clone()
        };
        for _ in 1..COLUMNS_PER_ROW {
            layout.add_column(&row_id).expect("row exists");
        }
        layout
            .update_row(
                &row_id,
                RowPatch {
                    horizontal_alignment: Some(HorizontalAlignment::Center),
                    pull_boundaries: Some(PullBoundary::Small),
                    padding: Some(Padding::AroundMedium),
                    flexibility: (row_idx % 4 == 0).then_some(Flexibility::Grow),
                    ..RowPatch::default()
                },
            )
            .expect("row exists");

        let columns = layout
            .row(&row_id)
            .expect("row exists")
            .columns
            .to_vec();
        for (col_idx, mut column) in columns.into_iter().enumerate() {
            column.size = ((col_idx % 12) + 1) as u8;
            column.device_specific = col_idx % 2 == 0;
            layout.update_column(column).expect("column exists");
        }
    }
    layout
}

fn generate_markup(c: &mut Criterion) {
    let layout = build_layout();
    c.bench_function("generate_markup", |b| {
        b.iter(|| generate(black_box(layout.rows())));
    });
}

fn session_cached_generate(c: &mut Criterion) {
    c.bench_function("session_cached_generate", |b| {
        let mut session = ComposerSession::new();
        session.generate();
        b.iter(|| {
            let artifacts = session.generate();
            black_box(artifacts.markup.len());
        });
    });
}

criterion_group!(benches, generate_markup, session_cached_generate);
criterion_main!(benches);
