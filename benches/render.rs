// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveTime;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skema::layout::{layout_board, BoardGeometry};
use skema::pass::{run_pass, PassOptions, WallClock};
use skema::render::render_board_annotated;
use skema::store::StaticSource;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.board`, `render.pass`
// - Case IDs come from `fixtures::Case::id` and must not be renamed.
fn benches_render(c: &mut Criterion) {
    let date = fixtures::reference_date();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("valid time");
    let clock = WallClock::at(date.and_time(noon));

    let mut group = c.benchmark_group("render.board");
    for case in fixtures::Case::all() {
        let document = fixtures::fixture(case);
        let layout = layout_board(&document, date, BoardGeometry::new(120));
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let now = Some(clock.minute);
                let board = render_board_annotated(black_box(&document), black_box(&layout), now)
                    .expect("render_board_annotated");
                black_box(board.text.len())
            })
        });
    }
    group.finish();

    // Full refresh: parse JSON, lay out, render.
    let mut group = c.benchmark_group("render.pass");
    for case in fixtures::Case::all() {
        let source = StaticSource::new(case.id(), fixtures::fixture_json(case));
        let mut options = PassOptions::new(BoardGeometry::new(120));
        options.date = Some(date);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let rendered = run_pass(black_box(&source), &options, clock).expect("run_pass");
                black_box(rendered.board.line_count())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
