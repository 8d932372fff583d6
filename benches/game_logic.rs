use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_simon::core::{GameSession, SymbolSource};
use tui_simon::term::{GameView, TermPresenter, Viewport};
use tui_simon::types::{ADVANCE_DELAY_MS, REVEAL_DELAY_MS, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.begin();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(TICK_MS));
        })
    });
}

fn bench_generate_symbol(c: &mut Criterion) {
    let mut source = SymbolSource::new(12345);

    c.bench_function("generate_symbol", |b| {
        b.iter(|| black_box(source.generate_symbol()))
    });
}

fn bench_clear_level_20(c: &mut Criterion) {
    c.bench_function("clear_20_levels", |b| {
        b.iter(|| {
            let mut session = GameSession::new(7);
            session.begin();
            session.tick(REVEAL_DELAY_MS);
            for _ in 0..20 {
                for symbol in session.pattern().to_vec() {
                    session.submit_input(symbol);
                }
                session.tick(ADVANCE_DELAY_MS);
            }
            session.take_intents();
            black_box(session.score())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = GameSession::new(1);
    let presenter = TermPresenter::new(false);
    let view = GameView::default();
    let snap = session.snapshot();

    c.bench_function("render_80x24", |b| {
        b.iter(|| black_box(view.render(presenter.view_state(), &snap, Viewport::new(80, 24))))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_generate_symbol,
    bench_clear_level_20,
    bench_render
);
criterion_main!(benches);
