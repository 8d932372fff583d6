use tui_simon::core::{GameSession, Presenter};
use tui_simon::term::{GameView, TermPresenter, Viewport};
use tui_simon::types::{FeedbackKind, Status, Symbol, REVEAL_DELAY_MS, SLIDE_MS};

#[test]
fn idle_view_prompts_to_start_and_hides_pads() {
    let presenter = TermPresenter::new(false);
    let session = GameSession::new(1);
    let view = GameView::default();

    let fb = view.render(presenter.view_state(), &session.snapshot(), Viewport::new(60, 24));
    let text = fb.text();
    assert!(text.contains("S I M O N"));
    assert!(text.contains("Press any key to start"));
    assert!(text.contains("Highest Score: 0"));
    assert!(!text.contains('█'));
}

#[test]
fn open_container_shows_all_four_pads() {
    let mut presenter = TermPresenter::new(false);
    presenter.show_round_container();
    presenter.tick(SLIDE_MS);

    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let fb = view.render(presenter.view_state(), &GameSession::new(1).snapshot(), vp);

    let (gx, gy) = view.grid_origin(vp);
    for symbol in Symbol::ALL {
        let (dx, dy) = view.pad_origin(symbol);
        assert_eq!(fb.get(gx + dx, gy + dy).unwrap().ch, '█', "{:?}", symbol);
    }
}

#[test]
fn half_open_container_shows_top_pads_only() {
    let mut presenter = TermPresenter::new(false);
    presenter.show_round_container();
    presenter.tick(SLIDE_MS / 2);

    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let fb = view.render(presenter.view_state(), &GameSession::new(1).snapshot(), vp);

    let (gx, gy) = view.grid_origin(vp);
    let (yx, yy) = view.pad_origin(Symbol::Yellow);
    let (gx2, gy2) = view.pad_origin(Symbol::Green);
    assert_eq!(fb.get(gx + yx, gy + yy).unwrap().ch, '█');
    assert_ne!(fb.get(gx + gx2, gy + gy2 + 4).unwrap().ch, '█');
}

#[test]
fn status_and_progress_lines_follow_the_session() {
    let mut session = GameSession::new(77);
    let mut presenter = TermPresenter::new(false);
    session.begin();
    session.tick(REVEAL_DELAY_MS);
    session.flush_to(&mut presenter);

    let view = GameView::default();
    let fb = view.render(presenter.view_state(), &session.snapshot(), Viewport::new(60, 24));
    let text = fb.text();
    assert!(text.contains("Level: 1"));
    assert!(text.contains("0 / 1"));
}

#[test]
fn failure_flash_paints_background() {
    let mut presenter = TermPresenter::new(false);
    presenter.play_failure_feedback();
    presenter.show_status(Status::GameOver { score: 2 });

    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let normal = view.render(&Default::default(), &GameSession::new(1).snapshot(), vp);
    let flashed = view.render(presenter.view_state(), &GameSession::new(1).snapshot(), vp);

    assert_ne!(
        normal.get(0, 0).unwrap().style.bg,
        flashed.get(0, 0).unwrap().style.bg
    );
    assert!(flashed.text().contains("Game Over! Your score was 2"));
}

#[test]
fn press_and_reveal_render_differently() {
    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let snap = GameSession::new(1).snapshot();

    let mut reveal = TermPresenter::new(false);
    reveal.show_round_container();
    reveal.tick(SLIDE_MS);
    let mut press = reveal.clone();
    reveal.play_feedback(Symbol::Red, FeedbackKind::Reveal);
    press.play_feedback(Symbol::Red, FeedbackKind::Press);

    let (gx, gy) = view.grid_origin(vp);
    let (dx, dy) = view.pad_origin(Symbol::Red);
    let a = view.render(reveal.view_state(), &snap, vp).get(gx + dx, gy + dy).unwrap();
    let b = view.render(press.view_state(), &snap, vp).get(gx + dx, gy + dy).unwrap();
    assert_ne!(a.style.fg, b.style.fg);
}
