use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};

use bookdash::{
    core::{
        msg::{dashboard::DashboardMsg, Msg},
        raw_msg::RawMsg,
    },
    domain::booking::sample_dataset,
    infrastructure::config::Config,
    presentation::components::Components,
    translate_raw_to_domain, update, AppState,
};

fn state_on_dashboard() -> AppState {
    let mut state = AppState::new(Config::default_config().expect("embedded config parses"));
    state.route.navigate("/dashboard");
    state
}

fn render(state: &AppState) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).expect("terminal");
    let components = Components::new();
    terminal
        .draw(|frame| components.render(frame, state))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn key(state: &AppState, code: KeyCode) -> Vec<Msg> {
    translate_raw_to_domain(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)), state)
}

#[test]
fn test_normalization_yields_seven_samples() {
    let samples = sample_dataset().expect("embedded dataset parses");
    assert_eq!(samples.len(), 7);

    // One sample per calendar day, in order.
    for window in samples.windows(2) {
        assert!(window[0].date < window[1].date);
    }

    // The duplicate flat rows for Oct 25 collapse into one sample.
    let oct25: Vec<_> = samples
        .iter()
        .filter(|s| s.date.to_string() == "2021-10-25")
        .collect();
    assert_eq!(oct25.len(), 1);
    assert_eq!(oct25[0].value, 68);
    assert_eq!(oct25[0].quantity, 4);
}

#[test]
fn test_rendering_is_idempotent() {
    let state = state_on_dashboard();
    let first = render(&state);
    let second = render(&state);
    assert_eq!(first, second);
}

#[test]
fn test_dashboard_shows_the_literal_statistics() {
    let text = render(&state_on_dashboard());
    assert!(text.contains("Recent Bookings"));
    assert!(text.contains("Upcoming Bookings"));
    assert!(text.contains("$112,893"));
    assert!(text.contains("Booking quantity"));
}

#[test]
fn test_statistics_survive_a_different_dataset() {
    let mut state = state_on_dashboard();
    state.dashboard.samples.truncate(3);
    let text = render(&state);
    assert!(text.contains("$112,893"));
}

#[test]
fn test_arrow_keys_hover_points_only_on_the_dashboard() {
    let state = state_on_dashboard();
    let msgs = key(&state, KeyCode::Right);
    assert_eq!(msgs, vec![Msg::Dashboard(DashboardMsg::NextPoint)]);

    let mut elsewhere = state.clone();
    elsewhere.route.navigate("/bookings");
    assert!(key(&elsewhere, KeyCode::Right).is_empty());
}

#[test]
fn test_tooltip_follows_the_hovered_sample() {
    let state = state_on_dashboard();
    let text = render(&state);
    assert!(!text.contains("Thu 21"));

    let (state, _) = update(Msg::Dashboard(DashboardMsg::NextPoint), state);
    let text = render(&state);
    assert!(text.contains("Thu 21"));
    assert!(text.contains("value 40"));
    assert!(text.contains("quantity 3"));

    let (state, _) = update(Msg::Dashboard(DashboardMsg::NextPoint), state);
    let text = render(&state);
    assert!(text.contains("Fri 22"));
    assert!(text.contains("value 12"));
    assert!(text.contains("quantity 7"));
}

#[test]
fn test_escape_clears_the_hover() {
    let state = state_on_dashboard();
    let (state, _) = update(Msg::Dashboard(DashboardMsg::NextPoint), state);
    assert_eq!(state.dashboard.selected, Some(0));

    let msgs = key(&state, KeyCode::Esc);
    assert_eq!(msgs, vec![Msg::Dashboard(DashboardMsg::Deselect)]);
    let (state, _) = update(msgs[0].clone(), state);
    assert_eq!(state.dashboard.selected, None);
}

#[test]
fn test_hover_clamps_at_the_last_sample() {
    let mut state = state_on_dashboard();
    for _ in 0..20 {
        let (next, _) = update(Msg::Dashboard(DashboardMsg::NextPoint), state);
        state = next;
    }
    assert_eq!(state.dashboard.selected, Some(6));
}
