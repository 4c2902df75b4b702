use tui_donut::input::ScriptedKeys;
use tui_donut::session::{SessionEnd, SpinSession};
use tui_donut::term::TerminalRenderer;
use tui_donut::types::{DonutConfig, SpinAngles, SPIN_STEP};

fn run_script(script: &str) -> (tui_donut::session::SessionSummary, String) {
    let mut keys = ScriptedKeys::from_chars(script);
    let mut term = TerminalRenderer::with_writer(Vec::new());
    let summary = SpinSession::new(DonutConfig::default())
        .run(&mut keys, &mut term)
        .unwrap();
    let text = String::from_utf8(term.into_inner()).unwrap();
    (summary, text)
}

#[test]
fn w_then_q_turns_once_and_quits() {
    let (summary, text) = run_script("wq");

    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(summary.angles.b, SPIN_STEP);
    assert_eq!(summary.angles.a, 0.0);
    // Initial frame plus the one after `w`; `q` does not redraw.
    assert_eq!(summary.frames, 2);
    assert_eq!(text.matches("\x1b[1;1H").count(), 2);
}

#[test]
fn quit_stops_before_remaining_keys() {
    let mut keys = ScriptedKeys::from_chars("dqww");
    let mut term = TerminalRenderer::with_writer(Vec::new());
    let summary = SpinSession::new(DonutConfig::default())
        .run(&mut keys, &mut term)
        .unwrap();

    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(summary.angles, SpinAngles::new(SPIN_STEP, 0.0));
    assert_eq!(keys.remaining(), 2);
}

#[test]
fn opposite_keys_cancel_out() {
    let (summary, _) = run_script("wsad");
    assert_eq!(summary.end, SessionEnd::InputClosed);
    assert_eq!(summary.angles, SpinAngles::default());
    assert_eq!(summary.frames, 5);
}

#[test]
fn closed_input_ends_like_quit() {
    let (summary, text) = run_script("");
    assert_eq!(summary.end, SessionEnd::InputClosed);
    assert_eq!(summary.frames, 1);
    assert!(text.starts_with("\x1b[1;1H"));
}
