//! Tests for the scripted harness runs.

use toybox::{GameCommand, parse_calc_input, parse_game_input, run_calculator, run_tictactoe};
use toybox_calculator::{ClipboardError, ClipboardSink, MemoryClipboard};
use toybox_tictactoe::{GameStatus, Outcome, Player};

fn words(input: &str) -> Vec<String> {
    input.split_whitespace().map(String::from).collect()
}

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::new("no display"))
    }
}

#[test]
fn test_calculator_run_text() {
    let tokens = parse_calc_input(&words("6 + 4 = Copy")).unwrap();
    let mut clipboard = MemoryClipboard::new();

    let report = run_calculator(&tokens, &mut clipboard);

    assert_eq!(report.calculator.display(), "10.0");
    assert_eq!(report.copied.as_deref(), Some("10.0"));
    assert_eq!(clipboard.contents(), Some("10.0"));
    assert_eq!(
        report.to_string(),
        "Display: 10.0\nCopied: 10.0\nHistory:\n  6.0 + 4.0 = 10.0\n"
    );
}

#[test]
fn test_calculator_run_shows_pending() {
    let tokens = parse_calc_input(&words("2 . 5 *")).unwrap();
    let report = run_calculator(&tokens, &mut MemoryClipboard::new());
    assert!(report.to_string().contains("Pending: 2.5 *\n"));
}

#[test]
fn test_calculator_run_continues_after_rejected_key() {
    let tokens = parse_calc_input(&words("1 / 0 = + 2 + 3 =")).unwrap();

    let report = run_calculator(&tokens, &mut MemoryClipboard::new());

    assert_eq!(report.errors, ["Invalid number \"Error\""]);
    assert_eq!(report.calculator.display(), "5.0");
}

#[test]
fn test_clipboard_failure_is_not_fatal() {
    let tokens = parse_calc_input(&words("4 Copy 2")).unwrap();

    let report = run_calculator(&tokens, &mut BrokenClipboard);

    assert_eq!(report.copied, None);
    assert_eq!(report.errors, ["no display"]);
    assert_eq!(report.calculator.display(), "42");
}

#[test]
fn test_calculator_json_snapshot() {
    let tokens = parse_calc_input(&words("8 / 0 =")).unwrap();
    let report = run_calculator(&tokens, &mut MemoryClipboard::new());

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["calculator"]["display"], "Error");
    assert_eq!(json["calculator"]["history"], serde_json::json!([]));
}

#[test]
fn test_tictactoe_run_win_then_ignored_move() {
    let commands = parse_game_input(&words("0,0 1,1 0,1 2,2 0,2 1,0")).unwrap();

    let report = run_tictactoe(&commands);

    assert_eq!(
        report.game.state().status(),
        GameStatus::Finished(Outcome::Winner(Player::X))
    );
    assert_eq!(report.events.len(), 6);
    assert_eq!(
        report.to_string(),
        "X|X|X\n-+-+-\n4|O|6\n-+-+-\n7|8|O\n\nPlayer X wins!\nScore - X: 1  O: 0  Draws: 0\nIgnored: Game is already over\n"
    );
}

#[test]
fn test_tictactoe_run_reset_keeps_score() {
    let commands = parse_game_input(&words(
        "0,0 0,1 0,2 1,1 1,0 1,2 2,1 2,0 2,2 reset 1,1",
    ))
    .unwrap();
    assert!(commands.contains(&GameCommand::Reset));

    let report = run_tictactoe(&commands);

    assert_eq!(*report.game.score().draws(), 1);
    assert_eq!(report.game.status_line(), "Player O's turn");
}

#[test]
fn test_tictactoe_bad_move_rejected_at_parse() {
    let err = parse_game_input(&words("0,0 middle")).unwrap_err();
    assert!(err.to_string().contains("middle"));
}
