//! Tests for the controller: event order and exactly-once scoring.

use cross_zero::{
    Controller, GameEvent, GameStatus, MemoryStore, Notifier, Player, SCORES_RESET_NOTICE,
    ScoreCounts, ScoreLedger, Transition,
};

/// Notifier that remembers every event.
#[derive(Debug, Default)]
struct Recorder {
    events: Vec<GameEvent>,
}

impl Notifier for Recorder {
    fn placed(&mut self, player: Player) {
        self.events.push(GameEvent::Placed(player));
    }

    fn won(&mut self, player: Player) {
        self.events.push(GameEvent::Won(player));
    }

    fn draw(&mut self) {
        self.events.push(GameEvent::Draw);
    }

    fn reset(&mut self) {
        self.events.push(GameEvent::Reset);
    }
}

fn table() -> Controller<MemoryStore, Recorder> {
    Controller::new(ScoreLedger::load(MemoryStore::new()), Recorder::default())
}

fn play(table: &mut Controller<MemoryStore, Recorder>, indices: &[usize]) {
    for &index in indices {
        table.place(index);
    }
}

#[test]
fn test_win_scenario() {
    let mut table = table();
    play(&mut table, &[0, 4, 1, 5, 2]);

    assert!(matches!(
        table.game().status(),
        GameStatus::Won {
            player: Player::X,
            ..
        }
    ));
    assert_eq!(table.scores(), ScoreCounts::new(1, 0, 0));
    assert_eq!(table.status_line(), "X Wins!");
    assert_eq!(
        table.notifier().events,
        vec![
            GameEvent::Placed(Player::X),
            GameEvent::Placed(Player::O),
            GameEvent::Placed(Player::X),
            GameEvent::Placed(Player::O),
            GameEvent::Placed(Player::X),
            GameEvent::Won(Player::X),
        ]
    );
}

#[test]
fn test_draw_scenario() {
    let mut table = table();
    play(&mut table, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    assert_eq!(table.game().status(), GameStatus::Draw);
    assert_eq!(table.scores(), ScoreCounts::new(0, 0, 1));
    assert_eq!(table.status_line(), "Game Draw!");
    assert_eq!(table.notifier().events.last(), Some(&GameEvent::Draw));
}

#[test]
fn test_clicks_after_round_end_do_not_double_count() {
    let mut table = table();
    play(&mut table, &[0, 4, 1, 5, 2]);
    let events = table.notifier().events.len();

    for index in 0..9 {
        assert!(matches!(table.place(index), Transition::Ignored(_)));
    }
    assert_eq!(table.scores(), ScoreCounts::new(1, 0, 0));
    assert_eq!(table.notifier().events.len(), events);
}

#[test]
fn test_ignored_placement_is_silent() {
    let mut table = table();
    table.place(4);
    table.place(4);
    table.place(42);
    assert_eq!(table.notifier().events, vec![GameEvent::Placed(Player::X)]);
    assert_eq!(table.status_line(), "Player O's turn");
}

#[test]
fn test_new_game_keeps_scores() {
    let mut table = table();
    play(&mut table, &[0, 4, 1, 5, 2]);
    table.new_game();

    assert!(table.game().is_active());
    assert_eq!(table.game().turn(), Some(Player::X));
    assert_eq!(table.scores(), ScoreCounts::new(1, 0, 0));
    assert_eq!(table.status_line(), "Player X's turn");
    assert_eq!(table.notifier().events.last(), Some(&GameEvent::Reset));

    // Second round is scored too.
    play(&mut table, &[3, 0, 4, 1, 8, 2]);
    assert_eq!(table.scores(), ScoreCounts::new(1, 1, 0));
}

#[test]
fn test_reset_scores_clears_everything() {
    let mut table = table();
    play(&mut table, &[0, 4]);
    table.reset_scores();

    assert_eq!(table.scores(), ScoreCounts::default());
    assert!(table.game().board().is_empty(0));
    assert_eq!(table.status_line(), SCORES_RESET_NOTICE);

    table.place(0);
    assert_eq!(table.status_line(), "Player O's turn");
}

#[test]
fn test_scores_survive_a_new_controller() {
    let mut table = table();
    play(&mut table, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    let store = table.ledger().store().clone();

    let restarted = Controller::new(ScoreLedger::load(store), Recorder::default());
    assert_eq!(restarted.scores(), ScoreCounts::new(0, 0, 1));
    assert!(restarted.game().is_active());
}
