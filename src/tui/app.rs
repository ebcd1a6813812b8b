//! Application state for the terminal host.

use super::input::{Action, action_for_key, move_cursor};
use super::ui::cell_at;
use cross_zero::{Controller, KeyBindings, Notifier, Position, ScoreStore, Transition};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Interval between pulse frames of the win highlight.
pub const PULSE_TICK: Duration = Duration::from_millis(40);
/// Number of pulse frames after a win.
pub const PULSE_TICKS: u32 = 28;

/// Main application state.
pub struct App<S, N> {
    controller: Controller<S, N>,
    keys: KeyBindings,
    cursor: Position,
    board_area: Option<Rect>,
    won_at: Option<Instant>,
    should_quit: bool,
}

impl<S: ScoreStore, N: Notifier> App<S, N> {
    /// Creates the app around a controller.
    pub fn new(controller: Controller<S, N>, keys: KeyBindings) -> Self {
        Self {
            controller,
            keys,
            cursor: Position::Center,
            board_area: None,
            won_at: None,
            should_quit: false,
        }
    }

    /// The table being played.
    pub fn controller(&self) -> &Controller<S, N> {
        &self.controller
    }

    /// Shortcut keys.
    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was last drawn, for mouse hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = Some(area);
    }

    /// Whether the win highlight is in the bright half of its pulse at `now`.
    ///
    /// Purely cosmetic: derived from the time of the win, never stored.
    pub fn pulse_on(&self, now: Instant) -> bool {
        let Some(won_at) = self.won_at else {
            return false;
        };
        let tick = (now.saturating_duration_since(won_at).as_millis() / PULSE_TICK.as_millis()) as u32;
        tick <= PULSE_TICKS && (tick as f32 * 0.4).sin() > 0.0
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = action_for_key(key, &self.keys) else {
            return;
        };
        debug!(?action, "Key action");
        match action {
            Action::Place(index) => self.place(index),
            Action::PlaceAtCursor => self.place(self.cursor.to_index()),
            Action::MoveCursor(code) => self.cursor = move_cursor(self.cursor, code),
            Action::NewGame => {
                self.won_at = None;
                self.controller.new_game();
            }
            Action::ResetScores => {
                self.won_at = None;
                self.controller.reset_scores();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Handles a mouse event; a left click on a cell marks it.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(area) = self.board_area else {
            return;
        };
        if let Some(index) = cell_at(area, mouse.column, mouse.row) {
            if let Some(pos) = Position::from_index(index) {
                self.cursor = pos;
            }
            self.place(index);
        }
    }

    fn place(&mut self, index: usize) {
        if let Transition::Won(..) = self.controller.place(index) {
            self.won_at = Some(Instant::now());
        }
    }
}
