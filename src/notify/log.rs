//! Notifier that records events as tracing events.

use super::{Cue, GameEvent, Notifier};
use crate::game::Player;
use tracing::{debug, info};

/// Emits one structured log line per game event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    fn emit(&self, event: GameEvent) {
        let cue = Cue::for_event(event);
        match event {
            GameEvent::Placed(_) => debug!(%event, %cue, "Game event"),
            _ => info!(%event, %cue, cue_ms = cue.length().as_millis() as u64, "Game event"),
        }
    }
}

impl Notifier for LogNotifier {
    fn placed(&mut self, player: Player) {
        self.emit(GameEvent::Placed(player));
    }

    fn won(&mut self, player: Player) {
        self.emit(GameEvent::Won(player));
    }

    fn draw(&mut self) {
        self.emit(GameEvent::Draw);
    }

    fn reset(&mut self) {
        self.emit(GameEvent::Reset);
    }
}
