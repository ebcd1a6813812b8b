//! Feedback sinks for game events.
//!
//! A [`Notifier`] hears about every placement, finished round, and reset. It
//! owns no game state and cannot fail from the caller's point of view:
//! implementations handle their own I/O errors.

mod bell;
mod cue;
mod log;

pub use bell::BellNotifier;
pub use cue::{Cue, Tone, Waveform};
pub use log::LogNotifier;

use crate::game::Player;

/// A discrete feedback signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameEvent {
    /// A mark was placed.
    #[display("{} placed", _0)]
    Placed(Player),
    /// A round was won.
    #[display("{} won", _0)]
    Won(Player),
    /// A round was drawn.
    #[display("draw")]
    Draw,
    /// The board was cleared.
    #[display("reset")]
    Reset,
}

/// Receiver of game events, one method per event kind.
pub trait Notifier {
    /// A mark was placed by `player`.
    fn placed(&mut self, player: Player);

    /// `player` won the round.
    fn won(&mut self, player: Player);

    /// The round was drawn.
    fn draw(&mut self);

    /// The board was cleared for a new round.
    fn reset(&mut self);

    /// Dispatches `event` to the matching method.
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::Placed(player) => self.placed(player),
            GameEvent::Won(player) => self.won(player),
            GameEvent::Draw => self.draw(),
            GameEvent::Reset => self.reset(),
        }
    }
}

/// Fans every event out to both notifiers, left first.
impl<A: Notifier, B: Notifier> Notifier for (A, B) {
    fn placed(&mut self, player: Player) {
        self.0.placed(player);
        self.1.placed(player);
    }

    fn won(&mut self, player: Player) {
        self.0.won(player);
        self.1.won(player);
    }

    fn draw(&mut self) {
        self.0.draw();
        self.1.draw();
    }

    fn reset(&mut self) {
        self.0.reset();
        self.1.reset();
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn placed(&mut self, player: Player) {
        (**self).placed(player);
    }

    fn won(&mut self, player: Player) {
        (**self).won(player);
    }

    fn draw(&mut self) {
        (**self).draw();
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
