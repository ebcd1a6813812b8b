//! Terminal bell feedback.

use super::{Cue, GameEvent, Notifier};
use crate::game::Player;
use std::io::Write;
use tracing::{instrument, warn};

const BEL: u8 = 0x07;

/// Rings the terminal bell once per tone of each event's cue.
///
/// Placements are silent unless `ring_on_place` is set; a bell on every
/// keystroke is noisy in most terminals.
#[derive(Debug)]
pub struct BellNotifier<W> {
    out: W,
    ring_on_place: bool,
}

impl BellNotifier<std::io::Stdout> {
    /// Bell on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> BellNotifier<W> {
    /// Bell on `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            ring_on_place: false,
        }
    }

    /// Also ring for each placement.
    pub fn ring_on_place(mut self, enabled: bool) -> Self {
        self.ring_on_place = enabled;
        self
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    #[instrument(skip(self))]
    fn ring(&mut self, event: GameEvent) {
        let count = Cue::for_event(event).tones().len();
        let bells = vec![BEL; count];
        if let Err(e) = self.out.write_all(&bells).and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to ring bell");
        }
    }
}

impl<W: Write> Notifier for BellNotifier<W> {
    fn placed(&mut self, player: Player) {
        if self.ring_on_place {
            self.ring(GameEvent::Placed(player));
        }
    }

    fn won(&mut self, player: Player) {
        self.ring(GameEvent::Won(player));
    }

    fn draw(&mut self) {
        self.ring(GameEvent::Draw);
    }

    fn reset(&mut self) {
        self.ring(GameEvent::Reset);
    }
}
