//! Tone recipes for each game event.

use super::GameEvent;
use crate::game::Player;
use std::time::Duration;

/// Oscillator shape of a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Waveform {
    /// Pure sine.
    #[display("sine")]
    Sine,
    /// Square wave.
    #[display("square")]
    Square,
    /// Sawtooth wave.
    #[display("sawtooth")]
    Sawtooth,
    /// Triangle wave.
    #[display("triangle")]
    Triangle,
}

/// One synthesized beep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: f32,
    /// Oscillator shape.
    pub waveform: Waveform,
    /// Time until the tone fades out.
    pub duration: Duration,
    /// Peak gain, 0.0 to 1.0.
    pub volume: f32,
    /// Start offset from the event.
    pub offset: Duration,
}

impl Tone {
    const fn new(frequency_hz: f32, waveform: Waveform, millis: u64, volume: f32) -> Self {
        Self {
            frequency_hz,
            waveform,
            duration: Duration::from_millis(millis),
            volume,
            offset: Duration::ZERO,
        }
    }

    const fn after(mut self, millis: u64) -> Self {
        self.offset = Duration::from_millis(millis);
        self
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}Hz {} {}ms vol {}",
            self.frequency_hz,
            self.waveform,
            self.duration.as_millis(),
            self.volume
        )?;
        if !self.offset.is_zero() {
            write!(f, " at +{}ms", self.offset.as_millis())?;
        }
        Ok(())
    }
}

static PLACE_X: [Tone; 1] = [Tone::new(360.0, Waveform::Square, 90, 0.09)];
static PLACE_O: [Tone; 1] = [Tone::new(620.0, Waveform::Sine, 80, 0.08)];
static WIN: [Tone; 2] = [
    Tone::new(960.0, Waveform::Sawtooth, 160, 0.11),
    Tone::new(740.0, Waveform::Sine, 120, 0.09).after(140),
];
static DRAW: [Tone; 1] = [Tone::new(420.0, Waveform::Triangle, 120, 0.06)];
static RESET: [Tone; 1] = [Tone::new(180.0, Waveform::Sine, 120, 0.06)];

/// The tones played for an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    tones: &'static [Tone],
}

impl Cue {
    /// Cue for `event`.
    pub fn for_event(event: GameEvent) -> Self {
        let tones: &'static [Tone] = match event {
            GameEvent::Placed(Player::X) => &PLACE_X,
            GameEvent::Placed(Player::O) => &PLACE_O,
            GameEvent::Won(_) => &WIN,
            GameEvent::Draw => &DRAW,
            GameEvent::Reset => &RESET,
        };
        Self { tones }
    }

    /// Tones in start order.
    pub fn tones(&self) -> &'static [Tone] {
        self.tones
    }

    /// Time from the event until the last tone ends.
    pub fn length(&self) -> Duration {
        self.tones
            .iter()
            .map(|t| t.offset + t.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

/// Tones separated by `; `.
impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, tone) in self.tones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", tone)?;
        }
        Ok(())
    }
}
