mod frames;

use std::num::NonZeroU32;

pub use frames::{BrowserFrames, FrameScheduler, ScrambleRun};

/// Glyphs used for characters that are not yet revealed.
/// Underscore is repeated so it shows up more often than the rest.
pub const PLACEHOLDER_GLYPHS: &str = "!<>-_\\/[]{}—=+*^?#________";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Revealing,
    Revealed,
}

/// How many ticks it takes to lock in a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub ticks_per_char: NonZeroU32,
}

impl Pacing {
    pub fn new(ticks_per_char: u32) -> Self {
        Self {
            ticks_per_char: NonZeroU32::new(ticks_per_char).unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Cursor increment applied on every tick.
    pub fn step(&self) -> f64 {
        1.0 / f64::from(self.ticks_per_char.get())
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Reveals `target` left to right, one tick at a time, showing random
/// placeholder glyphs for everything past the cursor.
#[derive(Debug, Clone)]
pub struct ScrambleReveal {
    target: Vec<char>,
    glyphs: Vec<char>,
    pacing: Pacing,
    rng: fastrand::Rng,
    // cursor is ticks / ticks_per_char, kept integral so it never drifts
    ticks: u64,
    phase: Phase,
    display: String,
}

impl ScrambleReveal {
    pub fn new(text: &str) -> Self {
        Self::with_rng(text, Pacing::default(), fastrand::Rng::new())
    }

    pub fn with_rng(text: &str, pacing: Pacing, rng: fastrand::Rng) -> Self {
        let mut reveal = Self {
            target: Vec::new(),
            glyphs: PLACEHOLDER_GLYPHS.chars().collect(),
            pacing,
            rng,
            ticks: 0,
            phase: Phase::Idle,
            display: String::new(),
        };
        reveal.reset(text);
        reveal
    }

    /// Swaps the placeholder alphabet. An empty alphabet falls back to the default.
    pub fn with_glyphs(mut self, glyphs: &str) -> Self {
        if !glyphs.is_empty() {
            self.glyphs = glyphs.chars().collect();
        }
        self
    }

    /// Restarts from a fully scrambled state if `text` is a new target.
    /// Returns whether a restart happened.
    pub fn retarget(&mut self, text: &str) -> bool {
        if self.target.iter().copied().eq(text.chars()) {
            return false;
        }
        self.reset(text);
        true
    }

    fn reset(&mut self, text: &str) {
        self.target = text.chars().collect();
        self.ticks = 0;
        self.display.clear();
        self.phase = if self.target.is_empty() {
            Phase::Revealed
        } else {
            Phase::Idle
        };
    }

    /// Renders one frame from the current cursor, then advances the cursor.
    ///
    /// The frame rendered once the cursor reaches the target length is the
    /// target itself, and the run is then [`Phase::Revealed`].
    pub fn tick(&mut self) -> &str {
        if self.phase == Phase::Revealed {
            return &self.display;
        }
        let revealed = self.revealed_len();
        let glyphs = &self.glyphs;
        let rng = &mut self.rng;
        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < revealed {
                    c
                } else {
                    glyphs[rng.usize(..glyphs.len())]
                }
            })
            .collect();

        if revealed >= self.target.len() {
            self.phase = Phase::Revealed;
        } else {
            self.phase = Phase::Revealing;
            self.ticks += 1;
        }
        &self.display
    }

    /// Number of leading characters locked to their final value.
    pub fn revealed_len(&self) -> usize {
        let whole = self.ticks / u64::from(self.pacing.ticks_per_char.get());
        usize::try_from(whole)
            .unwrap_or(usize::MAX)
            .min(self.target.len())
    }

    pub fn cursor(&self) -> f64 {
        self.ticks as f64 / f64::from(self.pacing.ticks_per_char.get())
    }

    /// Ticks a full run takes from `Idle` to `Revealed`.
    pub fn frame_budget(&self) -> u64 {
        if self.target.is_empty() {
            0
        } else {
            self.target.len() as u64 * u64::from(self.pacing.ticks_per_char.get()) + 1
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(text: &str) -> ScrambleReveal {
        ScrambleReveal::with_rng(text, Pacing::default(), fastrand::Rng::with_seed(7))
    }

    fn run_to_end(reveal: &mut ScrambleReveal) -> usize {
        let mut ticks = 0;
        while !reveal.is_revealed() {
            reveal.tick();
            ticks += 1;
            assert!(ticks <= 10_000, "reveal never terminated");
        }
        ticks
    }

    #[test]
    fn test_two_char_scenario() {
        let mut reveal = seeded("EM");
        assert_eq!(reveal.phase(), Phase::Idle);

        // tick 0: nothing locked yet
        let frame = reveal.tick().to_string();
        assert_eq!(frame.chars().count(), 2);
        assert!(frame.chars().all(|c| PLACEHOLDER_GLYPHS.contains(c)));
        assert_eq!(reveal.phase(), Phase::Revealing);

        reveal.tick();
        reveal.tick();
        // tick 3: cursor is exactly 1
        assert_eq!(reveal.cursor(), 1.0);
        let frame = reveal.tick().to_string();
        assert!(frame.starts_with('E'));
        assert!(PLACEHOLDER_GLYPHS.contains(frame.chars().nth(1).unwrap()));

        reveal.tick();
        reveal.tick();
        // tick 6: cursor reaches the length, frame is final
        assert_eq!(reveal.tick(), "EM");
        assert!(reveal.is_revealed());
        assert_eq!(reveal.cursor(), 2.0);
    }

    #[test]
    fn test_empty_target_is_revealed_immediately() {
        let mut reveal = seeded("");
        assert!(reveal.is_revealed());
        assert_eq!(reveal.display(), "");
        assert_eq!(reveal.frame_budget(), 0);
        assert_eq!(run_to_end(&mut reveal), 0);
        assert_eq!(reveal.tick(), "");
    }

    #[test]
    fn test_terminal_state_matches_target() {
        for text in ["Elijah Manda", "About Me", "Technical Expertise", "x", "Ünïcødé ✓"] {
            let mut reveal = seeded(text);
            let ticks = run_to_end(&mut reveal);
            assert_eq!(reveal.display(), text);
            assert_eq!(ticks as u64, reveal.frame_budget());
            // extra ticks change nothing
            assert_eq!(reveal.tick(), text);
            assert_eq!(reveal.cursor() as usize, text.chars().count());
        }
    }

    #[test]
    fn test_revealed_prefix_matches_target_every_frame() {
        let text = "Get In Touch";
        let target = text.chars().collect::<Vec<_>>();
        let mut reveal = seeded(text);
        while !reveal.is_revealed() {
            let locked = reveal.revealed_len();
            let frame = reveal.tick().chars().collect::<Vec<_>>();
            assert_eq!(frame.len(), target.len());
            assert_eq!(frame[..locked], target[..locked]);
        }
    }

    #[test]
    fn test_cursor_is_monotonic() {
        let mut reveal = seeded("Key Projects");
        let mut last = reveal.cursor();
        while !reveal.is_revealed() {
            reveal.tick();
            assert!(reveal.cursor() >= last);
            last = reveal.cursor();
        }
    }

    #[test]
    fn test_retarget_restarts_from_zero() {
        let mut reveal = seeded("Elijah Manda");
        for _ in 0..15 {
            reveal.tick();
        }
        assert_eq!(reveal.revealed_len(), 5);

        assert!(reveal.retarget("EM"));
        assert_eq!(reveal.phase(), Phase::Idle);
        assert_eq!(reveal.cursor(), 0.0);
        assert_eq!(reveal.display(), "");

        let frame = reveal.tick().to_string();
        assert_eq!(frame.chars().count(), 2);
        assert!(frame.chars().all(|c| PLACEHOLDER_GLYPHS.contains(c)));
        run_to_end(&mut reveal);
        assert_eq!(reveal.display(), "EM");
    }

    #[test]
    fn test_retarget_same_text_keeps_progress() {
        let mut reveal = seeded("About Me");
        for _ in 0..4 {
            reveal.tick();
        }
        assert!(!reveal.retarget("About Me"));
        assert_eq!(reveal.revealed_len(), 1);
    }

    #[test]
    fn test_pacing_is_configurable() {
        let mut fast = ScrambleReveal::with_rng("abc", Pacing::new(1), fastrand::Rng::with_seed(1));
        assert_eq!(fast.frame_budget(), 4);
        assert_eq!(run_to_end(&mut fast), 4);

        let mut slow = ScrambleReveal::with_rng("abc", Pacing::new(5), fastrand::Rng::with_seed(1));
        assert_eq!(slow.frame_budget(), 16);
        assert_eq!(run_to_end(&mut slow), 16);

        // zero ticks per char is clamped to one
        assert_eq!(Pacing::new(0), Pacing::new(1));
        assert_eq!(Pacing::default().step(), 1.0 / 3.0);
    }

    #[test]
    fn test_custom_glyphs() {
        let mut reveal = seeded("abcd").with_glyphs("#");
        assert_eq!(reveal.tick(), "####");
        let mut reveal = seeded("abcd").with_glyphs("");
        assert!(reveal.tick().chars().all(|c| PLACEHOLDER_GLYPHS.contains(c)));
    }

    #[test]
    fn test_placeholders_reroll_between_ticks() {
        let mut reveal = seeded("a long line of text that stays scrambled for a while");
        let first = reveal.tick().to_string();
        let second = reveal.tick().to_string();
        assert_ne!(first, second);
    }
}
