use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Visible,
    Fading,
    Hidden,
}

impl LoadPhase {
    /// Whether the overlay is still in the DOM.
    pub fn is_mounted(self) -> bool {
        !matches!(self, LoadPhase::Hidden)
    }

    pub fn overlay_class(self) -> &'static str {
        match self {
            LoadPhase::Visible => "opacity-100",
            LoadPhase::Fading => "opacity-0 pointer-events-none",
            LoadPhase::Hidden => "hidden",
        }
    }
}

/// Timing of the loading overlay: shown for `hold`, then faded out over `fade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSequence {
    pub hold: Duration,
    pub fade: Duration,
}

impl Default for LoadingSequence {
    fn default() -> Self {
        Self {
            hold: Duration::from_millis(1500),
            fade: Duration::from_millis(500),
        }
    }
}

impl LoadingSequence {
    pub fn phase_at(&self, elapsed: Duration) -> LoadPhase {
        if elapsed < self.hold {
            LoadPhase::Visible
        } else if elapsed < self.hold + self.fade {
            LoadPhase::Fading
        } else {
            LoadPhase::Hidden
        }
    }

    /// The phase following `phase` and how long to wait before entering it.
    pub fn next(&self, phase: LoadPhase) -> Option<(LoadPhase, Duration)> {
        match phase {
            LoadPhase::Visible => Some((LoadPhase::Fading, self.hold)),
            LoadPhase::Fading => Some((LoadPhase::Hidden, self.fade)),
            LoadPhase::Hidden => None,
        }
    }

    pub fn total(&self) -> Duration {
        self.hold + self.fade
    }
}

pub const ORBIT_RINGS: usize = 3;
pub const STREAM_BARS: usize = 8;

/// Inline style for orbital ring `i`; inner rings are smaller and spin faster.
pub fn orbit_ring_style(i: usize) -> String {
    let size = 100usize.saturating_sub(i * 20);
    let secs = (3.0 - i as f64 * 0.5).max(0.5);
    format!("width: {size}%; height: {size}%; margin: auto; animation-duration: {secs}s;")
}

/// Inline style for data stream bar `i`, staggered by a tenth of a second.
pub fn stream_bar_style(i: usize) -> String {
    format!("animation-delay: {:.1}s;", i as f64 * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_at() {
        let seq = LoadingSequence::default();
        assert_eq!(seq.phase_at(Duration::ZERO), LoadPhase::Visible);
        assert_eq!(seq.phase_at(Duration::from_millis(1499)), LoadPhase::Visible);
        assert_eq!(seq.phase_at(Duration::from_millis(1500)), LoadPhase::Fading);
        assert_eq!(seq.phase_at(Duration::from_millis(1999)), LoadPhase::Fading);
        assert_eq!(seq.phase_at(Duration::from_millis(2000)), LoadPhase::Hidden);
        assert_eq!(seq.phase_at(Duration::from_secs(60)), LoadPhase::Hidden);
    }

    #[test]
    fn test_next_walks_to_hidden() {
        let seq = LoadingSequence {
            hold: Duration::from_millis(100),
            fade: Duration::from_millis(20),
        };
        let mut phase = LoadPhase::Visible;
        let mut waited = Duration::ZERO;
        while let Some((next, wait)) = seq.next(phase) {
            waited += wait;
            assert_eq!(seq.phase_at(waited), next);
            phase = next;
        }
        assert_eq!(phase, LoadPhase::Hidden);
        assert_eq!(waited, seq.total());
        assert!(!phase.is_mounted());
    }

    #[test]
    fn test_decoration_styles() {
        assert_eq!(
            orbit_ring_style(0),
            "width: 100%; height: 100%; margin: auto; animation-duration: 3s;"
        );
        assert_eq!(
            orbit_ring_style(2),
            "width: 60%; height: 60%; margin: auto; animation-duration: 2s;"
        );
        assert_eq!(stream_bar_style(0), "animation-delay: 0.0s;");
        assert_eq!(stream_bar_style(7), "animation-delay: 0.7s;");
    }
}
