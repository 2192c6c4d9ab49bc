//! Scroll-derived UI state.
//!
//! Single source of truth for everything on the page that reacts to scroll
//! position: the progress percentage, the active section, the breath counter
//! and the breathing phase shown in the navigation bar. Pure math with no
//! DOM types, so the whole thing runs under plain `cargo test`.

/// Number of breaths a full scroll through the page represents.
pub const TOTAL_BREATHS: u32 = 10;

/// A pause between two scroll events longer than this counts as a completed
/// breath cycle and flips the phase on the later event.
pub const BREATH_PAUSE_MS: f64 = 2000.0;

/// The page sections, in scroll order. Each owns an equal-width band of the
/// progress range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Practices,
    Journey,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Home, SectionId::Practices, SectionId::Journey];

    /// DOM id of the section's anchor element.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Practices => "practices",
            SectionId::Journey => "journey",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Begin Practice",
            SectionId::Practices => "Mindfulness",
            SectionId::Journey => "Inner Peace",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SectionId::Home => "\u{1FAB7}",      // lotus
            SectionId::Practices => "\u{1F49C}", // heart
            SectionId::Journey => "\u{1F319}",   // moon
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Exhale,
}

impl BreathPhase {
    fn flipped(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe In",
            BreathPhase::Exhale => "Breathe Out",
        }
    }
}

/// Snapshot published to the UI after every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Percentage of the scrollable distance traversed, in `[0, 100]`.
    pub progress: f64,
    pub section: SectionId,
    pub breath_count: u32,
    pub breath_phase: BreathPhase,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            section: SectionId::Home,
            breath_count: 0,
            breath_phase: BreathPhase::Inhale,
        }
    }
}

/// Scroll offset as a percentage of the scrollable range.
///
/// A page shorter than the viewport has no scrollable range; that case
/// degrades to 0 so NaN never reaches the section/breath math.
pub fn progress_percent(offset_px: f64, viewport_px: f64, document_px: f64) -> f64 {
    let max_scroll = document_px - viewport_px;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (offset_px / max_scroll * 100.0).clamp(0.0, 100.0)
}

pub fn breath_count(progress: f64) -> u32 {
    (progress / 100.0 * TOTAL_BREATHS as f64).floor() as u32
}

/// Half-open band lookup: section `i` owns `[i * 100/3, (i + 1) * 100/3)`.
///
/// Exactly 100.0 falls outside every band, including the last one. Callers
/// retain the previously active section on a miss instead of clearing it.
pub fn section_for(progress: f64) -> Option<SectionId> {
    let width = 100.0 / SectionId::ALL.len() as f64;
    SectionId::ALL
        .iter()
        .copied()
        .enumerate()
        .find(|(index, _)| {
            let low = *index as f64 * width;
            progress >= low && progress < low + width
        })
        .map(|(_, section)| section)
}

/// Folds raw scroll events into a [`ScrollState`].
///
/// The breath phase flips when two consecutive scroll events are separated
/// by more than [`BREATH_PAUSE_MS`]. The comparison only happens on a new
/// event; there is no timer, so an idle page never changes phase.
pub struct ScrollTracker {
    state: ScrollState,
    last_scroll_ms: Option<f64>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            state: ScrollState::default(),
            last_scroll_ms: None,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recomputes the derived state from the current viewport metrics.
    /// `now_ms` is supplied by the caller so the cadence logic stays
    /// clock-free here.
    pub fn on_scroll(
        &mut self,
        offset_px: f64,
        viewport_px: f64,
        document_px: f64,
        now_ms: f64,
    ) -> ScrollState {
        if let Some(last) = self.last_scroll_ms {
            if now_ms - last > BREATH_PAUSE_MS {
                self.state.breath_phase = self.state.breath_phase.flipped();
            }
        }
        self.last_scroll_ms = Some(now_ms);

        let progress = progress_percent(offset_px, viewport_px, document_px);
        self.state.progress = progress;
        self.state.breath_count = breath_count(progress);
        if let Some(section) = section_for(progress) {
            self.state.section = section;
        }
        self.state
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_linear_over_the_scrollable_range() {
        assert_eq!(progress_percent(0.0, 1000.0, 3000.0), 0.0);
        assert_eq!(progress_percent(1000.0, 1000.0, 3000.0), 50.0);
        assert_eq!(progress_percent(2000.0, 1000.0, 3000.0), 100.0);
    }

    #[test]
    fn progress_clamps_out_of_range_offsets() {
        // Rubber-band overscroll can report offsets past either end.
        assert_eq!(progress_percent(-50.0, 1000.0, 3000.0), 0.0);
        assert_eq!(progress_percent(2500.0, 1000.0, 3000.0), 100.0);
    }

    #[test]
    fn short_page_degrades_to_zero_not_nan() {
        // Content shorter than (or equal to) the viewport: no scroll range.
        assert_eq!(progress_percent(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(0.0, 1000.0, 600.0), 0.0);

        let mut tracker = ScrollTracker::new();
        let state = tracker.on_scroll(0.0, 1000.0, 600.0, 0.0);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.section, SectionId::Home);
        assert_eq!(state.breath_count, 0);
    }

    #[test]
    fn breath_count_floors_the_progress() {
        assert_eq!(breath_count(0.0), 0);
        assert_eq!(breath_count(9.9), 0);
        assert_eq!(breath_count(55.0), 5);
        assert_eq!(breath_count(100.0), TOTAL_BREATHS);
    }

    #[test]
    fn sections_own_equal_half_open_bands() {
        assert_eq!(section_for(0.0), Some(SectionId::Home));
        assert_eq!(section_for(33.0), Some(SectionId::Home));
        assert_eq!(section_for(100.0 / 3.0), Some(SectionId::Practices));
        assert_eq!(section_for(50.0), Some(SectionId::Practices));
        assert_eq!(section_for(200.0 / 3.0), Some(SectionId::Journey));
        assert_eq!(section_for(66.666_666_7), Some(SectionId::Journey));
        assert_eq!(section_for(99.9), Some(SectionId::Journey));
    }

    #[test]
    fn full_scroll_matches_no_band() {
        // Known edge case: the last band is open on the right, so the exact
        // bottom of the page belongs to no section. The tracker papers over
        // it by retaining the previous section (next test).
        assert_eq!(section_for(100.0), None);
    }

    #[test]
    fn tracker_retains_section_at_full_scroll() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll(1900.0, 1000.0, 3000.0, 0.0);
        assert_eq!(tracker.state().section, SectionId::Journey);

        let state = tracker.on_scroll(2000.0, 1000.0, 3000.0, 100.0);
        assert_eq!(state.progress, 100.0);
        assert_eq!(state.section, SectionId::Journey);
    }

    #[test]
    fn halfway_through_a_3000px_page() {
        let mut tracker = ScrollTracker::new();
        let state = tracker.on_scroll(1000.0, 1000.0, 3000.0, 0.0);
        assert_eq!(state.progress, 50.0);
        assert_eq!(state.breath_count, 5);
        assert_eq!(state.section, SectionId::Practices);
    }

    #[test]
    fn first_event_never_flips_the_phase() {
        let mut tracker = ScrollTracker::new();
        let state = tracker.on_scroll(100.0, 1000.0, 3000.0, 50_000.0);
        assert_eq!(state.breath_phase, BreathPhase::Inhale);
    }

    #[test]
    fn phase_flips_only_after_a_pause() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll(100.0, 1000.0, 3000.0, 0.0);
        let state = tracker.on_scroll(200.0, 1000.0, 3000.0, 2500.0);
        assert_eq!(state.breath_phase, BreathPhase::Exhale);
    }

    #[test]
    fn phase_stays_quiet_during_a_burst() {
        let mut tracker = ScrollTracker::new();
        for i in 0..20 {
            let state = tracker.on_scroll(i as f64 * 10.0, 1000.0, 3000.0, i as f64 * 100.0);
            assert_eq!(state.breath_phase, BreathPhase::Inhale);
        }
    }

    #[test]
    fn pause_timestamp_resets_on_every_event() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll(100.0, 1000.0, 3000.0, 0.0);
        // Gap of 2500ms: flip.
        assert_eq!(
            tracker.on_scroll(200.0, 1000.0, 3000.0, 2500.0).breath_phase,
            BreathPhase::Exhale
        );
        // Gap of 1500ms from the *previous event*, not from the last flip.
        assert_eq!(
            tracker.on_scroll(300.0, 1000.0, 3000.0, 4000.0).breath_phase,
            BreathPhase::Exhale
        );
    }

    #[test]
    fn idle_page_never_changes_state() {
        // The phase is a function of scroll cadence, not wall-clock time:
        // with no new event there is nothing that could flip it.
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll(100.0, 1000.0, 3000.0, 0.0);
        let before = tracker.state();
        let after = tracker.state();
        assert_eq!(before, after);
        assert_eq!(after.breath_phase, BreathPhase::Inhale);
    }
}
