//! Reveal-on-scroll primitives.
//!
//! Everything here is plain data so it can be exercised without a browser.
//! The Leptos binding that feeds a [`RevealLatch`] from an
//! IntersectionObserver lives in `app::reveal`.

use std::time::Duration;

use thiserror::Error;

/// Visible-area ratios this close below the threshold still count as crossing it.
/// Browsers report ratios as floats and often land a hair under the requested value.
const RATIO_TOLERANCE: f64 = 1e-3;

const DEFAULT_DURATION: Duration = Duration::from_millis(600);
const EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("threshold must be within 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f64),
}

/// Minimum fraction of an element that must be inside the viewport before it reveals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Used by section headers and anything laid out as a whole section.
    pub const SECTION: Threshold = Threshold(0.1);
    /// Project cards wait until a fifth of the card is on screen.
    pub const CARD: Threshold = Threshold(0.2);

    pub fn new(ratio: f64) -> Result<Self, MotionError> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(MotionError::ThresholdOutOfRange(ratio))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    fn is_met_by(self, visibility: Visibility) -> bool {
        visibility.intersecting && visibility.ratio + RATIO_TOLERANCE >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::SECTION
    }
}

/// A single observation of an element against the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn new(intersecting: bool, ratio: f64) -> Self {
        Self {
            intersecting,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self::new(false, 0.0)
    }
}

/// One-shot "has entered view" flag.
///
/// Starts unrevealed and flips the first time an observation meets the
/// threshold. Nothing flips it back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: Threshold,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observation. Returns `true` only for the observation that flips the latch.
    pub fn observe(&mut self, visibility: Visibility) -> bool {
        if self.revealed || !self.threshold.is_met_by(visibility) {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Reveals unconditionally. Used when visibility can't be observed at all.
    pub fn force(&mut self) -> bool {
        let flipped = !self.revealed;
        self.revealed = true;
        flipped
    }
}

/// Visual state of an element at one end of its reveal animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Horizontal offset in px.
    pub x: f32,
    /// Vertical offset in px.
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// Animation descriptor: where an element starts, where it settles, and how it gets there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub rest: Pose,
    pub duration: Duration,
    pub delay: Duration,
}

impl Motion {
    /// Fades in while rising `offset` px into place.
    pub const fn rise(offset: f32) -> Self {
        Self::from_pose(Pose {
            opacity: 0.0,
            x: 0.0,
            y: offset,
            scale: 1.0,
        })
    }

    /// Fades in while sliding horizontally. Negative offsets enter from the left.
    pub const fn slide(offset: f32) -> Self {
        Self::from_pose(Pose {
            opacity: 0.0,
            x: offset,
            y: 0.0,
            scale: 1.0,
        })
    }

    /// Fades in while scaling up from `scale`.
    pub const fn grow(scale: f32) -> Self {
        Self::from_pose(Pose {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale,
        })
    }

    pub const fn fade() -> Self {
        Self::grow(1.0)
    }

    const fn from_pose(initial: Pose) -> Self {
        Self {
            initial,
            rest: Pose::REST,
            duration: DEFAULT_DURATION,
            delay: Duration::ZERO,
        }
    }

    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Pushes the start back by `step` per position in a list.
    pub fn stagger(mut self, index: usize, step: Duration) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay = self.delay.saturating_add(step.saturating_mul(index));
        self
    }

    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed {
            self.rest
        } else {
            self.initial
        }
    }

    pub fn transition(&self) -> String {
        let duration = self.duration.as_millis();
        let delay = self.delay.as_millis();
        format!(
            "transition: opacity {duration}ms {EASING} {delay}ms, transform {duration}ms {EASING} {delay}ms;"
        )
    }

    /// Inline style for the element given the current reveal state.
    pub fn style(&self, revealed: bool) -> String {
        format!("{} {}", self.pose(revealed).css(), self.transition())
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::rise(30.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        assert_eq!(Threshold::new(0.0).map(Threshold::get), Ok(0.0));
        assert_eq!(Threshold::new(1.0).map(Threshold::get), Ok(1.0));
        assert_eq!(
            Threshold::new(1.5),
            Err(MotionError::ThresholdOutOfRange(1.5))
        );
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_latch_starts_hidden() {
        let latch = RevealLatch::new(Threshold::SECTION);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_ignores_observations_below_threshold() {
        let mut latch = RevealLatch::new(Threshold::CARD);
        assert!(!latch.observe(Visibility::hidden()));
        assert!(!latch.observe(Visibility::new(true, 0.05)));
        assert!(!latch.observe(Visibility::new(true, 0.15)));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_requires_intersection() {
        let mut latch = RevealLatch::new(Threshold::new(0.0).unwrap());
        assert!(!latch.observe(Visibility::new(false, 0.0)));
        assert!(latch.observe(Visibility::new(true, 0.0)));
    }

    #[test]
    fn test_latch_flips_once_and_never_reverts() {
        let mut latch = RevealLatch::new(Threshold::SECTION);
        let observations = [
            Visibility::new(true, 0.02),
            Visibility::new(true, 0.4),
            Visibility::new(true, 1.0),
            Visibility::hidden(),
            Visibility::new(true, 0.6),
            Visibility::hidden(),
        ];
        let flips = observations
            .iter()
            .map(|v| {
                let flipped = latch.observe(*v);
                (flipped, latch.is_revealed())
            })
            .collect::<Vec<_>>();
        assert_eq!(
            flips,
            vec![
                (false, false),
                (true, true),
                (false, true),
                (false, true),
                (false, true),
                (false, true),
            ]
        );
    }

    #[test]
    fn test_latch_tolerates_ratio_just_under_threshold() {
        let mut latch = RevealLatch::new(Threshold::SECTION);
        assert!(latch.observe(Visibility::new(true, 0.0999)));
    }

    #[test]
    fn test_force_reveals_once() {
        let mut latch = RevealLatch::new(Threshold::SECTION);
        assert!(latch.force());
        assert!(!latch.force());
        assert!(!latch.observe(Visibility::new(true, 1.0)));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_pose_css() {
        let pose = Pose {
            opacity: 0.0,
            x: -50.0,
            y: 0.0,
            scale: 1.0,
        };
        assert_eq!(
            pose.css(),
            "opacity: 0; transform: translate(-50px, 0px) scale(1);"
        );
        assert_eq!(
            Pose::REST.css(),
            "opacity: 1; transform: translate(0px, 0px) scale(1);"
        );
    }

    #[test]
    fn test_style_follows_reveal_state() {
        let motion = Motion::rise(30.0).delay(Duration::from_millis(200));
        let hidden = motion.style(false);
        let shown = motion.style(true);
        assert!(hidden.starts_with(&motion.initial.css()));
        assert!(shown.starts_with(&Pose::REST.css()));
        assert!(hidden.contains("translate(0px, 30px)"));
        // the transition is identical on both sides so the browser interpolates between them
        assert!(hidden.ends_with(&motion.transition()));
        assert!(shown.ends_with(&motion.transition()));
    }

    #[test]
    fn test_transition_timing() {
        let motion = Motion::grow(0.8)
            .duration(Duration::from_millis(400))
            .delay(Duration::from_millis(150));
        let transition = motion.transition();
        assert!(transition.contains("opacity 400ms"));
        assert!(transition.contains("transform 400ms"));
        assert!(transition.contains(" 150ms,"));
        assert!(transition.ends_with(" 150ms;"));
    }

    #[test]
    fn test_presets() {
        assert_eq!(Motion::rise(50.0).initial.y, 50.0);
        assert_eq!(Motion::slide(-50.0).initial.x, -50.0);
        assert_eq!(Motion::grow(0.8).initial.scale, 0.8);
        let fade = Motion::fade();
        assert_eq!(fade.initial.opacity, 0.0);
        assert_eq!(fade.initial.scale, 1.0);
        assert_eq!(fade.rest, Pose::REST);
        assert_eq!(fade.duration, Duration::from_millis(600));
        assert_eq!(fade.delay, Duration::ZERO);
    }

    #[test]
    fn test_stagger_adds_to_base_delay() {
        let step = Duration::from_millis(200);
        let base = Motion::rise(50.0).delay(Duration::from_millis(100));
        let delays = (0..3)
            .map(|i| base.stagger(i, step).delay.as_millis())
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![100, 300, 500]);
    }
}
