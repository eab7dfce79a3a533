/// Number of ticks a progress animation takes to reach its target.
pub const STEPS: u32 = 60;
pub const DEFAULT_DURATION_MS: u32 = 2000;
/// Start offset between neighbouring items in a list.
pub const STAGGER_STEP_MS: u32 = 100;

/// Start delay for the item at `index` in a staggered list.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

/// One-shot latch: fires the first time it is asked and never again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only on the first call.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Timed interpolation of a displayed percentage from 0 to a target.
///
/// The animation is driven from outside: `trigger` once the element is
/// visible, then `tick` every [`ProgressAnimation::tick_interval_ms`] until
/// it reports completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    target: f64,
    current: f64,
    steps_taken: u32,
    duration_ms: u32,
    is_animating: bool,
    trigger: Latch,
}

impl ProgressAnimation {
    pub fn new(target_percentage: f64, duration_ms: u32) -> Self {
        let target = if target_percentage.is_nan() {
            0.0
        } else {
            target_percentage.clamp(0.0, 100.0)
        };
        Self {
            target,
            current: 0.0,
            steps_taken: 0,
            duration_ms,
            is_animating: false,
            trigger: Latch::new(),
        }
    }

    pub fn with_default_duration(target_percentage: f64) -> Self {
        Self::new(target_percentage, DEFAULT_DURATION_MS)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn is_triggered(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Triggered, not animating, and sitting at the target.
    pub fn is_complete(&self) -> bool {
        self.trigger.has_fired() && !self.is_animating
    }

    pub fn increment_per_step(&self) -> f64 {
        self.target / STEPS as f64
    }

    pub fn tick_interval_ms(&self) -> f64 {
        self.duration_ms as f64 / STEPS as f64
    }

    /// Start the animation. Returns true if a timer should now be started;
    /// later calls, and a zero target, return false.
    pub fn trigger(&mut self) -> bool {
        if !self.trigger.fire() {
            return false;
        }
        if self.target <= 0.0 {
            self.current = 0.0;
            return false;
        }
        self.is_animating = true;
        true
    }

    /// Advance one step. Returns whether the animation is still running.
    pub fn tick(&mut self) -> bool {
        if !self.is_animating {
            return false;
        }
        self.steps_taken += 1;
        // multiply rather than accumulate so rounding can't overshoot or stall
        let next = self.increment_per_step() * self.steps_taken as f64;
        if self.steps_taken >= STEPS || next >= self.target {
            self.current = self.target;
            self.is_animating = false;
        } else {
            self.current = next;
        }
        self.is_animating
    }

    /// Rounded value for labels.
    pub fn display_value(&self) -> u32 {
        self.current.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(anim: &mut ProgressAnimation) -> Vec<f64> {
        let mut values = vec![anim.current()];
        while anim.tick() {
            values.push(anim.current());
        }
        values.push(anim.current());
        values
    }

    #[test]
    fn test_latch_fires_once() {
        let mut latch = Latch::new();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_fired());
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, STAGGER_STEP_MS), 0);
        assert_eq!(stagger_delay(1, STAGGER_STEP_MS), 100);
        assert_eq!(stagger_delay(7, 250), 1750);
    }

    #[test]
    fn test_timing_constants() {
        let anim = ProgressAnimation::new(90.0, 2000);
        assert_eq!(anim.increment_per_step(), 1.5);
        assert!((anim.tick_interval_ms() - 33.333).abs() < 0.001);
    }

    #[test]
    fn test_eighty_five_over_sixty_ticks() {
        let mut anim = ProgressAnimation::with_default_duration(85.0);
        assert!(anim.trigger());
        let mut ticks = 0;
        while anim.tick() {
            ticks += 1;
        }
        // the final tick is the one returning false
        assert_eq!(ticks + 1, STEPS);
        assert_eq!(anim.current(), 85.0);
        assert_eq!(anim.display_value(), 85);
        assert!(anim.is_complete());

        let frozen = anim;
        assert!(!anim.tick());
        assert_eq!(anim, frozen);
    }

    #[test]
    fn test_values_monotonic_and_exact() {
        for target in 0..=100 {
            let mut anim = ProgressAnimation::with_default_duration(target as f64);
            anim.trigger();
            let values = run_to_end(&mut anim);
            assert!(
                values.windows(2).all(|w| w[0] <= w[1]),
                "target {target} not monotonic"
            );
            assert!(values.iter().all(|v| *v <= target as f64));
            assert_eq!(*values.last().unwrap(), target as f64);
            assert!(!anim.is_animating());
        }
    }

    #[test]
    fn test_zero_target_completes_immediately() {
        let mut anim = ProgressAnimation::with_default_duration(0.0);
        assert!(!anim.trigger());
        assert!(anim.is_complete());
        assert_eq!(anim.current(), 0.0);
        assert!(!anim.tick());
    }

    #[test]
    fn test_trigger_is_sticky() {
        let mut anim = ProgressAnimation::with_default_duration(50.0);
        assert!(anim.trigger());
        anim.tick();
        let partway = anim.current();
        // leaving and re-entering the viewport must not restart
        assert!(!anim.trigger());
        assert_eq!(anim.current(), partway);
        assert!(anim.is_animating());
    }

    #[test]
    fn test_tick_before_trigger_is_noop() {
        let mut anim = ProgressAnimation::with_default_duration(70.0);
        assert!(!anim.tick());
        assert_eq!(anim.current(), 0.0);
        assert!(!anim.is_complete());
    }

    #[test]
    fn test_target_clamped() {
        assert_eq!(ProgressAnimation::with_default_duration(140.0).target(), 100.0);
        assert_eq!(ProgressAnimation::with_default_duration(-3.0).target(), 0.0);
        assert_eq!(ProgressAnimation::with_default_duration(f64::NAN).target(), 0.0);
    }

    #[test]
    fn test_fresh_animation_restarts_from_zero() {
        let mut first = ProgressAnimation::with_default_duration(60.0);
        first.trigger();
        run_to_end(&mut first);
        let second = ProgressAnimation::with_default_duration(60.0);
        assert_eq!(second.current(), 0.0);
        assert!(!second.is_triggered());
    }
}
