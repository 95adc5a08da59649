use log::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerConfig {
    /// Fraction of the target that has to be inside the root, 0..=1.
    pub threshold: f64,
    /// Grows (positive) or shrinks (negative) the viewport on every side.
    pub root_margin_px: i32,
    /// Latch on the first visible sample and stop observing.
    pub once: bool,
}

impl TriggerConfig {
    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn inflate(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: (self.width + 2.0 * margin).max(0.0),
            height: (self.height + 2.0 * margin).max(0.0),
        }
    }

    /// Edge-inclusive overlap, so touching rectangles yield a zero-area rect.
    fn overlap(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// One observation of a target, as an intersection observer reports it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn from_rects(target: Rect, viewport: Rect, root_margin_px: i32) -> Self {
        let root = viewport.inflate(f64::from(root_margin_px));
        match target.overlap(&root) {
            None => Self { ratio: 0.0, is_intersecting: false },
            Some(overlap) => {
                let area = target.width * target.height;
                let ratio = if area <= 0.0 {
                    1.0
                } else {
                    (overlap.width * overlap.height / area).clamp(0.0, 1.0)
                };
                Self { ratio, is_intersecting: true }
            }
        }
    }

    fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Latch {
    Unseen,
    Seen,
}

/// Turns intersection samples into a visible / not visible signal.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityGate {
    config: TriggerConfig,
    visible: bool,
    latch: Latch,
    connected: bool,
}

impl VisibilityGate {
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            visible: false,
            latch: Latch::Unseen,
            connected: true,
        }
    }

    pub fn config(&self) -> TriggerConfig {
        self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn latch(&self) -> Latch {
        self.latch
    }

    /// False once the gate has latched or was disconnected; the observer
    /// feeding it can be released.
    pub fn wants_observation(&self) -> bool {
        self.connected && !(self.config.once && self.latch == Latch::Seen)
    }

    /// Returns true when the visible value changed.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if !self.wants_observation() {
            return false;
        }
        let now = sample.meets(self.config.threshold);
        if now {
            self.latch = Latch::Seen;
        }
        if self.config.once && !now {
            return false;
        }
        let changed = now != self.visible;
        self.visible = now;
        if changed {
            debug!("Visibility changed to {} (ratio {:.2})", now, sample.ratio);
        }
        changed
    }

    pub fn observe_rects(&mut self, target: Rect, viewport: Rect) -> bool {
        let sample = IntersectionSample::from_rects(target, viewport, self.config.root_margin_px);
        self.observe(sample)
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONCE: TriggerConfig = TriggerConfig { threshold: 0.2, root_margin_px: -50, once: true };
    const FOLLOW: TriggerConfig = TriggerConfig { threshold: 0.2, root_margin_px: 0, once: false };

    fn sample(ratio: f64) -> IntersectionSample {
        IntersectionSample { ratio, is_intersecting: ratio > 0.0 }
    }

    #[test]
    fn once_gate_latches_after_first_entry() {
        let mut gate = VisibilityGate::new(ONCE);
        assert!(!gate.is_visible());

        assert!(gate.observe(sample(0.5)));
        assert!(gate.is_visible());
        assert!(!gate.wants_observation());

        assert!(!gate.observe(sample(0.0)));
        assert!(gate.is_visible());
        assert!(!gate.observe(sample(0.9)));
        assert!(gate.is_visible());
        assert_eq!(gate.latch(), Latch::Seen);
    }

    #[test]
    fn once_gate_ignores_samples_below_threshold() {
        let mut gate = VisibilityGate::new(ONCE);
        assert!(!gate.observe(sample(0.1)));
        assert!(!gate.is_visible());
        assert!(gate.wants_observation());
        assert_eq!(gate.latch(), Latch::Unseen);
    }

    #[test]
    fn following_gate_tracks_every_change() {
        let mut gate = VisibilityGate::new(FOLLOW);
        assert!(gate.observe(sample(0.3)));
        assert!(!gate.observe(sample(0.4)));
        assert!(gate.observe(sample(0.1)));
        assert!(!gate.is_visible());
        assert!(gate.observe(sample(0.2)));
        assert!(gate.is_visible());
        assert!(gate.wants_observation());
    }

    #[test]
    fn disconnected_gate_keeps_its_last_value() {
        let mut gate = VisibilityGate::new(FOLLOW);
        gate.observe(sample(1.0));
        gate.disconnect();
        gate.disconnect();
        assert!(!gate.observe(sample(0.0)));
        assert!(gate.is_visible());
    }

    #[test]
    fn unattached_target_never_becomes_visible() {
        let gate = VisibilityGate::new(ONCE);
        assert!(!gate.is_visible());
    }

    #[test]
    fn ratio_from_geometry() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);

        let half_below = Rect::new(0.0, 700.0, 1000.0, 200.0);
        let s = IntersectionSample::from_rects(half_below, viewport, 0);
        assert!(s.is_intersecting);
        assert!((s.ratio - 0.5).abs() < 1e-9);

        // A -50px margin shrinks the root to 50..950 x 50..750.
        let s = IntersectionSample::from_rects(half_below, viewport, -50);
        assert!((s.ratio - 0.225).abs() < 1e-9);

        let below = Rect::new(0.0, 820.0, 1000.0, 100.0);
        assert!(!IntersectionSample::from_rects(below, viewport, 0).is_intersecting);
        assert!(IntersectionSample::from_rects(below, viewport, 50).is_intersecting);
    }

    #[test]
    fn zero_area_target_counts_as_fully_visible_inside_the_root() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let point = Rect::new(50.0, 50.0, 0.0, 0.0);
        assert_eq!(IntersectionSample::from_rects(point, viewport, 0).ratio, 1.0);
        let outside = Rect::new(150.0, 50.0, 0.0, 0.0);
        assert_eq!(IntersectionSample::from_rects(outside, viewport, 0).ratio, 0.0);
    }

    #[test]
    fn gate_from_rects_respects_margin() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let mut gate = VisibilityGate::new(ONCE);
        // 20% inside the raw viewport, only 0% once the margin shrinks it.
        let target = Rect::new(0.0, 760.0, 1000.0, 200.0);
        assert!(!gate.observe_rects(target, viewport));
        let target = Rect::new(0.0, 500.0, 1000.0, 200.0);
        assert!(gate.observe_rects(target, viewport));
    }

    #[test]
    fn margin_is_formatted_for_the_observer() {
        assert_eq!(ONCE.root_margin_css(), "-50px");
        assert_eq!(FOLLOW.root_margin_css(), "0px");
    }

    #[test]
    fn latched_gate_releases_its_source_on_the_first_visible_measurement() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let mut gate = VisibilityGate::new(ONCE);
        assert!(!gate.observe_rects(Rect::new(0.0, 900.0, 1000.0, 200.0), viewport));
        assert!(gate.wants_observation());

        assert!(gate.observe_rects(Rect::new(0.0, 200.0, 1000.0, 200.0), viewport));
        assert!(!gate.wants_observation());
        assert!(!gate.observe_rects(Rect::new(0.0, 900.0, 1000.0, 200.0), viewport));
        assert!(gate.is_visible());
    }
}
