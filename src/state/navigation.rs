//! Section navigation: Gate → Projects ⇄ Experience, driven by wheel and
//! swipe gestures.
//!
//! The machine never sleeps or spawns anything itself. Callers pass the
//! current time in milliseconds, run whatever animation a [`Transition`]
//! asks for, and report back with [`Navigator::finish_gate`]. Gestures that
//! arrive while an animation is running or during the cooldown after one are
//! dropped, not queued.

/// Length of each gate panel slide.
pub const GATE_ANIMATION_MS: f64 = 1200.0;
/// Lockout after the gate finishes opening or closing.
pub const GATE_COOLDOWN_MS: f64 = 1500.0;
/// Lockout after switching between projects and experience.
pub const STAGE_COOLDOWN_MS: f64 = 1200.0;
/// Delay between the gate closing and the viewport scrolling back up.
pub const SCROLL_TOP_DELAY_MS: u64 = 200;
/// Shorter vertical swipes are treated as taps.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Marks an element whose wheel and touch events scroll it instead of
/// changing sections.
pub const SCROLL_REGION_ATTR: &str = "data-scroll-region";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Gate,
    Projects,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Forward,
    Backward,
}

impl Gesture {
    pub fn from_wheel(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Forward)
        } else if delta_y < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    /// Swiping up (finger ends higher than it started) moves forward.
    pub fn from_swipe(start_y: f64, end_y: f64) -> Option<Self> {
        let delta = start_y - end_y;
        if delta.abs() < MIN_SWIPE_DISTANCE {
            None
        } else if delta > 0.0 {
            Some(Self::Forward)
        } else {
            Some(Self::Backward)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDirection {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Run both panel animations, then call [`Navigator::finish_gate`].
    Gate(GateDirection),
    /// Already applied; cross-fade the sections.
    Stage { from: Stage, to: Stage },
}

/// Anything with a parent chain that can be marked as independently
/// scrollable.
pub trait ScrollNode: Sized {
    fn parent(&self) -> Option<Self>;
    fn is_scroll_region(&self) -> bool;
}

/// Walks up from the event target looking for a marked scroll region.
pub fn within_scroll_region<N: ScrollNode>(target: Option<N>) -> bool {
    let mut node = target;
    while let Some(n) = node {
        if n.is_scroll_region() {
            return true;
        }
        node = n.parent();
    }
    false
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    stage: Stage,
    animating: Option<GateDirection>,
    cooldown_until: f64,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_animating(&self) -> bool {
        self.animating.is_some()
    }

    /// True while gestures are being dropped.
    pub fn is_locked(&self, now_ms: f64) -> bool {
        self.is_animating() || now_ms < self.cooldown_until
    }

    /// Page scrolling stays off while the gate covers the screen.
    pub fn scroll_locked(&self) -> bool {
        self.stage == Stage::Gate || self.is_animating()
    }

    /// Whether the gate panels should be in their covering position.
    pub fn gate_closed(&self) -> bool {
        match self.animating {
            Some(GateDirection::Open) => false,
            Some(GateDirection::Close) => true,
            None => self.stage == Stage::Gate,
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture, now_ms: f64) -> Option<Transition> {
        if self.is_locked(now_ms) {
            return None;
        }
        match (self.stage, gesture) {
            (Stage::Gate, Gesture::Forward) => {
                self.animating = Some(GateDirection::Open);
                Some(Transition::Gate(GateDirection::Open))
            }
            (Stage::Projects, Gesture::Backward) => {
                self.stage = Stage::Gate;
                self.animating = Some(GateDirection::Close);
                Some(Transition::Gate(GateDirection::Close))
            }
            (Stage::Projects, Gesture::Forward) => {
                Some(self.change_stage(Stage::Experience, now_ms))
            }
            (Stage::Experience, Gesture::Backward) => {
                Some(self.change_stage(Stage::Projects, now_ms))
            }
            (Stage::Gate, Gesture::Backward) | (Stage::Experience, Gesture::Forward) => None,
        }
    }

    /// Gestures from inside a scroll region belong to that region.
    pub fn handle_event(
        &mut self,
        gesture: Gesture,
        in_scroll_region: bool,
        now_ms: f64,
    ) -> Option<Transition> {
        if in_scroll_region {
            return None;
        }
        self.handle_gesture(gesture, now_ms)
    }

    /// Called once both gate panels have finished moving.
    pub fn finish_gate(&mut self, now_ms: f64) {
        let Some(direction) = self.animating.take() else {
            return;
        };
        if direction == GateDirection::Open {
            self.stage = Stage::Projects;
        }
        self.cooldown_until = now_ms + GATE_COOLDOWN_MS;
    }

    fn change_stage(&mut self, to: Stage, now_ms: f64) -> Transition {
        let from = self.stage;
        self.stage = to;
        self.cooldown_until = now_ms + STAGE_COOLDOWN_MS;
        Transition::Stage { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(nav: &mut Navigator, now: f64) -> f64 {
        assert_eq!(
            nav.handle_gesture(Gesture::Forward, now),
            Some(Transition::Gate(GateDirection::Open))
        );
        let done = now + GATE_ANIMATION_MS;
        nav.finish_gate(done);
        done
    }

    #[test]
    fn test_starts_at_gate() {
        let nav = Navigator::new();
        assert_eq!(nav.stage(), Stage::Gate);
        assert!(nav.gate_closed());
        assert!(nav.scroll_locked());
        assert!(!nav.is_locked(0.0));
    }

    #[test]
    fn test_gate_opens_after_animation() {
        let mut nav = Navigator::new();
        let t = nav.handle_gesture(Gesture::Forward, 0.0);
        assert_eq!(t, Some(Transition::Gate(GateDirection::Open)));
        // still on the gate until both panels are done
        assert_eq!(nav.stage(), Stage::Gate);
        assert!(nav.is_animating());
        assert!(!nav.gate_closed());

        nav.finish_gate(GATE_ANIMATION_MS);
        assert_eq!(nav.stage(), Stage::Projects);
        assert!(!nav.is_animating());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn test_gesture_during_animation_is_dropped() {
        let mut nav = Navigator::new();
        nav.handle_gesture(Gesture::Forward, 0.0);
        assert_eq!(nav.handle_gesture(Gesture::Forward, 10.0), None);
        assert_eq!(nav.handle_gesture(Gesture::Backward, 5000.0), None);
        assert_eq!(nav.stage(), Stage::Gate);
    }

    #[test]
    fn test_second_wheel_in_lockout_stays_on_projects() {
        let mut nav = Navigator::new();
        let done = open(&mut nav, 0.0);
        assert_eq!(nav.handle_gesture(Gesture::Forward, done + 1.0), None);
        assert_eq!(nav.stage(), Stage::Projects);
        assert_eq!(
            nav.handle_gesture(Gesture::Forward, done + GATE_COOLDOWN_MS - 1.0),
            None
        );
        assert_eq!(nav.stage(), Stage::Projects);

        let t = nav.handle_gesture(Gesture::Forward, done + GATE_COOLDOWN_MS);
        assert_eq!(
            t,
            Some(Transition::Stage {
                from: Stage::Projects,
                to: Stage::Experience
            })
        );
        assert_eq!(nav.stage(), Stage::Experience);
    }

    #[test]
    fn test_stage_change_cooldown() {
        let mut nav = Navigator::new();
        let mut now = open(&mut nav, 0.0) + GATE_COOLDOWN_MS;
        nav.handle_gesture(Gesture::Forward, now);
        assert_eq!(nav.handle_gesture(Gesture::Backward, now + 100.0), None);
        assert_eq!(nav.stage(), Stage::Experience);

        now += STAGE_COOLDOWN_MS;
        assert_eq!(
            nav.handle_gesture(Gesture::Backward, now),
            Some(Transition::Stage {
                from: Stage::Experience,
                to: Stage::Projects
            })
        );
        assert_eq!(nav.stage(), Stage::Projects);
    }

    #[test]
    fn test_close_returns_to_gate() {
        let mut nav = Navigator::new();
        let now = open(&mut nav, 0.0) + GATE_COOLDOWN_MS;
        assert_eq!(
            nav.handle_gesture(Gesture::Backward, now),
            Some(Transition::Gate(GateDirection::Close))
        );
        assert_eq!(nav.stage(), Stage::Gate);
        assert!(nav.gate_closed());
        assert!(nav.is_locked(now + 10_000.0));

        nav.finish_gate(now + GATE_ANIMATION_MS);
        assert!(!nav.is_animating());
        assert!(nav.is_locked(now + GATE_ANIMATION_MS + 1.0));

        let later = now + GATE_ANIMATION_MS + GATE_COOLDOWN_MS;
        assert_eq!(
            nav.handle_gesture(Gesture::Forward, later),
            Some(Transition::Gate(GateDirection::Open))
        );
    }

    #[test]
    fn test_edges_ignore_outward_gestures() {
        let mut nav = Navigator::new();
        assert_eq!(nav.handle_gesture(Gesture::Backward, 0.0), None);
        assert_eq!(nav.stage(), Stage::Gate);

        let mut now = open(&mut nav, 0.0) + GATE_COOLDOWN_MS;
        nav.handle_gesture(Gesture::Forward, now);
        now += STAGE_COOLDOWN_MS;
        assert_eq!(nav.handle_gesture(Gesture::Forward, now), None);
        assert_eq!(nav.stage(), Stage::Experience);
    }

    #[test]
    fn test_cycles_indefinitely() {
        let mut nav = Navigator::new();
        let mut now = 0.0;
        for _ in 0..3 {
            now = open(&mut nav, now) + GATE_COOLDOWN_MS;
            nav.handle_gesture(Gesture::Forward, now);
            now += STAGE_COOLDOWN_MS;
            nav.handle_gesture(Gesture::Backward, now);
            now += STAGE_COOLDOWN_MS;
            nav.handle_gesture(Gesture::Backward, now);
            now += GATE_ANIMATION_MS;
            nav.finish_gate(now);
            now += GATE_COOLDOWN_MS;
            assert_eq!(nav.stage(), Stage::Gate);
        }
    }

    #[test]
    fn test_finish_without_animation_is_noop() {
        let mut nav = Navigator::new();
        nav.finish_gate(0.0);
        assert_eq!(nav.stage(), Stage::Gate);
        assert!(!nav.is_locked(0.0));
    }

    #[test]
    fn test_wheel_classification() {
        assert_eq!(Gesture::from_wheel(3.0), Some(Gesture::Forward));
        assert_eq!(Gesture::from_wheel(-0.5), Some(Gesture::Backward));
        assert_eq!(Gesture::from_wheel(0.0), None);
    }

    #[test]
    fn test_swipe_threshold() {
        assert_eq!(Gesture::from_swipe(400.0, 300.0), Some(Gesture::Forward));
        assert_eq!(Gesture::from_swipe(300.0, 400.0), Some(Gesture::Backward));
        assert_eq!(Gesture::from_swipe(300.0, 280.0), None);
        assert_eq!(Gesture::from_swipe(300.0, 300.0), None);
    }

    #[derive(Clone)]
    struct TestNode<'a> {
        tree: &'a [(Option<usize>, bool)],
        index: usize,
    }

    impl ScrollNode for TestNode<'_> {
        fn parent(&self) -> Option<Self> {
            self.tree[self.index].0.map(|index| TestNode {
                tree: self.tree,
                index,
            })
        }

        fn is_scroll_region(&self) -> bool {
            self.tree[self.index].1
        }
    }

    #[test]
    fn test_scroll_region_ancestor() {
        // 0: body, 1: section, 2: scroll list, 3: list item, 4: span
        let tree = [
            (None, false),
            (Some(0), false),
            (Some(1), true),
            (Some(2), false),
            (Some(3), false),
        ];
        let node = |index| Some(TestNode { tree: &tree, index });
        assert!(within_scroll_region(node(4)));
        assert!(within_scroll_region(node(2)));
        assert!(!within_scroll_region(node(1)));
        assert!(!within_scroll_region(None::<TestNode>));
    }

    #[test]
    fn test_scroll_region_gesture_does_not_advance() {
        let mut nav = Navigator::new();
        let now = open(&mut nav, 0.0) + GATE_COOLDOWN_MS;
        assert_eq!(nav.handle_event(Gesture::Forward, true, now), None);
        assert_eq!(nav.stage(), Stage::Projects);
        assert!(nav.handle_event(Gesture::Forward, false, now).is_some());
        assert_eq!(nav.stage(), Stage::Experience);
    }
}
