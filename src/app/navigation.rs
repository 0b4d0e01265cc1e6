//! Browser side of section navigation: turns wheel and swipe events into
//! [`Gesture`]s for the [`Navigator`] and waits out the gate panel slides it
//! starts.

use std::time::Duration;

use leptos::{ev, html, prelude::*};

use crate::state::{
    navigation::SCROLL_TOP_DELAY_MS, GateDirection, Gesture, Navigator, Stage, Transition,
};

/// Slack after the slide before the gate is treated as settled anyway.
#[cfg(feature = "hydrate")]
const PANEL_SETTLE_GRACE_MS: u64 = 100;

/// Navigation state for the mounted page.
#[derive(Debug, Clone, Copy)]
pub struct NavigationStore(pub RwSignal<Navigator>);

impl NavigationStore {
    pub fn new() -> Self {
        Self(RwSignal::new(Navigator::new()))
    }

    pub fn stage(&self) -> Stage {
        self.0.with(Navigator::stage)
    }

    pub fn gate_closed(&self) -> bool {
        self.0.with(Navigator::gate_closed)
    }

    pub fn scroll_locked(&self) -> bool {
        self.0.with(Navigator::scroll_locked)
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The two halves of the gate.
#[derive(Debug, Clone, Copy)]
pub struct GatePanels {
    pub top: NodeRef<html::Div>,
    pub bottom: NodeRef<html::Div>,
}

impl GatePanels {
    pub fn new() -> Self {
        Self {
            top: NodeRef::new(),
            bottom: NodeRef::new(),
        }
    }
}

impl Default for GatePanels {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers the window listeners that drive navigation. Listeners are
/// removed when the calling component's owner is disposed.
pub fn use_section_gestures(store: NavigationStore, panels: GatePanels) {
    let touch_start = StoredValue::new(None::<f64>);

    let wheel = window_event_listener(ev::wheel, move |e| {
        if let Some(gesture) = Gesture::from_wheel(e.delta_y()) {
            dispatch(store, panels, gesture, in_scroll_region(&e));
        }
    });

    let touchstart = window_event_listener(ev::touchstart, move |e| {
        let y = e.touches().get(0).map(|t| t.client_y() as f64);
        touch_start.set_value(y);
    });

    let touchend = window_event_listener(ev::touchend, move |e| {
        let Some(start) = touch_start.get_value() else {
            return;
        };
        touch_start.set_value(None);
        let Some(end) = e.changed_touches().get(0).map(|t| t.client_y() as f64) else {
            return;
        };
        if let Some(gesture) = Gesture::from_swipe(start, end) {
            dispatch(store, panels, gesture, in_scroll_region(&e));
        }
    });

    on_cleanup(move || {
        wheel.remove();
        touchstart.remove();
        touchend.remove();
    });
}

fn dispatch(store: NavigationStore, panels: GatePanels, gesture: Gesture, in_region: bool) {
    let now = now_ms();
    let transition = store
        .0
        .try_update(|nav| nav.handle_event(gesture, in_region, now))
        .flatten();
    match transition {
        Some(Transition::Gate(direction)) => {
            log::debug!("gate {direction:?}");
            leptos::task::spawn_local(run_gate(store, panels, direction));
        }
        Some(Transition::Stage { from, to }) => log::debug!("stage {from:?} -> {to:?}"),
        None => {}
    }
}

async fn run_gate(store: NavigationStore, panels: GatePanels, direction: GateDirection) {
    // the panel classes already changed with the store; wait for both slides
    futures::future::join(panel_settled(panels.top), panel_settled(panels.bottom)).await;
    if store.0.try_update(|nav| nav.finish_gate(now_ms())).is_none() {
        return;
    }
    if direction == GateDirection::Close {
        set_timeout(scroll_to_top, Duration::from_millis(SCROLL_TOP_DELAY_MS));
    }
}

/// Resolves when `panel` ends its own transition, or once the slide should
/// have finished if no `transitionend` arrives.
#[cfg(feature = "hydrate")]
async fn panel_settled(panel: NodeRef<html::Div>) {
    use futures::{channel::oneshot, future::select};
    use wasm_bindgen::{closure::Closure, JsCast};

    use crate::state::navigation::GATE_ANIMATION_MS;

    let Some(el) = panel.get_untracked() else {
        log::warn!("gate panel not mounted");
        return;
    };

    let (ended_tx, ended) = oneshot::channel::<()>();
    let mut ended_tx = Some(ended_tx);
    let own: web_sys::EventTarget = el.clone().into();
    // children transition too (hover effects), only the panel's own counts
    let on_end = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
        if e.target().as_ref() == Some(&own) {
            if let Some(tx) = ended_tx.take() {
                let _ = tx.send(());
            }
        }
    });
    if let Err(e) = el.add_event_listener_with_callback("transitionend", on_end.as_ref().unchecked_ref()) {
        log::warn!("couldn't watch gate panel: {e:?}");
    }

    let (deadline_tx, deadline) = oneshot::channel::<()>();
    set_timeout(
        move || {
            let _ = deadline_tx.send(());
        },
        Duration::from_millis(GATE_ANIMATION_MS as u64 + PANEL_SETTLE_GRACE_MS),
    );

    let _ = select(ended, deadline).await;
    if let Err(e) =
        el.remove_event_listener_with_callback("transitionend", on_end.as_ref().unchecked_ref())
    {
        log::warn!("couldn't unwatch gate panel: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
async fn panel_settled(_panel: NodeRef<html::Div>) {}

#[cfg(feature = "hydrate")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(feature = "hydrate"))]
fn now_ms() -> f64 {
    0.0
}

#[cfg(feature = "hydrate")]
fn in_scroll_region(e: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    use crate::state::navigation::within_scroll_region;

    within_scroll_region(e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()))
}

#[cfg(not(feature = "hydrate"))]
fn in_scroll_region(_e: &web_sys::Event) -> bool {
    false
}

#[cfg(feature = "hydrate")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(feature = "hydrate"))]
fn scroll_to_top() {}

#[cfg(feature = "hydrate")]
impl crate::state::navigation::ScrollNode for web_sys::Element {
    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn is_scroll_region(&self) -> bool {
        self.has_attribute(crate::state::navigation::SCROLL_REGION_ATTR)
    }
}
