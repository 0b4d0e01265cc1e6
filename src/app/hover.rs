use std::sync::Arc;

use leptos::{ev::MouseEvent, prelude::*};

use super::device::use_device_class;
use crate::state::{HoverConfig, HoverProps, HoverState};

/// Hover and tap-to-expand state for one mounted collection of cards.
#[derive(Debug, Clone, Copy)]
pub struct HoverStore {
    state: RwSignal<HoverState>,
    config: Signal<HoverConfig>,
}

impl HoverStore {
    pub fn new(config: impl Into<Signal<HoverConfig>>) -> Self {
        Self {
            state: RwSignal::new(HoverState::new()),
            config: config.into(),
        }
    }

    /// Creates a store and provides it to the calling component's children.
    pub fn provide(config: impl Into<Signal<HoverConfig>>) -> Self {
        let store = Self::new(config);
        provide_context(store);
        store
    }

    pub fn set_hovered(&self, id: Option<&str>) {
        self.state.maybe_update(|s| s.set_hovered(id));
    }

    pub fn toggle_expanded(&self, id: &str) {
        self.state.update(|s| s.toggle_expanded(id));
    }

    pub fn props(&self, id: &str, index: usize) -> HoverProps {
        self.state
            .with(|state| self.config.with(|config| config.props(state, id, index)))
    }
}

pub fn use_hover() -> HoverStore {
    expect_context::<HoverStore>()
}

/// Card shell shared by project and experience cards. Hovering (or tapping
/// the expand toggle on touch-only devices) reveals `details`.
#[component]
pub fn HoverableCard(
    #[prop(into)] id: Arc<str>,
    index: usize,
    #[prop(optional)] class: &'static str,
    /// Used instead of the store's origin when no grid transform applies.
    #[prop(optional)]
    origin: Option<&'static str>,
    details: ChildrenFn,
    children: Children,
) -> impl IntoView {
    let store = use_hover();
    let device = use_device_class();
    let props = Memo::new({
        let id = id.clone();
        move |_| store.props(&id, index)
    });

    let style = move || {
        let mut p = props.get();
        if let (Some(origin), None) = (origin, p.transform) {
            p.transform_origin = origin;
        }
        format!("{} animation-delay: {}s;", p.style(), p.stagger_delay)
    };

    let on_enter = {
        let id = id.clone();
        move |_: MouseEvent| {
            if device.get_untracked().has_hover {
                store.set_hovered(Some(&*id));
            }
        }
    };
    let on_leave = move |_: MouseEvent| store.set_hovered(None);

    let toggle = move || {
        device.get().tap_to_expand().then(|| {
            let id = id.clone();
            view! {
                <button
                    class=move || {
                        if props.with(|p| p.is_expanded) {
                            "absolute top-2 right-2 z-10 bg-black/50 rounded-full w-8 h-8 text-white text-sm transition-transform rotate-180"
                        } else {
                            "absolute top-2 right-2 z-10 bg-black/30 rounded-full w-8 h-8 text-white text-sm transition-transform"
                        }
                    }
                    aria-label="Toggle details"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store.toggle_expanded(&id);
                    }
                >
                    "▾"
                </button>
            }
        })
    };

    view! {
        <div
            class="card-in relative"
            style=style
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <div class=move || {
                let shadow = if props.with(|p| p.is_hovered) { "shadow-lg" } else { "shadow-sm" };
                format!("relative rounded-lg p-4 transition-shadow duration-300 {shadow} {class}")
            }>
                {toggle}
                {children()}
                <Show when=move || props.with(|p| p.is_hovered || p.is_expanded)>
                    <div class="details-in mt-4 pt-4 border-t border-accent/30">{details()}</div>
                </Show>
            </div>
        </div>
    }
}
