use leptos::prelude::*;

use super::navigation::{GatePanels, NavigationStore};
use crate::state::navigation::GATE_ANIMATION_MS;

/// Overshoots slightly past the resting position before settling.
const GATE_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Top,
    Bottom,
}

/// Classes for a gate panel, covering the screen or slid off its own edge.
fn panel_class(panel: Panel, closed: bool) -> &'static str {
    match (panel, closed) {
        (Panel::Top, true) => {
            "fixed top-0 left-0 right-0 h-1/2 bg-custom text-white flex items-center justify-center z-50 transition-transform translate-y-0"
        }
        (Panel::Top, false) => {
            "fixed top-0 left-0 right-0 h-1/2 bg-custom text-white flex items-center justify-center z-50 transition-transform -translate-y-full pointer-events-none"
        }
        (Panel::Bottom, true) => {
            "fixed bottom-0 left-0 right-0 h-1/2 bg-slate-100 text-gray-800 flex items-center justify-center z-50 bg-animated transition-transform translate-y-0"
        }
        (Panel::Bottom, false) => {
            "fixed bottom-0 left-0 right-0 h-1/2 bg-slate-100 text-gray-800 flex items-center justify-center z-50 bg-animated transition-transform translate-y-full pointer-events-none"
        }
    }
}

const NAME: &str = "Priyank Sevak";

const HIGHLIGHTS: [&str; 4] = [
    "From Game Developer to Full-Stack Engineer",
    "4+ years building scalable web apps",
    "Expert in Node.js, React, Python, Docker and Cloud",
    "Passionate about real-time systems and AI",
];

const HIGHLIGHT_INTERVAL_MS: u64 = 3000;

struct Social {
    name: &'static str,
    url: &'static str,
    icon: &'static str,
}

const SOCIALS: [Social; 4] = [
    Social {
        name: "GitHub",
        url: "https://github.com/DecodersLord",
        icon: "devicon-github-original",
    },
    Social {
        name: "LeetCode",
        url: "https://leetcode.com/PriyankSevak",
        icon: "devicon-leetcode-plain",
    },
    Social {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/priyank-sevak",
        icon: "devicon-linkedin-plain",
    },
    Social {
        name: "Dev.to",
        url: "https://dev.to/decoders_lord",
        icon: "devicon-devto-plain",
    },
];

/// Split landing view. The panels cover the screen while the store reports
/// the gate closed and slide apart when it opens.
#[component]
pub fn Gate(store: NavigationStore, panels: GatePanels) -> impl IntoView {
    let motion = format!(
        "transition-duration: {GATE_ANIMATION_MS}ms; transition-timing-function: {GATE_EASING};"
    );

    view! {
        <div
            node_ref=panels.top
            class=move || panel_class(Panel::Top, store.gate_closed())
            style=motion.clone()
        >
            <div class="flex flex-col items-center">
                <img
                    src="/profile-pic.jpeg"
                    alt=NAME
                    width="160"
                    height="160"
                    class="rounded-full border-4 border-white shadow-lg"
                />
                <h1 class="mt-4 text-2xl font-semibold flex items-center gap-2">
                    <span aria-hidden="true">"👋"</span>
                    <span>"I'm " {NAME}</span>
                </h1>
                <SocialIcons />
            </div>
        </div>
        <div
            node_ref=panels.bottom
            class=move || panel_class(Panel::Bottom, store.gate_closed())
            style=motion
        >
            <div class="text-center px-6">
                <h2 class="text-2xl font-bold text-gray-900">"My Developer Journey"</h2>
                <Highlights />
                <p class="mt-14 text-sm text-gray-500 animate-bounce">
                    "Scroll down to explore my milestones ↓"
                </p>
            </div>
        </div>
    }
}

#[component]
fn Highlights() -> impl IntoView {
    let (current, set_current) = signal(0usize);

    Effect::new(move |_| {
        match set_interval_with_handle(
            move || set_current.update(|i| *i = (*i + 1) % HIGHLIGHTS.len()),
            std::time::Duration::from_millis(HIGHLIGHT_INTERVAL_MS),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("highlight ticker failed to start: {e:?}"),
        }
    });

    view! {
        <p class="text-xl font-medium mt-2 text-gray-700 h-8 overflow-hidden relative">
            {move || {
                // a fresh span per tick restarts the slide-in
                let line = HIGHLIGHTS[current.get() % HIGHLIGHTS.len()];
                view! { <span class="highlight-in inline-block">{line}</span> }
            }}
        </p>
    }
}

#[component]
fn SocialIcons() -> impl IntoView {
    view! {
        <nav class="flex gap-4 mt-4" aria-label="Social links">
            {SOCIALS
                .iter()
                .map(|s| {
                    view! {
                        <a
                            href=s.url
                            target="_blank"
                            rel="noopener noreferrer"
                            title=s.name
                            aria-label=s.name
                            class="text-white/80 hover:text-white hover:scale-110 transition-transform text-2xl"
                        >
                            <i class=s.icon />
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_panels_cover_the_screen() {
        for panel in [Panel::Top, Panel::Bottom] {
            let class = panel_class(panel, true);
            assert!(class.contains("translate-y-0"));
            assert!(!class.contains("pointer-events-none"));
        }
    }

    #[test]
    fn test_open_panels_slide_off_their_own_edge() {
        let top = panel_class(Panel::Top, false);
        let bottom = panel_class(Panel::Bottom, false);
        assert!(top.contains("-translate-y-full"));
        assert!(bottom.contains(" translate-y-full"));
        assert!(!bottom.contains("-translate-y-full"));
        assert!(top.contains("pointer-events-none") && bottom.contains("pointer-events-none"));
    }

    #[test]
    fn test_panels_follow_the_navigator() {
        use crate::state::{Gesture, Navigator};

        let mut nav = Navigator::new();
        assert_eq!(panel_class(Panel::Top, nav.gate_closed()), panel_class(Panel::Top, true));
        nav.handle_gesture(Gesture::Forward, 0.0);
        // opening starts the slide before the stage changes
        assert_eq!(panel_class(Panel::Top, nav.gate_closed()), panel_class(Panel::Top, false));
        nav.finish_gate(GATE_ANIMATION_MS);
        assert_eq!(
            panel_class(Panel::Bottom, nav.gate_closed()),
            panel_class(Panel::Bottom, false)
        );
        nav.handle_gesture(Gesture::Backward, 10_000.0);
        assert_eq!(
            panel_class(Panel::Bottom, nav.gate_closed()),
            panel_class(Panel::Bottom, true)
        );
    }
}
