mod device;
mod experience;
mod filter;
mod gate;
mod hover;
mod navigation;
mod pager;
mod projects;

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::state::Stage;

use self::{
    device::provide_device_class,
    experience::{experience_resource, ExperienceSection},
    gate::Gate,
    navigation::{use_section_gestures, GatePanels, NavigationStore},
    projects::{projects_resource, ProjectsSection},
};

const SECTION_FADE_MS: u64 = 600;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_device_class();

    view! {
        <Title text="Priyank Sevak" />
        <Meta name="description" content="Priyank Sevak Portfolio Website" />

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The gate plus the two content sections, switched by scroll and swipe.
#[component]
fn HomePage() -> impl IntoView {
    let store = NavigationStore::new();
    let panels = GatePanels::new();
    use_section_gestures(store, panels);

    // read once per page load, shared across section switches
    let projects = projects_resource();
    let experience = experience_resource();

    let is_projects = Signal::derive(move || store.stage() == Stage::Projects);
    let is_experience = Signal::derive(move || store.stage() == Stage::Experience);

    view! {
        <main class=move || {
            if store.scroll_locked() {
                "relative h-screen overflow-hidden"
            } else {
                "relative min-h-screen"
            }
        }>
            <div class="absolute inset-0 -z-10 bg-animated" />
            <Gate store=store panels=panels />
            <AnimatedShow
                when=is_projects
                show_class="section-in"
                hide_class="section-out"
                hide_delay=Duration::from_millis(SECTION_FADE_MS)
            >
                <div class="absolute inset-0">
                    <ProjectsSection projects=projects />
                </div>
            </AnimatedShow>
            <AnimatedShow
                when=is_experience
                show_class="section-in"
                hide_class="section-out"
                hide_delay=Duration::from_millis(SECTION_FADE_MS)
            >
                <div class="absolute inset-0">
                    <ExperienceSection experience=experience />
                </div>
            </AnimatedShow>
        </main>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-subtle">"Page not found."</p>
            <a href="/" class="text-accent hover:underline">
                "Back home"
            </a>
        </main>
    }
}
