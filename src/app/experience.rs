use leptos::{prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::content::load_experience;
use crate::{content::Experience, state::HoverConfig};

use super::{
    device::use_device_class,
    hover::{HoverStore, HoverableCard},
};

#[server(input = GetUrl)]
pub async fn get_experience_server() -> Result<Vec<Experience>, ServerFnError> {
    load_experience().await.map_err(|e| {
        tracing::error!("Couldn't load experience: {e}");
        ServerFnError::new(e)
    })
}

pub fn experience_resource() -> Resource<Vec<Experience>> {
    Resource::new(
        || (),
        |_| async move {
            get_experience_server().await.unwrap_or_else(|e| {
                log::error!("Couldn't fetch experience: {e}");
                Vec::new()
            })
        },
    )
}

#[component]
pub fn ExperienceSection(experience: Resource<Vec<Experience>>) -> impl IntoView {
    HoverStore::provide(HoverConfig::default());

    view! {
        <section class="w-full max-w-6xl mx-auto px-6 py-16">
            <h2 class="text-4xl font-bold text-center mb-12 text-foreground">"Experience"</h2>
            <Transition fallback=|| {
                view! {
                    <div class="space-y-6">
                        <div class="loading-skeleton h-32 rounded-lg w-5/12" />
                        <div class="loading-skeleton h-32 rounded-lg w-5/12 ml-auto" />
                        <div class="loading-skeleton h-32 rounded-lg w-5/12" />
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    let experience = experience.await;
                    view! { <Timeline experience=experience /> }
                })}
            </Transition>
        </section>
    }
}

#[component]
fn Timeline(experience: Vec<Experience>) -> impl IntoView {
    let device = use_device_class();
    let is_mobile = move || device.with(|d| d.is_mobile());

    if experience.is_empty() {
        return view! { <p class="text-center text-subtle">"No experience to show yet."</p> }
            .into_any();
    }

    view! {
        <div class="relative">
            <div class=move || {
                if is_mobile() {
                    "absolute left-3 top-0 bottom-0 w-[2px] bg-slate-300"
                } else {
                    "absolute left-1/2 -translate-x-1/2 top-0 bottom-0 w-[2px] bg-slate-300"
                }
            } />
            {experience
                .into_iter()
                .enumerate()
                .map(|(index, experience)| {
                    let is_left = index % 2 == 0;
                    view! {
                        <div class=move || {
                            if is_mobile() {
                                "relative mb-10 pl-8 flex"
                            } else if is_left {
                                "relative mb-10 flex justify-start"
                            } else {
                                "relative mb-10 flex justify-end"
                            }
                        }>
                            <span class=move || {
                                if is_mobile() {
                                    "absolute left-[7px] top-4 h-3 w-3 rounded-full bg-indigo-500 border-4 border-white shadow"
                                } else {
                                    "absolute left-1/2 -translate-x-1/2 top-4 h-4 w-4 rounded-full bg-indigo-500 border-4 border-white shadow"
                                }
                            } />
                            <ExperienceCard experience=experience index=index is_left=is_left />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn ExperienceCard(experience: Experience, index: usize, is_left: bool) -> impl IntoView {
    let device = use_device_class();
    let is_mobile = move || device.with(|d| d.is_mobile());

    let Experience {
        id,
        company_name,
        role,
        start_date,
        end_date,
        skills,
        ..
    } = experience.clone();
    let bullets: Vec<String> = experience.bullets().map(str::to_string).collect();

    let details = move || {
        let bullets = bullets.clone();
        view! {
            <h5 class="text-xs font-semibold text-accent uppercase tracking-wide mb-2">
                "Highlights"
            </h5>
            <ul class="mt-3 space-y-1 text-sm text-gray-300">
                {bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
            </ul>
        }
    };

    let origin = if device.get_untracked().is_mobile() {
        "center center"
    } else if is_left {
        "right center"
    } else {
        "left center"
    };
    let align = if is_left { "text-right" } else { "text-left" };

    view! {
        <div class=move || {
            if is_mobile() {
                "w-full"
            } else if is_left {
                "w-5/12 pr-8"
            } else {
                "w-5/12 pl-8"
            }
        }>
            <HoverableCard
                id=id
                index=index
                origin=origin
                class="overflow-hidden bg-card border border-subtle/20"
                details=ToChildren::to_children(details)
            >
                <div class=move || if is_mobile() { "text-left" } else { align }>
                    <div class=move || {
                        if is_mobile() || !is_left {
                            "from-violet-600 via-indigo-600 to-transparent bg-gradient-to-r rounded-l-full px-6"
                        } else {
                            "from-violet-600 via-indigo-600 to-transparent bg-gradient-to-l rounded-r-full px-6"
                        }
                    }>
                        <h3 class="font-semibold text-white py-3 text-lg">{role}</h3>
                    </div>
                    <div class="px-4 py-2 space-y-2">
                        <h4 class="text-sm font-medium text-gray-300">"💼 " {company_name}</h4>
                        <p class="text-xs text-gray-400">
                            "📅 " {start_date} " - " {end_date}
                        </p>
                    </div>
                </div>
                <div class="px-4 pb-4">
                    <div class=move || {
                        if !is_mobile() && is_left {
                            "flex flex-wrap gap-2 justify-end"
                        } else {
                            "flex flex-wrap gap-2"
                        }
                    }>
                        {skills
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-3 py-1.5 text-xs bg-tag/60 text-accent rounded-full font-medium">
                                        {skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </HoverableCard>
        </div>
    }
}
