use leptos::{ev, prelude::*, server_fn::codec::GetUrl};
use leptos_use::{signal_debounced, use_window_size, UseWindowSizeReturn};

#[cfg(feature = "ssr")]
use crate::content::load_projects;
use crate::{
    content::{Project, TechTag},
    state::{pagination::RESIZE_DEBOUNCE_MS, GridLayout, HoverConfig, ProjectCatalog},
};

use super::{filter::FilterDrawer, hover::HoverStore, hover::HoverableCard, pager::Pager};

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    load_projects().await.map_err(|e| {
        tracing::error!("Couldn't load projects: {e}");
        ServerFnError::new(e)
    })
}

/// Fetches the project list once. Failures are logged and show as an empty list.
pub fn projects_resource() -> Resource<Vec<Project>> {
    Resource::new(
        || (),
        |_| async move {
            get_projects_server().await.unwrap_or_else(|e| {
                log::error!("Couldn't fetch projects: {e}");
                Vec::new()
            })
        },
    )
}

#[component]
pub fn ProjectsSection(projects: Resource<Vec<Project>>) -> impl IntoView {
    view! {
        <section class="min-h-screen px-2 py-10">
            <div class="max-w-7xl mx-auto mb-10">
                <h2 class="text-4xl font-bold text-heading">"Projects"</h2>
                <div class="mt-2 h-[2px] bg-black" />
            </div>
            <div class="max-w-7xl mx-auto">
                <Transition fallback=|| view! { <ProjectsSkeleton /> }>
                    {move || Suspend::new(async move {
                        let projects = projects.await;
                        view! { <ProjectBrowser projects=projects /> }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSkeleton() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
            {(0..8)
                .map(|_| {
                    view! {
                        <div class="aspect-square rounded-lg p-4 bg-card/40 flex flex-col gap-4">
                            <div class="loading-skeleton h-40 rounded-md" />
                            <div class="loading-skeleton h-6 rounded w-3/4" />
                            <div class="loading-skeleton h-4 rounded w-1/2" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Filterable, paginated grid over a fetched project list.
#[component]
fn ProjectBrowser(projects: Vec<Project>) -> impl IntoView {
    let UseWindowSizeReturn { width, height } = use_window_size();
    let viewport = signal_debounced(
        Signal::derive(move || (width.get(), height.get())),
        RESIZE_DEBOUNCE_MS as f64,
    );
    let layout = Memo::new(move |_| {
        let (width, height) = viewport.get();
        GridLayout::for_viewport(width, height)
    });

    let catalog = RwSignal::new(ProjectCatalog::new(
        projects,
        layout.get_untracked().page_size,
    ));
    Effect::new(move |_| {
        let page_size = layout.get().page_size;
        catalog.update(|c| c.set_page_size(page_size));
    });

    HoverStore::provide(Signal::derive(move || {
        HoverConfig::default().with_grid(layout.get().grid_config())
    }));

    let keys = window_event_listener(ev::keydown, move |e| match e.key().as_str() {
        "ArrowLeft" => {
            e.prevent_default();
            catalog.update(ProjectCatalog::prev_page);
        }
        "ArrowRight" => {
            e.prevent_default();
            catalog.update(ProjectCatalog::next_page);
        }
        _ => {}
    });
    on_cleanup(move || keys.remove());

    let visible = Memo::new(move |_| catalog.with(ProjectCatalog::visible));
    let pagination = Signal::derive(move || catalog.with(|c| c.pagination().clone()));
    let filter = Signal::derive(move || catalog.with(|c| c.filter().clone()));
    let clear = Callback::new(move |()| catalog.update(ProjectCatalog::clear_filters));

    view! {
        <FilterDrawer
            filter=filter
            on_toggle=Callback::new(move |tag: TechTag| catalog.update(|c| c.toggle_tech(tag)))
            on_clear=clear
        />
        <Pager
            pagination=pagination
            on_prev=Callback::new(move |()| catalog.update(ProjectCatalog::prev_page))
            on_next=Callback::new(move |()| catalog.update(ProjectCatalog::next_page))
            on_go=Callback::new(move |page| catalog.update(|c| c.go_to_page(page)))
        />
        <div class="relative min-h-[600px] md:min-h-[800px] overflow-visible">
            {move || {
                let placeholders = pagination.with(|p| p.placeholder_slots());
                // rebuilt per page so the entrance animation replays
                view! {
                    <div class="page-in grid grid-cols-2 md:grid-cols-4 gap-6 overflow-visible">
                        {visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                            .collect_view()}
                        {(0..placeholders)
                            .map(|_| view! { <div class="aspect-square" /> })
                            .collect_view()}
                    </div>
                }
            }}
        </div>
        <Show when=move || visible.with(Vec::is_empty)>
            <div class="text-center py-12">
                {move || {
                    if filter.with(|f| f.is_empty()) {
                        view! { <p class="text-subtle text-lg">"No projects available."</p> }
                            .into_any()
                    } else {
                        view! {
                            <p class="text-subtle text-lg">
                                "No projects found matching the selected filters."
                            </p>
                            <button
                                class="mt-4 text-accent hover:underline"
                                on:click=move |_| clear.run(())
                            >
                                "Clear filters to see all projects"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </Show>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let Project {
        id,
        title,
        description,
        category,
        technologies,
        image_url,
        github,
        live,
    } = project;
    let alt = title.clone();

    let details = move || {
        let technologies = technologies.clone();
        let live = live.clone();
        let github = github.clone();
        view! {
            {(!technologies.is_empty())
                .then(|| {
                    view! {
                        <div class="mb-4">
                            <h5 class="text-xs font-semibold text-accent uppercase tracking-wide mb-2">
                                "Technologies"
                            </h5>
                            <div class="flex flex-wrap gap-2">
                                {technologies
                                    .into_iter()
                                    .map(|tag| {
                                        view! {
                                            <span
                                                class="inline-flex items-center gap-1 px-2 py-1 text-xs bg-tag/60 text-accent rounded-full"
                                                title=tag.label()
                                            >
                                                <i class=tag.icon() />
                                                <span class="hidden sm:inline">{tag.label()}</span>
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
            <div class="flex gap-2">
                {live
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 px-3 py-2 bg-accent hover:bg-accent/80 text-white rounded-md transition-colors text-sm font-medium flex-1 justify-center"
                            >
                                "↗ Live Demo"
                            </a>
                        }
                    })}
                {github
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 px-3 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-md transition-colors text-sm font-medium flex-1 justify-center"
                            >
                                <i class="devicon-github-original" />
                                "Code"
                            </a>
                        }
                    })}
            </div>
        }
    };

    view! {
        <div class="aspect-square relative">
            <HoverableCard
                id=id
                index=index
                class="overflow-hidden bg-card border border-subtle/20"
                details=ToChildren::to_children(details)
            >
                <div class="flex flex-col gap-4">
                    <div class=format!(
                        "w-full h-40 rounded-md bg-gradient-to-br {} flex items-center justify-center relative overflow-hidden",
                        category.gradient(),
                    )>
                        {match image_url {
                            Some(src) => {
                                view! {
                                    <img src=src alt=alt class="w-full h-full object-cover" />
                                }
                                    .into_any()
                            }
                            None => view! { <span class="text-2xl">{category.glyph()}</span> }.into_any(),
                        }}
                    </div>
                    <div class="flex-1 min-w-0">
                        <h4 class="text-lg font-semibold text-accent mb-1 truncate">{title}</h4>
                        <p class="text-sm text-white mb-2 line-clamp-2">{description}</p>
                        <span class="inline-flex items-center gap-1 px-2 py-1 bg-background/60 text-accent rounded-full text-xs">
                            {category.glyph()}
                            <span>{category.label()}</span>
                        </span>
                    </div>
                </div>
            </HoverableCard>
        </div>
    }
}
