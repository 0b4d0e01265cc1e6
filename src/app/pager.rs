use leptos::prelude::*;

use crate::state::Pagination;

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Page controls for the project grid. Renders nothing with one page or less.
#[component]
pub fn Pager(
    #[prop(into)] pagination: Signal<Pagination>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    on_go: Callback<usize>,
) -> impl IntoView {
    let current = move || pagination.with(Pagination::current_page);
    let pages = move || pagination.with(Pagination::total_pages);
    let total = move || pagination.with(Pagination::total_items);
    let is_first = move || pagination.with(Pagination::is_first);
    let is_last = move || pagination.with(Pagination::is_last);

    view! {
        <Show when=move || { pages() > 1 }>
            <div class="mb-8">
                <div class="hidden md:flex items-center justify-between">
                    <div class="text-sm text-subtle">
                        {move || {
                            format!(
                                "Page {} of {} • {} project{}",
                                current() + 1,
                                pages(),
                                total(),
                                plural(total()),
                            )
                        }}
                    </div>
                    <div class="flex items-center gap-4">
                        <button
                            class="pager-step px-4 py-2"
                            disabled=is_first
                            aria-label="Previous page"
                            on:click=move |_| on_prev.run(())
                        >
                            "‹ Previous"
                        </button>
                        <div class="flex gap-2">
                            {move || {
                                (0..pages())
                                    .map(|i| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if current() == i {
                                                        "w-10 h-10 rounded-lg font-medium bg-card text-white"
                                                    } else {
                                                        "w-10 h-10 rounded-lg font-medium bg-white hover:bg-card/75 hover:text-white"
                                                    }
                                                }
                                                aria-label=format!("Go to page {}", i + 1)
                                                on:click=move |_| on_go.run(i)
                                            >
                                                {i + 1}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <button
                            class="pager-step px-4 py-2"
                            disabled=is_last
                            aria-label="Next page"
                            on:click=move |_| on_next.run(())
                        >
                            "Next ›"
                        </button>
                    </div>
                </div>

                <div class="md:hidden">
                    <div class="flex items-center justify-between mb-4 text-sm text-subtle">
                        <div>{move || format!("{} project{}", total(), plural(total()))}</div>
                        <div>{move || format!("{} / {}", current() + 1, pages())}</div>
                    </div>
                    <div class="flex items-center justify-center gap-4">
                        <button
                            class="pager-step p-3 rounded-full"
                            disabled=is_first
                            aria-label="Previous page"
                            on:click=move |_| on_prev.run(())
                        >
                            "‹"
                        </button>
                        <div class="flex gap-1 mx-4">
                            {move || {
                                (0..pages())
                                    .map(|i| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if current() == i {
                                                        "h-3 w-8 rounded-full bg-card transition-all"
                                                    } else {
                                                        "h-3 w-3 rounded-full bg-white hover:bg-card/50 transition-all"
                                                    }
                                                }
                                                aria-label=format!("Go to page {}", i + 1)
                                                on:click=move |_| on_go.run(i)
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <button
                            class="pager-step p-3 rounded-full"
                            disabled=is_last
                            aria-label="Next page"
                            on:click=move |_| on_next.run(())
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
