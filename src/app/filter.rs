use leptos::prelude::*;

use crate::{content::TechTag, state::TechFilter};

/// Floating button plus slide-over drawer listing every tech tag.
#[component]
pub fn FilterDrawer(
    #[prop(into)] filter: Signal<TechFilter>,
    on_toggle: Callback<TechTag>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <button
            aria-label="Open filters"
            class="fixed right-4 bottom-4 z-40 rounded-full p-3 shadow-lg bg-white text-foreground hover:scale-110 transition-transform"
            on:click=move |_| set_open.set(true)
        >
            <svg width="22" height="22" viewBox="0 0 24 24" class="fill-current">
                <path d="M3 5h18v2H3V5zm4 6h10v2H7v-2zm3 6h4v2h-4v-2z" />
            </svg>
        </button>
        <Show when=move || open.get()>
            <DrawerPanel
                filter=filter
                on_toggle=on_toggle
                on_clear=on_clear
                on_close=Callback::new(move |()| set_open.set(false))
            />
        </Show>
    }
}

/// Backdrop and drawer. Both are scroll regions so gestures over them never
/// change the section underneath.
#[component]
fn DrawerPanel(
    #[prop(into)] filter: Signal<TechFilter>,
    on_toggle: Callback<TechTag>,
    on_clear: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let active_count = move || filter.with(TechFilter::len);

    view! {
        <div
            class="fixed inset-0 bg-black/50 z-40 fade-in"
            data-scroll-region=""
            on:click=move |_| on_close.run(())
        />
        <aside
            class="drawer-in fixed right-0 top-0 h-full w-80 bg-custom z-50 shadow-xl p-6 flex flex-col overflow-y-auto"
            data-scroll-region=""
        >
            <div class="flex items-center justify-between mb-6">
                <h4 class="text-lg font-semibold text-heading">"Filter by Technology"</h4>
                <button
                    class="p-2 rounded-md hover:bg-accent hover:text-white transition-colors"
                    aria-label="Close filter"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
            </div>
            <Show when=move || { active_count() > 0 }>
                <div class="mb-4 px-3 py-2 bg-accent/10 rounded-lg">
                    <p class="text-sm text-subtle">
                        {move || {
                            let n = active_count();
                            format!("{n} filter{} active", if n == 1 { "" } else { "s" })
                        }}
                    </p>
                </div>
            </Show>
            <div class="grid grid-cols-3 gap-3 mb-6">
                {TechTag::ALL
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <button
                                title=tag.label()
                                class=move || {
                                    if filter.with(|f| f.is_active(tag)) {
                                        "flex flex-col items-center gap-2 rounded-lg p-3 text-center shadow-sm transition-all bg-accent text-white scale-105"
                                    } else {
                                        "flex flex-col items-center gap-2 rounded-lg p-3 text-center shadow-sm transition-all bg-white text-foreground hover:bg-accent/10"
                                    }
                                }
                                on:click=move |_| on_toggle.run(tag)
                            >
                                <i class=format!("{} text-xl", tag.icon()) />
                                <span class="text-xs font-medium">{tag.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || { active_count() > 0 }>
                <button
                    class="mt-auto w-full py-3 px-4 bg-red-500 hover:bg-red-600 text-white rounded-lg font-medium transition-colors"
                    on:click=move |_| {
                        on_clear.run(());
                        on_close.run(());
                    }
                >
                    "Clear All Filters"
                </button>
            </Show>
        </aside>
    }
}
