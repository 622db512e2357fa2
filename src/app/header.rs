use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::nav_items;

/// Scroll offset past which the bar swaps from transparent to solid.
const SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll the section with the given anchor id into view. Smooth
/// scrolling comes from the document-level `scroll-behavior` style.
pub(crate) fn scroll_to_section(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.scroll_into_view();
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || scroll_y.get() > SCROLL_THRESHOLD);
    let (menu_open, set_menu_open) = signal(false);

    let desktop_links = nav_items()
        .into_iter()
        .map(|item| {
            let target = item.target.clone();
            view! {
                <a
                    href=format!("#{}", item.target)
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(&target);
                        set_menu_open.set(false);
                    }
                    class="text-slate-300 hover:text-cyan-400 transition-colors"
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class=move || {
            let base = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";
            if scrolled.get() {
                format!("{} bg-slate-900/80 backdrop-blur-lg shadow-lg border-b border-slate-800", base)
            } else {
                format!("{} bg-transparent", base)
            }
        }>
            <nav class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("home");
                            set_menu_open.set(false);
                        }
                        class="text-2xl font-bold text-cyan-400 hover:text-cyan-300 transition-colors"
                    >
                        "<Portfolio />"
                    </a>

                    // Desktop menu
                    <div class="hidden md:flex items-center gap-8">
                        {desktop_links}
                        <a
                            href="#contact"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_section("contact");
                            }
                            class="px-4 py-2 rounded-md bg-gradient-to-r from-cyan-500 to-blue-500 hover:from-cyan-600 hover:to-blue-600 text-white transition-colors"
                        >
                            "Hire Me"
                        </a>
                    </div>

                    // Mobile menu toggle
                    <button
                        class="md:hidden text-2xl text-slate-200"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile menu
                {move || {
                    menu_open.get().then(|| {
                        let links = nav_items()
                            .into_iter()
                            .map(|item| {
                                let target = item.target.clone();
                                view! {
                                    <a
                                        href=format!("#{}", item.target)
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_section(&target);
                                            set_menu_open.set(false);
                                        }
                                        class="block py-2 text-slate-300 hover:text-cyan-400 transition-colors"
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view();
                        view! { <div class="md:hidden mt-4 pb-4">{links}</div> }
                    })
                }}
            </nav>
        </header>
    }
}
