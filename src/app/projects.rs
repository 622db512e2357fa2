use leptos::{html::Section, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use super::visibility::{reveal_class, use_reveal};
use crate::carousel::{Carousel, AUTOPLAY_INTERVAL_MS};
use crate::content::{projects, Project};
use crate::reveal::SECTION_THRESHOLD;

const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let reveal = use_reveal(section_ref, SECTION_THRESHOLD);

    let project_list = StoredValue::new(projects());
    let slide_count = project_list.with_value(|list| list.len());
    let carousel = RwSignal::new(Carousel::new(slide_count));

    // Autoplay; held still while the detail modal is open
    let Pausable { pause, resume, .. } =
        use_interval_fn(move || carousel.update(|c| c.tick()), AUTOPLAY_INTERVAL_MS);
    Effect::new(move |_| {
        if carousel.with(|c| c.selected().is_some()) {
            pause();
        } else {
            resume();
        }
    });

    let slides = project_list
        .with_value(|list| list.clone())
        .into_iter()
        .enumerate()
        .map(|(index, project)| view! { <ProjectCard project index carousel /> })
        .collect_view();

    let dots = (0..slide_count)
        .map(|i| {
            view! {
                <button
                    class=move || {
                        if carousel.with(|c| c.is_active(i)) {
                            "w-8 h-2 rounded-full bg-cyan-400 transition-all"
                        } else {
                            "w-2 h-2 rounded-full bg-slate-600 hover:bg-slate-500 transition-all"
                        }
                    }
                    aria-label=format!("Go to slide {}", i + 1)
                    on:click=move |_| carousel.update(|c| c.goto(i))
                ></button>
            }
        })
        .collect_view();

    view! {
        <section
            node_ref=section_ref
            id="projects"
            class="py-20 px-4 md:px-6 lg:px-8 md:py-28 relative overflow-hidden"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <div class=move || reveal_class(reveal.get(), "text-center mb-16")>
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                            "Recent Projects"
                        </span>
                    </h2>
                    <p class="text-slate-400 max-w-2xl mx-auto">
                        "Check out some of my latest work. Each project represents a unique challenge and showcases different skills and technologies."
                    </p>
                </div>

                <div class=move || reveal_class(reveal.get(), "relative max-w-3xl mx-auto")>
                    <div class="overflow-hidden rounded-2xl">
                        <div
                            class="flex transition-transform duration-500"
                            style=move || {
                                format!(
                                    "transform: translateX(-{}%)",
                                    carousel.with(|c| c.index()) * 100,
                                )
                            }
                        >
                            {slides}
                        </div>
                    </div>

                    // External carousel controls
                    <button
                        class="absolute left-0 top-1/2 -translate-y-1/2 -translate-x-4 w-10 h-10 rounded-full bg-slate-800 border border-slate-700 hover:border-cyan-500/50 text-slate-200 transition-colors"
                        aria-label="Previous project"
                        on:click=move |_| carousel.update(|c| c.prev())
                    >
                        "‹"
                    </button>
                    <button
                        class="absolute right-0 top-1/2 -translate-y-1/2 translate-x-4 w-10 h-10 rounded-full bg-slate-800 border border-slate-700 hover:border-cyan-500/50 text-slate-200 transition-colors"
                        aria-label="Next project"
                        on:click=move |_| carousel.update(|c| c.next())
                    >
                        "›"
                    </button>

                    <div class="flex justify-center gap-2 mt-6">{dots}</div>
                </div>
            </div>

            // Detail modal for the selected project
            {move || {
                carousel
                    .with(|c| c.selected())
                    .map(|i| {
                        let project = project_list.with_value(|list| list[i].clone());
                        view! {
                            <ProjectModal
                                project
                                on_close=Callback::new(move |_: ()| carousel.update(|c| c.close()))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, carousel: RwSignal<Carousel>) -> impl IntoView {
    view! {
        <div class="w-full flex-shrink-0 px-2">
            <button
                class="group w-full text-left bg-slate-800/50 border border-slate-700 rounded-2xl overflow-hidden hover:border-cyan-500/50 transition-all"
                on:click=move |_| carousel.update(|c| c.select(index))
            >
                <div class="relative h-56 overflow-hidden">
                    <FallbackImage
                        src=project.image
                        alt=project.title.clone()
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                    />
                </div>
                <div class="p-6">
                    <p class="text-cyan-400 text-sm mb-2">{project.category}</p>
                    <h3 class="font-bold mb-2">{project.title}</h3>
                    <p class="text-slate-400 text-sm mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tags
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 bg-slate-700/50 rounded-full text-xs text-slate-300">
                                        {tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </button>
        </div>
    }
}

#[component]
fn ProjectModal(project: Project, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-slate-950/80 backdrop-blur-sm p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative w-full max-w-2xl max-h-[85vh] overflow-y-auto bg-slate-800 border border-slate-700 rounded-2xl p-8"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 text-slate-400 hover:text-white text-xl"
                    aria-label="Close project details"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>

                <p class="text-cyan-400 text-sm mb-2">{project.category}</p>
                <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                <p class="text-slate-300 mb-6">{project.details.overview}</p>

                <h4 class="font-bold mb-2">"Highlights"</h4>
                <ul class="list-disc list-inside text-slate-400 space-y-1 mb-6">
                    {project
                        .details
                        .highlights
                        .into_iter()
                        .map(|h| view! { <li>{h}</li> })
                        .collect_view()}
                </ul>

                <h4 class="font-bold mb-2">"Built With"</h4>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .details
                        .stack
                        .into_iter()
                        .map(|item| {
                            view! {
                                <span class="px-3 py-1 bg-slate-700/50 rounded-full text-xs text-slate-300">
                                    {item}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-4">
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md bg-cyan-500 hover:bg-cyan-600 text-white text-sm transition-colors"
                    >
                        "Live Site"
                    </a>
                    <a
                        href=project.repo
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md bg-slate-700 hover:bg-slate-600 text-white text-sm transition-colors"
                    >
                        "Source"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Image that falls back to a local placeholder when loading fails.
#[component]
fn FallbackImage(src: String, alt: String, #[prop(into)] class: String) -> impl IntoView {
    let (current, set_current) = signal(src);
    view! {
        <img
            src=move || current.get()
            alt=alt
            class=class
            loading="lazy"
            on:error=move |_| {
                if current.get_untracked() != PLACEHOLDER_IMAGE {
                    set_current.set(PLACEHOLDER_IMAGE.to_string());
                }
            }
        />
    }
}
