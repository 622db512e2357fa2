use leptos::{html::Section, prelude::*};
use leptos_use::{
    use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs, UseRafFnOptions,
};

use super::visibility::{reveal_class, use_reveal};
use crate::content::{stats, Stat};
use crate::reveal::{RevealState, StatCounter, ABOUT_THRESHOLD};

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let reveal = use_reveal(section_ref, ABOUT_THRESHOLD);

    let stat_cards = stats()
        .into_iter()
        .enumerate()
        .map(|(index, stat)| view! { <StatCard stat index reveal /> })
        .collect_view();

    view! {
        <section
            node_ref=section_ref
            id="about"
            class="py-20 px-4 md:py-28 relative overflow-hidden"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <div class=move || reveal_class(reveal.get(), "text-center mb-16")>
                    <span class="inline-block px-4 py-2 text-sm text-cyan-400 border border-cyan-500/20 rounded-full mb-6">
                        "About Me"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">
                        "Passionate About "
                        <span class="bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 bg-clip-text text-transparent">
                            "Creating Digital Experiences"
                        </span>
                    </h2>
                    <p class="text-slate-400 max-w-3xl mx-auto">
                        "I'm a full-stack developer with a passion for building beautiful, functional web applications that make a difference. Let me bring your vision to life with clean code and creative solutions."
                    </p>
                </div>

                <div class=move || {
                    reveal_class(reveal.get(), "grid lg:grid-cols-3 gap-8 mb-20")
                }>
                    <div class="relative pl-6">
                        <div class="absolute left-0 top-0 bottom-0 w-1 bg-gradient-to-b from-cyan-500 to-purple-500"></div>
                        <h3 class="font-bold mb-2">"My Journey"</h3>
                        <p class="text-slate-400">
                            "With 2+ years of experience in web development, I've worked on diverse projects ranging from e-commerce platforms to custom CMS solutions. Every project is an opportunity to learn and grow."
                        </p>
                    </div>
                    <div class="relative pl-6">
                        <div class="absolute left-0 top-0 bottom-0 w-1 bg-gradient-to-b from-purple-500 to-pink-500"></div>
                        <h3 class="font-bold mb-2">"What I Do"</h3>
                        <p class="text-slate-400">
                            "I specialize in WordPress development, front-end engineering, and SEO optimization. I combine technical expertise with creative problem-solving to deliver exceptional results."
                        </p>
                    </div>
                    <div class="relative pl-6">
                        <div class="absolute left-0 top-0 bottom-0 w-1 bg-gradient-to-b from-pink-500 to-cyan-500"></div>
                        <h3 class="font-bold mb-2">"My Approach"</h3>
                        <p class="text-slate-400">
                            "I believe in writing clean, maintainable code and creating user experiences that delight. Every line of code is crafted with attention to detail."
                        </p>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">{stat_cards}</div>
            </div>
        </section>
    }
}

/// A stat card whose number counts up from 0 once the about section has
/// revealed. The frame loop starts paused, runs exactly once, and pauses
/// again when the target is reached.
#[component]
fn StatCard(stat: Stat, index: usize, reveal: ReadSignal<RevealState>) -> impl IntoView {
    let Stat {
        icon,
        label,
        target,
        suffix,
    } = stat;
    let counter = StatCounter::new(target);
    let (count, set_count) = signal(0u32);
    let elapsed = StoredValue::new(0.0f64);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let total = elapsed
                .try_update_value(|e| {
                    *e += args.delta;
                    *e
                })
                .unwrap_or(counter.duration_ms);
            set_count.set(counter.value_at(total));
        },
        UseRafFnOptions::default().immediate(false),
    );

    // Kick off the count the first time the section reveals
    Effect::new(move |started: Option<bool>| {
        if started.unwrap_or(false) {
            return true;
        }
        if reveal.get().is_revealed() {
            resume();
            true
        } else {
            false
        }
    });

    // Stop the frame loop once the interpolation has run its course
    Effect::new(move |_| {
        count.track();
        if elapsed.with_value(|e| counter.done_at(*e)) {
            pause();
        }
    });

    let delay = index * 100;
    view! {
        <div
            class=move || {
                reveal_class(
                    reveal.get(),
                    "relative bg-slate-800/50 border border-slate-700 rounded-2xl p-6 text-center hover:border-cyan-500/50",
                )
            }
            style=format!("transition-delay: {}ms", delay)
        >
            <div class="text-3xl mb-4" aria-hidden="true">{icon}</div>
            <div class="text-3xl md:text-4xl font-bold mb-2">
                <span class="bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                    {move || count.get()}
                    {suffix}
                </span>
            </div>
            <p class="text-slate-400 text-sm">{label}</p>
        </div>
    }
}
