use leptos::prelude::*;

use super::header::scroll_to_section;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16 px-4"
        >
            // Decorative background
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-cyan-500/10 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl"></div>
            </div>

            <div class="relative z-10 text-center max-w-3xl mx-auto">
                <p class="text-cyan-400 mb-4">"Hi, I'm Amina 👋"</p>
                <h1 class="text-4xl md:text-6xl font-bold mb-6 leading-tight">
                    "Full-Stack Developer Crafting "
                    <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                        "Digital Experiences"
                    </span>
                </h1>
                <p class="text-slate-400 text-lg mb-10 max-w-2xl mx-auto">
                    "I build beautiful, functional web applications with clean code and creative solutions. Scroll down to see what I've been working on."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button
                        class="px-8 py-3 rounded-md bg-gradient-to-r from-cyan-500 to-blue-500 hover:from-cyan-600 hover:to-blue-600 text-white font-medium transition-colors"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        class="px-8 py-3 rounded-md border border-cyan-500 text-cyan-400 hover:bg-cyan-500/10 font-medium transition-colors"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}
