use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-800 py-8 px-4 text-center text-sm text-slate-500">
            <p class="mb-2">"© Amina Said · Full-Stack Developer"</p>
            <p>"Built with Rust & Leptos · last updated " {env!("BUILD_DATE")}</p>
        </footer>
    }
}
