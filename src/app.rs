mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod visibility;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use header::Header;
use hero::HeroSection;
use projects::ProjectsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" style="scroll-behavior:smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-900 text-slate-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Amina Said - {title}") />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The single scrolling page: all sections stacked in order, each one
/// revealing itself independently as it enters the viewport.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HeroSection />
        <AboutSection />
        <ProjectsSection />
        <ContactSection />
    }
}
