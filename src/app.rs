mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE_CONTENT;

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let profile = &SITE_CONTENT.profile;
    let name = profile.full_name();
    let description = format!("{} - {}", profile.role, profile.tagline);

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=description />

        <Router>
            <Header />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Every section of the portfolio, top to bottom.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Contact />
    }
}
