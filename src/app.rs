mod about;
mod footer;
mod hero;
mod icons;
mod projects;
mod reveal;
mod skills;

#[cfg(feature = "hydrate")]
pub use reveal::mark_hydrated;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;
use about::About;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use reveal::RevealFallback;
use skills::Skills;

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content=BUILD_TIME />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <RevealFallback />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
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
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section in order on one page.
#[component]
fn HomePage() -> impl IntoView {
    match content::site() {
        Ok(site) => Either::Left(view! {
            <Title text=site.profile.name.clone() />
            <main class="flex flex-col w-full">
                <Hero profile=&site.profile />
                <About site />
                <Projects projects=site.projects.as_slice() />
                <Skills site />
            </main>
            <Footer site />
        }),
        Err(err) => {
            log::error!("couldn't load site content: {err}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <main class="flex flex-col flex-grow justify-center items-center min-h-screen">
                    <p class="text-lg">"This page couldn't be loaded. Please try again later."</p>
                </main>
            })
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <main class="flex flex-col flex-grow justify-center items-center min-h-screen gap-4">
            <h1 class="text-2xl font-bold">"Page not found."</h1>
            <a href="/" class="btn btn-primary">
                "Back home"
            </a>
        </main>
    }
}
