mod homepage;
mod loading_screen;
mod navbar;
mod projects;
mod text_scramble;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use crate::loading::LoadingSequence;

use homepage::HomePage;
use loading_screen::LoadingScreen;
use navbar::NavBar;

pub use projects::get_projects_server;
pub use text_scramble::TextScramble;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/svg+xml" href="/profile.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-gradient-to-br from-gray-900 via-indigo-900 to-gray-900 text-white scroll-smooth">
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
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta
            name="description"
            content=format!("{} - {}, {}", PROFILE.name, PROFILE.role, PROFILE.location)
        />

        <Router>
            <LoadingScreen sequence=LoadingSequence::default() />
            <NavBar />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
