mod about;
mod achievements;
mod components;
mod contact;
mod education;
mod footer;
mod gallery;
mod hero;
mod nav;
mod projects;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::CONTENT;
use crate::timer::Cancel;

use self::{
    about::About, achievements::Achievements, contact::Contact, education::Education,
    footer::Footer, gallery::Gallery, hero::Hero, nav::Navigation, projects::Projects,
    skills::Skills, theme::ThemeContext,
};

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = ThemeContext::provide();

    view! {
        <Title text=format!("{} - Portfolio", CONTENT.site.owner) />

        <Router>
            <div class=move || if theme.is_dark() { "dark" } else { "" }>
                <div class="min-h-screen bg-white text-gray-900 dark:bg-gray-900 dark:text-white transition-colors duration-300">
                    <Navigation />
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Education />
        <Achievements />
        <Gallery />
        <Contact />
    }
}
