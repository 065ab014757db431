use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::core::Links;
use crate::ui::{LandingPage, NotFoundPage, SeoMeta};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Outbound link targets read by every section of the landing page
    provide_context(Links::default());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/reliefmate.css"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route
                    path=path!("/")
                    view=|| view! {
                        <SeoMeta />
                        <LandingPage />
                    }
                />
            </Routes>
        </Router>
    }
}
