//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{IconKind, copyright_line, current_year};
use crate::ui::icon::Icon;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen bg-slate-950 text-slate-100 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-slate-900 border border-slate-800 rounded-full flex items-center justify-center">
                    <Icon kind=IconKind::LifeBuoy class="w-12 h-12 text-cyan-300" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="text-slate-300 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 rounded-2xl bg-cyan-500 hover:bg-cyan-400 text-slate-900 font-semibold"
                >
                    "Go Home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-400">{copyright_line(current_year())}</p>
            </div>
        </div>
    }
}
