//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::config::{API_BASE_META, ApiConfig};
use crate::pages::{login::LoginPage, topics::TopicsPage};
use crate::routes::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API base URL travels to the browser as a `<meta>` tag so the hydrated
/// client talks to the same backend the host was configured with.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api.base_url().to_owned()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Unmatched paths fall through to an empty view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<ApiConfig>().is_none() {
        provide_context(ApiConfig::default());
    }

    view! {
        <Title text="Forum"/>

        <Router>
            <Routes fallback=|| ()>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Topics.segment()) view=TopicsPage/>
            </Routes>
        </Router>
    }
}
