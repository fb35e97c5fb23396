//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    contribute::ContributePage, dashboard::DashboardPage, login::LoginPage, wall_admin::WallAdminPage,
    wall_view::WallViewPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides the session context and sets up client-side routing. The session
/// starts as loading and is read from local storage once the app hydrates, so
/// server-rendered owner pages show their loading state instead of redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::pending());
    provide_context(session);

    Effect::new(move || {
        session.set(SessionState::init(&crate::util::storage::BrowserStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wishingwall.css"/>
        <Title text="WishingWall"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("wall"), ParamSegment("id")) view=WallAdminPage/>
                <Route path=(StaticSegment("wall"), ParamSegment("url")) view=WallViewPage/>
                <Route path=StaticSegment("contribute") view=ContributePage/>
            </Routes>
        </Router>
    }
}
