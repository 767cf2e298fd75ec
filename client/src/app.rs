//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::site_header::SiteHeader;
use crate::pages::{dashboard::DashboardPage, grades::GradesPage, home::HomePage, login::LoginPage};
use crate::routes::{DASHBOARD_SEGMENT, GRADE_PARAM, GRADES_SEGMENT, LOGIN_SEGMENT, View};
use crate::state::session::{SessionState, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// Provides the session store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(SessionState::restoring());
    provide_context(session);

    // Effects only run in the browser after hydration, so server and client
    // render identical markup before the persisted user is applied.
    Effect::new(move || session.restore_persisted());

    view! {
        <Stylesheet id="leptos" href="/pkg/chaski-lab.css"/>
        <Title text="Chaski Bots LAB"/>

        <Router>
            <SiteHeader/>
            <main class="app-main">
                <Routes fallback=UnmatchedRoute>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment(GRADES_SEGMENT) view=GradesPage/>
                    <Route path=(StaticSegment(LOGIN_SEGMENT), ParamSegment(GRADE_PARAM)) view=LoginPage/>
                    <Route path=StaticSegment(DASHBOARD_SEGMENT) view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Fallback for URLs no route matches, including the legacy `/home`.
#[component]
fn UnmatchedRoute() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let pathname = use_location().pathname.get_untracked();
    let target = View::from_path(&pathname).resolve(&session.get_untracked());
    view! { <Redirect path=target.path()/> }
}
