//! Student dashboard: greeting plus the course list for the user's level.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the guarded route. Without a session user it redirects to grade
//! selection; with one it fetches courses for the level derived from the
//! user's grade and re-fetches only when that level changes.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::catalog;
use crate::components::course_card::CourseCard;
use crate::net::types::User;
use crate::routes::View;
use crate::state::courses::CoursesState;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// Header facts about the signed-in student.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentSummary {
    pub initial: String,
    pub greeting: String,
    /// `"3 EGB • Nivel: Constructores"`; the level part is empty for unknown grades.
    pub grade_line: String,
    pub institution: Option<String>,
    pub color: &'static str,
}

impl StudentSummary {
    pub fn for_user(user: &User) -> Self {
        let entry = user.grade_entry();
        Self {
            initial: catalog::initial(&user.name),
            greeting: format!("¡Bienvenido, {}!", user.name),
            grade_line: format!(
                "{} • Nivel: {}",
                catalog::display_code(&user.grade),
                entry.map(|e| e.level_name).unwrap_or_default()
            ),
            institution: user.institution.clone().filter(|i| !i.trim().is_empty()),
            color: entry.map_or(catalog::NEUTRAL_COLOR, |e| e.color),
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    install_unauth_redirect(session, View::Dashboard, use_navigate());

    let courses = RwSignal::new(CoursesState::default());
    #[cfg(feature = "hydrate")]
    let lifetime = crate::util::lifetime::ViewLifetime::install();

    Effect::new(move || {
        let Some(user) = session.current_user() else {
            return;
        };
        let Some(level) = user.level() else {
            leptos::logging::warn!("unknown grade {:?}; no courses to list", user.grade);
            courses.update(CoursesState::unavailable);
            return;
        };
        if !courses.with_untracked(|c| c.needs_fetch(level)) {
            return;
        }
        courses.update(|c| c.begin(level));

        #[cfg(feature = "hydrate")]
        {
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_courses(level).await;
                if !lifetime.is_alive() {
                    return;
                }
                if let Err(e) = &result {
                    leptos::logging::warn!("course list for {level} failed: {e}");
                }
                courses.update(|c| c.finish(level, result));
            });
        }
    });

    let summary = Memo::new(move |_| session.current_user().as_ref().map(StudentSummary::for_user));

    view! {
        <Show
            when=move || summary.get().is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if session.get().loading { "Cargando..." } else { "Redirigiendo..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <div class="dashboard-card">
                    <div class="dashboard-card__header">
                        <div
                            class="dashboard-card__avatar"
                            style=move || {
                                format!("background-color: {}", summary.get().map_or(catalog::NEUTRAL_COLOR, |s| s.color))
                            }
                        >
                            {move || summary.get().map(|s| s.initial).unwrap_or_default()}
                        </div>
                        <div>
                            <h1 class="dashboard-card__greeting">
                                {move || summary.get().map(|s| s.greeting).unwrap_or_default()}
                            </h1>
                            <p class="dashboard-card__grade">
                                {move || summary.get().map(|s| s.grade_line).unwrap_or_default()}
                            </p>
                            {move || {
                                summary
                                    .get()
                                    .and_then(|s| s.institution)
                                    .map(|name| view! { <p class="dashboard-card__institution">{name}</p> })
                            }}
                        </div>
                    </div>

                    <Show
                        when=move || !courses.get().loading
                        fallback=move || view! { <p class="dashboard-card__loading">"Cargando cursos..."</p> }
                    >
                        <div class="dashboard-card__courses">
                            {move || {
                                courses
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|course| view! { <CourseCard course=course/> })
                                    .collect::<Vec<_>>()
                            }}
                            <Show when=move || courses.get().is_empty()>
                                <p class="dashboard-card__empty">"No hay cursos disponibles para tu nivel aún."</p>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
