//! Grade selection: the catalog rendered as tiles.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::catalog;
use crate::components::grade_tile::GradeTile;
use crate::routes::{Transition, View};
use crate::state::session::SessionStore;

#[component]
pub fn GradesPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let on_select = Callback::new(move |grade_id: String| {
        let target = View::GradeSelection.next(Transition::SelectGrade(grade_id), &session.get_untracked());
        navigate(&target.path(), NavigateOptions::default());
    });

    view! {
        <div class="grades-page">
            <div class="grades-page__intro">
                <h1 class="grades-page__title">"Selecciona tu Grado Escolar"</h1>
                <p class="grades-page__lead">
                    "Cada grado tiene contenido específico diseñado para tu edad y nivel de aprendizaje"
                </p>
            </div>
            <div class="grades-page__grid">
                {catalog::all()
                    .map(|entry| view! { <GradeTile entry=entry on_select=on_select/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
