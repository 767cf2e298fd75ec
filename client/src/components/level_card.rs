//! Card for one backend level row on the home page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LevelSummary;
use crate::routes::View;

#[component]
pub fn LevelCard(level: LevelSummary) -> impl IntoView {
    let navigate = use_navigate();
    let badge_class = format!("level-card__badge {}", level.color_class());
    let icon = level.icon.clone().unwrap_or_else(|| crate::catalog::initial(&level.name));
    let ages = level.age_label().unwrap_or_default();
    let description = level.description.clone().unwrap_or_default();

    view! {
        <div class="level-card">
            <div class="level-card__header">
                <div class=badge_class>{icon}</div>
                <div class="level-card__heading">
                    <h3 class="level-card__name">{level.name}</h3>
                    <p class="level-card__ages">{ages}</p>
                </div>
            </div>
            <p class="level-card__description">{description}</p>
            <button
                class="btn btn--primary level-card__explore"
                on:click=move |_| navigate(&View::GradeSelection.path(), NavigateOptions::default())
            >
                "Explorar Cursos"
            </button>
        </div>
    }
}
