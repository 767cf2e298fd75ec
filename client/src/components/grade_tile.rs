//! Selectable tile for one catalog grade.

use leptos::prelude::*;

use crate::catalog::{self, GradeEntry};

#[component]
pub fn GradeTile(entry: GradeEntry, on_select: Callback<String>) -> impl IntoView {
    let tile_style = format!("border-top: 4px solid {}", entry.color);
    let badge_style = format!("background-color: {}", entry.color);
    let id = entry.id.to_owned();

    view! {
        <button class="grade-tile" style=tile_style on:click=move |_| on_select.run(id.clone())>
            <div class="grade-tile__badge" style=badge_style>
                {catalog::initial(entry.label)}
            </div>
            <h3 class="grade-tile__label">{entry.label}</h3>
            <p class="grade-tile__ages">{entry.age_range}</p>
            <p class="grade-tile__level">{entry.level_name}</p>
        </button>
    }
}
