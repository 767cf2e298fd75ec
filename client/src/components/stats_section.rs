//! Platform statistics strip on the home page.

#[cfg(test)]
#[path = "stats_section_test.rs"]
mod stats_section_test;

use leptos::prelude::*;

use crate::state::home::{ApiStatus, PlatformStats};

/// Modifier class for the API status indicator.
fn status_class(status: ApiStatus) -> &'static str {
    match status {
        ApiStatus::Ok => "stats__value stats__value--ok",
        ApiStatus::Error => "stats__value stats__value--error",
        ApiStatus::Loading => "stats__value stats__value--loading",
    }
}

#[component]
pub fn StatsSection(#[prop(into)] stats: Signal<PlatformStats>) -> impl IntoView {
    view! {
        <section class="stats">
            <h2 class="stats__title">"Estado de la Plataforma"</h2>
            <div class="stats__grid">
                <div class="stats__item">
                    <div class="stats__value stats__value--levels">{move || stats.get().level_count}</div>
                    <div class="stats__label">"Niveles Educativos"</div>
                </div>
                <div class="stats__item">
                    <div class="stats__value stats__value--institutions">
                        {move || stats.get().institution_count}
                    </div>
                    <div class="stats__label">"Instituciones"</div>
                </div>
                <div class="stats__item">
                    <div class="stats__value stats__value--courses">{move || stats.get().course_count}</div>
                    <div class="stats__label">"Cursos Disponibles"</div>
                </div>
                <div class="stats__item">
                    <div
                        class=move || status_class(stats.get().api_status)
                        title=move || stats.get().api_status.label()
                    >
                        {move || stats.get().api_status.indicator()}
                    </div>
                    <div class="stats__label">"Estado API"</div>
                </div>
            </div>
        </section>
    }
}
