//! Landing page: hero, live platform statistics, level cards, and features.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page issues the health, level, and institution reads in
//! parallel and derives [`HomeState`] from all three. Server rendering shows
//! the loading state; the browser fills it in after hydration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::level_card::LevelCard;
use crate::components::site_footer::SiteFooter;
use crate::components::stats_section::StatsSection;
use crate::routes::{Transition, View};
use crate::state::home::HomeState;
use crate::state::session::SessionStore;

/// Marketing blurbs shown under the level cards: (icon, title, body).
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🎮",
        "Aprendizaje Gamificado",
        "Sistema de badges, logros y competencias que mantienen a los estudiantes motivados.",
    ),
    (
        "🔧",
        "Simuladores Integrados",
        "Practica con Arduino, ESP32 y Raspberry Pi sin necesidad de hardware físico.",
    ),
    (
        "👨‍🏫",
        "Para Instituciones",
        "Dashboard completo para profesores con seguimiento de progreso y asignación de tareas.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let home = RwSignal::new(HomeState::default());

    #[cfg(feature = "hydrate")]
    {
        let lifetime = crate::util::lifetime::ViewLifetime::install();
        leptos::task::spawn_local(async move {
            use crate::net::api;
            let (health, levels, institutions) =
                futures::join!(api::fetch_health(), api::fetch_levels(), api::fetch_institutions());
            if !lifetime.is_alive() {
                return;
            }
            let next = HomeState::from_responses(health, levels, institutions);
            if next.error.is_some() {
                leptos::logging::warn!("home stats unavailable");
            }
            home.set(next);
        });
    }

    let on_start = move |_| {
        let target = View::Home.next(Transition::ChooseGrade, &session.get_untracked());
        navigate(&target.path(), NavigateOptions::default());
    };

    let stats = Signal::derive(move || home.get().stats);
    let error = Signal::derive(move || home.get().error);

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Aprende Robótica y Programación"</h1>
                <p class="hero__lead">
                    "Desde tus primeros pasos con bloques visuales hasta inteligencia artificial avanzada. "
                    "Una plataforma educativa diseñada para todas las edades."
                </p>
                <button class="btn hero__cta" on:click=on_start>
                    "Comenzar Ahora"
                </button>
            </section>

            <StatsSection stats=stats/>

            <section id="niveles" class="home-page__levels">
                <h2 class="home-page__heading">"Niveles Educativos"</h2>
                <ErrorBanner message=error/>
                <Show when=move || home.with(HomeState::is_loading)>
                    <p class="home-page__loading">"Cargando niveles..."</p>
                </Show>
                <div class="home-page__level-grid">
                    {move || {
                        home.get()
                            .levels
                            .into_iter()
                            .map(|level| view! { <LevelCard level=level/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="features">
                <h2 class="home-page__heading">"¿Por qué elegir Chaski Bots?"</h2>
                <div class="features__grid">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, body)| {
                            view! {
                                <div class="features__item">
                                    <div class="features__icon" aria-hidden="true">{icon}</div>
                                    <h3 class="features__title">{title}</h3>
                                    <p class="features__body">{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <SiteFooter/>
        </div>
    }
}
