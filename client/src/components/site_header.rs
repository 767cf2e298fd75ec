//! Top navigation bar with brand, section links, and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{Transition, View};
use crate::state::session::SessionStore;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let go = Callback::new(move |transition: Transition| {
        let origin = View::from_path(&pathname.get_untracked());
        let target = origin.next(transition, &session.get_untracked());
        navigate(&target.path(), NavigateOptions::default());
    });

    let on_logout = Callback::new(move |()| {
        session.logout();
        go.run(Transition::LoggedOut);
    });

    let greeting = move || session.current_user().map(|user| format!("Hola, {}", user.name));

    view! {
        <header class="site-header">
            <div class="site-header__brand" on:click=move |_| go.run(Transition::GoHome)>
                <span class="site-header__logo" aria-hidden="true">"🤖"</span>
                <h1 class="site-header__title">"Chaski Bots LAB"</h1>
            </div>
            <nav class="site-header__nav">
                <button class="site-header__link" on:click=move |_| go.run(Transition::GoHome)>
                    "Inicio"
                </button>
                <button class="site-header__link" on:click=move |_| go.run(Transition::ChooseGrade)>
                    "Niveles"
                </button>
                <Show
                    when=move || greeting().is_some()
                    fallback=move || {
                        view! {
                            <button class="site-header__link" on:click=move |_| go.run(Transition::ChooseGrade)>
                                "Ingresar"
                            </button>
                        }
                    }
                >
                    <span class="site-header__greeting">{move || greeting().unwrap_or_default()}</span>
                    <button class="btn btn--danger site-header__logout" on:click=move |_| on_logout.run(())>
                        "Cerrar Sesión"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
