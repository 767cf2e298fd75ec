use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"© 2025 Chaski Bots LAB - Plataforma Educativa de Robótica"</p>
            <p class="site-footer__tagline">"Desarrollando el futuro, un robot a la vez"</p>
        </footer>
    }
}
