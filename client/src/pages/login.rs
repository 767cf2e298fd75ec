//! Login and student registration for a selected grade.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from grade selection as `/login/:grado`. The grade id comes straight
//! from the URL, so it may not be in the catalog; the badge then degrades to
//! neutral styling and registration still submits the raw id.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::catalog;
use crate::components::error_banner::ErrorBanner;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest, User};
use crate::routes::{GRADE_PARAM, Transition, View};
use crate::state::session::SessionStore;

const LOGIN_REQUIRED_MESSAGE: &str = "Ingresa tu email y contraseña.";
const REGISTER_REQUIRED_MESSAGE: &str = "Completa todos los campos para crear tu cuenta.";

/// Which form is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

impl FormMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Iniciar Sesión",
            Self::Register => "Crear Cuenta",
        }
    }

    /// Label of the link that switches to the other mode.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "¿No tienes cuenta? Regístrate",
            Self::Register => "¿Ya tienes cuenta? Inicia sesión",
        }
    }
}

/// Raw input values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub last_name: String,
    pub institution_code: String,
    pub email: String,
    pub password: String,
}

/// Input fields of [`AuthForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Name,
    LastName,
    InstitutionCode,
    Email,
    Password,
}

impl AuthField {
    /// Fields shown only while registering, in display order.
    pub const REGISTER_ONLY: [Self; 3] = [Self::Name, Self::LastName, Self::InstitutionCode];
    /// Fields shown in both modes, in display order.
    pub const SHARED: [Self; 2] = [Self::Email, Self::Password];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::LastName => "Apellidos",
            Self::InstitutionCode => "Código de Institución",
            Self::Email => "Email",
            Self::Password => "Contraseña",
        }
    }

    /// Backend field name, also used as the input `name`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "nombre",
            Self::LastName => "apellidos",
            Self::InstitutionCode => "codigo_institucion",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Name | Self::LastName | Self::InstitutionCode => "text",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::InstitutionCode => "Ejemplo: DEMO2025",
            _ => "",
        }
    }

    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InstitutionCode => Some("Tu institución te proporcionará este código"),
            _ => None,
        }
    }

    pub fn value(self, form: &AuthForm) -> &str {
        match self {
            Self::Name => &form.name,
            Self::LastName => &form.last_name,
            Self::InstitutionCode => &form.institution_code,
            Self::Email => &form.email,
            Self::Password => &form.password,
        }
    }

    pub fn set(self, form: &mut AuthForm, value: String) {
        match self {
            Self::Name => form.name = value,
            Self::LastName => form.last_name = value,
            Self::InstitutionCode => form.institution_code = value,
            Self::Email => form.email = value,
            Self::Password => form.password = value,
        }
    }
}

/// A validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthSubmission {
    /// Send the request to the backend.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`ApiError`].
    pub async fn send(self) -> Result<User, ApiError> {
        match self {
            Self::Login(request) => crate::net::api::login(&request).await,
            Self::Register(request) => crate::net::api::register(&request).await,
        }
    }
}

/// Validate `form` for `mode`. Text fields are trimmed; the password is sent
/// as typed but must not be blank.
///
/// # Errors
///
/// Returns the inline message to show when a required field is empty.
pub fn build_submission(mode: FormMode, form: &AuthForm, grade_id: &str) -> Result<AuthSubmission, &'static str> {
    let email = form.email.trim().to_owned();
    let password_blank = form.password.trim().is_empty();
    match mode {
        FormMode::Login => {
            if email.is_empty() || password_blank {
                return Err(LOGIN_REQUIRED_MESSAGE);
            }
            Ok(AuthSubmission::Login(LoginRequest { email, password: form.password.clone() }))
        }
        FormMode::Register => {
            let name = form.name.trim().to_owned();
            let last_name = form.last_name.trim().to_owned();
            let institution_code = form.institution_code.trim().to_owned();
            if [&name, &last_name, &institution_code, &email].iter().any(|v| v.is_empty()) || password_blank {
                return Err(REGISTER_REQUIRED_MESSAGE);
            }
            Ok(AuthSubmission::Register(RegisterRequest {
                name,
                last_name,
                email,
                password: form.password.clone(),
                institution_code,
                grade: grade_id.to_owned(),
            }))
        }
    }
}

/// Grade header shown above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeBadge {
    pub initial: String,
    pub code: String,
    /// `"Constructores • 7-8 años"`, or empty for unknown grades.
    pub caption: String,
    pub color: &'static str,
}

impl GradeBadge {
    pub fn for_grade(grade_id: &str) -> Self {
        let entry = catalog::lookup(grade_id);
        Self {
            initial: catalog::initial(grade_id),
            code: catalog::display_code(grade_id),
            caption: entry
                .map(|e| format!("{} • {}", e.level_name, e.age_range))
                .unwrap_or_default(),
            color: entry.map_or(catalog::NEUTRAL_COLOR, |e| e.color),
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let params = use_params_map();
    let grade_id = Memo::new(move |_| params.with(|p| p.get(GRADE_PARAM)).unwrap_or_default());

    let mode = RwSignal::new(FormMode::default());
    let form = RwSignal::new(AuthForm::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let badge = Memo::new(move |_| GradeBadge::for_grade(&grade_id.get()));

    #[cfg(feature = "hydrate")]
    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let grade = grade_id.get_untracked();
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let submission = match build_submission(mode.get_untracked(), &form.get_untracked(), &grade) {
            Ok(submission) => submission,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                let outcome = submission.send().await;
                busy.set(false);
                match outcome {
                    Ok(user) => {
                        session.set_user(user);
                        let target = View::LoginRegister(grade).next(Transition::Authenticated, &session.get_untracked());
                        navigate(&target.path(), NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    let on_back = move |_| {
        let from = View::LoginRegister(grade_id.get_untracked());
        navigate(&from.next(Transition::ChooseGrade, &session.get_untracked()).path(), NavigateOptions::default());
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-page__grade">
                <div
                    class="login-page__grade-badge"
                    style=move || format!("background-color: {}", badge.get().color)
                >
                    {move || badge.get().initial}
                </div>
                <h2 class="login-page__grade-code">{move || badge.get().code}</h2>
                <p class="login-page__grade-caption">{move || badge.get().caption}</p>
            </div>

            <div class="login-card">
                <h1>{move || mode.get().title()}</h1>
                <ErrorBanner message=error/>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == FormMode::Register>
                        {AuthField::REGISTER_ONLY
                            .into_iter()
                            .map(|field| view! { <FormField field=field form=form/> })
                            .collect::<Vec<_>>()}
                    </Show>
                    {AuthField::SHARED
                        .into_iter()
                        .map(|field| view! { <FormField field=field form=form/> })
                        .collect::<Vec<_>>()}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Cargando..." } else { mode.get().title() }}
                    </button>
                </form>
                <button class="login-card__toggle" on:click=on_toggle>
                    {move || mode.get().toggle_label()}
                </button>
            </div>

            <button class="login-page__back" on:click=on_back>
                "← Volver a seleccionar grado"
            </button>
        </div>
    }
}

/// Labeled input bound to one [`AuthForm`] field.
#[component]
fn FormField(field: AuthField, form: RwSignal<AuthForm>) -> impl IntoView {
    view! {
        <label class="login-form__field">
            <span class="login-form__label">{field.label()}</span>
            <input
                class="login-input"
                type=field.input_type()
                name=field.name()
                placeholder=field.placeholder()
                required=true
                prop:value=move || form.with(|f| field.value(f).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| field.set(f, value));
                }
            />
            {field.hint().map(|hint| view! { <p class="login-form__hint">{hint}</p> })}
        </label>
    }
}
