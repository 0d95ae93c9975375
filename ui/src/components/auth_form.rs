use payloads::requests::{self, AuthCredentials};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AuthMode {
    Login,
    Signup,
}

const DEFAULT_INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
    rounded-md shadow-sm bg-white text-neutral-900 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500";
const DEFAULT_LABEL_CLASS: &str =
    "block text-sm font-medium text-neutral-700 mb-2";

/// Email and password form shared by the login and signup pages.
///
/// The form only validates shape. Values that pass
/// [`requests::validate_email`] and [`requests::validate_password`] are
/// emitted through `on_submit`; the owning page does the network call and
/// passes back `is_loading` and `error`.
#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
    pub on_submit: Callback<AuthCredentials>,
    #[prop_or_default]
    pub is_loading: bool,
    /// Error from the last submission, shown above the fields.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_else(|| DEFAULT_INPUT_CLASS.into())]
    pub input_class: AttrValue,
    #[prop_or_else(|| DEFAULT_LABEL_CLASS.into())]
    pub label_class: AttrValue,
}

#[derive(Clone, Default, PartialEq)]
struct FieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

impl FieldErrors {
    fn check(credentials: &AuthCredentials) -> Self {
        Self {
            email: requests::validate_email(&credentials.email).error_message(),
            password: requests::validate_password(&credentials.password)
                .error_message(),
        }
    }

    fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[function_component]
pub fn AuthForm(props: &AuthFormProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let field_errors = use_state(FieldErrors::default);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let field_errors = field_errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let credentials = AuthCredentials {
                email: email_input.value().trim().to_string(),
                password: password_input.value(),
            };

            let errors = FieldErrors::check(&credentials);
            let is_valid = errors.is_empty();
            field_errors.set(errors);
            if is_valid {
                on_submit.emit(credentials);
            }
        })
    };

    let (submit_text, loading_text, password_autocomplete) = match props.mode {
        AuthMode::Login => ("Sign in", "Signing in...", "current-password"),
        AuthMode::Signup => {
            ("Create account", "Creating account...", "new-password")
        }
    };

    html! {
        <form onsubmit={on_submit} class="space-y-6" novalidate={true}>
            if let Some(error) = &props.error {
                <div class="p-4 rounded-md bg-red-50 border border-red-200">
                    <p class="text-sm text-red-700">{error}</p>
                </div>
            }

            <div>
                <label for="email" class={props.label_class.clone()}>
                    {"Email"}
                </label>
                <input
                    ref={email_ref}
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    required={true}
                    class={props.input_class.clone()}
                    placeholder="you@example.com"
                />
                if let Some(message) = field_errors.email {
                    <p class="mt-1 text-sm text-red-600">{message}</p>
                }
            </div>

            <div>
                <label for="password" class={props.label_class.clone()}>
                    {"Password"}
                </label>
                <input
                    ref={password_ref}
                    type="password"
                    id="password"
                    name="password"
                    autocomplete={password_autocomplete}
                    required={true}
                    class={props.input_class.clone()}
                    placeholder="••••••••"
                />
                if let Some(message) = field_errors.password {
                    <p class="mt-1 text-sm text-red-600">{message}</p>
                }
            </div>

            <button
                type="submit"
                disabled={props.is_loading}
                class="w-full flex justify-center py-2 px-4 border border-transparent
                       rounded-md shadow-sm text-sm font-medium text-white
                       bg-neutral-900 hover:bg-neutral-800
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors duration-200"
            >
                if props.is_loading {
                    {loading_text}
                } else {
                    {submit_text}
                }
            </button>
        </form>
    }
}
