use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{AuthForm, AuthMode};
use crate::hooks::{use_push_route, use_refresh};
use crate::signup::{SignupView, submit_signup};

const SIGNUP_INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md \
    bg-pink-50 text-black placeholder:text-purple-700 \
    focus:outline-none focus:border-purple-200 focus:ring-purple-200";
const SIGNUP_LABEL_CLASS: &str =
    "block text-sm font-medium text-purple-700 mb-1";

#[function_component]
pub fn SignupPage() -> Html {
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let push_route = use_push_route();
    let refresh = use_refresh();
    // Holding the timer here ties it to the page: unmounting or submitting
    // again drops the previous one, which cancels it.
    let pending_redirect: Rc<RefCell<Option<Timeout>>> =
        use_mut_ref(|| None);

    {
        let pending_redirect = pending_redirect.clone();
        use_effect_with((), move |_| {
            move || {
                pending_redirect.borrow_mut().take();
            }
        });
    }

    let on_submit = {
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |values: requests::AuthCredentials| {
            let view = PageView {
                is_loading: is_loading.clone(),
                error: error.clone(),
                push_route: push_route.clone(),
                refresh: refresh.clone(),
                pending_redirect: pending_redirect.clone(),
            };

            wasm_bindgen_futures::spawn_local(async move {
                let api_client = crate::get_api_client();
                submit_signup(&view, api_client.signup(&values)).await;
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-2xl \
                        shadow-[0_12px_30px_rgba(255,192,203,0.45)] p-8 \
                        transition-transform duration-500 hover:scale-105">

                <div class="text-center mb-6">
                    <img
                        src="/logo.png"
                        alt="Logo"
                        class="mx-auto h-12 w-12 rounded-full shadow-lg"
                    />
                    <h2 class="mt-6 text-3xl font-extrabold text-purple-700">
                        {"Create your account"}
                    </h2>
                    <p class="mt-2 text-sm text-gray-500">
                        {"Join us and start your journey"}
                    </p>
                </div>

                <div class="mt-8 bg-white rounded-xl p-6 shadow-inner">
                    <AuthForm
                        mode={AuthMode::Signup}
                        on_submit={on_submit}
                        is_loading={*is_loading}
                        error={(*error).clone().map(AttrValue::from)}
                        input_class={SIGNUP_INPUT_CLASS}
                        label_class={SIGNUP_LABEL_CLASS}
                    />
                </div>

                <div class="mt-6 text-center bg-purple-100 rounded-xl p-6 shadow-inner">
                    <p class="text-sm text-purple-700">
                        {"Already have an account?"}
                        {" "}
                        <Link<Route> to={Route::Login} classes="font-medium text-purple-700 hover:text-purple-900">
                            {"Login"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}

struct PageView {
    is_loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    push_route: Callback<Route>,
    refresh: Callback<()>,
    pending_redirect: Rc<RefCell<Option<Timeout>>>,
}

impl SignupView for PageView {
    fn set_loading(&self, is_loading: bool) {
        self.is_loading.set(is_loading);
    }

    fn set_error(&self, error: Option<String>) {
        self.error.set(error);
    }

    fn redirect_to_login(&self, alert: &'static str, delay_ms: u32) {
        show_alert(alert);
        let push_route = self.push_route.clone();
        let refresh = self.refresh.clone();
        let timeout = Timeout::new(delay_ms, move || {
            push_route.emit(Route::Login);
            refresh.emit(());
        });
        self.pending_redirect.borrow_mut().replace(timeout);
    }
}

/// Blocking browser dialog.
fn show_alert(message: &str) {
    if let Some(window) = web_sys::window()
        && window.alert_with_message(message).is_err()
    {
        tracing::warn!("Could not show alert: {message}");
    }
}
