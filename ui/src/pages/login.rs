use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{AuthForm, AuthMode};
use crate::hooks::use_push_route;

#[function_component]
pub fn LoginPage() -> Html {
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let push_route = use_push_route();

    let on_submit = {
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |credentials: requests::AuthCredentials| {
            let is_loading = is_loading.clone();
            let error = error.clone();
            let push_route = push_route.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let api_client = crate::get_api_client();
                match api_client.login(&credentials).await {
                    Ok(_) => push_route.emit(Route::Admin),
                    Err(e) => {
                        tracing::error!("Login error: {e}");
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 mb-2">
                        {"Sign in"}
                    </h1>
                    <p class="text-neutral-600">
                        {"Enter your credentials to continue"}
                    </p>
                </div>

                <AuthForm
                    mode={AuthMode::Login}
                    on_submit={on_submit}
                    is_loading={*is_loading}
                    error={(*error).clone().map(AttrValue::from)}
                />

                <p class="mt-6 text-center text-sm text-neutral-600">
                    {"Don't have an account?"}
                    {" "}
                    <Link<Route> to={Route::Signup} classes="text-neutral-900 hover:text-neutral-700 font-medium underline">
                        {"Create one"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
