use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod signup;
pub mod state;

pub use state::State;

use components::layout::AdminLayout;
use pages::{
    AdminDashboardPage, HomePage, LoginPage, NotFoundPage, SignupPage,
};

/// Build a client for the backend.
///
/// The base URL comes from `API_URL` at build time, falling back to the
/// origin the app is served from. Resolved on every call, never cached.
pub fn get_api_client() -> APIClient {
    let address = option_env!("API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white text-gray-900 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Admin => html! {
            <AdminLayout>
                <AdminDashboardPage />
            </AdminLayout>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
