use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const BUTTON_CLASSES: &str = "px-4 py-2 rounded-md text-sm font-medium \
    transition-colors";

#[function_component]
pub fn HomePage() -> Html {
    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center">
            <h1 class="text-4xl font-extrabold text-purple-700">{"Todo"}</h1>
            <p class="mt-4 text-gray-600">
                {"Keep track of what needs doing."}
            </p>
            <div class="mt-8 flex justify-center space-x-4">
                <Link<Route>
                    to={Route::Signup}
                    classes={classes!(BUTTON_CLASSES, "bg-neutral-900", "text-white", "hover:bg-neutral-800")}
                >
                    {"Sign up"}
                </Link<Route>>
                <Link<Route>
                    to={Route::Login}
                    classes={classes!(BUTTON_CLASSES, "border", "border-neutral-300", "hover:bg-neutral-100")}
                >
                    {"Log in"}
                </Link<Route>>
            </div>
        </main>
    }
}
