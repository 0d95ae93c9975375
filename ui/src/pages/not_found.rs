use yew::prelude::*;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
                <p class="text-gray-600">{"Page not found"}</p>
            </div>
        </main>
    }
}
