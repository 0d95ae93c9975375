use yew::prelude::*;

use crate::hooks::{use_refresh, use_service_status};

#[function_component]
pub fn AdminDashboardPage() -> Html {
    let service = use_service_status();
    let refresh = use_refresh();

    let on_refresh = refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900">{"Dashboard"}</h1>
                <button
                    onclick={on_refresh}
                    disabled={service.is_loading}
                    class="px-3 py-1.5 text-sm rounded-md border border-neutral-300 \
                           hover:bg-neutral-100 disabled:opacity-50"
                >
                    {if service.is_loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            if let Some(error) = &service.error {
                <div class="p-4 rounded-md bg-red-50 border border-red-200">
                    <p class="text-sm text-red-700">
                        {format!("Error loading service status: {error}")}
                    </p>
                </div>
            }

            {match &service.status {
                Some(status) => html! {
                    <dl class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="p-4 rounded-lg border border-neutral-200">
                            <dt class="text-sm text-neutral-500">{"API"}</dt>
                            <dd class="mt-1 text-neutral-900">{&status.info.message}</dd>
                        </div>
                        <div class="p-4 rounded-lg border border-neutral-200">
                            <dt class="text-sm text-neutral-500">{"Health"}</dt>
                            <dd class="mt-1 text-neutral-900">{&status.health.status}</dd>
                        </div>
                    </dl>
                },
                None if service.is_loading => html! {
                    <p class="text-neutral-600">{"Loading service status..."}</p>
                },
                None => html! {},
            }}
        </div>
    }
}
