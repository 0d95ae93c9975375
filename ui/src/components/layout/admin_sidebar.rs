use crate::Route;
use crate::hooks::use_push_route;
use yew::prelude::*;
use yew_router::prelude::*;

/// A navigation item in the admin sidebar.
#[derive(Clone, PartialEq)]
pub struct AdminNavItem {
    pub title: &'static str,
    pub route: Route,
}

/// Admin sidebar navigation items. Add new admin pages here.
pub const ADMIN_NAV_ITEMS: &[AdminNavItem] = &[AdminNavItem {
    title: "Dashboard",
    route: Route::Admin,
}];

const LINK_BASE_CLASSES: &str =
    "block px-4 py-2 text-sm transition-colors cursor-pointer";
const LINK_INACTIVE_CLASSES: &str = "text-neutral-600 hover:text-neutral-900 \
    hover:bg-neutral-100";
const LINK_ACTIVE_CLASSES: &str = "text-neutral-900 bg-neutral-100 font-medium";

#[function_component]
pub fn AdminSidebar() -> Html {
    let push_route = use_push_route();
    let active_route = use_route::<Route>();

    html! {
        <aside class="w-64 flex-shrink-0 border-r border-neutral-200 bg-white">
            <nav class="py-4">
                <div class="px-4 pb-2 text-xs font-semibold uppercase tracking-wider \
                            text-neutral-500">
                    {"Admin"}
                </div>
                <ul>
                    { for ADMIN_NAV_ITEMS.iter().map(|item| {
                        let is_active = active_route.as_ref() == Some(&item.route);

                        let link_classes = format!(
                            "{} {}",
                            LINK_BASE_CLASSES,
                            if is_active { LINK_ACTIVE_CLASSES } else { LINK_INACTIVE_CLASSES }
                        );

                        let on_click = {
                            let push_route = push_route.clone();
                            let route = item.route.clone();
                            Callback::from(move |_: MouseEvent| {
                                push_route.emit(route.clone());
                            })
                        };

                        html! {
                            <li key={item.title}>
                                <div class={link_classes} onclick={on_click}>
                                    {item.title}
                                </div>
                            </li>
                        }
                    })}
                </ul>
                <div class="mt-4 px-4 pt-4 border-t border-neutral-200">
                    <Link<Route> to={Route::Home} classes="text-sm text-neutral-600 hover:text-neutral-900">
                        {"Back to site"}
                    </Link<Route>>
                </div>
            </nav>
        </aside>
    }
}
