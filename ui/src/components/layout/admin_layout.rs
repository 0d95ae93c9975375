use super::admin_sidebar::AdminSidebar;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
}

/// Two-region shell for admin pages: fixed sidebar on the left, content
/// filling the rest.
#[function_component]
pub fn AdminLayout(props: &AdminLayoutProps) -> Html {
    html! {
        <div class="flex min-h-screen">
            <AdminSidebar />
            <main class="flex-1 p-4 md:p-8">
                {for props.children.iter()}
            </main>
        </div>
    }
}
