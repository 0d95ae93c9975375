pub mod admin_layout;
pub mod admin_sidebar;

pub use admin_layout::AdminLayout;
pub use admin_sidebar::AdminSidebar;
