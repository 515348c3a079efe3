pub mod layout;
pub mod list_status_banner;
pub mod list_toolbar;
pub mod pagination_controls;
pub mod session_page_wrapper;
pub mod sortable_header;
pub mod status_badge;
pub mod toast;

pub use layout::MainLayout;
pub use list_status_banner::ListStatusBanner;
pub use list_toolbar::ListToolbar;
pub use pagination_controls::PaginationControls;
pub use session_page_wrapper::SessionPageWrapper;
pub use sortable_header::SortableHeader;
pub use status_badge::{StatusBadge, Tone};
pub use toast::ToastContainer;
