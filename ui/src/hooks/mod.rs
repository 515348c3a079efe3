pub mod use_fetch_with_fallback;
pub mod use_list_query;
pub mod use_session;

pub use use_fetch_with_fallback::use_fetch_with_fallback;
pub use use_list_query::use_list_query;
pub use use_session::use_session;
