//! Data loading for the dashboard's list views.
//!
//! [`FetchController`] wraps a remote fetch and always leaves something to
//! display: the real page when the backend returns rows, otherwise the
//! caller's fallback set plus a [`Notice`] explaining why. The [`view`]
//! module holds the client-side search, filter, sort and paging applied to
//! whatever the controller is displaying.

pub mod controller;
mod entities;
pub mod error;
pub mod notice;
pub mod params;
pub mod view;

pub use controller::{
    FetchController, FetchTicket, Fetcher, ListSnapshot, LoadState,
    Pagination, Resolution, drive, load,
};
pub use error::FetchError;
pub use notice::{Notice, NoticeLog, Notifier, Severity};
pub use params::{ParamsKey, ParamsVersion, QueryParams};
pub use payloads::PageResult;
pub use view::{
    CategoryFilter, ListState, ListWindow, Listable, SortDirection, SortKey,
    SortSpec,
};
