pub mod api;
pub mod client;
pub mod images;
pub mod notify;

pub use client::{has_more_pages, CatalogClient, PROVIDER_PAGE_SIZE};
pub use images::ImageSize;
pub use notify::{LogNotifier, Notifier};
