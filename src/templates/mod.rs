pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{active_badge, listing_form};
pub use layouts::desktop::desktop_layout;
