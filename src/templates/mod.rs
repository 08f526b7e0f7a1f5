pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::view_section;
pub use layouts::desktop::desktop_layout;
