//! Feature slices for the TUI (state/update/render per slice).

pub mod chat;
pub mod demo;
pub mod feedback;
pub mod landing;
pub mod theme;
