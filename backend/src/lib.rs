//! Server-side access to the public university directory.

pub mod api;
pub mod directory_utils;
