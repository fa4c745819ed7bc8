//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod university;
pub mod fetch_failure;
pub mod state_filter;
pub mod suggestions;
pub mod search_state;
