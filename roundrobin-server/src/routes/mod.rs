//! HTTP route handlers

pub mod matches;
pub mod players;
pub mod state;
pub mod status;
