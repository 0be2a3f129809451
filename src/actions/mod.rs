//! Command actions: call the API and render the result.

pub mod auth;
pub mod config;
pub mod environments;
pub mod logs;
pub mod projects;
pub mod services;
pub mod users;
pub mod utils;
