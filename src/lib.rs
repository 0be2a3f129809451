//! The Zeabur CLI client library.
//!
//! This crate provides a thin client for the Zeabur GraphQL API together with
//! the command line interface built on top of it.
//!
//! # Modules
//!
//! - `zeabur`: API client, one method per GraphQL operation
//! - `queries`: GraphQL documents sent by the client
//! - `http_utils`: HTTP transport shared by all requests
//! - `commands`: CLI command parsing
//! - `actions`: CLI command implementations
//! - `configuration`: Configuration management
//! - `format`: Data formatting utilities for tables, panels, JSON and CSV
//! - `output`: Terminal output of one CLI invocation
//! - `api_key`, `keyring`: API token storage

pub mod actions;
pub mod api_key;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod dev_keyring;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod format_utils;
pub mod http_utils;
pub mod keyring;
pub mod output;
pub mod queries;
pub mod zeabur;
