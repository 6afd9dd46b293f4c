//! Networking modules for the forum REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` carries the injected API base URL, `api` performs the HTTP
//! calls, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod types;
