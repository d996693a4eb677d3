//! Networking modules for the gopanel REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and builds authorized requests, and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
