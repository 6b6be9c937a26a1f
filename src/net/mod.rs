//! Networking modules for the auth endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the login/register POST requests, `types` defines the wire
//! schema and the client-side error type.

pub mod api;
pub mod types;
