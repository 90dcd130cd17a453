//! Networking modules for the admin session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls the auth gate and the login page depend on.

pub mod api;
