//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Admin pages assume they are
//! mounted under `ProtectedRoute` and never check the session themselves.

pub mod admin;
pub mod home;
pub mod login;
