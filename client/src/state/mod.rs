//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state lives in `auth` and is provided via context so the gate and
//! the admin pages read the same signed-in user.

pub mod auth;
