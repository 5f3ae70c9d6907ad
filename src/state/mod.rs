//! Shared client-side state modules.
//!
//! State is split by concern (`auth`, `notify`, `signup`) so pages and
//! components depend on small focused models, each provided via context
//! from the root component rather than ambient globals.

pub mod auth;
pub mod notify;
pub mod signup;
