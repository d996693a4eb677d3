//! Navigation guarding.
//!
//! ARCHITECTURE
//! ============
//! `guard` holds the pure admission rule, and `registry` maps concrete paths
//! to access flags. Router glue lives in `util::auth`.

pub mod guard;
pub mod registry;

pub use guard::{NavDecision, RouteAccess, guard};
pub use registry::RouteTable;
