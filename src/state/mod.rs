//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Only the auth session lives here today; dashboard data is fetched per page.

pub mod session;
