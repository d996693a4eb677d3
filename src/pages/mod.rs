//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` is the only public page. `layout` wraps the protected sections,
//! each of which is a `section::SectionPage`.

pub mod layout;
pub mod login;
pub mod section;
