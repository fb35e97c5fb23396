//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, navigation, signals)
//! and delegates rules to `state` and rendering details to `components`.

pub mod contribute;
pub mod dashboard;
pub mod login;
pub mod wall_admin;
pub mod wall_view;
