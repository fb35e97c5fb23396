//! Client state modules.
//!
//! DESIGN
//! ======
//! Each module owns one page concern as plain data plus the rules that change
//! it. Pages hold these values in signals; the rules themselves never touch the
//! DOM or the network directly, so they test without a browser.

pub mod access;
pub mod session;
pub mod submission;
pub mod viewer;
pub mod wall_admin;
pub mod walls;

#[cfg(test)]
pub(crate) mod fake_api;
