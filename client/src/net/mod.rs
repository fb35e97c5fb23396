//! Networking modules for the WishingWall REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `form_data` holds the multipart contribution
//! payload, and `types` defines the shared wire schema.

pub mod api;
pub mod form_data;
pub mod types;
