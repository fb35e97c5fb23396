//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render contributions and image pickers; pages own the signals
//! they read and write.

pub mod content_card;
pub mod image_carousel;
pub mod image_dropzone;
pub mod truncated_text;
