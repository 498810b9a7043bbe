//! Utility helpers for the map viewer component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing concerns (fullscreen, scrolling, timers, global listeners)
//! are isolated here behind `hydrate` gates so components compile and render
//! the same markup on the server.

pub mod dom;
pub mod fullscreen;
pub mod listeners;
pub mod resize_timer;
pub mod style;
pub mod viewer_host;
