//! User Interface
//!
//! Framebuffer types, label resolution, and screen composition for the
//! monochrome panel. Every render pass clears its buffer and repopulates
//! it in full; the physical blit is the display driver's job.

pub mod bitmaps;
pub mod framebuffer;
pub mod main_screen;
pub mod status_bar;
