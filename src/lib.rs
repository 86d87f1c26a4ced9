//! Core engine for gesture-controlled rapid serial visual presentation.
//!
//! The crate is platform neutral: hosts feed it raw input events and a
//! monotonic millisecond clock, poll [`engine::ReaderEngine::tick`], and
//! render from the view model when a redraw is requested. No timers, no
//! allocation, no I/O.
#![cfg_attr(not(test), no_std)]

pub mod content;
pub mod engine;
pub mod input;
pub mod render;
