//! Presentation layer for the relmo calculator.
//!
//! Rendering is stateless: a calculation outcome becomes a list of styled
//! [`transcript::Segment`]s, and the caller decides where they go. The
//! [`transcript::Transcript`] type is the log the interactive form keeps.

pub mod pager;
pub mod styles;
pub mod terminal;
pub mod transcript;
