//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns that sit in front of
//! every handler, currently request correlation.

pub mod trace;

pub use trace::Trace;
