//! Source front ends: turn source text into a declaration tree plus the
//! comment tokens of the file.

pub mod cpp;
pub mod macros;
