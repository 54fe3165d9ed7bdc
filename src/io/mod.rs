//! File interchange for the engine: PNG in and out.

pub mod png;
