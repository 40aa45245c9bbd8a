//! Core data types for binscope.
//!
//! The loaded file lives in a single immutable [`ByteBuffer`]; every engine
//! reads from it and none of them mutates it.

pub mod buffer;

pub use buffer::ByteBuffer;
