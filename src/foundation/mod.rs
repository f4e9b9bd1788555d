//! Numeric building blocks: vectors, boxes, frame timing and the error type.

pub mod core;
pub mod error;
pub mod quadrant;
pub mod vector;
