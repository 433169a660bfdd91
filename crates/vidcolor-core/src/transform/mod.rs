//! Transform pipeline — matrix helpers and the composite sample-to-RGB
//! matrix.

pub mod compose;
pub mod matrix;
