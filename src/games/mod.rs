//! Game implementations.

pub mod lights_out;
