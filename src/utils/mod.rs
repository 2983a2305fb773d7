//! Utility modules shared by the generators.

pub mod command;
pub mod date;
pub mod fs;
pub mod region;
