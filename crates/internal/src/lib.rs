//! Internal utilities shared by the sskdf crates
//!
//! Nothing in here is part of the public API contract.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
