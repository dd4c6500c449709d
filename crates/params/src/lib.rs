//! Constant values for sskdf operations
//!
//! Digest sizes and input limits of every hash family the single-step KDF
//! can run over.

#![no_std]

pub mod hash;
