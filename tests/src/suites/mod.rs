//! Vector-driven test suites
pub mod kat;
