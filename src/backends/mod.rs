//! Concrete inference backends.

pub mod nvidia;
