//! Shared numeric helpers.

pub mod scale;
