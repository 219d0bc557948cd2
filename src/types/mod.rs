//! Type definitions for the Bitso API.

pub mod common;

pub use common::*;
