#![allow(dead_code, unused_imports)]

pub mod mocks;
pub mod test_utils;

pub use mocks::MockTransport;
pub use test_utils::*;
