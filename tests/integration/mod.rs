//! Integration tests exercising the public parsing API end to end.

pub mod config_test;
pub mod parse_test;
