pub mod arith;
pub mod config;
pub mod error;
pub mod output;
pub mod program;
pub mod value;
