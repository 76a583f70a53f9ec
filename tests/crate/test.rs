#![no_std]

pub use bigrat::*;
