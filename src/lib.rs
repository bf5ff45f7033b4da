#![cfg_attr(not(test), no_std)]
mod convert;
mod outcome;
pub use outcome::Outcome;
