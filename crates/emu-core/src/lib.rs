//! Core traits for emulated processor state.
//!
//! Components expose memory through [`Bus`] and their internal state through
//! [`Observable`]. Nothing here executes instructions or keeps time.

mod bus;
mod observable;

pub use bus::Bus;
pub use observable::{Observable, Value};
