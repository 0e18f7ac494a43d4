//! Weekday demo
//!
//! This crate contains:
//! - A `Day` enumeration with abbreviations and a weekday/weekend split
//! - An `Animal` capability with dogs, cats, and named pets
//! - A small demo routine that prints through a line sink
//! - The command-line front end used by the `weekday-demo` binary

pub mod animal;
pub mod cli;
pub mod day;
pub mod demo;
pub mod error;
pub mod logging;
pub mod named;
pub mod output;

pub use animal::{Animal, Cat, Dog, Pet};
pub use day::{Day, VALUES, WEEKDAYS, WEEKENDS};
pub use error::{DayError, DemoError};
pub use named::Named;
pub use output::LineSink;
