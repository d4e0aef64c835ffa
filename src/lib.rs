//! `Rational` and `RationalSequence` are the kernel of the application: exact
//! fractions, always in lowest terms, and an ordered list of them that can be
//! summed and walked in descending denominator order. The `io` module turns
//! text files into sequences, the `report` module prints them, and the `args`
//! module parses the command line.
//!
//! Current Limitations:
//! * Numerators and denominators are `i64`s. Sums whose cross products leave
//!   that range overflow.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![warn(missing_docs)]

pub mod args;
pub mod error;
pub mod io;
pub mod operand;
pub mod rational;
pub mod report;
pub mod sequence;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use operand::Operand;
pub use rational::Rational;
pub use sequence::RationalSequence;
