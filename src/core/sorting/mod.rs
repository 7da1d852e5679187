//! The stepwise sorting engine.
//!
//! A sorting algorithm is wrapped as a [`ports::sorting_process::SortingProcess`]:
//! a resumable computation that performs exactly one swap per suspension
//! and runs past non-mutating comparisons inside the same call, so the
//! animation only ever shows meaningful state changes.

pub mod bubble;
pub mod direction;
pub mod factory;
pub mod insertion;
pub mod kinds;
pub mod ports;
pub mod step;
