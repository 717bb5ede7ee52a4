// Copyright 2025 Cowboy AI, LLC.

//! Drivers: orchestrate the Domain and Port classifiers across a whole
//! application graph

pub mod progressive;
pub mod single_pass;

pub use progressive::{PassReport, ProgressiveDriver};
pub use single_pass::SinglePassDriver;
