//! # cryptomate-cli
//!
//! Presentation layer for the cryptomate client: page-level state objects
//! implementing the read/refresh/mutate cycle, the stepper flows behind the
//! two wizard-style mutations, and the clap command surface that drives
//! them.

pub mod cli;
pub mod commands;
pub mod dialog;
pub mod error;
pub mod output;
pub mod pages;
