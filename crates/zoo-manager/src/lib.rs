//! `zoo_manager` - Local record keeping for zoo animals
//!
//! This library stores animal records (name, date of birth, weight, height,
//! medical condition) in a single `SQLite` table and provides the form logic
//! used to add, list and delete them from a desktop window or the terminal.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod logging;
pub mod record;
pub mod storage;

pub use config::Config;
pub use controller::{Controller, Field, FormFields, FormState};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{AnimalRecord, NewAnimal, TableRow};
pub use storage::{RecordStore, Storage};
