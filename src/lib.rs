#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod autocomplete;
pub mod cli;
pub mod error;
pub mod phrases;
pub mod prefix;

mod env;
mod logger;
