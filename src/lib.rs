//! taskpad - a line-oriented personal task and notes tracker
//!
//! This crate turns one line of free-text input into a typed [`Command`]
//! and executes it against in-memory task and note lists, persisting state
//! between sessions.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod list;
pub mod model;
pub mod output;
pub mod parser;
pub mod storage;
pub mod ui;

pub use cli::Cli;
pub use command::Command;
pub use error::TaskpadError;
pub use parser::parse;
