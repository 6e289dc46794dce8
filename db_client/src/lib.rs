//! Internal modules for the Domino Bash terminal client.
//!
//! This library provides command parsing and the terminal presentation
//! layer used by the db_client binary.

pub mod commands;
pub mod terminal;
