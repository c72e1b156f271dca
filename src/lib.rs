//! Tankobon: parse manga, comic and book libraries from the command line.
//!
//! This library crate exposes the CLI's configuration and scanner for
//! integration testing. The parsing engine lives in `tankobon-parser`.

pub mod config;
pub mod scanner;
