//! scratch - adds two integers and spells out a greeting
//!
//! The library holds the two operations the binary drives: [`arith::add`],
//! which returns a [`arith::Sum`] record, and [`emit::emit_chars`], which
//! writes a string one character per line.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod arith;
pub mod config;
pub mod emit;
pub mod output;
