// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule table configuration for the MPLAN Sales Pipeline.
//!
//! The engine ships two built-in rule tables (canonical and legacy
//! cyclic) and can load a custom table from a JSON rule document. This
//! crate owns source selection, document parsing, and boundary
//! validation, so the engine itself only ever sees well-formed tables.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod loader;
mod source;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{load, load_file, parse_document};
pub use source::RuleTableSource;
