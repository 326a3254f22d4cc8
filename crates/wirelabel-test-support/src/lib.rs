#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (sample enums), assert.rs (test assertions), race.rs (concurrent first-use harness), logging.rs (tracing setup).

pub mod assert;
pub mod fixtures;
pub mod logging;
pub mod race;
