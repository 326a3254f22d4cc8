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

//! Bidirectional mapping between enum members and custom JSON wire labels.
//!
//! Each enum declares its members once (usually through [`labeled_enum!`]);
//! a [`LabelMapper`] lazily builds the forward (member to label) and reverse
//! (label to member) tables the first time it is used and then serves
//! lock-free conversions. Members without a label are written as their
//! identifier.
//!
//! Layout: `member.rs` (registration tables + macro), `map.rs` (lookup
//! tables), `mapper.rs` (lazy mapper + serde adapters), `registry.rs`
//! (per-type mapper ownership), `codec.rs` (JSON entry point), `config.rs`
//! (decode policy), `error.rs` (failure taxonomy).

pub mod codec;
pub mod config;
pub mod error;
pub mod map;
pub mod mapper;
pub mod member;
pub mod registry;

pub use codec::LabelCodec;
pub use config::{DecodePolicy, MapperConfig};
pub use error::{ErrorKind, LabelError, LabelResult, TokenKind};
pub use map::LabelMap;
pub use mapper::{LabelMapper, Labeled};
pub use member::{LabeledEnum, Member};
pub use registry::LabelRegistry;
