//! PRINCE candidate generator.
//!
//! Reads a word list, decomposes every output length into ordered chains of
//! word lengths and walks the combined keyspace in a deterministic,
//! interleaved order. The library exposes the word database, the chain
//! machinery and the emission driver; the `princegen` binary wires them to
//! stdin/stdout.

pub mod chain;
pub mod config;
pub mod dist;
pub mod error;
pub mod generator;
pub mod output;
pub mod words;

/// Shortest input word retained by the loader.
pub const IN_LEN_MIN: usize = 1;
/// Longest input word retained by the loader, and the hard cap on both
/// candidate length and chain part length.
pub const IN_LEN_MAX: usize = 16;

pub use chain::Chain;
pub use config::Config;
pub use error::PrinceError;
pub use generator::Generator;
pub use output::Sink;
pub use words::WordDb;
