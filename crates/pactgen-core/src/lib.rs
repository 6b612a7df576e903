//! pactgen core library
//!
//! Typed generator descriptors for consumer-driven contract testing. A
//! generator tells the contract engine how to produce a dynamic value (a
//! random integer, a UUID, a string matching a regex, a formatted date, a
//! provider-state lookup or a mock-server URL) when a contract is replayed.
//! This crate only builds and serializes those descriptors; producing the
//! values is left to the engine.

pub mod builders;
pub mod config;
pub mod error;
pub mod generators;
pub mod set;

pub use crate::{
    config::{Config, OutputFormat},
    error::{Error, Result},
    generators::{Generator, GeneratorKind, SpecVersion, UuidFormat, GENERATOR_TYPE_KEY},
    set::GeneratorSet,
};
