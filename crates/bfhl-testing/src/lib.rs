//! Testing infrastructure for bfhl integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated config directory and CLI execution
//! - `RecordingTransport`: Scripted in-memory transport that counts calls
//! - `StubServer`: Local HTTP server answering with a canned response
//! - `fixtures`: Sample service responses
//! - `assertions`: Checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod server;
pub mod transport;
pub mod world;

pub use server::{RecordedRequest, StubServer};
pub use transport::RecordingTransport;
pub use world::{CliResult, TestWorld};
