//! Shared test utilities for the folder-mirror workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`fixture`]: [`MirrorFixture`] with a source tree, replica tree and log

pub mod fixture;

pub use fixture::MirrorFixture;
