//! # kycflow
//!
//! Composition root of the KYC submission wizard: loads configuration,
//! installs tracing and wires the infrastructure adapters into the use cases.

pub mod bootstrap;

pub use bootstrap::{build_runtime, init_tracing_subscriber, load_config, KycRuntime, UseCases};
