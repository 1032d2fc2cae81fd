#![warn(missing_docs)]
//! Core domain models and ports for the market-entry strategy (MES) tools.
//!
//! This crate defines the vocabulary shared by the analytical engine, the
//! dataset adapters, and the applications: trip records, the derived market
//! snapshot, scenario levers and outcomes, and the strategic posture
//! classification. It deliberately contains almost no behavior: the engine
//! in `mes-analytics` owns the computations, and the adapters own I/O.

/// Core domain models for the market-entry analysis.
///
/// The models in this module are primarily data structures with minimal
/// business logic, following the principles of the hexagonal architecture to
/// separate domain entities from their acquisition and processing
/// implementations.
pub mod models;

/// Interface traits for the market-entry analysis.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain logic and external
/// adapters (such as dataset files or remote stores) without specifying
/// implementation details. This separation allows for easier testing and the
/// ability to swap out infrastructure components without affecting the core
/// business logic.
pub mod ports;
