// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Command Layer
//!
//! Commands express caller intent and can fail validation; the handlers
//! dispatch them with pattern matching and talk to storage through the
//! repository traits.
//!
//! # Command Pattern
//!
//! ```text
//! Command → Handler.handle(Command) → Result<Outcome, Error>
//! ```
//!
//! # Time Handling
//!
//! Every create command includes an explicit `timestamp` parameter.
//! **NEVER call `Utc::now()` in domain logic** - time is passed from the
//! application layer.
//!
//! # Lenient vs strict parsing
//!
//! Optional classification strings (brand kind, brand/railway status,
//! organization entity type) that fail to parse are logged and dropped,
//! so a bad classifier never blocks entity creation. Fields the entity
//! cannot exist without (country, track gauge) fail hard instead.

pub mod brand;
pub mod railway;
pub mod scale;

pub use brand::{BrandCommand, BrandCommandHandler, BrandCommandOutcome};
pub use railway::{RailwayCommand, RailwayCommandHandler, RailwayCommandOutcome};
pub use scale::{ScaleCommand, ScaleCommandHandler, ScaleCommandOutcome};
