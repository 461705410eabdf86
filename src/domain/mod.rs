// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Domain Models
//!
//! Core domain concepts for the model railway catalog: the structured
//! identifier scheme and the entities built on top of it.
//!
//! # Value Objects with Invariants
//!
//! - [`Slug`] - canonical lowercase-hyphenated form of a name
//! - [`Trn`] - `trn:<namespace>:<segments>` structured identifier
//! - [`BrandId`], [`RailwayId`], [`ScaleId`], [`CatalogItemId`] -
//!   namespace-scoped typed identifiers
//! - [`Epoch`] - closed vocabulary of railway time-period codes
//! - [`CountryCode`] - ISO 3166-1 alpha-2 country code
//! - [`ItemNumber`] - manufacturer item number
//!
//! # Entities
//!
//! - [`Brand`] - a model railway manufacturer
//! - [`Railway`] - a railway company with its period of activity
//! - [`Scale`] - a modelling scale (ratio + track gauge)
//! - [`CatalogItem`] - a single product in a brand's catalog
//!
//! All types are immutable values: no shared mutable state, no I/O, safe
//! to use from any number of threads.

pub mod address;
pub mod brand;
pub mod catalog_item;
pub mod epoch;
pub mod ids;
pub mod metadata;
pub mod organization;
pub mod railway;
pub mod scale;
pub mod slug;
pub mod trn;

// Re-export value objects
pub use address::{Address, ContactInfo, CountryCode};
pub use brand::{Brand, BrandKind, BrandStatus};
pub use catalog_item::{CatalogItem, CatalogItemCategory, ItemNumber, PowerMethod};
pub use epoch::Epoch;
pub use ids::{BrandId, CatalogItemId, RailwayId, ScaleId};
pub use metadata::Metadata;
pub use organization::OrganizationEntityType;
pub use railway::{PeriodOfActivity, Railway, RailwayStatus};
pub use scale::{Scale, TrackGauge};
pub use slug::{slugify, Slug, Slugifier};
pub use trn::Trn;
