// Copyright (c) 2025 - Cowboy AI, Inc.
//! Repository Abstractions
//!
//! Repositories are the injected collaborators between the command layer
//! and whatever storage backs the catalog. The traits are deliberately
//! narrow: list, look up by identifier, save. Command handlers only ever
//! see the trait objects, so the in-memory implementations in [`memory`]
//! can be swapped out without touching the handlers.

use async_trait::async_trait;

use crate::domain::{Brand, BrandId, Railway, RailwayId, Scale, ScaleId};

pub mod memory;

pub use memory::{InMemoryBrandRepository, InMemoryRailwayRepository, InMemoryScaleRepository};

/// Storage abstraction for brands
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// List every brand
    async fn find_all(&self) -> Vec<Brand>;

    /// Look up a brand by its identifier
    async fn find_by_id(&self, brand_id: &BrandId) -> Option<Brand>;

    /// Store a brand, returning its identifier
    async fn save(&self, brand: Brand) -> BrandId;
}

/// Storage abstraction for railway companies
#[async_trait]
pub trait RailwayRepository: Send + Sync {
    /// List every railway
    async fn find_all(&self) -> Vec<Railway>;

    /// Look up a railway by its identifier
    async fn find_by_id(&self, railway_id: &RailwayId) -> Option<Railway>;

    /// Store a railway, returning its identifier
    async fn save(&self, railway: Railway) -> RailwayId;
}

/// Storage abstraction for modelling scales
#[async_trait]
pub trait ScaleRepository: Send + Sync {
    /// List every scale
    async fn find_all(&self) -> Vec<Scale>;

    /// Look up a scale by its identifier
    async fn find_by_id(&self, scale_id: &ScaleId) -> Option<Scale>;

    /// Store a scale, returning its identifier
    async fn save(&self, scale: Scale) -> ScaleId;
}
