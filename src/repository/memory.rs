// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Repository Implementations
//!
//! Simple list-backed repositories guarded by an async `RwLock`. Lookups
//! take a read lock, saves take a write lock; there is no further
//! concurrency control. Saving never deduplicates, matching the
//! append-only behavior of the service these back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{
    Brand, BrandId, BrandKind, Metadata, Railway, RailwayId, Scale, ScaleId, Slug,
};
use crate::repository::{BrandRepository, RailwayRepository, ScaleRepository};

/// In-memory brand repository
#[derive(Debug, Default)]
pub struct InMemoryBrandRepository {
    brands: RwLock<Vec<Brand>>,
}

impl InMemoryBrandRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with six sample brands
    ///
    /// The seed data mirrors the fixtures served before any brand has been
    /// created: "Brand 1" through "Brand 6", all industrial, stamped with
    /// the given creation time.
    pub fn with_sample_brands(now: DateTime<Utc>) -> Self {
        let brands = (1..7)
            .map(|n| {
                let name = format!("Brand {n}");
                Brand {
                    id: BrandId::from_name(&name),
                    slug: Slug::new(&name),
                    name,
                    kind: Some(BrandKind::Industrial),
                    status: None,
                    address: None,
                    organization_entity_type: None,
                    contact_info: None,
                    metadata: Metadata::created_at(now),
                }
            })
            .collect();

        Self {
            brands: RwLock::new(brands),
        }
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn find_all(&self) -> Vec<Brand> {
        self.brands.read().await.clone()
    }

    async fn find_by_id(&self, brand_id: &BrandId) -> Option<Brand> {
        self.brands
            .read()
            .await
            .iter()
            .find(|brand| brand.id == *brand_id)
            .cloned()
    }

    async fn save(&self, brand: Brand) -> BrandId {
        debug!(brand_id = %brand.id, "saving brand");
        let id = brand.id.clone();
        self.brands.write().await.push(brand);
        id
    }
}

/// In-memory railway repository
#[derive(Debug, Default)]
pub struct InMemoryRailwayRepository {
    railways: RwLock<Vec<Railway>>,
}

impl InMemoryRailwayRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RailwayRepository for InMemoryRailwayRepository {
    async fn find_all(&self) -> Vec<Railway> {
        self.railways.read().await.clone()
    }

    async fn find_by_id(&self, railway_id: &RailwayId) -> Option<Railway> {
        self.railways
            .read()
            .await
            .iter()
            .find(|railway| railway.id == *railway_id)
            .cloned()
    }

    async fn save(&self, railway: Railway) -> RailwayId {
        debug!(railway_id = %railway.id, "saving railway");
        let id = railway.id.clone();
        self.railways.write().await.push(railway);
        id
    }
}

/// In-memory scale repository
#[derive(Debug, Default)]
pub struct InMemoryScaleRepository {
    scales: RwLock<Vec<Scale>>,
}

impl InMemoryScaleRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScaleRepository for InMemoryScaleRepository {
    async fn find_all(&self) -> Vec<Scale> {
        self.scales.read().await.clone()
    }

    async fn find_by_id(&self, scale_id: &ScaleId) -> Option<Scale> {
        self.scales
            .read()
            .await
            .iter()
            .find(|scale| scale.id == *scale_id)
            .cloned()
    }

    async fn save(&self, scale: Scale) -> ScaleId {
        debug!(scale_id = %scale.id, "saving scale");
        let id = scale.id.clone();
        self.scales.write().await.push(scale);
        id
    }
}
