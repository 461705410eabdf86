// Copyright (c) 2025 - Cowboy AI, Inc.
//! Brand Commands and Handler

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

use crate::domain::{
    Address, Brand, BrandId, BrandKind, BrandStatus, ContactInfo, Metadata,
    OrganizationEntityType,
};
use crate::errors::CatalogResult;
use crate::repository::BrandRepository;

/// Commands accepted by the brand handler
#[derive(Debug, Clone, PartialEq)]
pub enum BrandCommand {
    /// Create a new brand
    CreateBrand {
        /// Brand name
        name: String,

        /// Kind of brand, as supplied by the caller
        kind: Option<String>,

        /// Activity status, as supplied by the caller
        status: Option<String>,

        /// Company address
        address: Option<Address>,

        /// Legal form of the company, as supplied by the caller
        organization_entity_type: Option<String>,

        /// Contact information
        contact_info: Option<ContactInfo>,

        /// Timestamp when the command was issued (explicit time parameter)
        timestamp: DateTime<Utc>,
    },

    /// Find an existing brand by its id
    FindBrandById(BrandId),

    /// Find all brands
    FindAllBrands,
}

/// Outcomes produced by the brand handler, one per command
#[derive(Debug, Clone, PartialEq)]
pub enum BrandCommandOutcome {
    /// The identifier of the created brand
    Created(BrandId),

    /// The brand with the requested id, if any
    Brand(Option<Brand>),

    /// Every brand in the catalog
    Brands(Vec<Brand>),
}

/// Handles brand commands against a repository
pub struct BrandCommandHandler {
    repository: Arc<dyn BrandRepository>,
}

impl BrandCommandHandler {
    /// Create a handler backed by the given repository
    pub fn new(repository: Arc<dyn BrandRepository>) -> Self {
        Self { repository }
    }

    /// Dispatch a brand command
    ///
    /// # Errors
    ///
    /// [`crate::errors::CatalogError::NullValue`] when the brand name is
    /// blank. Unknown kind/status/entity-type strings are not errors; they
    /// are logged and dropped.
    pub async fn handle(&self, command: BrandCommand) -> CatalogResult<BrandCommandOutcome> {
        match command {
            BrandCommand::CreateBrand {
                name,
                kind,
                status,
                address,
                organization_entity_type,
                contact_info,
                timestamp,
            } => {
                let mut brand = Brand::new(
                    BrandId::from_name(&name),
                    name,
                    Metadata::created_at(timestamp),
                )?;
                brand.kind = kind.as_deref().and_then(kind_from_string);
                brand.status = status.as_deref().and_then(status_from_string);
                brand.address = address;
                brand.organization_entity_type = organization_entity_type
                    .as_deref()
                    .and_then(entity_type_from_string);
                brand.contact_info = contact_info;

                let id = self.repository.save(brand).await;
                Ok(BrandCommandOutcome::Created(id))
            }
            BrandCommand::FindBrandById(brand_id) => {
                let brand = self.repository.find_by_id(&brand_id).await;
                Ok(BrandCommandOutcome::Brand(brand))
            }
            BrandCommand::FindAllBrands => {
                let brands = self.repository.find_all().await;
                Ok(BrandCommandOutcome::Brands(brands))
            }
        }
    }
}

fn kind_from_string(kind: &str) -> Option<BrandKind> {
    kind.parse()
        .map_err(|_| warn!("Unknown brand kind: '{kind}'"))
        .ok()
}

fn status_from_string(status: &str) -> Option<BrandStatus> {
    status
        .parse()
        .map_err(|_| warn!("Unknown brand status: '{status}'"))
        .ok()
}

fn entity_type_from_string(entity_type: &str) -> Option<OrganizationEntityType> {
    entity_type
        .parse()
        .map_err(|_| warn!("Unknown organization entity type: '{entity_type}'"))
        .ok()
}
