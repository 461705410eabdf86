// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Demo
//!
//! Wires the command handlers to seeded in-memory repositories and runs a
//! small create/find session for each aggregate, printing the results as
//! JSON lines.
//!
//! Run with: cargo run --bin catalog-demo

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use rail_catalog::commands::{
    BrandCommand, BrandCommandHandler, BrandCommandOutcome, RailwayCommand,
    RailwayCommandHandler, RailwayCommandOutcome, ScaleCommand, ScaleCommandHandler,
    ScaleCommandOutcome,
};
use rail_catalog::domain::BrandId;
use rail_catalog::repository::{
    InMemoryBrandRepository, InMemoryRailwayRepository, InMemoryScaleRepository,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting catalog demo");

    let now = Utc::now();
    let brands = BrandCommandHandler::new(Arc::new(InMemoryBrandRepository::with_sample_brands(
        now,
    )));
    let railways = RailwayCommandHandler::new(Arc::new(InMemoryRailwayRepository::new()));
    let scales = ScaleCommandHandler::new(Arc::new(InMemoryScaleRepository::new()));

    let outcome = brands
        .handle(BrandCommand::CreateBrand {
            name: "Märklin".to_string(),
            kind: Some("industrial".to_string()),
            status: Some("active".to_string()),
            address: None,
            organization_entity_type: Some("limited_company".to_string()),
            contact_info: None,
            timestamp: Utc::now(),
        })
        .await?;
    if let BrandCommandOutcome::Created(id) = &outcome {
        info!(brand_id = %id, "brand created");
    }

    if let BrandCommandOutcome::Brand(Some(brand)) = brands
        .handle(BrandCommand::FindBrandById(BrandId::from_name("Märklin")))
        .await?
    {
        println!("{}", serde_json::to_string(&brand)?);
    }

    if let BrandCommandOutcome::Brands(all) = brands.handle(BrandCommand::FindAllBrands).await? {
        info!(count = all.len(), "brands in the catalog");
        for brand in all {
            println!("{}", serde_json::to_string(&brand)?);
        }
    }

    let outcome = railways
        .handle(RailwayCommand::CreateRailway {
            name: "Ferrovie dello Stato".to_string(),
            abbreviation: "FS".to_string(),
            country: "IT".to_string(),
            status: Some("active".to_string()),
            operating_since: Some("1905-07-01".parse()?),
            operating_until: None,
            address: None,
            organization_entity_type: Some("state_owned_enterprise".to_string()),
            contact_info: None,
            timestamp: Utc::now(),
        })
        .await?;
    if let RailwayCommandOutcome::Created(id) = &outcome {
        info!(railway_id = %id, "railway created");
    }

    if let RailwayCommandOutcome::Railways(all) =
        railways.handle(RailwayCommand::FindAllRailways).await?
    {
        for railway in all {
            println!("{}", serde_json::to_string(&railway)?);
        }
    }

    let outcome = scales
        .handle(ScaleCommand::CreateScale {
            name: "H0".to_string(),
            ratio: 87.0,
            track_gauge: "standard".to_string(),
            timestamp: Utc::now(),
        })
        .await?;
    if let ScaleCommandOutcome::Created(id) = &outcome {
        info!(scale_id = %id, "scale created");
    }

    if let ScaleCommandOutcome::Scales(all) = scales.handle(ScaleCommand::FindAllScales).await? {
        for scale in all {
            println!("{}", serde_json::to_string(&scale)?);
        }
    }

    info!("Catalog demo finished");
    Ok(())
}
