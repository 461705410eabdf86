// Copyright (c) 2025 - Cowboy AI, Inc.
//! Scale Commands and Handler

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::error;

use crate::domain::{Metadata, Scale, ScaleId, TrackGauge};
use crate::errors::CatalogResult;
use crate::repository::ScaleRepository;

/// Commands accepted by the scale handler
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleCommand {
    /// Create a new modelling scale
    CreateScale {
        /// Scale name (e.g. "H0", "N")
        name: String,

        /// Ratio denominator: 87.0 means 1:87
        ratio: f64,

        /// Track gauge bracket, as supplied by the caller
        track_gauge: String,

        /// Timestamp when the command was issued (explicit time parameter)
        timestamp: DateTime<Utc>,
    },

    /// Find a scale by its unique identifier
    FindScaleById(ScaleId),

    /// Find all scales
    FindAllScales,
}

/// Outcomes produced by the scale handler, one per command
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleCommandOutcome {
    /// The identifier of the created scale
    Created(ScaleId),

    /// The scale with the requested id, if any
    Scale(Option<Scale>),

    /// Every scale in the catalog
    Scales(Vec<Scale>),
}

/// Handles scale commands against a repository
pub struct ScaleCommandHandler {
    repository: Arc<dyn ScaleRepository>,
}

impl ScaleCommandHandler {
    /// Create a handler backed by the given repository
    pub fn new(repository: Arc<dyn ScaleRepository>) -> Self {
        Self { repository }
    }

    /// Dispatch a scale command
    ///
    /// # Errors
    ///
    /// [`crate::errors::CatalogError::NullValue`] when the name is blank,
    /// [`crate::errors::CatalogError::InvalidFormat`] when the track gauge
    /// is unknown or the ratio is not positive. Unlike the optional brand
    /// classifiers, a scale cannot exist without its gauge, so the unknown
    /// value is a hard error.
    pub async fn handle(&self, command: ScaleCommand) -> CatalogResult<ScaleCommandOutcome> {
        match command {
            ScaleCommand::CreateScale {
                name,
                ratio,
                track_gauge,
                timestamp,
            } => {
                let track_gauge = track_gauge.parse::<TrackGauge>().map_err(|err| {
                    error!("Unknown track gauge: '{track_gauge}'");
                    err
                })?;
                let scale = Scale::new(
                    ScaleId::from_name(&name),
                    name,
                    ratio,
                    track_gauge,
                    Metadata::created_at(timestamp),
                )?;

                let id = self.repository.save(scale).await;
                Ok(ScaleCommandOutcome::Created(id))
            }
            ScaleCommand::FindScaleById(scale_id) => {
                let scale = self.repository.find_by_id(&scale_id).await;
                Ok(ScaleCommandOutcome::Scale(scale))
            }
            ScaleCommand::FindAllScales => {
                let scales = self.repository.find_all().await;
                Ok(ScaleCommandOutcome::Scales(scales))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryScaleRepository;

    fn test_timestamp() -> DateTime<Utc> {
        "2024-05-22T17:20:38Z".parse().unwrap()
    }

    fn handler() -> ScaleCommandHandler {
        ScaleCommandHandler::new(Arc::new(InMemoryScaleRepository::new()))
    }

    fn create_h0(track_gauge: &str) -> ScaleCommand {
        ScaleCommand::CreateScale {
            name: "H0".to_string(),
            ratio: 87.0,
            track_gauge: track_gauge.to_string(),
            timestamp: test_timestamp(),
        }
    }

    #[tokio::test]
    async fn test_create_scale() {
        let handler = handler();
        let outcome = handler.handle(create_h0("standard")).await.unwrap();
        assert_eq!(
            outcome,
            ScaleCommandOutcome::Created(ScaleId::from_name("H0"))
        );

        let outcome = handler
            .handle(ScaleCommand::FindScaleById(ScaleId::from_name("H0")))
            .await
            .unwrap();
        let ScaleCommandOutcome::Scale(Some(scale)) = outcome else {
            panic!("expected the created scale");
        };
        assert_eq!(scale.track_gauge, TrackGauge::Standard);
        assert_eq!(scale.to_string(), "H0 (1:87)");
    }

    #[tokio::test]
    async fn test_unknown_track_gauge_is_a_hard_error() {
        let err = handler().handle(create_h0("extra-wide")).await.unwrap_err();
        assert_eq!(err.to_string(), "Unknown track gauge: extra-wide");
    }

    #[tokio::test]
    async fn test_find_all_scales() {
        let handler = handler();
        handler.handle(create_h0("standard")).await.unwrap();

        let outcome = handler.handle(ScaleCommand::FindAllScales).await.unwrap();
        let ScaleCommandOutcome::Scales(scales) = outcome else {
            panic!("expected the scale list");
        };
        assert_eq!(scales.len(), 1);
    }
}
