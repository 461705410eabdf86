// Copyright (c) 2025 - Cowboy AI, Inc.
//! Railway Commands and Handler

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tracing::warn;

use crate::domain::{
    Address, ContactInfo, CountryCode, Metadata, OrganizationEntityType, PeriodOfActivity,
    Railway, RailwayId, RailwayStatus,
};
use crate::errors::CatalogResult;
use crate::repository::RailwayRepository;

/// Commands accepted by the railway handler
#[derive(Debug, Clone, PartialEq)]
pub enum RailwayCommand {
    /// Create a new railway company
    CreateRailway {
        /// Name of the railway company
        name: String,

        /// Abbreviated name (e.g. "FS", "DB")
        abbreviation: String,

        /// ISO 3166-1 alpha-2 code of the operating country
        country: String,

        /// Activity status, as supplied by the caller
        status: Option<String>,

        /// Date when the railway started its operation
        operating_since: Option<NaiveDate>,

        /// Date when the railway ended its operation
        operating_until: Option<NaiveDate>,

        /// Company address
        address: Option<Address>,

        /// Legal form of the company, as supplied by the caller
        organization_entity_type: Option<String>,

        /// Contact information
        contact_info: Option<ContactInfo>,

        /// Timestamp when the command was issued (explicit time parameter)
        timestamp: DateTime<Utc>,
    },

    /// Find a railway company by its unique identifier
    FindRailwayById(RailwayId),

    /// Find all the railway companies
    FindAllRailways,
}

/// Outcomes produced by the railway handler, one per command
#[derive(Debug, Clone, PartialEq)]
pub enum RailwayCommandOutcome {
    /// The identifier of the created railway
    Created(RailwayId),

    /// The railway with the requested id, if any
    Railway(Option<Railway>),

    /// Every railway in the catalog
    Railways(Vec<Railway>),
}

/// Handles railway commands against a repository
pub struct RailwayCommandHandler {
    repository: Arc<dyn RailwayRepository>,
}

impl RailwayCommandHandler {
    /// Create a handler backed by the given repository
    pub fn new(repository: Arc<dyn RailwayRepository>) -> Self {
        Self { repository }
    }

    /// Dispatch a railway command
    ///
    /// # Errors
    ///
    /// [`crate::errors::CatalogError::NullValue`] when the name or the
    /// abbreviation is blank, [`crate::errors::CatalogError::InvalidFormat`]
    /// when the country code is malformed. An unknown status string is
    /// logged and dropped along with the period of activity built from it.
    pub async fn handle(&self, command: RailwayCommand) -> CatalogResult<RailwayCommandOutcome> {
        match command {
            RailwayCommand::CreateRailway {
                name,
                abbreviation,
                country,
                status,
                operating_since,
                operating_until,
                address,
                organization_entity_type,
                contact_info,
                timestamp,
            } => {
                let country = CountryCode::new(&country)?;
                let mut railway = Railway::new(
                    RailwayId::from_name(&name),
                    name,
                    abbreviation,
                    country,
                    Metadata::created_at(timestamp),
                )?;
                railway.period_of_activity =
                    period_from_parts(status.as_deref(), operating_since, operating_until);
                railway.address = address;
                railway.organization_entity_type = organization_entity_type
                    .as_deref()
                    .and_then(entity_type_from_string);
                railway.contact_info = contact_info;

                let id = self.repository.save(railway).await;
                Ok(RailwayCommandOutcome::Created(id))
            }
            RailwayCommand::FindRailwayById(railway_id) => {
                let railway = self.repository.find_by_id(&railway_id).await;
                Ok(RailwayCommandOutcome::Railway(railway))
            }
            RailwayCommand::FindAllRailways => {
                let railways = self.repository.find_all().await;
                Ok(RailwayCommandOutcome::Railways(railways))
            }
        }
    }
}

/// Build the period of activity from the caller-supplied parts
///
/// Requires a recognized status and the dates that status needs; anything
/// less yields no period at all.
fn period_from_parts(
    status: Option<&str>,
    operating_since: Option<NaiveDate>,
    operating_until: Option<NaiveDate>,
) -> Option<PeriodOfActivity> {
    let status = status_from_string(status?)?;
    let operating_since = operating_since?;

    match status {
        RailwayStatus::Active => Some(PeriodOfActivity::active_railway(operating_since)),
        RailwayStatus::Inactive => operating_until
            .map(|until| PeriodOfActivity::inactive_railway(operating_since, until)),
    }
}

fn status_from_string(status: &str) -> Option<RailwayStatus> {
    status
        .parse()
        .map_err(|_| warn!("Unknown railway status: '{status}'"))
        .ok()
}

fn entity_type_from_string(entity_type: &str) -> Option<OrganizationEntityType> {
    entity_type
        .parse()
        .map_err(|_| warn!("Unknown organization entity type: '{entity_type}'"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRailwayRepository;

    fn test_timestamp() -> DateTime<Utc> {
        "2024-05-22T17:20:38Z".parse().unwrap()
    }

    fn date(value: &str) -> NaiveDate {
        value.parse().unwrap()
    }

    fn handler() -> RailwayCommandHandler {
        RailwayCommandHandler::new(Arc::new(InMemoryRailwayRepository::new()))
    }

    fn create_fs() -> RailwayCommand {
        RailwayCommand::CreateRailway {
            name: "Ferrovie dello Stato".to_string(),
            abbreviation: "FS".to_string(),
            country: "it".to_string(),
            status: Some("active".to_string()),
            operating_since: Some(date("1905-07-01")),
            operating_until: None,
            address: None,
            organization_entity_type: Some("state_owned_enterprise".to_string()),
            contact_info: None,
            timestamp: test_timestamp(),
        }
    }

    #[tokio::test]
    async fn test_create_railway() {
        let handler = handler();
        let outcome = handler.handle(create_fs()).await.unwrap();
        assert_eq!(
            outcome,
            RailwayCommandOutcome::Created(RailwayId::from_name("Ferrovie dello Stato"))
        );

        let outcome = handler
            .handle(RailwayCommand::FindRailwayById(RailwayId::from_name(
                "Ferrovie dello Stato",
            )))
            .await
            .unwrap();
        let RailwayCommandOutcome::Railway(Some(railway)) = outcome else {
            panic!("expected the created railway");
        };
        assert_eq!(railway.country.as_str(), "IT");
        assert_eq!(
            railway.period_of_activity,
            Some(PeriodOfActivity::active_railway(date("1905-07-01")))
        );
        assert_eq!(
            railway.organization_entity_type,
            Some(OrganizationEntityType::StateOwnedEnterprise)
        );
    }

    #[tokio::test]
    async fn test_malformed_country_is_a_hard_error() {
        let mut command = create_fs();
        if let RailwayCommand::CreateRailway { country, .. } = &mut command {
            *country = "italy".to_string();
        }

        let err = handler().handle(command).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid country code: italy");
    }

    #[tokio::test]
    async fn test_unknown_status_drops_the_period() {
        let mut command = create_fs();
        if let RailwayCommand::CreateRailway { status, .. } = &mut command {
            *status = Some("defunct".to_string());
        }

        let handler = handler();
        handler.handle(command).await.unwrap();
        let outcome = handler
            .handle(RailwayCommand::FindAllRailways)
            .await
            .unwrap();
        let RailwayCommandOutcome::Railways(railways) = outcome else {
            panic!("expected the railway list");
        };
        assert_eq!(railways[0].period_of_activity, None);
    }

    #[tokio::test]
    async fn test_inactive_status_needs_both_dates() {
        assert_eq!(
            period_from_parts(Some("inactive"), Some(date("1905-07-01")), None),
            None
        );
        assert_eq!(
            period_from_parts(
                Some("inactive"),
                Some(date("1905-07-01")),
                Some(date("1992-08-12"))
            ),
            Some(PeriodOfActivity::inactive_railway(
                date("1905-07-01"),
                date("1992-08-12")
            ))
        );
    }
}
