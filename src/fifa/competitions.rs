//! Competitions: `/competitions` and `/competitions/{id}`.

use crate::core::http::{require, FifaClient};
use crate::error::Result;
use crate::fifa::enums::Gender;
use crate::fifa::types::{LocaleDescription, Page, PropertyBag};
use serde::{Deserialize, Serialize};

/// A competition as returned by the competitions endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Competition {
    #[serde(rename = "IdCompetition")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "IdConfederation")]
    pub confederation_ids: Vec<String>,
    #[serde(rename = "IdMemberAssociation")]
    pub member_association_ids: Vec<String>,
    #[serde(rename = "IdOwner")]
    pub owner_id: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "FootballType")]
    pub football_type: i32,
    #[serde(rename = "TeamType")]
    pub team_type: i32,
    #[serde(rename = "CompetitionType")]
    pub competition_type: i32,
    #[serde(rename = "AgeType")]
    pub age_type: i32,
    #[serde(rename = "Properties")]
    pub properties: PropertyBag,
    #[serde(rename = "IsUpdateable")]
    pub is_updateable: Option<bool>,
}

/// Query options for the competitions list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompetitionsOptions {
    /// Page size. `Some(0)` is sent as-is.
    #[serde(rename = "count", skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Token from a previous [`Page::next_token`].
    #[serde(rename = "continuationToken", skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

impl FifaClient {
    /// One page of the competitions list.
    pub async fn get_competitions(
        &self,
        options: &CompetitionsOptions,
    ) -> Result<Page<Competition>> {
        self.execute("/competitions", options).await
    }

    pub async fn get_competition(&self, competition_id: &str) -> Result<Competition> {
        let competition_id = require("competition_id", competition_id)?;
        self.execute(&format!("/competitions/{competition_id}"), &())
            .await
    }
}
