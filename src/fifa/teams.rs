//! Teams: `/teams/{id}`.

use crate::core::http::{require, FifaClient};
use crate::error::Result;
use crate::fifa::enums::Gender;
use crate::fifa::types::{LocaleDescription, PropertyBag};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Team profile. Not the same shape as the team block inside a match.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Team {
    #[serde(rename = "IdTeam")]
    pub id: String,
    #[serde(rename = "IdConfederation")]
    pub confederation_id: Option<String>,
    #[serde(rename = "Type")]
    pub team_type: i32,
    #[serde(rename = "AgeType")]
    pub age_type: i32,
    #[serde(rename = "FootballType")]
    pub football_type: i32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Name")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "IdAssociation")]
    pub association_id: Option<String>,
    #[serde(rename = "IdCity")]
    pub city_id: Option<String>,
    #[serde(rename = "Headquarters")]
    pub headquarters: Value,
    #[serde(rename = "TrainingCentre")]
    pub training_centre: Value,
    #[serde(rename = "OfficialSite")]
    pub official_site: Value,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "IdCountry")]
    pub country_id: Option<String>,
    #[serde(rename = "PostalCode")]
    pub postal_code: Option<String>,
    #[serde(rename = "RegionName")]
    pub region_name: Value,
    #[serde(rename = "ShortClubName")]
    pub short_club_name: Option<String>,
    #[serde(rename = "Abbreviation")]
    pub abbreviation: Option<String>,
    #[serde(rename = "Street")]
    pub street: Option<String>,
    #[serde(rename = "FoundationYear")]
    pub foundation_year: Option<i32>,
    #[serde(rename = "Stadium")]
    pub stadium: Value,
    #[serde(rename = "PictureUrl")]
    pub picture_url: Option<String>,
    #[serde(rename = "DisplayName")]
    pub display_name: Vec<LocaleDescription>,
    #[serde(rename = "Content")]
    pub content: Option<PropertyBag>,
    #[serde(rename = "Properties")]
    pub properties: PropertyBag,
    #[serde(rename = "IsUpdateable")]
    pub is_updateable: Option<bool>,
}

impl FifaClient {
    pub async fn get_team(&self, team_id: &str) -> Result<Team> {
        let team_id = require("team_id", team_id)?;
        self.execute(&format!("/teams/{team_id}"), &()).await
    }
}
