//! Seasons: `/seasons/{id}`.

use crate::core::http::{require, FifaClient};
use crate::error::Result;
use crate::fifa::types::{LocaleDescription, PropertyBag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One edition of a competition.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Season {
    #[serde(rename = "IdSeason")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "ShortName")]
    pub short_name: Vec<LocaleDescription>,
    #[serde(rename = "Abbreviation")]
    pub abbreviation: Option<String>,
    #[serde(rename = "IdMemberAssociation")]
    pub member_association_ids: Vec<String>,
    #[serde(rename = "IdConfederation")]
    pub confederation_ids: Vec<String>,
    #[serde(rename = "IdCompetition")]
    pub competition_id: String,
    #[serde(rename = "StartDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "EndDate")]
    pub end_date: DateTime<Utc>,
    #[serde(rename = "PictureUrl")]
    pub picture_url: Option<String>,
    #[serde(rename = "MascotPictureUrl")]
    pub mascot_picture_url: Option<String>,
    #[serde(rename = "MatchBallPictureUrl")]
    pub match_ball_picture_url: Option<String>,
    #[serde(rename = "HostTeams")]
    pub host_teams: Vec<HostTeam>,
    #[serde(rename = "SportType")]
    pub sport_type: i32,
    #[serde(rename = "Properties")]
    pub properties: PropertyBag,
    #[serde(rename = "IsUpdateable")]
    pub is_updateable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostTeam {
    #[serde(rename = "IdTeam")]
    pub team_id: String,
}

impl FifaClient {
    pub async fn get_season(&self, season_id: &str) -> Result<Season> {
        let season_id = require("season_id", season_id)?;
        self.execute(&format!("/seasons/{season_id}"), &()).await
    }
}
