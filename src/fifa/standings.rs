//! Season standings: `/calendar/{competition}/{season}/{stage}/standing`.

use crate::core::http::{require, FifaClient};
use crate::error::Result;
use crate::fifa::types::{LocaleDescription, Page, StageKey};
use serde::{Deserialize, Serialize};

/// One row of a group or league table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StandingsRow {
    #[serde(rename = "IdCompetition")]
    pub competition_id: String,
    #[serde(rename = "IdSeason")]
    pub season_id: String,
    #[serde(rename = "IdStage")]
    pub stage_id: String,
    #[serde(rename = "IdGroup")]
    pub group_id: Option<String>,
    #[serde(rename = "IdTeam")]
    pub team_id: String,
    #[serde(rename = "Group")]
    pub group: Vec<LocaleDescription>,
    #[serde(rename = "Position")]
    pub position: i32,
    #[serde(rename = "Played")]
    pub played: i32,
    #[serde(rename = "Won")]
    pub won: i32,
    #[serde(rename = "Drawn")]
    pub drawn: i32,
    #[serde(rename = "Lost")]
    pub lost: i32,
    #[serde(rename = "For")]
    pub goals_for: i32,
    #[serde(rename = "Against")]
    pub goals_against: i32,
    /// Spelled `GoalsDiference` on the wire.
    #[serde(rename = "GoalsDiference")]
    pub goal_difference: i32,
    #[serde(rename = "Points")]
    pub points: i32,
    #[serde(rename = "Team")]
    pub team: StandingsTeam,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StandingsTeam {
    #[serde(rename = "IdTeam")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "Abbreviation")]
    pub abbreviation: Option<String>,
    #[serde(rename = "IdCountry")]
    pub country_id: Option<String>,
    #[serde(rename = "PictureUrl")]
    pub picture_url: Option<String>,
}

impl FifaClient {
    pub async fn get_season_standings(&self, key: &StageKey) -> Result<Page<StandingsRow>> {
        let competition_id = require("competition_id", &key.competition_id)?;
        let season_id = require("season_id", &key.season_id)?;
        let stage_id = require("stage_id", &key.stage_id)?;

        let path = format!("/calendar/{competition_id}/{season_id}/{stage_id}/standing");
        self.execute(&path, &()).await
    }
}
