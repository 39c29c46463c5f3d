//! Match timeline: `/timelines/{competition}/{season}/{stage}/{match}`.

use crate::core::http::{require, FifaClient};
use crate::error::Result;
use crate::fifa::enums::{MatchEvent, Period};
use crate::fifa::types::{LocaleDescription, MatchKey, PropertyBag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// All events recorded for one match.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Timeline {
    #[serde(rename = "IdStage")]
    pub stage_id: String,
    #[serde(rename = "IdMatch")]
    pub match_id: String,
    #[serde(rename = "IdCompetition")]
    pub competition_id: String,
    #[serde(rename = "IdSeason")]
    pub season_id: String,
    #[serde(rename = "IdGroup")]
    pub group_id: Option<String>,
    #[serde(rename = "Event")]
    pub events: Vec<TimelineEvent>,
    #[serde(rename = "Properties")]
    pub properties: PropertyBag,
    #[serde(rename = "IsUpdateable")]
    pub is_updateable: Option<bool>,
}

/// One timeline entry. Pitch coordinates are null for events that have no
/// location, such as the coin toss or the final whistle.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimelineEvent {
    #[serde(rename = "EventId")]
    pub id: String,
    #[serde(rename = "IdTeam")]
    pub team_id: Option<String>,
    #[serde(rename = "IdPlayer")]
    pub player_id: Option<String>,
    #[serde(rename = "IdSubPlayer")]
    pub sub_player_id: Option<String>,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "MatchMinute")]
    pub match_minute: String,
    #[serde(rename = "Period")]
    pub period: Period,
    #[serde(rename = "HomeGoals")]
    pub home_goals: i32,
    #[serde(rename = "AwayGoals")]
    pub away_goals: i32,
    #[serde(rename = "Type")]
    pub kind: MatchEvent,
    #[serde(rename = "TypeLocalized")]
    pub type_localized: Vec<LocaleDescription>,
    #[serde(rename = "PositionX")]
    pub position_x: Option<f64>,
    #[serde(rename = "PositionY")]
    pub position_y: Option<f64>,
    #[serde(rename = "GoalGatePositionX")]
    pub goal_gate_position_x: Option<f64>,
    #[serde(rename = "GoalGatePositionY")]
    pub goal_gate_position_y: Option<f64>,
    #[serde(rename = "GoalGatePositionZ")]
    pub goal_gate_position_z: Option<f64>,
    #[serde(rename = "HomePenaltyGoals")]
    pub home_penalty_goals: i32,
    #[serde(rename = "AwayPenaltyGoals")]
    pub away_penalty_goals: i32,
    #[serde(rename = "EventDescription")]
    pub description: Vec<LocaleDescription>,
    #[serde(rename = "VarNotificationData")]
    pub var_notification: Option<VarNotification>,
    #[serde(rename = "Qualifiers")]
    pub qualifiers: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct VarNotification {
    #[serde(rename = "Incident")]
    pub incident: i32,
    #[serde(rename = "Reason")]
    pub reason: i32,
    #[serde(rename = "Status")]
    pub status: i32,
    #[serde(rename = "Result")]
    pub result: i32,
}

impl FifaClient {
    pub async fn get_match_timeline(&self, key: &MatchKey) -> Result<Timeline> {
        let competition_id = require("competition_id", &key.competition_id)?;
        let season_id = require("season_id", &key.season_id)?;
        let stage_id = require("stage_id", &key.stage_id)?;
        let match_id = require("match_id", &key.match_id)?;

        let path = format!("/timelines/{competition_id}/{season_id}/{stage_id}/{match_id}");
        self.execute(&path, &()).await
    }
}
