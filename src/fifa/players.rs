//! Players: `/players/{id}`.

use crate::core::http::{require, FifaClient};
use crate::error::Result;
use crate::fifa::types::{LocaleDescription, PropertyBag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Player profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    #[serde(rename = "IdPlayer")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "Alias")]
    pub alias: Vec<LocaleDescription>,
    #[serde(rename = "BirthDate")]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(rename = "Weight")]
    pub weight: Option<u32>,
    #[serde(rename = "Height")]
    pub height: Option<u32>,
    #[serde(rename = "BirthPlace")]
    pub birth_place: Option<String>,
    #[serde(rename = "IdCountry")]
    pub country_id: String,
    #[serde(rename = "InternationalCaps")]
    pub international_caps: Option<u32>,
    #[serde(rename = "InternationalDebut")]
    pub international_debut: Value,
    #[serde(rename = "TopCompetitionDebut")]
    pub top_competition_debut: Value,
    #[serde(rename = "PictureUrl")]
    pub picture_url: Option<String>,
    #[serde(rename = "ThumbnailUrl")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "TwitterAccount")]
    pub twitter_account: Value,
    #[serde(rename = "PreferredFoot")]
    pub preferred_foot: Value,
    #[serde(rename = "MediaContent")]
    pub media_content: Value,
    #[serde(rename = "LocalizedTwitterAccounts")]
    pub localized_twitter_accounts: Value,
    #[serde(rename = "Goals")]
    pub goals: Option<u32>,
    #[serde(rename = "PlayerPicture")]
    pub player_picture: Value,
    #[serde(rename = "Properties")]
    pub properties: PropertyBag,
    #[serde(rename = "IsUpdateable")]
    pub is_updateable: Option<bool>,
}

impl FifaClient {
    pub async fn get_player(&self, player_id: &str) -> Result<Player> {
        let player_id = require("player_id", player_id)?;
        self.execute(&format!("/players/{player_id}"), &()).await
    }
}
