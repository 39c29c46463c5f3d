//! Matches: the live feed (`/live/football/now`) and the calendar
//! (`/calendar/matches`).
//!
//! The two endpoints describe the same matches but are separate contracts.
//! Where they disagree on a field's type the difference is kept: the live feed
//! reports stadium capacity as a number, the calendar as a string, and the
//! calendar leaves `Home`/`Away` null for fixtures whose teams are not decided.
//! Sub-records that both endpoints emit identically are shared.

use crate::core::http::{require, FifaClient};
use crate::error::Result;
use crate::fifa::enums::{CoachRole, Gender, OfficialType, Period};
use crate::fifa::types::{LocaleDescription, MatchKey, Page, PropertyBag};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Venue of a match, generic over how the endpoint encodes `Capacity`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Stadium<C> {
    #[serde(rename = "IdStadium")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "Capacity")]
    pub capacity: Option<C>,
    #[serde(rename = "WebAddress")]
    pub web_address: Option<String>,
    #[serde(rename = "Built")]
    pub built: Option<DateTime<Utc>>,
    #[serde(rename = "Roof")]
    pub has_roof: bool,
    #[serde(rename = "Turf")]
    pub turf: Value,
    #[serde(rename = "IdCity")]
    pub city_id: Option<String>,
    #[serde(rename = "CityName")]
    pub city_name: Vec<LocaleDescription>,
    #[serde(rename = "IdCountry")]
    pub country_id: Option<String>,
    #[serde(rename = "PostalCode")]
    pub postal_code: Option<String>,
    #[serde(rename = "Street")]
    pub street: Option<String>,
    #[serde(rename = "Email")]
    pub email: Value,
    #[serde(rename = "Fax")]
    pub fax: Value,
    #[serde(rename = "Phone")]
    pub phone: Value,
    #[serde(rename = "AffiliationCountry")]
    pub affiliation_country: Value,
    #[serde(rename = "AffiliationRegion")]
    pub affiliation_region: Value,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Length")]
    pub length: Value,
    #[serde(rename = "Width")]
    pub width: Value,
    #[serde(rename = "Properties")]
    pub properties: PropertyBag,
    #[serde(rename = "IsUpdateable")]
    pub is_updateable: Option<bool>,
}

/// Stadium as reported by the live feed (`Capacity` is a number).
pub type LiveStadium = Stadium<u32>;

/// Stadium as reported by the calendar (`Capacity` is a string).
pub type CalendarStadium = Stadium<String>;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Weather {
    #[serde(rename = "Humidity")]
    pub humidity: Option<String>,
    #[serde(rename = "Temperature")]
    pub temperature: Option<String>,
    #[serde(rename = "WindSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "Type")]
    pub kind: i32,
    #[serde(rename = "TypeLocalized")]
    pub type_localized: Vec<LocaleDescription>,
}

/// One side of a match, with its line-up and match incidents.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchTeam {
    #[serde(rename = "Score")]
    pub score: Option<i32>,
    #[serde(rename = "Side")]
    pub side: Value,
    #[serde(rename = "IdTeam")]
    pub id: String,
    #[serde(rename = "PictureUrl")]
    pub picture_url: Option<String>,
    #[serde(rename = "IdCountry")]
    pub country_id: Option<String>,
    #[serde(rename = "TeamType")]
    pub team_type: i32,
    #[serde(rename = "AgeType")]
    pub age_type: i32,
    #[serde(rename = "Tactics")]
    pub tactics: Option<String>,
    #[serde(rename = "TeamName")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "Abbreviation")]
    pub abbreviation: Option<String>,
    #[serde(rename = "Coaches")]
    pub coaches: Vec<TeamCoach>,
    #[serde(rename = "Players")]
    pub players: Vec<TeamPlayer>,
    #[serde(rename = "Bookings")]
    pub bookings: Vec<Booking>,
    #[serde(rename = "Goals")]
    pub goals: Vec<Goal>,
    #[serde(rename = "Substitutions")]
    pub substitutions: Vec<Substitution>,
    #[serde(rename = "FootballType")]
    pub football_type: i32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "IdAssociation")]
    pub association_id: Option<String>,
    #[serde(rename = "ShortClubName")]
    pub short_club_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamCoach {
    #[serde(rename = "IdCoach")]
    pub id: String,
    #[serde(rename = "IdCountry")]
    pub country_id: Option<String>,
    #[serde(rename = "PictureUrl")]
    pub picture_url: Option<String>,
    #[serde(rename = "Name")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "Alias")]
    pub alias: Vec<LocaleDescription>,
    #[serde(rename = "Role")]
    pub role: CoachRole,
    #[serde(rename = "SpecialStatus")]
    pub special_status: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamPlayer {
    #[serde(rename = "IdPlayer")]
    pub id: String,
    #[serde(rename = "IdTeam")]
    pub team_id: String,
    #[serde(rename = "ShirtNumber")]
    pub shirt_number: i32,
    #[serde(rename = "Status")]
    pub status: i32,
    #[serde(rename = "SpecialStatus")]
    pub special_status: Option<i32>,
    #[serde(rename = "Captain")]
    pub captain: bool,
    #[serde(rename = "PlayerName")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "ShortName")]
    pub short_name: Vec<LocaleDescription>,
    #[serde(rename = "Position")]
    pub position: i32,
    #[serde(rename = "PlayerPicture")]
    pub picture: Option<PlayerPicture>,
    #[serde(rename = "FieldStatus")]
    pub field_status: Option<i32>,
    #[serde(rename = "LineupX")]
    pub lineup_x: Option<i32>,
    #[serde(rename = "LineupY")]
    pub lineup_y: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerPicture {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "PictureUrl")]
    pub picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Booking {
    #[serde(rename = "Card")]
    pub card: i32,
    #[serde(rename = "Period")]
    pub period: Period,
    #[serde(rename = "IdEvent")]
    pub event_id: String,
    #[serde(rename = "EventNumber")]
    pub event_number: Option<String>,
    #[serde(rename = "IdPlayer")]
    pub player_id: Option<String>,
    #[serde(rename = "IdCoach")]
    pub coach_id: Option<String>,
    #[serde(rename = "IdTeam")]
    pub team_id: String,
    #[serde(rename = "Minute")]
    pub minute: String,
    #[serde(rename = "Reason")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Goal {
    #[serde(rename = "IdGoal")]
    pub id: String,
    #[serde(rename = "IdTeam")]
    pub team_id: String,
    #[serde(rename = "Type")]
    pub kind: i32,
    #[serde(rename = "IdPlayer")]
    pub player_id: String,
    #[serde(rename = "Minute")]
    pub minute: String,
    #[serde(rename = "IdAssistPlayer")]
    pub assist_player_id: Option<String>,
    #[serde(rename = "Period")]
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Substitution {
    #[serde(rename = "IdEvent")]
    pub event_id: String,
    #[serde(rename = "Period")]
    pub period: Period,
    #[serde(rename = "Reason")]
    pub reason: i32,
    #[serde(rename = "SubstitutePosition")]
    pub position: i32,
    #[serde(rename = "IdPlayerOff")]
    pub player_off_id: String,
    #[serde(rename = "IdPlayerOn")]
    pub player_on_id: String,
    #[serde(rename = "PlayerOffName")]
    pub player_off_name: Vec<LocaleDescription>,
    #[serde(rename = "PlayerOnName")]
    pub player_on_name: Vec<LocaleDescription>,
    #[serde(rename = "Minute")]
    pub minute: String,
    #[serde(rename = "IdTeam")]
    pub team_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BallPossession {
    #[serde(rename = "Intervals")]
    pub intervals: Value,
    #[serde(rename = "LastX")]
    pub last_x: Value,
    #[serde(rename = "OverallHome")]
    pub overall_home: f64,
    #[serde(rename = "OverallAway")]
    pub overall_away: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Official {
    #[serde(rename = "OfficialId")]
    pub id: String,
    #[serde(rename = "IdCountry")]
    pub country_id: Option<String>,
    #[serde(rename = "Name")]
    pub name: Vec<LocaleDescription>,
    #[serde(rename = "NameShort")]
    pub short_name: Vec<LocaleDescription>,
    #[serde(rename = "OfficialType")]
    pub kind: OfficialType,
    #[serde(rename = "TypeLocalized")]
    pub type_localized: Vec<LocaleDescription>,
}

/// A match in progress, from `/live/football/now`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LiveMatch {
    #[serde(rename = "IdMatch")]
    pub id: String,
    #[serde(rename = "IdStage")]
    pub stage_id: String,
    #[serde(rename = "IdGroup")]
    pub group_id: Option<String>,
    #[serde(rename = "IdSeason")]
    pub season_id: String,
    #[serde(rename = "IdCompetition")]
    pub competition_id: String,
    #[serde(rename = "CompetitionName")]
    pub competition_name: Vec<LocaleDescription>,
    #[serde(rename = "SeasonName")]
    pub season_name: Vec<LocaleDescription>,
    #[serde(rename = "SeasonShortName")]
    pub season_short_name: Value,
    #[serde(rename = "Stadium")]
    pub stadium: Option<LiveStadium>,
    #[serde(rename = "ResultType")]
    pub result_type: i32,
    #[serde(rename = "MatchDay")]
    pub match_day: Option<String>,
    #[serde(rename = "HomeTeamPenaltyScore")]
    pub home_team_penalty_score: Option<i32>,
    #[serde(rename = "AwayTeamPenaltyScore")]
    pub away_team_penalty_score: Option<i32>,
    #[serde(rename = "AggregateHomeTeamScore")]
    pub aggregate_home_team_score: Option<i32>,
    #[serde(rename = "AggregateAwayTeamScore")]
    pub aggregate_away_team_score: Option<i32>,
    #[serde(rename = "Weather")]
    pub weather: Option<Weather>,
    #[serde(rename = "Attendance")]
    pub attendance: Option<String>,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "LocalDate")]
    pub local_date: DateTime<Utc>,
    #[serde(rename = "MatchTime")]
    pub match_time: Option<String>,
    #[serde(rename = "SecondHalfTime")]
    pub second_half_time: Option<String>,
    #[serde(rename = "FirstHalfTime")]
    pub first_half_time: Option<String>,
    #[serde(rename = "FirstHalfExtraTime")]
    pub first_half_extra_time: i32,
    #[serde(rename = "SecondHalfExtraTime")]
    pub second_half_extra_time: i32,
    #[serde(rename = "Winner")]
    pub winner: Option<String>,
    #[serde(rename = "Period")]
    pub period: Period,
    #[serde(rename = "HomeTeam")]
    pub home_team: MatchTeam,
    #[serde(rename = "AwayTeam")]
    pub away_team: MatchTeam,
    #[serde(rename = "BallPossession")]
    pub ball_possession: Option<BallPossession>,
    #[serde(rename = "TerritorialPossesion")]
    pub territorial_possession: Value,
    #[serde(rename = "TerritorialThirdPossesion")]
    pub territorial_third_possession: Value,
    #[serde(rename = "Officials")]
    pub officials: Vec<Official>,
    #[serde(rename = "MatchStatus")]
    pub match_status: i32,
    #[serde(rename = "GroupName")]
    pub group_name: Vec<LocaleDescription>,
    #[serde(rename = "StageName")]
    pub stage_name: Vec<LocaleDescription>,
    #[serde(rename = "OfficialityStatus")]
    pub officiality_status: i32,
    #[serde(rename = "TimeDefined")]
    pub time_defined: bool,
    #[serde(rename = "Properties")]
    pub properties: PropertyBag,
    #[serde(rename = "IsUpdateable")]
    pub is_updateable: Option<bool>,
}

impl LiveMatch {
    /// Identifiers to fetch this match's timeline.
    pub fn match_key(&self) -> MatchKey {
        MatchKey::new(
            &self.competition_id,
            &self.season_id,
            &self.stage_id,
            &self.id,
        )
    }
}

/// A scheduled or played match, from `/calendar/matches`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Match {
    #[serde(rename = "IdCompetition")]
    pub competition_id: String,
    #[serde(rename = "IdSeason")]
    pub season_id: String,
    #[serde(rename = "IdStage")]
    pub stage_id: String,
    #[serde(rename = "IdGroup")]
    pub group_id: Option<String>,
    #[serde(rename = "Weather")]
    pub weather: Option<Weather>,
    #[serde(rename = "Attendance")]
    pub attendance: Option<String>,
    #[serde(rename = "IdMatch")]
    pub id: String,
    #[serde(rename = "MatchDay")]
    pub match_day: Option<String>,
    #[serde(rename = "StageName")]
    pub stage_name: Vec<LocaleDescription>,
    #[serde(rename = "GroupName")]
    pub group_name: Vec<LocaleDescription>,
    #[serde(rename = "CompetitionName")]
    pub competition_name: Vec<LocaleDescription>,
    #[serde(rename = "SeasonName")]
    pub season_name: Vec<LocaleDescription>,
    #[serde(rename = "SeasonShortName")]
    pub season_short_name: Value,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "LocalDate")]
    pub local_date: Option<DateTime<Utc>>,
    #[serde(rename = "Home")]
    pub home: Option<MatchTeam>,
    #[serde(rename = "Away")]
    pub away: Option<MatchTeam>,
    #[serde(rename = "HomeTeamScore")]
    pub home_team_score: Option<i32>,
    #[serde(rename = "AwayTeamScore")]
    pub away_team_score: Option<i32>,
    #[serde(rename = "AggregateHomeTeamScore")]
    pub aggregate_home_team_score: Option<i32>,
    #[serde(rename = "AggregateAwayTeamScore")]
    pub aggregate_away_team_score: Option<i32>,
    #[serde(rename = "HomeTeamPenaltyScore")]
    pub home_team_penalty_score: Option<i32>,
    #[serde(rename = "AwayTeamPenaltyScore")]
    pub away_team_penalty_score: Option<i32>,
    #[serde(rename = "LastPeriodicUpdate")]
    pub last_periodic_update: Option<DateTime<Utc>>,
    #[serde(rename = "Leg")]
    pub leg: Value,
    #[serde(rename = "IsHomeMatch")]
    pub is_home_match: Option<bool>,
    #[serde(rename = "Stadium")]
    pub stadium: Option<CalendarStadium>,
    #[serde(rename = "IsTicketSalesAllowed")]
    pub is_ticket_sales_allowed: Option<bool>,
    #[serde(rename = "MatchTime")]
    pub match_time: Option<String>,
    #[serde(rename = "SecondHalfTime")]
    pub second_half_time: Option<String>,
    #[serde(rename = "FirstHalfTime")]
    pub first_half_time: Option<String>,
    #[serde(rename = "FirstHalfExtraTime")]
    pub first_half_extra_time: Option<i32>,
    #[serde(rename = "SecondHalfExtraTime")]
    pub second_half_extra_time: Option<i32>,
    #[serde(rename = "Winner")]
    pub winner: Option<String>,
    #[serde(rename = "MatchReportUrl")]
    pub match_report_url: Value,
    #[serde(rename = "PlaceHolderA")]
    pub placeholder_a: Option<String>,
    #[serde(rename = "PlaceHolderB")]
    pub placeholder_b: Option<String>,
    #[serde(rename = "BallPossession")]
    pub ball_possession: Option<BallPossession>,
    #[serde(rename = "Officials")]
    pub officials: Vec<Official>,
    #[serde(rename = "MatchStatus")]
    pub match_status: i32,
    #[serde(rename = "ResultType")]
    pub result_type: i32,
    #[serde(rename = "MatchNumber")]
    pub match_number: Option<i32>,
    #[serde(rename = "TimeDefined")]
    pub time_defined: bool,
    #[serde(rename = "OfficialityStatus")]
    pub officiality_status: i32,
    #[serde(rename = "MatchLegInfo")]
    pub match_leg_info: Value,
    #[serde(rename = "Properties")]
    pub properties: PropertyBag,
    #[serde(rename = "IsUpdateable")]
    pub is_updateable: Option<bool>,
}

impl Match {
    /// Identifiers to fetch this match's timeline.
    pub fn match_key(&self) -> MatchKey {
        MatchKey::new(
            &self.competition_id,
            &self.season_id,
            &self.stage_id,
            &self.id,
        )
    }
}

/// Search criteria for `/calendar/matches`.
///
/// Unset fields are left out of the query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchesOptions {
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(rename = "to", skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(rename = "idCompetition", skip_serializing_if = "Option::is_none")]
    pub competition_id: Option<String>,
    #[serde(rename = "idSeason", skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
    #[serde(rename = "idTeam", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(rename = "count", skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(rename = "continuationToken", skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

impl FifaClient {
    /// Matches currently being played.
    pub async fn get_current_matches(&self) -> Result<Page<LiveMatch>> {
        self.execute("/live/football/now", &()).await
    }

    /// Calendar search.
    pub async fn get_matches(&self, options: &MatchesOptions) -> Result<Page<Match>> {
        self.execute("/calendar/matches", options).await
    }

    /// Matches in the next 24 hours.
    pub async fn get_todays_matches(&self) -> Result<Page<Match>> {
        let now = Utc::now();
        let options = MatchesOptions {
            from: Some(now),
            to: Some(now + Duration::hours(24)),
            ..Default::default()
        };
        self.get_matches(&options).await
    }

    /// Matches from the start of today (UTC) onwards.
    pub async fn get_upcoming_matches(&self, count: Option<u32>) -> Result<Page<Match>> {
        let start_of_day = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc());
        let options = MatchesOptions {
            from: start_of_day,
            count,
            ..Default::default()
        };
        self.get_matches(&options).await
    }

    /// Calendar search restricted to one team; `options.team_id` is overwritten.
    pub async fn get_team_matches(
        &self,
        team_id: &str,
        options: &MatchesOptions,
    ) -> Result<Page<Match>> {
        let team_id = require("team_id", team_id)?;
        let options = MatchesOptions {
            team_id: Some(team_id.to_string()),
            ..options.clone()
        };
        self.get_matches(&options).await
    }
}
