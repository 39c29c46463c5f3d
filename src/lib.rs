//! FIFA API Client Library
//!
//! A typed Rust client for the public FIFA data API: competitions, live and
//! scheduled matches, match timelines, players, teams, seasons and standings.
//!
//! ## Features
//!
//! - **One request pipeline**: every call is a single GET built from an
//!   immutable [`ClientConfig`], sent through an injectable [`Transport`] and
//!   decoded straight into a typed record
//! - **Typed errors**: missing identifiers, transport failures, upstream error
//!   statuses and decode failures are distinct [`FifaError`] variants
//! - **Open enumerations**: vendor codes that were never documented decode to
//!   `Unknown(code)` instead of failing
//! - **Offline testing**: [`FixtureTransport`] replays JSON payloads from disk
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fifa_api::{CompetitionsOptions, FifaClient, Localized};
//!
//! # async fn example() -> fifa_api::Result<()> {
//! let client = FifaClient::new();
//!
//! let page = client.get_competitions(&CompetitionsOptions::default()).await?;
//! for competition in &page.results {
//!     println!(
//!         "{}: {}",
//!         competition.id,
//!         competition.name.for_locale("en-GB").unwrap_or("?")
//!     );
//! }
//!
//! for live in client.get_current_matches().await?.results {
//!     let timeline = client.get_match_timeline(&live.match_key()).await?;
//!     println!("{} events so far", timeline.events.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! [`ClientConfig::from_env`] reads overrides for the defaults:
//! ```bash
//! export FIFA_API_BASE_URL=https://api.fifa.com/api/v3
//! export FIFA_API_USER_AGENT=my-app/1.0
//! export FIFA_API_LANGUAGE=es-ES
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod fifa;

// Re-export commonly used types
pub use config::ClientConfig;
pub use core::{FifaClient, FixtureTransport, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use error::{FifaError, Result, TransportError};
pub use fifa::{
    CoachRole, Competition, CompetitionsOptions, Gender, LiveMatch, LocaleDescription, Localized,
    Match, MatchEvent, MatchKey, MatchesOptions, OfficialType, Page, Period, Player, Season,
    StageKey, StandingsRow, Team, Timeline, TimelineEvent,
};
