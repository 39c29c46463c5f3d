//! FIFA API response shapes and per-endpoint calls.
//!
//! Each endpoint module owns its response records. The same logical entity
//! (a team, a stadium) can look different from one endpoint to the next, and
//! each shape follows what its own endpoint emits.

pub mod competitions;
pub mod enums;
pub mod matches;
pub mod players;
pub mod seasons;
pub mod standings;
pub mod teams;
pub mod timeline;
pub mod types;

pub use competitions::{Competition, CompetitionsOptions};
pub use enums::{CoachRole, Gender, MatchEvent, OfficialType, Period};
pub use matches::{
    BallPossession, Booking, CalendarStadium, Goal, LiveMatch, LiveStadium, Match, MatchTeam,
    MatchesOptions, Official, PlayerPicture, Stadium, Substitution, TeamCoach, TeamPlayer,
    Weather,
};
pub use players::Player;
pub use seasons::{HostTeam, Season};
pub use standings::{StandingsRow, StandingsTeam};
pub use teams::Team;
pub use timeline::{Timeline, TimelineEvent, VarNotification};
pub use types::{LocaleDescription, Localized, MatchKey, Page, PropertyBag, StageKey};
