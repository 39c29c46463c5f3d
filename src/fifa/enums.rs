//! Vendor-defined integer enumerations.
//!
//! The API is known to emit codes it never documented, so every enum here is
//! open: an unrecognised code decodes to `Unknown(code)` and serializes back to
//! the same integer.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Generates: enum with an `Unknown(i32)` catch-all, code(), is_known(),
// From<i32>, From<Enum> for i32, Display, and serde as the raw integer.
// ---------------------------------------------------------------------------
macro_rules! open_enum {
    (
        $(#[$attr:meta])*
        $name:ident {
            $( $(#[$vattr:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "i32", into = "i32")]
        pub enum $name {
            $( $(#[$vattr])* $variant, )+
            /// A code outside the documented set, kept as received.
            Unknown(i32),
        }

        impl $name {
            /// The raw integer used on the wire.
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Unknown(code) => code,
                }
            }

            /// `false` for codes the vendor has not documented.
            pub fn is_known(self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Unknown(other),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( $name::$variant => f.write_str($label), )+
                    $name::Unknown(code) => write!(f, "Unknown ({code})"),
                }
            }
        }
    };
}

open_enum! {
    /// Gender of a player, team or competition.
    Gender {
        Male = 1 => "Male",
        Female = 2 => "Female",
    }
}

open_enum! {
    /// Phase of play of a match.
    Period {
        /// The first period hasn't started yet.
        NotStarted = 0 => "Not started",
        FirstHalf = 3 => "First half",
        HalfTime = 4 => "Half time",
        SecondHalf = 5 => "Second half",
        FirstExtraTime = 7 => "First extra time",
        SecondExtraTime = 9 => "Second extra time",
        MatchOver = 10 => "Match over",
        PenaltyShootout = 11 => "Penalty shootout",
    }
}

open_enum! {
    /// Type of a timeline event.
    ///
    /// Code `9999` is a placeholder for an event whose type has not been
    /// settled yet. It is not an event type of its own and decodes to
    /// `Unknown(9999)`; use [`MatchEvent::is_pending`] to detect it.
    MatchEvent {
        GoalScored = 0 => "Goal",
        Assist = 1 => "Assist",
        YellowCard = 2 => "Yellow card",
        RedCard = 3 => "Red card",
        /// Second yellow card.
        DoubleYellow = 4 => "Second yellow card",
        Substitution = 5 => "Substitution",
        PenaltyAwarded = 6 => "Penalty awarded",
        MatchStart = 7 => "Match start",
        HalfEnd = 8 => "Half end",
        MatchPaused = 9 => "Match paused",
        MatchResumed = 10 => "Match resumed",
        GoalAttempt = 12 => "Attempt at goal",
        /// Foul of undocumented kind.
        FoulUnknown = 14 => "Foul (unspecified)",
        Offside = 15 => "Offside",
        CornerKick = 16 => "Corner kick",
        ShotBlocked = 17 => "Shot blocked",
        Foul = 18 => "Foul",
        CoinToss = 19 => "Coin toss",
        Unspecified20 = 20 => "Unspecified (20)",
        DroppedBall = 23 => "Dropped ball",
        ThrowIn = 24 => "Throw-in",
        Clearance = 25 => "Clearance",
        MatchEnd = 26 => "Match end",
        Unspecified27 = 27 => "Unspecified (27)",
        HitCrossbar = 32 => "Crossbar",
        HitPost = 33 => "Post",
        OwnGoal = 34 => "Own goal",
        HandBall = 37 => "Hand ball",
        FreeKickGoal = 39 => "Free-kick goal",
        PenaltyGoal = 41 => "Penalty goal",
        FreeKickCrossbar = 44 => "Free-kick crossbar",
        FreeKickPost = 49 => "Free-kick post",
        GoalieSaved = 57 => "Goalkeeper save",
        PenaltyMissed = 60 => "Penalty missed",
        PenaltyMissedAlt = 65 => "Penalty missed",
        VarPenalty = 72 => "VAR penalty",
    }
}

impl MatchEvent {
    /// Placeholder code for an event whose final type is still pending.
    pub const PENDING_CODE: i32 = 9999;

    /// `true` for the pending placeholder; query the timeline again later.
    pub fn is_pending(self) -> bool {
        self == MatchEvent::Unknown(Self::PENDING_CODE)
    }
}

open_enum! {
    /// Role of a match official.
    OfficialType {
        Referee = 1 => "Referee",
        AssistantReferee1 = 2 => "Assistant referee 1",
        AssistantReferee2 = 3 => "Assistant referee 2",
        FourthOfficial = 4 => "Fourth official",
        VideoAssistantReferee = 5 => "Video assistant referee",
        ReserveReferee = 6 => "Reserve referee",
        OffsideVar = 7 => "Offside VAR",
        AssistantVar = 8 => "Assistant VAR",
        SupportVar = 9 => "Support VAR",
        ReserveAssistantReferee = 10 => "Reserve assistant referee",
    }
}

open_enum! {
    /// Role of a coach on the team sheet.
    CoachRole {
        Manager = 0 => "Manager",
        AssistantManager = 1 => "Assistant manager",
    }
}
