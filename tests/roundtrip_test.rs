//! Decoding a fixture and serializing it again must reproduce every field

mod common;

use common::fixture_value;
use fifa_api::{
    Competition, LiveMatch, Match, Page, Player, Season, StandingsRow, Team, Timeline,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

fn assert_round_trip<T>(fixture: &str)
where
    T: DeserializeOwned + Serialize,
{
    let original = fixture_value(fixture);
    let decoded: T = serde_json::from_value(original.clone())
        .unwrap_or_else(|e| panic!("{fixture} failed to decode: {e}"));
    let reencoded = serde_json::to_value(&decoded).unwrap();

    if reencoded != original {
        let (path, left, right) = first_difference(&original, &reencoded, String::new())
            .unwrap_or_else(|| ("<root>".to_string(), original.clone(), reencoded.clone()));
        panic!("{fixture} changed at {path}: fixture {left}, re-encoded {right}");
    }
}

fn first_difference(left: &Value, right: &Value, path: String) -> Option<(String, Value, Value)> {
    match (left, right) {
        (Value::Object(a), Value::Object(b)) => {
            for key in a.keys().chain(b.keys()) {
                let child = format!("{path}.{key}");
                match (a.get(key), b.get(key)) {
                    (Some(x), Some(y)) => {
                        if let Some(diff) = first_difference(x, y, child) {
                            return Some(diff);
                        }
                    }
                    (x, y) => {
                        return Some((
                            child,
                            x.cloned().unwrap_or(Value::Null),
                            y.cloned().unwrap_or(Value::Null),
                        ))
                    }
                }
            }
            None
        }
        (Value::Array(a), Value::Array(b)) if a.len() == b.len() => a
            .iter()
            .zip(b)
            .enumerate()
            .find_map(|(i, (x, y))| first_difference(x, y, format!("{path}[{i}]"))),
        _ if left == right => None,
        _ => Some((path, left.clone(), right.clone())),
    }
}

#[cfg(test)]
mod roundtrip_tests {
    use super::*;

    #[test]
    fn test_competitions_round_trip() {
        assert_round_trip::<Page<Competition>>("competitions.json");
        assert_round_trip::<Competition>("competitions_17.json");
    }

    #[test]
    fn test_live_matches_round_trip() {
        assert_round_trip::<Page<LiveMatch>>("live_football_now.json");
    }

    #[test]
    fn test_calendar_matches_round_trip() {
        assert_round_trip::<Page<Match>>("calendar_matches.json");
    }

    #[test]
    fn test_timeline_round_trip() {
        assert_round_trip::<Timeline>("timelines_17_255711_285063_400128082.json");
    }

    #[test]
    fn test_player_round_trip() {
        assert_round_trip::<Player>("players_229397.json");
    }

    #[test]
    fn test_team_round_trip() {
        assert_round_trip::<Team>("teams_43921.json");
    }

    #[test]
    fn test_season_round_trip() {
        assert_round_trip::<Season>("seasons_255711.json");
    }

    #[test]
    fn test_standings_round_trip() {
        assert_round_trip::<Page<StandingsRow>>("calendar_17_255711_285063_standing.json");
    }

    #[test]
    fn test_unknown_codes_survive_the_round_trip() {
        let timeline: Timeline =
            serde_json::from_value(fixture_value("timelines_17_255711_285063_400128082.json"))
                .unwrap();
        let reencoded = serde_json::to_value(&timeline).unwrap();
        assert_eq!(reencoded["Event"][2]["Type"], 9999);

        let live: Page<LiveMatch> =
            serde_json::from_value(fixture_value("live_football_now.json")).unwrap();
        let reencoded = serde_json::to_value(&live).unwrap();
        assert_eq!(reencoded["Results"][0]["Officials"][1]["OfficialType"], 42);
    }
}
