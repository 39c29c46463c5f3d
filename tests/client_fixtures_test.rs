//! Endpoint tests served from the JSON fixtures in tests/testdata

mod common;

use common::fixture_client;
use fifa_api::{
    CoachRole, CompetitionsOptions, FifaError, Gender, Localized, MatchEvent, MatchKey,
    MatchesOptions, OfficialType, Period, StageKey,
};

#[cfg(test)]
mod endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_competitions_list_returns_the_single_record() {
        let (client, transport) = fixture_client();

        let page = client
            .get_competitions(&CompetitionsOptions::default())
            .await
            .unwrap();

        assert_eq!(page.results.len(), 1);
        let competition = &page.results[0];
        assert_eq!(competition.id, "17");
        assert_eq!(competition.name[0].description, "FIFA World Cup");
        assert_eq!(competition.gender, Gender::Male);
        assert!(!page.has_more());
        assert_eq!(transport.calls(), 1);
        assert_eq!(
            transport.last_url().as_deref(),
            Some("http://fixtures.test/competitions")
        );
    }

    #[tokio::test]
    async fn test_competitions_paging_options_reach_the_url() {
        let (client, transport) = fixture_client();
        let options = CompetitionsOptions {
            count: Some(0),
            continuation_token: Some("abc".to_string()),
        };

        client.get_competitions(&options).await.unwrap();

        assert_eq!(
            transport.last_url().as_deref(),
            Some("http://fixtures.test/competitions?continuationToken=abc&count=0")
        );
    }

    #[tokio::test]
    async fn test_single_competition() {
        let (client, _) = fixture_client();

        let competition = client.get_competition("17").await.unwrap();

        assert_eq!(competition.id, "17");
        assert_eq!(
            competition.name.for_locale("es-es"),
            Some("Copa Mundial de la FIFA")
        );
        assert_eq!(competition.confederation_ids, vec!["FIFA".to_string()]);
        assert_eq!(competition.properties["IdIFES"], "17");
        assert_eq!(competition.is_updateable, Some(false));
    }

    #[tokio::test]
    async fn test_current_matches() {
        let (client, _) = fixture_client();

        let page = client.get_current_matches().await.unwrap();
        let live = &page.results[0];

        assert_eq!(live.id, "400128082");
        assert_eq!(live.period, Period::SecondHalf);
        assert_eq!(live.home_team.abbreviation.as_deref(), Some("QAT"));
        assert_eq!(live.away_team.score, Some(2));
        assert_eq!(live.away_team.goals[0].player_id, "398707");
        assert_eq!(live.away_team.coaches[1].role, CoachRole::AssistantManager);
        assert_eq!(
            live.stadium.as_ref().and_then(|stadium| stadium.capacity),
            Some(60000)
        );
        assert_eq!(live.officials[0].kind, OfficialType::Referee);
        assert_eq!(live.officials[1].kind, OfficialType::Unknown(42));
        assert_eq!(
            live.match_key(),
            MatchKey::new("17", "255711", "285063", "400128082")
        );
    }

    #[tokio::test]
    async fn test_calendar_matches_keep_undecided_fixtures() {
        let (client, transport) = fixture_client();
        let options = MatchesOptions {
            competition_id: Some("17".to_string()),
            season_id: Some("255711".to_string()),
            ..Default::default()
        };

        let page = client.get_matches(&options).await.unwrap();

        assert_eq!(
            transport.last_url().as_deref(),
            Some("http://fixtures.test/calendar/matches?idCompetition=17&idSeason=255711")
        );
        assert_eq!(page.next_token(), Some("eyJrIjoiNDAwMTI4MTQ1In0"));
        assert_eq!(page.results.len(), 2);

        let played = &page.results[0];
        assert_eq!(
            played.stadium.as_ref().and_then(|s| s.capacity.as_deref()),
            Some("60000")
        );
        assert_eq!(played.home_team_score, Some(0));

        let pending = &page.results[1];
        assert!(pending.home.is_none());
        assert!(pending.away.is_none());
        assert_eq!(pending.local_date, None);
        assert_eq!(pending.placeholder_a.as_deref(), Some("W61"));
    }

    #[tokio::test]
    async fn test_todays_and_upcoming_matches_send_a_window() {
        let (client, transport) = fixture_client();

        client.get_todays_matches().await.unwrap();
        let today_url = transport.last_url().unwrap();
        assert!(today_url.contains("from="));
        assert!(today_url.contains("&to="));

        client.get_upcoming_matches(Some(5)).await.unwrap();
        let upcoming_url = transport.last_url().unwrap();
        assert!(upcoming_url.contains("from="));
        assert!(upcoming_url.contains("T00%3A00%3A00Z"));
        assert!(upcoming_url.contains("?count=5&from="));
        assert!(!upcoming_url.contains("&to="));
    }

    #[tokio::test]
    async fn test_team_matches_sets_the_team_filter() {
        let (client, transport) = fixture_client();
        let options = MatchesOptions {
            team_id: Some("ignored".to_string()),
            count: Some(10),
            ..Default::default()
        };

        client.get_team_matches("43921", &options).await.unwrap();

        assert_eq!(
            transport.last_url().as_deref(),
            Some("http://fixtures.test/calendar/matches?count=10&idTeam=43921")
        );
    }

    #[tokio::test]
    async fn test_match_timeline() {
        let (client, _) = fixture_client();
        let key = MatchKey::new("17", "255711", "285063", "400128082");

        let timeline = client.get_match_timeline(&key).await.unwrap();

        assert_eq!(timeline.match_id, "400128082");
        assert_eq!(timeline.events.len(), 3);

        let coin_toss = &timeline.events[0];
        assert_eq!(coin_toss.kind, MatchEvent::CoinToss);
        assert_eq!(coin_toss.position_x, None);

        let goal = &timeline.events[1];
        assert_eq!(goal.kind, MatchEvent::GoalScored);
        assert_eq!(goal.period, Period::FirstHalf);
        assert_eq!(goal.goal_gate_position_x, Some(0.52));
        assert_eq!(goal.var_notification.map(|var| var.status), Some(2));

        let pending = &timeline.events[2];
        assert_eq!(pending.kind, MatchEvent::Unknown(9999));
        assert!(pending.kind.is_pending());
        assert!(!pending.kind.is_known());
    }

    #[tokio::test]
    async fn test_player() {
        let (client, _) = fixture_client();

        let player = client.get_player("229397").await.unwrap();

        assert_eq!(player.name.first_text(), Some("Lionel MESSI"));
        assert_eq!(player.height, Some(170));
        assert_eq!(
            player.birth_date.map(|date| date.to_rfc3339()),
            Some("1987-06-24T00:00:00+00:00".to_string())
        );
    }

    #[tokio::test]
    async fn test_team() {
        let (client, _) = fixture_client();

        let team = client.get_team("43921").await.unwrap();

        assert_eq!(team.abbreviation.as_deref(), Some("ARG"));
        assert_eq!(team.foundation_year, Some(1893));
        assert_eq!(team.official_site, "https://www.afa.com.ar");
        assert!(team.content.is_none());
    }

    #[tokio::test]
    async fn test_season() {
        let (client, _) = fixture_client();

        let season = client.get_season("255711").await.unwrap();

        assert_eq!(season.short_name.first_text(), Some("Qatar 2022"));
        assert_eq!(season.host_teams[0].team_id, "43834");
        assert!(season.start_date < season.end_date);
    }

    #[tokio::test]
    async fn test_season_standings() {
        let (client, _) = fixture_client();
        let key = StageKey::new("17", "255711", "285063");

        let page = client.get_season_standings(&key).await.unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].team.abbreviation.as_deref(), Some("NED"));
        assert_eq!(page.results[0].points, 7);
        assert_eq!(page.results[1].goal_difference, -6);
    }

    #[tokio::test]
    async fn test_missing_fixture_is_a_transport_error() {
        let (client, transport) = fixture_client();

        let result = client.get_player("does-not-exist").await;

        assert!(matches!(result, Err(FifaError::Transport(_))));
        assert_eq!(transport.calls(), 1);
    }
}

#[cfg(test)]
mod missing_parameter_tests {
    use super::*;

    fn assert_missing(result: Result<impl std::fmt::Debug, FifaError>, expected: &str) {
        match result {
            Err(FifaError::MissingParameter { parameter }) => assert_eq!(parameter, expected),
            other => panic!("expected MissingParameter({expected}), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_ids_never_reach_the_transport() {
        let (client, transport) = fixture_client();

        assert_missing(client.get_competition("").await, "competition_id");
        assert_missing(client.get_player("").await, "player_id");
        assert_missing(client.get_team("").await, "team_id");
        assert_missing(client.get_season("").await, "season_id");
        assert_missing(
            client
                .get_team_matches("", &MatchesOptions::default())
                .await,
            "team_id",
        );

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_each_timeline_key_part_is_required() {
        let (client, transport) = fixture_client();

        let cases = [
            (MatchKey::new("", "255711", "285063", "400128082"), "competition_id"),
            (MatchKey::new("17", "", "285063", "400128082"), "season_id"),
            (MatchKey::new("17", "255711", "", "400128082"), "stage_id"),
            (MatchKey::new("17", "255711", "285063", ""), "match_id"),
        ];
        for (key, expected) in cases {
            assert_missing(client.get_match_timeline(&key).await, expected);
        }

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_each_standings_key_part_is_required() {
        let (client, transport) = fixture_client();

        let cases = [
            (StageKey::new("", "255711", "285063"), "competition_id"),
            (StageKey::new("17", "", "285063"), "season_id"),
            (StageKey::new("17", "255711", ""), "stage_id"),
        ];
        for (key, expected) in cases {
            assert_missing(client.get_season_standings(&key).await, expected);
        }

        assert_eq!(transport.calls(), 0);
    }
}
