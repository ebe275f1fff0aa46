use crate::domain::reducer::{apply, config_valid, MatchAction};
use crate::domain::state::{GameMode, Match, MatchPhase, Player, Settings, Team};
use crate::domain::test_state_helpers::{
    entry, entry_with, make_match, record, record_all, test_rng, MakeMatchArgs,
};
use crate::domain::validate::Prompt;

fn two_team_lineup() -> Vec<Team> {
    vec![
        Team::new(0, vec![Player::new(0, "ann")]),
        Team::new(1, vec![Player::new(1, "ben")]),
    ]
}

#[test]
fn create_match_starts_leg_zero() {
    let settings = Settings {
        starting_team: 1,
        ..Default::default()
    };
    let m = apply(
        &Match::empty(),
        MatchAction::CreateMatch {
            settings: settings.clone(),
            teams: two_team_lineup(),
        },
        &mut test_rng(),
    );

    assert_eq!(m.phase, MatchPhase::Running);
    assert!(m.scores.is_empty());
    assert_eq!(m.curr_leg_idx, 0);
    assert_eq!(m.curr_team_idx, 1);
    assert_eq!(m.winner, None);
    assert_eq!(m.settings, settings);
}

#[test]
fn create_match_resets_carried_team_state() {
    let mut teams = two_team_lineup();
    teams[0].wins = 2;
    teams[0].curr_player_idx = 1;

    let m = apply(
        &Match::empty(),
        MatchAction::CreateMatch {
            settings: Settings::default(),
            teams,
        },
        &mut test_rng(),
    );

    assert!(m.teams.iter().all(|t| t.wins == 0 && t.curr_player_idx == 0));
}

#[test]
fn create_match_with_bad_config_changes_nothing() {
    let prev = make_match(MakeMatchArgs::default());
    let bad = [
        Settings {
            starting_team: 9,
            ..Default::default()
        },
        Settings {
            number_of_legs: 0,
            ..Default::default()
        },
        Settings {
            starting_score: 0,
            ..Default::default()
        },
    ];
    for settings in bad {
        assert!(!config_valid(&settings, &two_team_lineup()));
        let next = apply(
            &prev,
            MatchAction::CreateMatch {
                settings,
                teams: two_team_lineup(),
            },
            &mut test_rng(),
        );
        assert_eq!(next, prev);
    }

    // No teams, and a team with an empty lineup.
    assert!(!config_valid(&Settings::default(), &[]));
    assert!(!config_valid(
        &Settings::default(),
        &[Team::new(0, Vec::new())]
    ));
}

#[test]
fn random_draw_is_written_back_to_settings() {
    let settings = Settings {
        random_starting_team: true,
        ..Default::default()
    };
    let teams = vec![
        Team::new(0, vec![Player::new(0, "a")]),
        Team::new(1, vec![Player::new(1, "b")]),
        Team::new(2, vec![Player::new(2, "c")]),
        Team::new(3, vec![Player::new(3, "d")]),
    ];

    let action = MatchAction::CreateMatch {
        settings,
        teams: teams.clone(),
    };
    let m = apply(&Match::empty(), action.clone(), &mut test_rng());

    assert!(m.settings.starting_team < teams.len());
    // The draw and the first thrower agree, so leg rotation stays aligned.
    assert_eq!(m.curr_team_idx, m.settings.starting_team);

    // Same seed, same draw.
    let again = apply(&Match::empty(), action, &mut test_rng());
    assert_eq!(again.settings.starting_team, m.settings.starting_team);
}

#[test]
fn record_appends_and_passes_the_turn() {
    let m = make_match(MakeMatchArgs::default());
    let m = record(&m, 60);

    assert_eq!(m.scores.len(), 1);
    let s = &m.scores[0];
    assert_eq!(s.id, 0);
    assert_eq!(s.team_id, 0);
    assert_eq!(s.leg, 0);
    assert_eq!(s.score, 60);
    assert_eq!(s.remaining, 441);
    assert_eq!(s.throws, 3);
    assert_eq!(s.checkout_attempts, 0);
    assert_eq!(m.curr_team_idx, 1);
    assert_eq!(m.phase, MatchPhase::Running);
}

#[test]
fn record_rotates_players_within_a_team() {
    let m = make_match(MakeMatchArgs {
        players_per_team: 2,
        ..Default::default()
    });
    // Team 0's first visit is by p0; its second must be by p1.
    let m = record_all(&m, &[26, 41, 85]);

    let team0: Vec<_> = m.team_scores(0).collect();
    assert_eq!(team0[0].player.name, "p0");
    assert_eq!(team0[1].player.name, "p1");
    assert_eq!(m.teams[0].curr_player_idx, 0);

    let team1: Vec<_> = m.team_scores(1).collect();
    assert_eq!(team1[0].player.name, "p2");
}

#[test]
fn leg_win_opens_the_next_leg_with_rotated_starter() {
    let m = make_match(MakeMatchArgs {
        starting_score: 40,
        ..Default::default()
    });
    let m = apply(
        &m,
        MatchAction::RecordScore(entry_with(&m, 40, 1, 2)),
        &mut test_rng(),
    );

    assert_eq!(m.teams[0].wins, 1);
    assert_eq!(m.curr_leg_idx, 1);
    // Leg 1 opens with the other team.
    assert_eq!(m.curr_team_idx, 1);
    assert_eq!(m.phase, MatchPhase::Running);
    assert_eq!(m.scores.last().map(|s| s.remaining), Some(0));
}

#[test]
fn winning_visit_ends_the_match_in_place() {
    let m = make_match(MakeMatchArgs {
        starting_score: 40,
        number_of_legs: 1,
        ..Default::default()
    });
    let m = record(&m, 40);

    assert_eq!(m.phase, MatchPhase::Over);
    assert_eq!(m.winner, Some(0));
    // The winning visit does not advance the leg.
    assert_eq!(m.curr_leg_idx, 0);
}

#[test]
fn best_of_three_ends_at_two_wins() {
    let m = make_match(MakeMatchArgs {
        starting_score: 40,
        game_mode: GameMode::BestOf,
        number_of_legs: 3,
        ..Default::default()
    });
    // Leg 0: team 0 checks out. Leg 1 opens with team 1, which checks out.
    // Leg 2 opens with team 0 again; its finish decides the match.
    let m = record_all(&m, &[40, 40, 40]);

    assert_eq!(m.teams[0].wins, 2);
    assert_eq!(m.teams[1].wins, 1);
    assert_eq!(m.phase, MatchPhase::Over);
    assert_eq!(m.winner, Some(0));
}

#[test]
fn winning_visit_still_rotates_the_thrower() {
    let m = make_match(MakeMatchArgs {
        starting_score: 40,
        number_of_legs: 1,
        players_per_team: 2,
        ..Default::default()
    });
    let m = record(&m, 40);

    assert_eq!(m.phase, MatchPhase::Over);
    assert_eq!(m.teams[0].curr_player_idx, 1);
}

#[test]
fn stale_entry_is_dropped() {
    let m = make_match(MakeMatchArgs {
        teams: 1,
        ..Default::default()
    });
    let stale = entry(&m, 60);
    let m = record(&m, 100);
    // Remainder moved from 501 to 401; the old entry no longer applies.
    let next = apply(&m, MatchAction::RecordScore(stale), &mut test_rng());
    assert_eq!(next, m);
}

#[test]
fn unanswered_prompt_is_dropped() {
    let m = make_match(MakeMatchArgs::default());
    let mut pending = entry(&m, 60);
    pending.prompt = Prompt::CheckoutDarts;
    let next = apply(&m, MatchAction::RecordScore(pending), &mut test_rng());
    assert_eq!(next, m);
}

#[test]
fn record_after_match_end_is_dropped() {
    let m = make_match(MakeMatchArgs {
        starting_score: 40,
        number_of_legs: 1,
        ..Default::default()
    });
    let m = record(&m, 40);
    assert_eq!(m.phase, MatchPhase::Over);

    let mut stale = entry_with(&m, 10, 0, 3);
    stale.remaining_before = 40;
    stale.remaining_after = 30;
    let next = apply(&m, MatchAction::RecordScore(stale), &mut test_rng());
    assert_eq!(next, m);
}

#[test]
fn set_active_team_switches_the_turn() {
    let m = make_match(MakeMatchArgs {
        teams: 3,
        ..Default::default()
    });
    let m = apply(&m, MatchAction::SetActiveTeam { team_idx: 2 }, &mut test_rng());
    assert_eq!(m.curr_team_idx, 2);

    // Out of range leaves the match alone.
    let next = apply(&m, MatchAction::SetActiveTeam { team_idx: 3 }, &mut test_rng());
    assert_eq!(next, m);
}

#[test]
fn set_active_player_targets_an_exact_team() {
    let m = make_match(MakeMatchArgs {
        players_per_team: 3,
        ..Default::default()
    });
    let m = apply(
        &m,
        MatchAction::SetActivePlayer {
            team_idx: 1,
            player_idx: 2,
        },
        &mut test_rng(),
    );
    assert_eq!(m.teams[1].curr_player_idx, 2);
    assert_eq!(m.teams[0].curr_player_idx, 0);

    let next = apply(
        &m,
        MatchAction::SetActivePlayer {
            team_idx: 0,
            player_idx: 3,
        },
        &mut test_rng(),
    );
    assert_eq!(next, m);
}

#[test]
fn turn_corrections_after_match_end_are_dropped() {
    let m = make_match(MakeMatchArgs {
        starting_score: 40,
        number_of_legs: 1,
        ..Default::default()
    });
    let m = record(&m, 40);

    let next = apply(&m, MatchAction::SetActiveTeam { team_idx: 1 }, &mut test_rng());
    assert_eq!(next, m);
    let next = apply(
        &m,
        MatchAction::SetActivePlayer {
            team_idx: 1,
            player_idx: 0,
        },
        &mut test_rng(),
    );
    assert_eq!(next, m);
}

#[test]
fn solo_501_runs_down_in_three_visits() {
    let m = make_match(MakeMatchArgs {
        teams: 1,
        number_of_legs: 1,
        ..Default::default()
    });
    let m = record_all(&m, &[180, 180, 141]);

    assert_eq!(m.phase, MatchPhase::Over);
    assert_eq!(m.winner, Some(0));
    let remainders: Vec<u16> = m.scores.iter().map(|s| s.remaining).collect();
    assert_eq!(remainders, vec![321, 141, 0]);
}
