//! End-to-end score submission scenarios.

use logslice::auth::{AuthProvider, SessionAuthProvider};
use logslice::engine::GameOutcome;
use logslice::scores::service::{ScoreService, ScoreServiceError};
use logslice::storage::database::Database;

fn service() -> ScoreService {
    ScoreService::new(Database::open_in_memory().expect("in-memory database"))
}

fn signed_in(account: &str) -> SessionAuthProvider {
    let mut auth = SessionAuthProvider::new();
    auth.sign_in(account, None);
    auth
}

#[test]
fn test_first_submission_seeds_leaderboard_row() {
    let mut service = service();
    let auth = signed_in("ada@example.com");

    service.submit(&auth, &GameOutcome::new(100, 20, 5)).unwrap();

    let row = service.my_stats(&auth).unwrap().expect("row created");
    assert_eq!(row.high_score, 100);
    assert_eq!(row.total_logs_sliced, 20);
    assert_eq!(row.games_played, 1);
}

#[test]
fn test_two_submissions_aggregate() {
    let mut service = service();
    let auth = signed_in("ada@example.com");

    service.submit(&auth, &GameOutcome::new(100, 20, 5)).unwrap();
    service.submit(&auth, &GameOutcome::new(80, 15, 3)).unwrap();

    let row = service.my_stats(&auth).unwrap().unwrap();
    assert_eq!(row.high_score, 100);
    assert_eq!(row.total_logs_sliced, 35);
    assert_eq!(row.games_played, 2);
}

#[test]
fn test_aggregates_match_history_over_many_runs() {
    let mut service = service();
    let auth = signed_in("ada@example.com");

    let outcomes = [
        GameOutcome::new(40, 8, 2),
        GameOutcome::new(250, 31, 9),
        GameOutcome::new(0, 0, 0),
        GameOutcome::new(130, 17, 4),
        GameOutcome::new(250, 12, 6),
    ];
    for outcome in &outcomes {
        service.submit(&auth, outcome).unwrap();
    }

    let row = service.my_stats(&auth).unwrap().unwrap();
    let max: u32 = outcomes.iter().map(|o| o.score).max().unwrap();
    let total: u64 = outcomes.iter().map(|o| o.logs_sliced as u64).sum();
    assert_eq!(row.high_score, max);
    assert_eq!(row.total_logs_sliced, total);
    assert_eq!(row.games_played, outcomes.len() as u32);
}

#[test]
fn test_unauthenticated_submission_writes_nothing() {
    let mut service = service();
    let unauth = SessionAuthProvider::new();

    let result = service.submit(&unauth, &GameOutcome::new(999, 99, 9));
    assert!(matches!(result, Err(ScoreServiceError::NotAuthenticated)));

    assert!(service.leaderboard().unwrap().is_empty());
}

#[test]
fn test_sign_out_hides_personal_data_but_not_board() {
    let mut service = service();
    let mut auth = signed_in("ada@example.com");

    service.submit(&auth, &GameOutcome::new(100, 20, 5)).unwrap();
    auth.sign_out();

    assert!(service.my_scores(&auth).unwrap().is_empty());
    assert!(service.my_stats(&auth).unwrap().is_none());
    assert_eq!(service.leaderboard().unwrap().len(), 1);
}

#[test]
fn test_leaderboard_ranks_across_players() {
    let mut service = service();

    let ada = signed_in("ada@example.com");
    let bob = signed_in("bob@example.com");
    let eve = signed_in("eve@example.com");

    service.submit(&ada, &GameOutcome::new(100, 20, 5)).unwrap();
    service.submit(&bob, &GameOutcome::new(300, 40, 8)).unwrap();
    service.submit(&eve, &GameOutcome::new(200, 30, 6)).unwrap();
    // Ada improves but stays below Bob.
    service.submit(&ada, &GameOutcome::new(250, 25, 7)).unwrap();

    let board = service.leaderboard().unwrap();
    let names: Vec<&str> = board.iter().map(|row| row.display_name.as_str()).collect();
    assert_eq!(names, vec!["bob", "ada", "eve"]);
    assert_eq!(board[1].high_score, 250);
    assert_eq!(board[1].games_played, 2);
    assert_eq!(board[2].high_score, 200);
}

#[test]
fn test_scores_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logslice.db");
    let auth = signed_in("ada@example.com");

    {
        let mut service = ScoreService::new(Database::open(&path).unwrap());
        service.submit(&auth, &GameOutcome::new(100, 20, 5)).unwrap();
    }

    let service = ScoreService::new(Database::open(&path).unwrap());
    let row = service.my_stats(&auth).unwrap().unwrap();
    assert_eq!(row.high_score, 100);
    assert_eq!(row.games_played, 1);
    assert_eq!(service.my_scores(&auth).unwrap().len(), 1);
}
