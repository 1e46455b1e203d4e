//! Unit tests for the score service operations.

use logslice::auth::{AuthProvider, SessionAuthProvider};
use logslice::engine::GameOutcome;
use logslice::scores::service::{ScoreService, ScoreServiceError};
use logslice::scores::BOARD_LIMIT;
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
fn test_my_scores_empty_for_unauthenticated() {
    let service = service();
    let auth = SessionAuthProvider::new();

    let scores = service.my_scores(&auth).unwrap();
    assert!(scores.is_empty());
}

#[test]
fn test_my_stats_none_for_unauthenticated() {
    let service = service();
    let auth = SessionAuthProvider::new();

    assert!(service.my_stats(&auth).unwrap().is_none());
}

#[test]
fn test_my_stats_none_before_first_submission() {
    let service = service();
    let auth = signed_in("ada@example.com");

    assert!(service.my_stats(&auth).unwrap().is_none());
}

#[test]
fn test_submit_requires_authentication() {
    let mut service = service();
    let auth = SessionAuthProvider::new();

    let result = service.submit(&auth, &GameOutcome::new(10, 1, 1));
    assert!(matches!(result, Err(ScoreServiceError::NotAuthenticated)));
}

#[test]
fn test_my_scores_caps_at_board_limit() {
    let mut service = service();
    let auth = signed_in("ada@example.com");

    for i in 0..(BOARD_LIMIT as u32 + 2) {
        service.submit(&auth, &GameOutcome::new(i, i, 1)).unwrap();
    }

    let scores = service.my_scores(&auth).unwrap();
    assert_eq!(scores.len(), BOARD_LIMIT);
    // Newest first: timestamps never increase down the list.
    for pair in scores.windows(2) {
        assert!(pair[0].played_at >= pair[1].played_at);
    }
}

#[test]
fn test_my_scores_are_private_to_the_caller() {
    let mut service = service();
    let ada = signed_in("ada@example.com");
    let bob = signed_in("bob@example.com");

    service.submit(&ada, &GameOutcome::new(50, 5, 2)).unwrap();
    service.submit(&bob, &GameOutcome::new(70, 7, 3)).unwrap();

    let scores = service.my_scores(&ada).unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].user_id, ada.identity().unwrap().user_id);
}

#[test]
fn test_leaderboard_caps_at_board_limit() {
    let mut service = service();

    for i in 0..(BOARD_LIMIT as u32 + 2) {
        let auth = signed_in(&format!("player{}@example.com", i));
        service.submit(&auth, &GameOutcome::new(i * 10, i, 1)).unwrap();
    }

    let board = service.leaderboard().unwrap();
    assert_eq!(board.len(), BOARD_LIMIT);
}

#[test]
fn test_leaderboard_sorted_by_high_score_desc() {
    let mut service = service();

    for score in [30u32, 90, 60] {
        let auth = signed_in(&format!("p{}@example.com", score));
        service.submit(&auth, &GameOutcome::new(score, 1, 1)).unwrap();
    }

    let board = service.leaderboard().unwrap();
    let scores: Vec<u32> = board.iter().map(|row| row.high_score).collect();
    assert_eq!(scores, vec![90, 60, 30]);
}

#[test]
fn test_display_name_stored_on_row() {
    let mut service = service();
    let auth = signed_in("ada@example.com");

    service.submit(&auth, &GameOutcome::new(10, 1, 1)).unwrap();

    let stats = service.my_stats(&auth).unwrap().unwrap();
    assert_eq!(stats.display_name, "ada");
}
