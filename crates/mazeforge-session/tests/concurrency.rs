//! Integration tests for the session store under concurrent requests.

use std::sync::Arc;

use mazeforge_maze::{Maze, linear_chain};
use mazeforge_protocol::Effect;
use mazeforge_session::{SessionError, SessionStore};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Start --North--> Goal --South--> Start.
fn two_room_maze(seed: u64) -> Maze {
    linear_chain(&mut StdRng::seed_from_u64(seed), 2, "1").expect("valid chain")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_moves_on_one_token_stay_consistent() {
    // Half the tasks try North, half try South. Only one of the two can
    // succeed from any room, so if every move is serialized the successes
    // must alternate: North, South, North, ...
    let store = Arc::new(SessionStore::new());
    let token = store.create(two_room_maze(1)).await;

    let mut handles = Vec::new();
    for i in 0..200 {
        let store = Arc::clone(&store);
        let token = token.clone();
        let direction = if i % 2 == 0 { "North" } else { "South" };
        handles.push(tokio::spawn(async move {
            (direction, store.move_player(&token, direction).await)
        }));
    }

    let mut north_ok = 0;
    let mut south_ok = 0;
    for handle in handles {
        let (direction, result) = handle.await.expect("task panicked");
        match result {
            Ok(_) if direction == "North" => north_ok += 1,
            Ok(_) => south_ok += 1,
            Err(SessionError::InvalidMove { .. }) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    let current = store.current_room(&token).await.unwrap();
    match current.effect {
        Some(Effect::Victory) => assert_eq!(north_ok, south_ok + 1),
        Some(Effect::Start) => assert_eq!(north_ok, south_ok),
        None => panic!("two-room maze has no plain rooms"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_sessions_do_not_interfere() {
    let store = Arc::new(SessionStore::new());

    let mut handles = Vec::new();
    for seed in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let token = store.create(two_room_maze(seed)).await;
            // Even seeds walk to the goal; odd seeds stay home.
            if seed % 2 == 0 {
                store.move_player(&token, "north").await.unwrap();
            }
            (seed, token)
        }));
    }

    let mut tokens = Vec::new();
    for handle in handles {
        tokens.push(handle.await.expect("task panicked"));
    }

    assert_eq!(store.len().await, 32);
    for (seed, token) in tokens {
        let room = store.current_room(&token).await.unwrap();
        let expected = if seed % 2 == 0 {
            Effect::Victory
        } else {
            Effect::Start
        };
        assert_eq!(room.effect, Some(expected), "seed {seed}");
    }
}
