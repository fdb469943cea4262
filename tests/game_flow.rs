use clusterchess::coords::Coord;
use clusterchess::env::GameEnv;
use clusterchess::game::{GameAction, GameConfig, GamePhase, Roster};
use clusterchess::types::PieceKind::{self, *};

fn kings_only_env() -> GameEnv {
    GameEnv::new(GameConfig {
        roster: Roster::king_only(),
    })
}

fn deploy(env: &mut GameEnv, kind: PieceKind, x: i32, y: i32) {
    let player = env.current_player();
    let snapshot = env.apply(GameAction::select_roster_piece(player, kind));
    assert!(
        snapshot.selection.is_some(),
        "selecting {kind} failed: {}",
        snapshot.status
    );
    let before = snapshot.board.len();
    let snapshot = env.apply(GameAction::place_piece(player, Coord::new(x, y)));
    assert_eq!(
        snapshot.board.len(),
        before + 1,
        "placing {kind} at ({x}, {y}) failed: {}",
        snapshot.status
    );
}

#[test]
fn mutually_detached_kings_placement_is_rejected() {
    let mut env = kings_only_env();
    deploy(&mut env, King, 0, 0);

    env.apply(GameAction::select_roster_piece(1, King));
    let snapshot = env.apply(GameAction::place_piece(1, Coord::new(3, 3)));
    assert_eq!(
        snapshot.status,
        "Placement must be adjacent to existing pieces."
    );
    assert_eq!(snapshot.phase, GamePhase::Deployment);
    assert_eq!(snapshot.board.len(), 1);
    assert_eq!(snapshot.players[1].roster, vec![(King, 1)]);

    // An adjacent cell works, and flips the game into gameplay.
    env.apply(GameAction::select_roster_piece(1, King));
    let snapshot = env.apply(GameAction::place_piece(1, Coord::new(1, 1)));
    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert_eq!(snapshot.status, "Red's Turn");
}

#[test]
fn king_capture_ends_the_match_with_a_winner() {
    let mut env = kings_only_env();
    deploy(&mut env, King, 0, 0);
    deploy(&mut env, King, 1, 0);

    env.apply(GameAction::touch_cell(0, Coord::new(0, 0)));
    let snapshot = env.apply(GameAction::touch_cell(0, Coord::new(1, 0)));
    assert_eq!(snapshot.phase, GamePhase::Completed { winner: Some(0) });
    assert_eq!(snapshot.status, "Red Wins! Happy Birthday!");
    assert_eq!(snapshot.board.len(), 1);
    assert_eq!(snapshot.board[0].kind, King);
    assert_eq!(snapshot.board[0].owner, 0);
}

#[test]
fn full_standard_deployment_alternates_strictly_and_then_plays() {
    let mut env = GameEnv::new(GameConfig::default());
    let order = [Queen, Rook, Rook, Bishop, Bishop, Knight, Knight, Pawn, Pawn, King];

    for (i, &kind) in order.iter().enumerate() {
        let x = (i % 5) as i32;
        let y = (i / 5) as i32;
        assert_eq!(env.current_player(), 0, "red must open pair {i}");
        deploy(&mut env, kind, x, y);
        assert_eq!(env.current_player(), 1, "blue must answer pair {i}");
        deploy(&mut env, kind, x, -1 - y);
    }

    let snapshot = env.snapshot();
    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert_eq!(snapshot.board.len(), 20);
    assert_eq!(env.current_player(), 0);
    for player in &snapshot.players {
        assert!(player.roster.is_empty());
    }
}

#[test]
fn slider_passes_through_friends_and_captures_across_the_border() {
    let mut env = GameEnv::new(GameConfig {
        roster: Roster::from_counts([1, 0, 0, 0, 1, 1]),
    });
    // Red column x=0, blue column x=1; the red queen at the bottom looks
    // north through her own pawn, and diagonally at the blue queen.
    deploy(&mut env, Queen, 0, 0);
    deploy(&mut env, Pawn, 1, 0);
    deploy(&mut env, Pawn, 0, 1);
    deploy(&mut env, Queen, 1, 1);
    deploy(&mut env, King, 0, 2);
    deploy(&mut env, King, 1, 2);
    assert_eq!(env.snapshot().phase, GamePhase::Playing);

    let snapshot = env.apply(GameAction::touch_cell(0, Coord::new(0, 0)));
    let highlights = &snapshot.legal_destinations;
    assert!(
        !highlights.contains(&Coord::new(0, 1)),
        "own pawn is not a landing square"
    );
    assert!(
        !highlights.contains(&Coord::new(0, 2)),
        "own king is not a landing square"
    );
    assert!(
        highlights.contains(&Coord::new(0, 3)),
        "ray continues past friendly pieces"
    );
    assert!(
        highlights.contains(&Coord::new(1, 1)),
        "diagonal ray captures the blue queen"
    );
    assert!(
        !highlights.contains(&Coord::new(2, 2)),
        "enemy piece blocks the ray beyond it"
    );

    // Take the blue queen; the cluster stays in one piece.
    let snapshot = env.apply(GameAction::touch_cell(0, Coord::new(1, 1)));
    assert_eq!(snapshot.status, "Blue's Turn");
    assert_eq!(snapshot.board.len(), 5);
}

#[test]
fn disconnecting_move_leaves_occupancy_unchanged() {
    let mut env = GameEnv::new(GameConfig {
        roster: Roster::from_counts([0, 1, 0, 0, 0, 1]),
    });
    deploy(&mut env, Rook, 0, 0);
    deploy(&mut env, Rook, 1, 0);
    deploy(&mut env, King, 0, 1);
    deploy(&mut env, King, 1, 1);

    let before = env.snapshot().board;

    // Sliding the red rook far west is rule-legal but severs it.
    env.apply(GameAction::touch_cell(0, Coord::new(0, 0)));
    let snapshot = env.apply(GameAction::touch_cell(0, Coord::new(-5, 0)));
    assert_eq!(snapshot.status, "Invalid Move: Breaks board continuity.");
    assert_eq!(snapshot.board, before);
    assert_eq!(snapshot.current_player, 0);
    assert!(snapshot.selection.is_none());
}

#[test]
fn deployment_status_prompts_each_side_in_turn() {
    let mut env = kings_only_env();
    assert_eq!(env.snapshot().status, "Red, place a piece.");
    env.apply(GameAction::select_roster_piece(0, King));
    let snapshot = env.apply(GameAction::place_piece(0, Coord::new(0, 0)));
    assert_eq!(snapshot.status, "Blue, place a piece.");
}
