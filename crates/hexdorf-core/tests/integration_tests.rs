//! Integration tests for the Hexdorf game engine.
//!
//! These tests verify complete game flows: sessions wrapping scripted
//! games, seeded random games played to queue depletion, and the JSON and
//! text views of a played board.

use hexdorf_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

/// First open cell touching the board, scanning in coordinate order so a
/// given board always yields the same choice
fn frontier_placement(game: &Game) -> Option<HexCoordinate> {
    let mut candidates: Vec<HexCoordinate> = game
        .board
        .get_all()
        .iter()
        .flat_map(|board_tile| {
            board_tile
                .coordinate
                .neighbors()
                .into_iter()
                .map(|(_, coord)| coord)
        })
        .filter(|coord| game.is_valid_placement(coord))
        .collect();
    candidates.sort_by_key(|coord| (coord.q, coord.r));
    candidates.dedup();
    candidates.into_iter().next()
}

/// The three scripted tiles of the mini game: the second matches the first
/// across the south border, the third matches both diagonal neighbors
fn mini_game_tiles() -> VecDeque<Tile> {
    let tile1 = Tile::new(
        "tile-1",
        TileEdges {
            north: Terrain::Tree,
            north_east: Terrain::Tree,
            south_east: Terrain::Tree,
            south: Terrain::Pasture,
            south_west: Terrain::Pasture,
            north_west: Terrain::Pasture,
        },
    );

    let mut second_edges = TileEdges::uniform(Terrain::Pasture);
    second_edges.south = Terrain::Tree;
    let tile2 = Tile::new("tile-2", second_edges);

    let mut third_edges = TileEdges::uniform(Terrain::Pasture);
    third_edges.north_west = Terrain::Tree;
    let tile3 = Tile::new("tile-3", third_edges);

    VecDeque::from(vec![tile1, tile2, tile3])
}

#[test]
fn test_mini_game_session() {
    let user = User::new("player-1").unwrap();
    let mut session = Session::new("session-1", user);

    session.start_new_game(Game::new(
        Board::new(),
        GameRules::default(),
        mini_game_tiles(),
    ));

    let game = session.active_game.as_mut().unwrap();
    assert_eq!(game.remaining_turns(), 3);
    assert_eq!(game.score, 0);

    // First tile opens the board, nothing to match
    let result = game.place_tile(HexCoordinate::ORIGIN).unwrap();
    assert_eq!(result.score_added, 0);
    assert_eq!(game.remaining_turns(), 2);

    // Second tile south of the origin: its north edge meets the first
    // tile's south edge, pasture on pasture
    let result = game.place_tile(HexCoordinate::from_axial(1, 0)).unwrap();
    assert_eq!(result.score_added, 10);
    assert_eq!(game.score, 10);

    // Third tile south-east of the origin touches both placed tiles and
    // matches each facing edge
    let result = game.place_tile(HexCoordinate::from_axial(0, 1)).unwrap();
    assert_eq!(result.score_added, 20);
    assert_eq!(game.score, 30);
    assert_eq!(game.remaining_turns(), 0);

    let placed = game.board.get(&HexCoordinate::from_axial(0, 1)).unwrap();
    assert_eq!(placed.tile.id, "tile-3");

    session.end_active_game().unwrap();
    assert!(session.active_game.is_none());
    assert_eq!(session.games.len(), 1);
    assert_eq!(session.games[0].score, 30);
}

#[test]
fn test_standard_game_simulation() {
    // Play seeded games to depletion and verify the score and board
    // bookkeeping stays consistent throughout
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::standard_with_rng(&mut rng);

        let mut placements = 0;
        let mut expected_score = 0;
        let max_iterations = 500;

        while game.remaining_turns() > 0 && placements < max_iterations {
            let coordinate = frontier_placement(&game)
                .expect("a board with tiles always has an open frontier");
            let result = game
                .place_tile_with_rng(coordinate, &mut rng)
                .expect("frontier cells are vacant");
            expected_score += result.score_added;
            placements += 1;
        }

        assert!(
            placements < max_iterations,
            "game {} should deplete its queue",
            seed
        );
        assert!(
            placements >= 30,
            "game {} should place at least the initial queue",
            seed
        );
        assert_eq!(
            game.score, expected_score,
            "game {} score should equal the sum of placement results",
            seed
        );
        assert_eq!(
            game.board.len(),
            1 + placements,
            "game {} board should hold the start tile plus every placement",
            seed
        );
        assert_eq!(game.remaining_turns(), 0, "game {} queue should be empty", seed);
    }
}

#[test]
fn test_identical_seeds_play_identical_games() {
    let play = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::standard_with_rng(&mut rng);
        let mut placements = 0;
        while game.remaining_turns() > 0 && placements < 500 {
            let coordinate = frontier_placement(&game).unwrap();
            game.place_tile_with_rng(coordinate, &mut rng).unwrap();
            placements += 1;
        }
        game
    };

    let a = play(13);
    let b = play(13);

    assert_eq!(a.score, b.score);
    assert_eq!(a.board, b.board);
    assert_eq!(a.tile_queue, b.tile_queue);
}

#[test]
fn test_queue_depletes_and_stays_depleted() {
    let mut rng = StdRng::seed_from_u64(11);
    let rules = GameRules {
        initial_turns: 5,
        ..GameRules::standard()
    };
    let mut game = Game::create_with_rng(rules, &mut rng);

    let mut placements = 0;
    while game.remaining_turns() > 0 && placements < 100 {
        let coordinate = frontier_placement(&game).unwrap();
        game.place_tile_with_rng(coordinate, &mut rng).unwrap();
        placements += 1;
    }

    let open_cell = frontier_placement(&game).expect("the board still has open frontier cells");
    let err = game.place_tile_with_rng(open_cell, &mut rng).unwrap_err();
    assert!(matches!(err, GameError::EmptyQueue));
    assert_eq!(game.remaining_turns(), 0);
}

#[test]
fn test_game_snapshot_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = Game::standard_with_rng(&mut rng);
    let coordinate = frontier_placement(&game).unwrap();
    game.place_tile_with_rng(coordinate, &mut rng).unwrap();

    let json = serde_json::to_string(&game.to_json_friendly()).unwrap();
    let snapshot: GameJson = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot.score, game.score);
    assert_eq!(snapshot.remaining_turns, game.remaining_turns());
    assert_eq!(snapshot.rules, game.rules);
    assert_eq!(snapshot.board.tiles.len(), game.board.len());
    assert_eq!(snapshot.tile_queue.len(), game.tile_queue.len());
}

#[test]
fn test_render_played_board() {
    let mut game = Game::new(Board::new(), GameRules::default(), mini_game_tiles());
    game.place_tile(HexCoordinate::ORIGIN).unwrap();
    game.place_tile(HexCoordinate::from_axial(1, 0)).unwrap();
    game.place_tile(HexCoordinate::from_axial(0, 1)).unwrap();

    let output = render_board(&game.board).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    // Two glyph rows stacked vertically, one offset to the south-east
    assert_eq!(lines.len(), 9);
    assert!(
        lines.iter().all(|line| line.len() == 16),
        "every canvas row should span the full width"
    );
    assert!(output.contains('T'));
    assert!(output.contains('P'));
}

#[test]
fn test_board_coordinates_survive_pixel_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = Game::standard_with_rng(&mut rng);
    for _ in 0..10 {
        let coordinate = frontier_placement(&game).unwrap();
        game.place_tile_with_rng(coordinate, &mut rng).unwrap();
    }

    for board_tile in game.board.get_all() {
        let (x, y) = board_tile.coordinate.to_pixel(DEFAULT_HEX_SIZE);
        assert_eq!(
            HexCoordinate::from_pixel(x, y, DEFAULT_HEX_SIZE),
            board_tile.coordinate
        );
    }
}

#[test]
fn test_session_tracks_multiple_games() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut session = Session::new("session-9", User::new("player-9").unwrap());

    session.start_new_game(Game::standard_with_rng(&mut rng));
    session.end_active_game().unwrap();

    session.start_new_game(Game::standard_with_rng(&mut rng));
    // Starting another game archives the one still running
    session.start_new_game(Game::standard_with_rng(&mut rng));

    assert_eq!(session.games.len(), 2);
    assert!(session.active_game.is_some());
}
