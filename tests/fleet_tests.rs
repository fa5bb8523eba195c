use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::fleet::{random_board, random_ship, try_fleet};
use seabattle::{Board, BoardError, GameConfig, BOARD_SIZE, FLEET, NUM_SHIPS};

fn touching(board: &Board) -> bool {
    let ships = board.ships();
    ships.iter().enumerate().any(|(i, a)| {
        ships[i + 1..].iter().any(|b| {
            a.cells().any(|p| {
                b.cells().any(|q| (p.row - q.row).abs() <= 1 && (p.col - q.col).abs() <= 1)
            })
        })
    })
}

#[test]
fn test_try_fleet_gives_up_when_budget_runs_out() {
    let mut rng = SmallRng::seed_from_u64(5);
    // one draw per ship is never enough for the whole fleet
    for _ in 0..20 {
        let board = try_fleet(&mut rng, BOARD_SIZE, &FLEET, NUM_SHIPS - 1).unwrap();
        assert!(board.is_none());
    }
    assert!(try_fleet(&mut rng, BOARD_SIZE, &FLEET, 0).unwrap().is_none());
}

#[test]
fn test_try_fleet_with_room_to_spare() {
    let mut rng = SmallRng::seed_from_u64(5);
    let board = try_fleet(&mut rng, BOARD_SIZE, &[1, 1], 50)
        .unwrap()
        .unwrap();
    assert_eq!(board.ships().len(), 2);
    assert!(!touching(&board));
    // still open: the caller decides when play begins
    assert!(board.busy().count() > 0);
}

#[test]
fn test_random_board_restarts_on_tight_budget() {
    let config = GameConfig {
        placement_attempts: NUM_SHIPS,
        ..GameConfig::default()
    };
    for seed in 0..5 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, &config).unwrap();
        let lengths: Vec<_> = board.ships().iter().map(|s| s.length()).collect();
        assert_eq!(lengths, FLEET.to_vec());
        assert!(!touching(&board));
        assert_eq!(board.busy().count(), 0);
    }
}

#[test]
fn test_random_board_rejects_bad_config() {
    let mut rng = SmallRng::seed_from_u64(0);
    let config = GameConfig {
        placement_attempts: 3,
        ..GameConfig::default()
    };
    assert_eq!(
        random_board(&mut rng, &config).unwrap_err(),
        BoardError::InvalidBudget(3)
    );
    let config = GameConfig {
        board_size: 12,
        ..GameConfig::default()
    };
    assert_eq!(
        random_board(&mut rng, &config).unwrap_err(),
        BoardError::InvalidSize(12)
    );
}

#[test]
fn test_random_ship_stays_anchored_on_board() {
    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..200 {
        let ship = random_ship(&mut rng, BOARD_SIZE, 2).unwrap();
        let anchor = ship.anchor();
        assert!((0..BOARD_SIZE as i32).contains(&anchor.row));
        assert!((0..BOARD_SIZE as i32).contains(&anchor.col));
        assert_eq!(ship.length(), 2);
    }
    assert_eq!(
        random_ship(&mut rng, BOARD_SIZE, 0).unwrap_err(),
        BoardError::EmptyShip
    );
}
