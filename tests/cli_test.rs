#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        parse_coord, take_turn, Board, BoardError, CliPlayer, Coordinate, GameError,
        Orientation, Player, Ship, ShotOutcome,
    };

    fn board() -> Board {
        let mut board = Board::new();
        let ship = Ship::new(1, Coordinate::new(1, 1), Orientation::Vertical).unwrap();
        board.place_ship(ship).unwrap();
        board.begin_play();
        board
    }

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::with_io(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("2 3"), Ok(Coordinate::new(1, 2)));
        assert_eq!(parse_coord("  6\t1 \n"), Ok(Coordinate::new(5, 0)));
        // zero is not rejected here; it lands off the board
        assert_eq!(parse_coord("0 1"), Ok(Coordinate::new(-1, 0)));
        assert_eq!(parse_coord("1"), Err("Enter 2 numbers".to_string()));
        assert_eq!(parse_coord("1 2 3"), Err("Enter 2 numbers".to_string()));
        assert_eq!(parse_coord(""), Err("Enter 2 numbers".to_string()));
        assert_eq!(parse_coord("a 2"), Err("Enter numbers!".to_string()));
        assert_eq!(parse_coord("-1 2"), Err("Enter numbers!".to_string()));
        assert!(parse_coord("99999999999 1").is_err());
    }

    #[test]
    fn test_select_target_reprompts_on_bad_input() {
        let mut p = player("hello\n1 x\n2 2\n");
        let mut rng = SmallRng::seed_from_u64(0);
        let target = p.select_target(&mut rng, &board()).unwrap();
        assert_eq!(target, Coordinate::new(1, 1));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Your move (2 numbers from 1 to 6): ").count(), 3);
        assert!(out.contains("Enter 2 numbers"));
        assert!(out.contains("Enter numbers!"));
    }

    #[test]
    fn test_select_target_end_of_input() {
        let mut p = player("1\n");
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            p.select_target(&mut rng, &board()).unwrap_err(),
            GameError::InputClosed
        );
    }

    #[test]
    fn test_turn_reports_errors_and_result() {
        let mut board = board();
        let mut p = player("7 1\n2 2\n");
        let mut rng = SmallRng::seed_from_u64(0);
        let report = take_turn(&mut p, &mut board, &mut rng, false).unwrap();
        assert_eq!(report.outcome, ShotOutcome::Sunk { length: 1 });

        p.handle_opponent_shot(Coordinate::new(0, 0), ShotOutcome::Miss);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains(&BoardError::OutOfBounds(Coordinate::new(6, 0)).to_string()));
        assert!(out.contains("You fired at 2 2: Sunk a 1-deck ship"));
        assert!(out.contains("Computer fired at 1 1: Miss"));
    }

    #[test]
    fn test_before_turn_hides_opponent_fleet() {
        let own = board();
        let mut opponent = board();
        opponent.set_hidden(true);
        let mut p = player("");
        p.before_turn(&own, &opponent);
        let out = String::from_utf8(p.into_output()).unwrap();
        let (mine, theirs) = out.split_once("Computer's board:").unwrap();
        assert!(mine.contains('■'));
        assert!(!theirs.contains('■'));
    }
}
