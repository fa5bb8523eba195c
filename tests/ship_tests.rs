use seabattle::{BoardError, Coordinate, Orientation, Ship};

#[test]
fn test_cells_follow_orientation() -> Result<(), BoardError> {
    let ship = Ship::new(4, Coordinate::new(1, 2), Orientation::Vertical)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(1, 2),
            Coordinate::new(2, 2),
            Coordinate::new(3, 2),
            Coordinate::new(4, 2)
        ]
    );

    let ship = Ship::new(2, Coordinate::new(5, 0), Orientation::Horizontal)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(5, 0), Coordinate::new(5, 1)]);
    Ok(())
}

#[test]
fn test_is_hit_by() -> Result<(), BoardError> {
    let ship = Ship::new(3, Coordinate::new(0, 0), Orientation::Horizontal)?;
    assert!(ship.is_hit_by(Coordinate::new(0, 2)));
    assert!(!ship.is_hit_by(Coordinate::new(0, 3)));
    assert!(!ship.is_hit_by(Coordinate::new(1, 0)));
    Ok(())
}

#[test]
fn test_new_ship_is_undamaged() -> Result<(), BoardError> {
    let ship = Ship::new(3, Coordinate::new(2, 2), Orientation::Vertical)?;
    assert_eq!(ship.health(), 3);
    assert_eq!(ship.length(), 3);
    assert!(!ship.is_sunk());
    assert_eq!(ship.anchor(), Coordinate::new(2, 2));
    assert_eq!(ship.orientation(), Orientation::Vertical);
    Ok(())
}

#[test]
fn test_zero_length_rejected() {
    let err = Ship::new(0, Coordinate::new(0, 0), Orientation::Horizontal).unwrap_err();
    assert_eq!(err, BoardError::EmptyShip);
}

#[test]
fn test_coordinate_display_is_one_indexed() {
    assert_eq!(Coordinate::new(0, 4).to_string(), "1 5");
    assert_eq!(Coordinate::from((2, 3)), Coordinate::new(2, 3));
    assert_eq!(
        Coordinate::new(1, 1).step(Orientation::Horizontal, 2),
        Coordinate::new(1, 3)
    );
    assert_eq!(Coordinate::new(-1, 0).to_index(6), None);
    assert_eq!(Coordinate::new(5, 0).to_index(6), Some((5, 0)));
}
