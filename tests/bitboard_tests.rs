use seabattle::{BitBoard, BitBoardError, Coordinate};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 11>::try_new().is_ok());
    assert!(BitBoard::<u64, 8>::try_new().is_ok());
    let err = BitBoard::<u64, 9>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 9, capacity: 64 })));
}

#[test]
fn test_insert_contains() {
    let mut bb = BitBoard::<u64, 6>::new();
    assert!(bb.is_empty());
    assert_eq!(bb.insert(Coordinate::new(1, 1)), Ok(true));
    assert_eq!(bb.insert(Coordinate::new(1, 1)), Ok(false));
    assert!(bb.contains(Coordinate::new(1, 1)));
    assert!(!bb.contains(Coordinate::new(1, 2)));
    assert!(!bb.contains(Coordinate::new(-1, 2)));
    assert_eq!(bb.len(), 1);

    assert!(matches!(
        bb.insert(Coordinate::new(6, 0)),
        Err(BitBoardError::IndexOutOfBounds { row: 6, col: 0 })
    ));

    bb.clear();
    assert!(bb.is_empty());
}

#[test]
fn test_union_and_iter() {
    let mut a = BitBoard::<u16, 4>::new();
    let mut b = BitBoard::<u16, 4>::new();
    a.insert(Coordinate::new(3, 3)).unwrap();
    b.insert(Coordinate::new(0, 1)).unwrap();
    b.insert(Coordinate::new(3, 3)).unwrap();
    let cells: Vec<_> = (a | b).iter().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 1), Coordinate::new(3, 3)]);
}
