use battleship_solo::Ship;

#[test]
fn test_new_horizontal_and_vertical() {
    let ship = Ship::new((2, 1), (2, 3)).unwrap();
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);

    let ship = Ship::new((0, 0), (3, 0)).unwrap();
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_new_reversed_endpoints() {
    let ship = Ship::new((5, 7), (5, 4)).unwrap();
    assert_eq!(ship.len(), 4);
    assert!(ship.deck(5, 4).is_some());
    assert!(ship.deck(5, 7).is_some());
}

#[test]
fn test_single_point_ship() {
    let ship = Ship::new((4, 4), (4, 4)).unwrap();
    assert_eq!(ship.len(), 1);
    assert!(!ship.is_empty());
}

#[test]
fn test_diagonal_is_not_a_ship() {
    assert!(Ship::new((0, 0), (2, 2)).is_none());
}

#[test]
fn test_deck_lookup() {
    let ship = Ship::new((1, 1), (1, 2)).unwrap();
    let deck = ship.deck(1, 2).unwrap();
    assert_eq!((deck.row(), deck.col()), (1, 2));
    assert!(deck.is_alive());
    assert!(ship.deck(2, 2).is_none());
}

#[test]
fn test_fire_and_sunk() {
    let mut ship = Ship::new((1, 1), (1, 2)).unwrap();
    assert!(!ship.is_sunk());
    assert!(ship.fire(1, 1));
    assert!(!ship.is_sunk());
    assert!(!ship.deck(1, 1).unwrap().is_alive());
    assert_eq!(ship.alive_decks(), 1);
    assert!(ship.fire(1, 2));
    assert!(ship.is_sunk());
    assert_eq!(ship.alive_decks(), 0);
}

#[test]
fn test_fire_no_effect() {
    let mut ship = Ship::new((1, 1), (1, 2)).unwrap();
    // miss
    assert!(!ship.fire(0, 0));
    assert!(ship.fire(1, 1));
    // same deck twice
    assert!(!ship.fire(1, 1));
    assert!(!ship.is_sunk());
}

#[test]
fn test_sunk_never_reverts() {
    let mut ship = Ship::new((3, 3), (3, 3)).unwrap();
    assert!(ship.fire(3, 3));
    assert!(ship.is_sunk());
    assert!(!ship.fire(3, 3));
    assert!(ship.is_sunk());
}
