use battleship_solo::{sample_fleet, Board, BoardError, Cell, ShipSpec, ShotResult, BOARD_SIZE};

/// Legal fleet with a lone boat in the corner at (0,0).
fn corner_boat_fleet() -> [ShipSpec; 10] {
    [
        ((0, 0), (0, 0)),
        ((0, 2), (0, 5)),
        ((2, 0), (2, 2)),
        ((4, 0), (4, 2)),
        ((6, 0), (6, 1)),
        ((8, 0), (8, 1)),
        ((0, 7), (0, 8)),
        ((2, 8), (2, 8)),
        ((4, 8), (4, 8)),
        ((6, 8), (6, 8)),
    ]
}

fn count(board: &Board, cell: Cell) -> usize {
    board
        .grid()
        .iter()
        .flat_map(|row| row.iter())
        .filter(|c| **c == cell)
        .count()
}

#[test]
fn test_new_board_stamps_ships() {
    let board = Board::new(&sample_fleet()).unwrap();
    assert_eq!(board.ships().len(), 10);
    assert_eq!(count(&board, Cell::Ship), 20);
    assert_eq!(count(&board, Cell::Water), BOARD_SIZE * BOARD_SIZE - 20);
    assert_eq!(board.cell(0, 3), Some(Cell::Ship));
    assert_eq!(board.cell(1, 0), Some(Cell::Water));
    assert!(!board.all_sunk());
    assert_eq!(board.ships_remaining(), 10);
}

#[test]
fn test_ships_keep_spec_order() {
    let fleet = sample_fleet();
    let board = Board::new(&fleet).unwrap();
    for (ship, &(start, end)) in board.ships().iter().zip(fleet.iter()) {
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(cells.first(), Some(&start));
        assert_eq!(cells.last(), Some(&end));
    }
}

#[test]
fn test_fire_at_water_is_miss() {
    let mut board = Board::new(&sample_fleet()).unwrap();
    assert_eq!(board.fire(5, 5).unwrap(), ShotResult::Miss);
    assert_eq!(board.grid()[5][5], Cell::Miss);
    assert!(board.ships().iter().all(|s| s.alive_decks() == s.len()));
}

#[test]
fn test_repeat_miss_is_idempotent() {
    let mut board = Board::new(&sample_fleet()).unwrap();
    assert_eq!(board.fire(9, 9).unwrap().label(), "Miss!");
    let before = board.clone();
    assert_eq!(board.fire(9, 9).unwrap().label(), "Miss!");
    assert_eq!(board, before);
}

#[test]
fn test_single_deck_ship_sinks_at_once() {
    let mut board = Board::new(&corner_boat_fleet()).unwrap();
    assert_eq!(board.fire(0, 0).unwrap(), ShotResult::Sunk);
    assert_eq!(board.grid()[0][0], Cell::Sunk);
    assert!(board.ships()[0].is_sunk());
    assert_eq!(board.ships_remaining(), 9);
}

#[test]
fn test_four_deck_ship_hits_then_sinks() {
    let mut board = Board::new(&sample_fleet()).unwrap();
    for c in 0..3 {
        assert_eq!(board.fire(0, c).unwrap(), ShotResult::Hit);
        assert_eq!(board.grid()[0][c], Cell::Hit);
    }
    assert_eq!(board.grid()[0][3], Cell::Ship);
    assert_eq!(board.fire(0, 3).unwrap(), ShotResult::Sunk);
    for c in 0..4 {
        assert_eq!(board.grid()[0][c], Cell::Sunk);
    }
}

#[test]
fn test_hit_changes_only_target_cell() {
    let mut board = Board::new(&sample_fleet()).unwrap();
    let before = *board.grid();
    assert_eq!(board.fire(2, 1).unwrap(), ShotResult::Hit);
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if (r, c) == (2, 1) {
                assert_eq!(board.grid()[r][c], Cell::Hit);
            } else {
                assert_eq!(board.grid()[r][c], before[r][c]);
            }
        }
    }
}

#[test]
fn test_repeat_fire_reports_current_state() {
    let mut board = Board::new(&sample_fleet()).unwrap();
    assert_eq!(board.fire(6, 0).unwrap(), ShotResult::Hit);
    let before = board.clone();
    assert_eq!(board.fire(6, 0).unwrap(), ShotResult::Hit);
    assert_eq!(board, before);

    assert_eq!(board.fire(6, 1).unwrap(), ShotResult::Sunk);
    assert_eq!(board.fire(6, 0).unwrap(), ShotResult::Sunk);
    assert_eq!(board.fire(6, 1).unwrap(), ShotResult::Sunk);
    assert_eq!(board.ships_remaining(), 9);
}

#[test]
fn test_fire_out_of_bounds() {
    let mut board = Board::new(&sample_fleet()).unwrap();
    assert_eq!(
        board.fire(BOARD_SIZE, 0).unwrap_err(),
        BoardError::OutOfBounds {
            row: BOARD_SIZE,
            col: 0
        }
    );
    assert_eq!(board.cell(0, BOARD_SIZE), None);
}

#[test]
fn test_sinking_everything() {
    let fleet = sample_fleet();
    let mut board = Board::new(&fleet).unwrap();
    let cells: Vec<_> = board.ships().iter().flat_map(|s| s.cells()).collect();
    for (r, c) in cells {
        board.fire(r, c).unwrap();
    }
    assert!(board.all_sunk());
    assert_eq!(count(&board, Cell::Sunk), 20);
    assert_eq!(count(&board, Cell::Ship), 0);
}

#[test]
fn test_render_layout() {
    let mut board = Board::new(&sample_fleet()).unwrap();
    board.fire(0, 0).unwrap();
    board.fire(1, 1).unwrap();
    board.fire(0, 8).unwrap();

    let text = board.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), BOARD_SIZE);
    assert_eq!(lines[0], "* □ □ □ ~ □ □ ~ x ~");
    assert_eq!(lines[1], "~ . ~ ~ ~ ~ ~ ~ ~ ~");
    assert!(lines.iter().all(|l| l.split(' ').count() == BOARD_SIZE));
    assert_eq!(text, board.to_string());
}

#[test]
fn test_concealed_view_hides_untouched_ships() {
    let mut board = Board::new(&sample_fleet()).unwrap();
    board.fire(0, 0).unwrap();
    let hidden = board.view(false).to_string();
    assert_eq!(hidden.lines().next(), Some("* ~ ~ ~ ~ ~ ~ ~ ~ ~"));
    assert!(!hidden.contains('□'));
    assert_eq!(board.view(true).to_string(), board.render());
}

#[test]
fn test_labels() {
    assert_eq!(ShotResult::Miss.to_string(), "Miss!");
    assert_eq!(ShotResult::Hit.to_string(), "Hit!");
    assert_eq!(ShotResult::Sunk.to_string(), "Sunk!");
    let glyphs: String = [Cell::Water, Cell::Ship, Cell::Miss, Cell::Hit, Cell::Sunk]
        .iter()
        .map(Cell::glyph)
        .collect();
    assert_eq!(glyphs, "~□.*x");
}
