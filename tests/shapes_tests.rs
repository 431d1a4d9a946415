//! Shape catalog tests - matrices, identifiers and rotation

use tui_blocks::core::{
    get_shape, occupied_cells, random_shape, rotate_shape, GameConfig, GameState, ShapeQueue,
    SimpleRng, SHAPES,
};
use tui_blocks::types::{Command, ShapeKind, ShapeMatrix, COLOR_LOOKUP};

fn cells(matrix: &ShapeMatrix) -> Vec<(i8, i8)> {
    occupied_cells(matrix).collect()
}

// ============== Catalog Tests ==============

#[test]
fn test_catalog_order_matches_identifiers() {
    for (i, shape) in SHAPES.iter().enumerate() {
        assert_eq!(shape.id() as usize, i + 1);
        assert_eq!(shape.kind, ShapeKind::ALL[i]);
        assert_eq!(shape.color(), COLOR_LOOKUP[i + 1]);
    }
}

#[test]
fn test_i_shape() {
    let i = get_shape(ShapeKind::I).matrix;
    assert_eq!(cells(&i), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
}

#[test]
fn test_o_shape() {
    let o = get_shape(ShapeKind::O).matrix;
    assert_eq!(cells(&o), vec![(1, 0), (2, 0), (1, 1), (2, 1)]);
}

#[test]
fn test_t_shape() {
    let t = get_shape(ShapeKind::T).matrix;
    assert_eq!(cells(&t), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_s_and_z_shapes() {
    let s = get_shape(ShapeKind::S).matrix;
    assert_eq!(cells(&s), vec![(1, 0), (2, 0), (0, 1), (1, 1)]);

    let z = get_shape(ShapeKind::Z).matrix;
    assert_eq!(cells(&z), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
}

#[test]
fn test_j_and_l_shapes() {
    let j = get_shape(ShapeKind::J).matrix;
    assert_eq!(cells(&j), vec![(0, 0), (0, 1), (1, 1), (2, 1)]);

    let l = get_shape(ShapeKind::L).matrix;
    assert_eq!(cells(&l), vec![(2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_spawn_orientations_use_top_two_rows() {
    for shape in SHAPES.iter() {
        assert!(
            occupied_cells(&shape.matrix).all(|(_, row)| row <= 1),
            "{:?}",
            shape.kind
        );
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotate_formula() {
    let t = get_shape(ShapeKind::T).matrix;
    let r = rotate_shape(&t);

    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(r[i][j], t[j][3 - i], "cell ({}, {})", i, j);
        }
    }
}

#[test]
fn test_rotate_t_once() {
    let t = get_shape(ShapeKind::T).matrix;
    let r = rotate_shape(&t);

    // Column 2 of the T (only row 1) becomes row 1.
    assert_eq!(cells(&r), vec![(1, 1), (0, 2), (1, 2), (1, 3)]);
}

#[test]
fn test_rotate_preserves_cell_count() {
    for shape in SHAPES.iter() {
        let mut m = shape.matrix;
        for _ in 0..4 {
            m = rotate_shape(&m);
            assert_eq!(occupied_cells(&m).count(), 4, "{:?}", shape.kind);
        }
    }
}

#[test]
fn test_rotate_four_times_is_identity() {
    for shape in SHAPES.iter() {
        let once = rotate_shape(&shape.matrix);
        let twice = rotate_shape(&once);
        let thrice = rotate_shape(&twice);
        assert_eq!(rotate_shape(&thrice), shape.matrix, "{:?}", shape.kind);
    }
}

#[test]
fn test_rotate_does_not_touch_input() {
    let i = get_shape(ShapeKind::I).matrix;
    let copy = i;
    let _ = rotate_shape(&i);
    assert_eq!(i, copy);
    assert_eq!(get_shape(ShapeKind::I).matrix, copy);
}

// ============== Random Draw Tests ==============

#[test]
fn test_random_shape_is_a_catalog_entry() {
    let mut rng = SimpleRng::new(31337);
    for _ in 0..200 {
        let (matrix, color, id) = random_shape(&mut rng);
        assert!((1..=7).contains(&id));
        let entry = SHAPES[(id - 1) as usize];
        assert_eq!(matrix, entry.matrix);
        assert_eq!(color, entry.color());
    }
}

#[test]
fn test_random_shape_copy_is_independent() {
    let mut rng = SimpleRng::new(5);
    let (mut first, _, id) = random_shape(&mut rng);
    for row in first.iter_mut() {
        row.fill(true);
    }
    assert_eq!(occupied_cells(&SHAPES[(id - 1) as usize].matrix).count(), 4);
}

#[test]
fn test_random_shape_reaches_every_kind() {
    let mut rng = SimpleRng::new(2024);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let (_, _, id) = random_shape(&mut rng);
        seen[(id - 1) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "{:?}", seen);
}

#[test]
fn test_queue_draws_through_random_shape() {
    let mut rng = SimpleRng::new(777);
    let mut queue = ShapeQueue::new(777);

    for _ in 0..100 {
        let (matrix, color, id) = random_shape(&mut rng);
        let kind = queue.draw();
        assert_eq!(kind.id(), id);
        assert_eq!(get_shape(kind).matrix, matrix);
        assert_eq!(kind.color(), color);
    }
}

#[test]
fn test_spawned_pieces_follow_random_shape() {
    let mut rng = SimpleRng::new(4242);
    let mut game = GameState::new(GameConfig::new(4242));

    for _ in 0..10 {
        let Some(active) = game.active() else {
            break;
        };
        let (matrix, _, id) = random_shape(&mut rng);
        assert_eq!(active.id(), id);
        assert_eq!(active.matrix, matrix);
        game.apply_command(Command::HardDrop);
    }
}
