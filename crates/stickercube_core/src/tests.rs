use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::slice::slice_turn_cycle;
use crate::transfer::face_turn_cycle;
use crate::*;

use Direction::{Clockwise as CW, CounterClockwise as CCW};

fn layers() -> impl Iterator<Item = Layer> {
    Face::iter()
        .map(Layer::Face)
        .chain(Slice::iter().map(Layer::Slice))
}

fn all_cycles() -> Vec<(Layer, Direction, &'static TransferCycle)> {
    let mut ret = vec![];
    for dir in [CW, CCW] {
        for face in Face::iter() {
            ret.push((Layer::Face(face), dir, face_turn_cycle(face, dir)));
        }
        for slice in Slice::iter() {
            ret.push((Layer::Slice(slice), dir, slice_turn_cycle(slice, dir)));
        }
    }
    ret
}

/// Applies a short sequence written with single-letter layers, `'`, and `2`.
fn apply_moves(state: &mut CubeState, moves: &str) {
    for token in moves.split_whitespace() {
        let mut chars = token.chars();
        let layer = chars.next().and_then(Layer::from_symbol).unwrap();
        let turn = match chars.next() {
            None => Turn::new(layer, CW),
            Some('\'') => Turn::new(layer, CCW),
            Some(c) => {
                let repeat = c.to_digit(10).unwrap();
                Turn::new(layer, CW).with_repeat(repeat).unwrap()
            }
        };
        apply_turn(state, turn).unwrap();
    }
}

fn layout(side_length: usize, faces: [&str; 6]) -> CubeState {
    let grids = PerFace::from_fn(|face| faces[face.index()].parse::<Grid>().unwrap());
    CubeState::from_faces(side_length, grids).unwrap()
}

fn arb_turn(side_length: usize) -> impl Strategy<Value = Turn> {
    let layer = any::<Layer>().prop_filter("layer must exist", move |layer| {
        layer.exists_at(side_length)
    });
    (layer, any::<Direction>(), 1..=3_u32).prop_map(|(layer, direction, repeat)| {
        Turn::new(layer, direction).with_repeat(repeat).unwrap()
    })
}

fn arb_scrambled(side_length: usize) -> impl Strategy<Value = CubeState> {
    let turns = prop::collection::vec(arb_turn(side_length), 0..25);
    turns.prop_map(move |turns| {
        let mut state = CubeState::new(side_length).unwrap();
        apply_turns(&mut state, &turns).unwrap();
        state
    })
}

#[test]
fn test_cycle_tables_are_closed() {
    for (layer, dir, cycle) in all_cycles() {
        for k in 0..4 {
            assert_eq!(
                cycle[k].to,
                cycle[(k + 1) % 4].from,
                "{layer} {dir:?} step {k} does not feed the next step",
            );
        }
    }
}

#[test]
fn test_cycle_directions_visit_same_lines() {
    for layer in layers() {
        let lines = |dir| {
            let cycle = match layer {
                Layer::Face(face) => face_turn_cycle(face, dir),
                Layer::Slice(slice) => slice_turn_cycle(slice, dir),
            };
            cycle
                .iter()
                .map(|step| format!("{:?}", step.from))
                .sorted()
                .collect::<Vec<_>>()
        };
        assert_eq!(lines(CW), lines(CCW), "{layer}");
    }
}

#[test]
fn test_cycles_avoid_parallel_faces() {
    for (layer, _, cycle) in all_cycles() {
        let untouched = match layer {
            Layer::Face(face) => [face, face.opposite()],
            Layer::Slice(slice) => slice.parallel_faces(),
        };
        for step in cycle {
            assert!(
                !untouched.contains(&step.from.face),
                "{layer} touches {}",
                step.from.face,
            );
        }
    }
}

#[test]
fn test_single_right_turn() {
    let mut state = CubeState::default();
    apply_moves(&mut state, "R");
    let expected = layout(
        3,
        [
            "WWG WWG WWG",
            "YYB YYB YYB",
            "OOO OOO OOO",
            "RRR RRR RRR",
            "GGY GGY GGY",
            "WBB WBB WBB",
        ],
    );
    assert_eq!(expected, state);
}

#[test]
fn test_golden_scramble() {
    let mut state = CubeState::default();
    apply_moves(
        &mut state,
        "U B2 R2 B2 L2 F2 R2 D' F2 L2 B F' L F2 D U' R2 F' L' R'",
    );
    let expected = layout(
        3,
        [
            "YWY WWW YWY",
            "WYW YYY WYW",
            "GOB GOB GOB",
            "BRG BRG BRG",
            "RGO RGO RGO",
            "OBR OBR OBR",
        ],
    );
    assert_eq!(expected, state);
}

#[test]
fn test_scramble_with_counterclockwise_turns() {
    let mut state = CubeState::default();
    apply_moves(&mut state, "F L F U' R U F2 L2 U' L' B D' B' L2 U");
    let expected = layout(
        3,
        [
            "GGG GWW GWW",
            "BBB YYB YYB",
            "YYY OOY OOY",
            "RRW RRW WWW",
            "RGG RGG RRR",
            "OOO OBB OBB",
        ],
    );
    assert_eq!(expected, state);
}

#[test]
fn test_checkerboard() {
    let mut state = CubeState::default();
    apply_moves(&mut state, "M2 E2 S2");
    let expected = layout(
        3,
        [
            "WYW YWY WYW",
            "YWY WYW YWY",
            "ORO ROR ORO",
            "ROR ORO ROR",
            "GBG BGB GBG",
            "BGB GBG BGB",
        ],
    );
    assert_eq!(expected, state);
}

#[test]
fn test_5x5_with_slices() {
    let mut state = CubeState::new(5).unwrap();
    apply_moves(&mut state, "R U' F2 M E' S");
    let expected = layout(
        5,
        [
            "GGBGG WWBWW OOWOB WWBWW BYRYY",
            "WWGWW YYGYB RRYRG YYGYB YYOYB",
            "WBYBR OOYOR YGGGG OOYOR OOBOG",
            "OGWGY ORWRR WBBBB ORWRR BRWRR",
            "YGGGG YGWGG ORRRR YGWGG OOYOO",
            "RRYRR WBYBB OOOOR WBYBB WBWBB",
        ],
    );
    assert_eq!(expected, state);
}

#[test]
fn test_4x4_face_turns() {
    let mut state = CubeState::new(4).unwrap();
    apply_moves(&mut state, "R U F' B2 D L'");
    let expected = layout(
        4,
        [
            "RYYY RWWW RWWW BRRR",
            "GYYY WYYO WYYO WBBO",
            "GGGO GOOO GOOO RRRO",
            "BBBO YRRO YRRO RGGG",
            "WYYY WGGG WGGG WOOG",
            "BBBW BBBW BBBW YRRB",
        ],
    );
    assert_eq!(expected, state);
}

#[test]
fn test_commutator_order() {
    let mut state = CubeState::default();
    for i in 1..=6 {
        apply_moves(&mut state, "R U R' U'");
        assert_eq!(i == 6, state.is_solved(), "after {i} repetitions");
    }
}

#[test]
fn test_rotate_face() {
    let original: Grid = "WYG BOR GGG".parse().unwrap();
    let mut state = CubeState::default();
    state.set_face(Face::Front, original.clone()).unwrap();

    rotate_face(&mut state, Face::Front, CW);
    assert_eq!("GBW GOY GRG", state.face(Face::Front).to_string());
    rotate_face(&mut state, Face::Front, CCW);
    assert_eq!(original, state.get_face(Face::Front));
    assert_eq!(
        Ok(original.clone()),
        Grid::from_rows(state.face(Face::Front).to_rows()),
    );
    rotate_face(&mut state, Face::Front, CCW);
    assert_eq!("GRG YOG WBG", state.face(Face::Front).to_string());

    for (face, grid) in state.faces().iter() {
        if face != Face::Front {
            assert!(grid.is_uniform(), "{face} was modified");
        }
    }
}

#[test]
fn test_lines_are_copies() {
    let mut state = CubeState::default();
    let mut line = state.get_line(Face::Up, 0, Orientation::Row, false);
    line[0] = Color::Red;
    assert!(state.is_solved());

    state.set_line(Face::Up, 2, Orientation::Column, &line);
    line[1] = Color::Blue;
    assert_eq!("WWR WWW WWW", state.face(Face::Up).to_string());
    assert_eq!(
        vec![Color::White, Color::White, Color::Red],
        state
            .get_line(Face::Up, 2, Orientation::Column, true)
            .to_vec(),
    );
}

#[test]
fn test_slices_unavailable_on_even_cubes() {
    let mut state = CubeState::new(4).unwrap();
    for slice in Slice::iter() {
        assert_eq!(
            Err(CubeError::SliceUnavailable {
                slice,
                side_length: 4,
            }),
            apply_turn(&mut state, Turn::new(slice, CW)),
        );
    }
    assert!(state.is_solved());

    let turns = [Turn::new(Face::Right, CW), Turn::new(Slice::Middle, CW)];
    apply_turns(&mut state, &turns).unwrap_err();
    assert!(state.is_solved(), "no turn may be applied from a failing sequence");
}

#[test]
fn test_dimension_mismatch() {
    assert_eq!(
        Err(CubeError::DimensionMismatch {
            expected: 3,
            rows: 3,
            columns: 2,
        }),
        "WWW WW WWW".parse::<Grid>(),
    );

    let mut faces = PerFace::from_fn(|_| Grid::filled(3, Color::White));
    faces[Face::Back] = Grid::filled(2, Color::Blue);
    assert_eq!(
        Err(CubeError::DimensionMismatch {
            expected: 3,
            rows: 2,
            columns: 2,
        }),
        CubeState::from_faces(3, faces),
    );

    let mut state = CubeState::default();
    state
        .set_face(Face::Up, Grid::filled(4, Color::White))
        .unwrap_err();
    assert_eq!(CubeState::default(), state);

    assert_eq!(Err(CubeError::ZeroSideLength), CubeState::new(0));
    assert_eq!(
        Err(CubeError::ZeroSideLength),
        CubeState::solved_with_scheme(0, &Color::default_scheme()),
    );
}

#[test]
fn test_net_display() {
    let expected = "      W W W
      W W W
      W W W
O O O G G G R R R B B B
O O O G G G R R R B B B
O O O G G G R R R B B B
      Y Y Y
      Y Y Y
      Y Y Y
";
    assert_eq!(expected, CubeState::default().to_string());
}

#[test]
fn test_parse_identifiers() {
    assert_eq!(Ok(Face::Front), "f".parse());
    assert_eq!(Ok(Face::Back), "BACK".parse());
    assert_eq!(Ok(Color::Orange), "o".parse());
    assert_eq!(Ok(Color::Yellow), "yellow".parse());
    assert_eq!(Ok(Slice::Standing), "S".parse());
    assert_eq!(Ok(Layer::Slice(Slice::Equator)), "e".parse());
    assert_eq!(Ok(Layer::Face(Face::Down)), "down".parse());
    assert_eq!(Ok(CCW), "ccw".parse());
    assert_eq!(Ok(CW), "".parse());

    assert_eq!(
        Err(CubeError::InvalidFaceOrSlice("X".to_owned())),
        "X".parse::<Layer>(),
    );
    assert_eq!(
        Err(CubeError::InvalidColor("purple".to_owned())),
        "purple".parse::<Color>(),
    );
    assert_eq!(
        Err(CubeError::InvalidDirection("sideways".to_owned())),
        "sideways".parse::<Direction>(),
    );
}

#[test]
fn test_turn_display() {
    assert_eq!("R", Turn::new(Face::Right, CW).to_string());
    assert_eq!("M'", Turn::new(Slice::Middle, CCW).to_string());
    let u2 = Turn::new(Face::Up, CW).with_repeat(2).unwrap();
    assert_eq!("U2", u2.to_string());
    assert_eq!(
        Err(CubeError::ZeroRepeat),
        Turn::new(Face::Up, CW).with_repeat(0),
    );
}

#[test]
fn test_turn_rev_and_canonical() {
    let turn = |layer: Layer, direction, repeat| {
        Turn::new(layer, direction).with_repeat(repeat).unwrap()
    };
    let r = Layer::Face(Face::Right);
    let u = Layer::Face(Face::Up);

    for (original, reversed) in [
        (turn(r, CW, 1), "R'"),
        (turn(r, CCW, 1), "R"),
        (turn(r, CW, 2), "R2"),
        (turn(r, CW, 3), "R"),
        (turn(r, CW, 4), "R4"),
        (turn(r, CW, 5), "R'"),
        (turn(u, CCW, 2), "U2"),
        (turn(u, CCW, 3), "U'"),
    ] {
        assert_eq!(reversed, original.rev().to_string(), "{original:?}");
        let undone = (4 - original.clockwise_quarter_turns()) % 4;
        assert_eq!(undone, original.rev().clockwise_quarter_turns());
    }

    assert_eq!("U2", turn(u, CCW, 2).to_string());
    assert_eq!("U", turn(u, CCW, 3).to_string());
    assert_eq!("R9", turn(r, CW, 9).to_string());
    assert_eq!("R2", turn(r, CW, 10).to_string());
    assert_eq!(turn(r, CW, 2), turn(r, CCW, 6).canonical());
}

proptest! {
    #[test]
    fn proptest_color_conservation(
        (side_length, turns) in (1_usize..=5).prop_flat_map(|n| {
            (Just(n), prop::collection::vec(arb_turn(n), 0..40))
        })
    ) {
        let mut state = CubeState::new(side_length).unwrap();
        apply_turns(&mut state, &turns).unwrap();
        let counts = state.color_counts();
        for color in Color::iter() {
            assert_eq!(Some(&(side_length * side_length)), counts.get(&color));
        }
    }

    #[test]
    fn proptest_order_four(state in arb_scrambled(3)) {
        for layer in layers() {
            for dir in [CW, CCW] {
                let mut twisted = state.clone();
                for i in 1..=4 {
                    apply_turn(&mut twisted, Turn::new(layer, dir)).unwrap();
                    assert_eq!(i == 4, twisted == state, "{layer} {dir:?} x{i}");
                }
            }
        }
    }

    #[test]
    fn proptest_inverse(state in arb_scrambled(5), turn in arb_turn(5)) {
        let mut twisted = state.clone();
        apply_turn(&mut twisted, turn).unwrap();
        apply_turn(&mut twisted, turn.rev()).unwrap();
        assert_eq!(state, twisted);
    }

    #[test]
    fn proptest_slice_isolation(
        state in arb_scrambled(3),
        slice in any::<Slice>(),
        dir in any::<Direction>(),
    ) {
        let mut twisted = state.clone();
        turn_slice(&mut twisted, slice, dir).unwrap();

        for face in Face::iter() {
            let before = state.face(face);
            let after = twisted.face(face);
            if slice.parallel_faces().contains(&face) {
                assert_eq!(before, after, "{slice} touched {face}");
                continue;
            }
            for row in 0..3 {
                for col in 0..3 {
                    if row != 1 && col != 1 {
                        assert_eq!(before[[row, col]], after[[row, col]]);
                    }
                }
            }
            // Only one middle line changes, so at least one of the middle row
            // and middle column keeps its outer stickers.
            let row_kept = before[[1, 0]] == after[[1, 0]] && before[[1, 2]] == after[[1, 2]];
            let col_kept = before[[0, 1]] == after[[0, 1]] && before[[2, 1]] == after[[2, 1]];
            assert!(row_kept || col_kept);
        }
    }
}
