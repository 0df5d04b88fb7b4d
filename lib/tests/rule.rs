use cca_lib::{neighbor_count, neighbors, step, Color, Cycle, Grid, Rule, State};
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;

#[test]
fn neighbor_counts() {
    for &(width, height) in &[(2, 2), (3, 3), (2, 5), (4, 7), (10, 5)] {
        for y in 0..height {
            for x in 0..width {
                let on_x_edge = x == 0 || x == width - 1;
                let on_y_edge = y == 0 || y == height - 1;
                let expected = match (on_x_edge, on_y_edge) {
                    (true, true) => 3,
                    (false, false) => 8,
                    _ => 5,
                };
                assert_eq!(
                    neighbor_count((x, y), width, height),
                    expected,
                    "cell {:?} in a {}x{} grid",
                    (x, y),
                    width,
                    height
                );
            }
        }
    }
}

#[test]
fn neighbor_order() {
    let interior: Vec<_> = neighbors((1, 1), 3, 3).collect();
    assert_eq!(
        interior,
        vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2)
        ]
    );
    let corner: Vec<_> = neighbors((0, 0), 3, 3).collect();
    assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);
}

#[test]
fn no_wraparound() {
    let corner: Vec<_> = neighbors((4, 4), 5, 5).collect();
    assert_eq!(corner, vec![(3, 3), (3, 4), (4, 3)]);
    assert!(neighbors((0, 2), 5, 5).all(|(x, _)| x <= 1));
    assert_eq!(neighbor_count((0, 0), 1, 1), 0);
}

#[test]
fn threshold_boundary() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();

    let grid = Grid::parse("112\n002\n100", cycle.len())?;
    assert_eq!(step(&grid, &cycle)[(1, 1)], State(1));

    let grid = Grid::parse("112\n002\n200", cycle.len())?;
    assert_eq!(step(&grid, &cycle)[(1, 1)], State(0));
    Ok(())
}

#[test]
fn cycle_wraparound() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();
    let grid = Grid::parse("000\n121\n111", cycle.len())?;
    let next = step(&grid, &cycle);
    assert_eq!(next[(1, 1)], State(0));
    Ok(())
}

#[test]
fn uniform_grid_is_stable() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();
    for i in 0..cycle.len() {
        let mut grid = Grid::new(5, 4, cycle.len())?;
        for coord in grid.coords().collect::<Vec<_>>() {
            grid.set(coord, State(i))?;
        }
        assert_eq!(step(&grid, &cycle), grid);
    }
    Ok(())
}

#[test]
fn single_row_never_changes() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();
    let mut rng = StdRng::seed_from_u64(7);
    let grid = Grid::random(40, 1, &cycle, &mut rng)?;
    assert_eq!(step(&grid, &cycle), grid);
    Ok(())
}

#[test]
fn preserves_dimensions_and_range() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::new(vec![
        Color::BLACK,
        Color::RED,
        Color::YELLOW,
        Color::WHITE,
    ])?;
    let mut rng = StdRng::seed_from_u64(2024);
    for &(width, height) in &[(1, 1), (2, 3), (17, 9), (32, 32)] {
        let mut grid = Grid::random(width, height, &cycle, &mut rng)?;
        for _ in 0..20 {
            grid = step(&grid, &cycle);
            assert_eq!(grid.dimensions(), (width, height));
            assert_eq!(grid.states(), cycle.len());
            assert!(grid.rows().flatten().all(|s| s.0 < cycle.len()));
        }
    }
    Ok(())
}

#[test]
fn deterministic() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();
    let mut rng = StdRng::seed_from_u64(42);
    let grid = Grid::random(24, 16, &cycle, &mut rng)?;
    let before = grid.clone();
    let a = step(&grid, &cycle);
    let b = step(&grid, &cycle);
    assert_eq!(a, b);
    assert_eq!(grid, before);
    Ok(())
}

#[test]
fn corner_cluster() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();
    let rows: [[usize; 4]; 4] = [[0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    let mut grid = Grid::from_rows(&rows, cycle.len())?;
    for _ in 0..5 {
        grid = step(&grid, &cycle);
    }
    assert_eq!(
        grid.to_rows(),
        vec![
            vec![1, 1, 0, 0],
            vec![1, 1, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]
    );
    Ok(())
}

#[test]
fn stripes() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();
    let mut grid = Grid::parse(
        "001122\n\
         001122\n\
         220011\n\
         220011\n\
         112200\n\
         112200",
        cycle.len(),
    )?;
    let expected = [
        "001122\n001122\n200111\n220011\n122000\n112200\n",
        "001122\n001122\n001111\n200111\n220000\n122000\n",
        "001122\n011122\n001111\n001111\n200010\n220000\n",
    ];
    for text in expected.iter() {
        grid = step(&grid, &cycle);
        assert_eq!(grid.to_string(), *text);
    }
    Ok(())
}

#[test]
fn custom_threshold() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();
    let grid = Grid::parse("01\n00", cycle.len())?;
    assert_eq!(Rule::new(0).step(&grid, &cycle).to_string(), "11\n11\n");
    assert_eq!(Rule::default().step(&grid, &cycle), grid);
    assert_eq!(Rule::default().threshold(), 2);
    Ok(())
}

#[test]
#[cfg(feature = "rayon")]
fn par_step() -> Result<(), Box<dyn Error>> {
    let cycle = Cycle::default();
    let rule = Rule::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut grid = Grid::random(64, 48, &cycle, &mut rng)?;
    for _ in 0..10 {
        let next = rule.par_step(&grid, &cycle);
        assert_eq!(next, rule.step(&grid, &cycle));
        grid = next;
    }
    Ok(())
}
