use mars_rover_core::Coordinate;
use mars_rover_world::Planet;

const SIZES: [(i64, i64); 5] = [(1, 1), (1, 7), (3, 2), (10, 10), (100, 37)];

fn sample_axis() -> impl Iterator<Item = i64> {
    (-250..=250).step_by(7).chain([i64::MIN, i64::MIN + 1, i64::MAX, -1, 0, 1])
}

#[test]
fn locate_stays_within_bounds() {
    for (width, height) in SIZES {
        let planet = Planet::new("Torus", width, height).expect("valid dimensions");
        for x in sample_axis() {
            for y in sample_axis() {
                let located = planet.locate(Coordinate::new(x, y));
                assert!(
                    planet.contains(located),
                    "({x}, {y}) located outside {width}x{height}: {located}"
                );
            }
        }
    }
}

#[test]
fn locate_is_identity_on_canonical_coordinates() {
    for (width, height) in SIZES {
        let planet = Planet::new("Torus", width, height).expect("valid dimensions");
        for x in 0..width {
            for y in 0..height {
                let position = Coordinate::new(x, y);
                assert_eq!(planet.locate(position), position);
            }
        }
    }
}

#[test]
fn locate_is_periodic() {
    for (width, height) in SIZES {
        let planet = Planet::new("Torus", width, height).expect("valid dimensions");
        for x in (-60..=60).step_by(11) {
            for y in (-60..=60).step_by(13) {
                let base = planet.locate(Coordinate::new(x, y));
                for k in -4..=4 {
                    let shifted = Coordinate::new(x + k * width, y + k * height);
                    assert_eq!(planet.locate(shifted), base, "k = {k}");
                }
            }
        }
    }
}

#[test]
fn locate_is_idempotent() {
    let planet = Planet::new("Torus", 13, 5).expect("valid dimensions");
    for x in sample_axis() {
        let once = planet.locate(Coordinate::new(x, x.wrapping_neg()));
        assert_eq!(planet.locate(once), once);
    }
}
