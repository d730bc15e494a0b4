use rand::{rngs::SmallRng, SeedableRng};
use salesman_algorithms::{genetic::initialize_population, two_opt::refine};
use salesman_challenge::{route_length, validate_route, Challenge, Point};

#[test]
fn test_refine_uncrosses_square() {
    let challenge = Challenge::new(vec![
        Point::new("A", 0.0, 0.0),
        Point::new("B", 0.0, 10.0),
        Point::new("C", 10.0, 10.0),
        Point::new("D", 10.0, 0.0),
    ])
    .unwrap();
    let refined = refine(&[0, 2, 1, 3, 0], &challenge.distance_matrix);
    assert_eq!(refined, vec![0, 1, 2, 3, 0]);
    assert_eq!(route_length(&refined, &challenge.distance_matrix), 40.0);
}

#[test]
fn test_refine_never_lengthens() {
    for seed in 0..30 {
        let num_points = 3 + seed as usize % 10;
        let challenge = Challenge::generate_instance(seed, num_points).unwrap();
        let matrix = &challenge.distance_matrix;
        let mut rng = SmallRng::seed_from_u64(seed);
        for route in initialize_population(5, num_points, &mut rng) {
            let refined = refine(&route, matrix);
            assert!(validate_route(&refined, num_points).is_ok());
            assert!(route_length(&refined, matrix) <= route_length(&route, matrix));
        }
    }
}

#[test]
fn test_refine_is_idempotent() {
    for seed in 0..20 {
        let challenge = Challenge::generate_instance(seed, 12).unwrap();
        let matrix = &challenge.distance_matrix;
        let mut rng = SmallRng::seed_from_u64(seed);
        let route = initialize_population(1, 12, &mut rng).remove(0);
        let once = refine(&route, matrix);
        let twice = refine(&once, matrix);
        assert_eq!(once, twice);
        assert_eq!(route_length(&once, matrix), route_length(&twice, matrix));
    }
}

#[test]
fn test_refine_short_routes() {
    let challenge = Challenge::generate_instance(1, 3).unwrap();
    let matrix = &challenge.distance_matrix;
    assert_eq!(refine(&[0, 1, 2, 0], matrix), vec![0, 1, 2, 0]);
    assert_eq!(refine(&[0, 1, 0], &matrix[..2]), vec![0, 1, 0]);
    assert_eq!(refine(&[], matrix), Vec::<usize>::new());
}
