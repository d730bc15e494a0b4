use rand::{rngs::SmallRng, SeedableRng};
use salesman_algorithms::{
    genetic::{
        crossover, elite_count, fitness, initialize_population, mutate, next_generation,
        select_parent, GeneticOptimizer,
    },
    Error,
};
use salesman_challenge::{route_length, validate_route, Challenge};

fn best_length(population: &[Vec<usize>], distance_matrix: &[Vec<f64>]) -> f64 {
    population
        .iter()
        .map(|route| route_length(route, distance_matrix))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn test_initialize_population() {
    let mut rng = SmallRng::seed_from_u64(0);
    for num_points in 2..12 {
        let population = initialize_population(25, num_points, &mut rng);
        assert_eq!(population.len(), 25);
        for route in &population {
            assert!(validate_route(route, num_points).is_ok());
        }
    }
}

#[test]
fn test_fitness() {
    assert_eq!(fitness(4.0), 0.25);
    assert_eq!(fitness(0.0), f64::INFINITY);
}

#[test]
fn test_crossover_produces_valid_routes() {
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let num_points = 2 + (seed as usize % 12);
        let parents = initialize_population(2, num_points, &mut rng);
        let child = crossover(&parents[0], &parents[1], &mut rng);
        assert!(
            validate_route(&child, num_points).is_ok(),
            "seed {}: {:?} x {:?} -> {:?}",
            seed,
            parents[0],
            parents[1],
            child
        );
    }
}

#[test]
fn test_crossover_identical_parents() {
    let mut rng = SmallRng::seed_from_u64(5);
    let parent = vec![0, 4, 2, 5, 1, 3, 0];
    for _ in 0..50 {
        assert_eq!(crossover(&parent, &parent, &mut rng), parent);
    }
}

#[test]
fn test_crossover_two_points() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(crossover(&[0, 1, 0], &[0, 1, 0], &mut rng), vec![0, 1, 0]);
}

#[test]
fn test_crossover_keeps_parent_b_order_outside_slice() {
    // parent_a and parent_b are reverses of each other, so every filled
    // position outside the copied slice must appear in parent_b's order
    let parent_a = vec![0, 1, 2, 3, 4, 5, 6, 7, 0];
    let parent_b = vec![0, 7, 6, 5, 4, 3, 2, 1, 0];
    for seed in 0..100 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let child = crossover(&parent_a, &parent_b, &mut rng);
        assert!(validate_route(&child, 8).is_ok());
        let from_b: Vec<usize> = child[1..8]
            .iter()
            .enumerate()
            .filter(|&(i, &node)| parent_a[i + 1] != node)
            .map(|(_, &node)| node)
            .collect();
        for w in from_b.windows(2) {
            assert!(w[0] > w[1], "seed {}: {:?}", seed, child);
        }
    }
}

#[test]
fn test_select_parent_single_individual() {
    let mut rng = SmallRng::seed_from_u64(2);
    let population = vec![vec![0, 2, 1, 0]];
    for _ in 0..20 {
        assert_eq!(
            select_parent(&population, &[0.1], &mut rng),
            Some(&population[0])
        );
    }
    assert_eq!(select_parent(&[], &[], &mut rng), None);
}

#[test]
fn test_select_parent_weights() {
    let mut rng = SmallRng::seed_from_u64(3);
    let population = vec![vec![0, 1, 2, 0], vec![0, 2, 1, 0], vec![0, 1, 2, 0]];

    for _ in 0..100 {
        assert_eq!(
            select_parent(&population, &[0.0, 1.0, 0.0], &mut rng),
            Some(&population[1])
        );
        assert_eq!(
            select_parent(&population, &[1.0, f64::INFINITY, 2.0], &mut rng),
            Some(&population[1])
        );
    }

    let mut second = 0;
    for _ in 0..10_000 {
        let picked = select_parent(&population[..2], &[1.0, 3.0], &mut rng).unwrap();
        if picked == &population[1] {
            second += 1;
        }
    }
    assert!((7_000..8_000).contains(&second), "picked {}", second);
}

#[test]
fn test_mutate_rates() {
    let route = vec![0, 1, 2, 3, 4, 5, 0];
    for seed in 0..500 {
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut unchanged = route.clone();
        assert!(!mutate(&mut unchanged, 0.0, &mut rng));
        assert_eq!(unchanged, route);

        let mut swapped = route.clone();
        assert!(mutate(&mut swapped, 1.0, &mut rng));
        assert!(validate_route(&swapped, 6).is_ok());
        let differences = swapped.iter().zip(&route).filter(|(a, b)| a != b).count();
        assert_eq!(differences, 2);
    }

    let mut rng = SmallRng::seed_from_u64(0);
    let mut short = vec![0, 1, 0];
    assert!(!mutate(&mut short, 1.0, &mut rng));
    assert_eq!(short, vec![0, 1, 0]);
}

#[test]
fn test_elite_count() {
    assert_eq!(elite_count(0), 0);
    assert_eq!(elite_count(1), 1);
    assert_eq!(elite_count(3), 1);
    assert_eq!(elite_count(8), 2);
    assert_eq!(elite_count(20), 5);
}

#[test]
fn test_next_generation_keeps_best() {
    let challenge = Challenge::generate_instance(9, 12).unwrap();
    let matrix = &challenge.distance_matrix;
    let mut rng = SmallRng::seed_from_u64(9);
    let mut population = initialize_population(20, 12, &mut rng);
    let mut best = best_length(&population, matrix);
    for _ in 0..50 {
        population = next_generation(&population, matrix, 0.2, &mut rng);
        assert_eq!(population.len(), 20);
        for route in &population {
            assert!(validate_route(route, 12).is_ok());
        }
        let next_best = best_length(&population, matrix);
        assert!(next_best <= best);
        best = next_best;
    }
}

#[test]
fn test_next_generation_single_individual() {
    let challenge = Challenge::generate_instance(4, 6).unwrap();
    let mut rng = SmallRng::seed_from_u64(4);
    let population = initialize_population(1, 6, &mut rng);
    let next = next_generation(&population, &challenge.distance_matrix, 1.0, &mut rng);
    assert_eq!(next, population);
}

#[test]
fn test_genetic_optimizer() {
    let challenge = Challenge::generate_instance(21, 10).unwrap();
    let optimizer = GeneticOptimizer::new(50, 20, 0.2).unwrap();

    let a = optimizer.run(&challenge.distance_matrix, &mut SmallRng::seed_from_u64(8));
    let b = optimizer.run(&challenge.distance_matrix, &mut SmallRng::seed_from_u64(8));
    assert_eq!(a, b);
    assert!(validate_route(&a, 10).is_ok());

    let single = GeneticOptimizer::new(10, 1, 0.5).unwrap();
    let route = single.run(&challenge.distance_matrix, &mut SmallRng::seed_from_u64(8));
    assert!(validate_route(&route, 10).is_ok());

    assert!(GeneticOptimizer::new(10, 0, 0.5).is_err());
    assert!(matches!(
        GeneticOptimizer::new(0, 5, 0.2),
        Err(Error::Configuration(_))
    ));
    assert!(GeneticOptimizer::new(10, 5, 1.5).is_err());
    assert!(GeneticOptimizer::new(10, 5, f64::NAN).is_err());
}
