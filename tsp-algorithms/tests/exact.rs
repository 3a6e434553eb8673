use tsp_algorithms::{brute_force, held_karp, solve, Solved};
use tsp_challenges::{
    example_graph, verify_tour, DistanceMatrix, GraphSettings, EXAMPLE_GRAPH_OPTIMAL_COST,
};
use tsp_structs::core::Method;

fn random_matrix(seed: u64, num_cities: usize) -> DistanceMatrix {
    DistanceMatrix::generate_instance(
        seed,
        &GraphSettings {
            num_cities,
            min_dist: 1,
            max_dist: 100,
        },
    )
    .unwrap()
}

fn constant_matrix(n: usize, w: f64) -> DistanceMatrix {
    DistanceMatrix::new(
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { w }).collect())
            .collect(),
    )
    .unwrap()
}

fn factorial(k: u64) -> u64 {
    (1..=k).product()
}

fn binomial(n: u64, k: u64) -> u64 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

fn expected_states(n: u64) -> u64 {
    (1..n).map(|k| binomial(n - 1, k) * k).sum()
}

fn assert_valid_cycle(matrix: &DistanceMatrix, solved: &Solved) {
    let n = matrix.n();
    let path = &solved.tour.path;
    assert_eq!(path.len(), n + 1);
    assert_eq!(path[0], 0);
    assert_eq!(path[n], 0);
    let mut inner = path[1..n].to_vec();
    inner.sort();
    assert_eq!(inner, (1..n).collect::<Vec<_>>());
    verify_tour(matrix, &solved.tour).unwrap();
}

#[test]
fn test_solvers_agree_on_random_graphs() {
    for n in 1..=8 {
        for seed in 0..5 {
            let matrix = random_matrix(seed * 100 + n as u64, n);
            let bf = brute_force::solve(&matrix).unwrap();
            let hk = held_karp::solve(&matrix).unwrap();
            assert_eq!(bf.tour.cost, hk.tour.cost, "n={} seed={}", n, seed);
            assert_valid_cycle(&matrix, &bf);
            assert_valid_cycle(&matrix, &hk);
        }
    }
}

#[test]
fn test_brute_force_explores_all_permutations() {
    for n in 1..=8 {
        let solved = brute_force::solve(&random_matrix(n as u64, n)).unwrap();
        assert_eq!(solved.explored, factorial(n as u64 - 1), "n={}", n);
        assert_eq!(solved.explored, brute_force::num_permutations(n));
    }
}

#[test]
fn test_held_karp_state_count() {
    for n in 1..=10 {
        let solved = held_karp::solve(&random_matrix(n as u64, n)).unwrap();
        assert_eq!(solved.explored, expected_states(n as u64), "n={}", n);
        assert_eq!(solved.explored, held_karp::num_states(n));
    }
}

#[test]
fn test_constant_weights() {
    for n in 2..=7 {
        let matrix = constant_matrix(n, 3.5);
        let expected = n as f64 * 3.5;
        assert_eq!(brute_force::solve(&matrix).unwrap().tour.cost, expected);
        assert_eq!(held_karp::solve(&matrix).unwrap().tour.cost, expected);
    }
}

#[test]
fn test_three_cities_with_tied_directions() {
    let matrix = DistanceMatrix::new(vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 0.0, 3.0],
        vec![2.0, 3.0, 0.0],
    ])
    .unwrap();

    let bf = brute_force::solve(&matrix).unwrap();
    assert_eq!(bf.tour.cost, 6.0);
    // the first enumerated ordering wins the tie
    assert_eq!(bf.tour.path, vec![0, 1, 2, 0]);
    assert_eq!(bf.explored, 2);

    let hk = held_karp::solve(&matrix).unwrap();
    assert_eq!(hk.tour.cost, 6.0);
    assert_valid_cycle(&matrix, &hk);
    assert_eq!(hk.explored, 4);
}

#[test]
fn test_example_graph_golden_cost() {
    let matrix = example_graph();

    let bf = brute_force::solve(&matrix).unwrap();
    assert_eq!(bf.tour.cost, EXAMPLE_GRAPH_OPTIMAL_COST);
    assert_eq!(bf.tour.path, vec![0, 1, 3, 4, 5, 2, 0]);
    assert_eq!(bf.explored, 120);

    let hk = held_karp::solve(&matrix).unwrap();
    assert_eq!(hk.tour.cost, EXAMPLE_GRAPH_OPTIMAL_COST);
    assert_eq!(hk.tour.path, vec![0, 2, 5, 4, 3, 1, 0]);
    assert_eq!(hk.explored, 80);
}

#[test]
fn test_single_city() {
    let matrix = DistanceMatrix::new(vec![vec![0.0]]).unwrap();
    for method in Method::ALL {
        let solved = solve(method, &matrix).unwrap();
        assert_eq!(solved.tour.path, vec![0, 0]);
        assert_eq!(solved.tour.cost, 0.0);
    }
    assert_eq!(brute_force::solve(&matrix).unwrap().explored, 1);
    assert_eq!(held_karp::solve(&matrix).unwrap().explored, 0);
}

#[test]
fn test_two_cities() {
    let matrix = DistanceMatrix::new(vec![vec![0.0, 4.0], vec![4.0, 0.0]]).unwrap();
    for method in Method::ALL {
        let solved = solve(method, &matrix).unwrap();
        assert_eq!(solved.tour.path, vec![0, 1, 0]);
        assert_eq!(solved.tour.cost, 8.0);
        assert_eq!(solved.explored, 1);
    }
}

#[test]
fn test_deterministic_and_input_untouched() {
    let matrix = random_matrix(99, 7);
    let snapshot = matrix.clone();
    for method in Method::ALL {
        let first = solve(method, &matrix).unwrap();
        let second = solve(method, &matrix).unwrap();
        assert_eq!(first, second);
    }
    assert_eq!(matrix, snapshot);
}

#[test]
fn test_overflowing_costs_fail_instead_of_returning_a_tour() {
    let huge = f64::MAX;
    let matrix = DistanceMatrix::new(vec![
        vec![0.0, huge, huge],
        vec![huge, 0.0, huge],
        vec![huge, huge, 0.0],
    ])
    .unwrap();
    assert!(brute_force::solve(&matrix).is_err());
    assert!(held_karp::solve(&matrix).is_err());
}
