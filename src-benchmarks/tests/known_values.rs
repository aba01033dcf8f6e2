use ndarray::Array1;
use optim_benchmarks::*;
use std::f64::consts::PI;

fn v(values: &[f64]) -> Array1<f64> {
    Array1::from_vec(values.to_vec())
}

#[test]
fn test_hand_computed_values() {
    assert_eq!(schwefel_max(&v(&[3.0, -7.0, 2.0])).unwrap(), 7.0);
    assert_eq!(schwefel_absolute(&v(&[1.0, 2.0, 3.0])).unwrap(), 12.0);
    assert_eq!(quartic(&v(&[1.0, 2.0]), &QuarticParams::default()).unwrap(), 33.0);
    assert_eq!(quartic(&v(&[1.0, 2.0]), &QuarticParams { power: 2 }).unwrap(), 9.0);
    assert_eq!(schwefel_double_sum(&v(&[1.0, 2.0, 3.0])).unwrap(), 46.0);
    assert_eq!(sphere(&v(&[1.0, 2.0, 3.0])).unwrap(), 14.0);
    assert_eq!(tenth_power(&v(&[1.0, -2.0])).unwrap(), 1025.0);
    assert_eq!(absolute(&v(&[-1.5, 2.0])).unwrap(), 3.5);
    assert_eq!(rosenbrock(&v(&[0.0, 0.0])).unwrap(), 1.0);
    assert_eq!(rosenbrock(&v(&[1.0, 2.0])).unwrap(), 100.0);
}

#[test]
fn test_step_plateaus() {
    // floor(0.9) = 0, floor(1.1) = 1, floor(-1.1) = -2
    assert_eq!(step(&v(&[0.4, 0.6, -1.6])).unwrap(), 5.0);
    assert_eq!(step(&v(&[-0.5, 0.49])).unwrap(), 0.0);
    assert_eq!(step(&v(&[0.5])).unwrap(), 1.0);
}

#[test]
fn test_rastrigin_integer_points() {
    let value = rastrigin(&v(&[1.0, 1.0])).unwrap();
    assert!((value - 2.0).abs() < 1e-9, "rastrigin(1, 1) = {}", value);
}

#[test]
fn test_known_minima_in_several_dimensions() {
    let tolerance = 1e-12;
    for n in [1usize, 2, 5, 30] {
        let zeros = Array1::zeros(n);
        assert_eq!(sphere(&zeros).unwrap(), 0.0);
        assert_eq!(rastrigin(&zeros).unwrap(), 0.0);
        assert_eq!(griewank(&zeros).unwrap(), 0.0);
        assert!(ackley(&zeros).unwrap().abs() < tolerance);
        assert_eq!(schwefel_max(&zeros).unwrap(), 0.0);
        assert_eq!(step(&zeros).unwrap(), 0.0);

        let minus_ones = Array1::from_elem(n, -1.0);
        assert!(penalty_1(&minus_ones, &PenaltyParams::penalty_1()).unwrap().abs() < tolerance);

        let ones = Array1::from_elem(n, 1.0);
        assert!(penalty_2(&ones, &PenaltyParams::penalty_2()).unwrap().abs() < tolerance);
        if n >= 2 {
            assert_eq!(rosenbrock(&ones).unwrap(), 0.0);
        }
    }
}

#[test]
fn test_schwefel_sine_minimum_per_dimension() {
    for n in [1usize, 3, 10] {
        let x = Array1::from_elem(n, 420.9687);
        let expected = -418.9829 * n as f64;
        let value = schwefel_sine(&x).unwrap();
        assert!(
            (value - expected).abs() < 1e-3 * n as f64,
            "n={}: expected {}, got {}",
            n,
            expected,
            value
        );
    }
}

#[test]
fn test_ackley_pairwise_literal_form() {
    // 3 (cos 0 + sin 0) + exp(0) per pair
    assert_eq!(ackley_pairwise(&v(&[0.0, 0.0])).unwrap(), 4.0);
    assert_eq!(ackley_pairwise(&v(&[0.0, 0.0, 0.0])).unwrap(), 8.0);

    // product under the root: one zero factor switches the envelope fully on
    let x = v(&[0.0, 5.0]);
    let expected = 3.0 * (1.0 + 10.0f64.sin()) + 1.0;
    assert!((ackley_pairwise(&x).unwrap() - expected).abs() < 1e-12);

    let x = v(&[2.0, 3.0]);
    let expected = 3.0 * (4.0f64.cos() + 6.0f64.sin()) + (-0.2f64 * 6.0).exp();
    assert!((ackley_pairwise(&x).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_sine_envelope_origin() {
    assert_eq!(sine_envelope(&v(&[0.0, 0.0])).unwrap(), 0.0);
    assert_eq!(sine_envelope(&v(&[0.0, 0.0, 0.0])).unwrap(), -0.5);
}

#[test]
fn test_sine_envelope_pairs() {
    // r = 3^2 + 4^2 = 25
    let expected = 0.5 + (5.0f64.sin() - 0.5) / 1.025f64.powi(2);
    assert!((sine_envelope(&v(&[3.0, 4.0])).unwrap() - expected).abs() < 1e-12);

    // pairs (3, 4) and (4, 0): r = 25, then r = 16
    let expected = 0.5
        + (5.0f64.sin() - 0.5) / 1.025f64.powi(2)
        + (4.0f64.sin() - 0.5) / 1.016f64.powi(2);
    assert!((sine_envelope(&v(&[3.0, 4.0, 0.0])).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_griewank_index_scaling() {
    // 1 + (1 + 4) / 4000 - cos(1 / sqrt 1) cos(2 / sqrt 2)
    let expected = 1.00125 - 1.0f64.cos() * 2.0f64.sqrt().cos();
    assert!((griewank(&v(&[1.0, 2.0])).unwrap() - expected).abs() < 1e-12);

    // the divisor grows with the index, so swapping components changes f
    let swapped = 1.00125 - 2.0f64.cos() * (1.0 / 2.0f64.sqrt()).cos();
    assert!((griewank(&v(&[2.0, 1.0])).unwrap() - swapped).abs() < 1e-12);
}

#[test]
fn test_ackley_off_origin() {
    // mean x^2 = 1 and mean cos(2 pi x) = 1: the e terms cancel
    let expected = 20.0 - 20.0 * (-0.2f64).exp();
    assert!((ackley(&v(&[1.0, 1.0])).unwrap() - expected).abs() < 1e-12);

    // mean x^2 = 1/2
    let expected = 20.0 - 20.0 * (-0.2 * 0.5f64.sqrt()).exp();
    assert!((ackley(&v(&[1.0, 0.0])).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_eggholder_sign_convention() {
    // the textbook minimum -959.6407 appears with the opposite sign
    let value = eggholder(&v(&[512.0, 404.2319])).unwrap();
    assert!((value - 959.6407).abs() < 1e-3, "eggholder = {}", value);
}

#[test]
fn test_michalewicz_single_component() {
    // sin(pi/2) * sin(pi/4)^4 = 1/4
    let value = michalewicz(&v(&[PI / 2.0]), &MichalewiczParams::default()).unwrap();
    assert!((value + 0.25).abs() < 1e-12);

    // m = 1 squares the inner sine instead
    let value = michalewicz(&v(&[PI / 2.0]), &MichalewiczParams { m: 1 }).unwrap();
    assert!((value + 0.5).abs() < 1e-12);
}

#[test]
fn test_michalewicz_index_weight() {
    // x = (pi/2, pi/2): the second term sees 2 (pi/2)^2 / pi = pi/2
    // m = 1: 1 * sin(pi/4)^2 + 1 * sin(pi/2)^2 = 1.5
    let x = v(&[PI / 2.0, PI / 2.0]);
    let value = michalewicz(&x, &MichalewiczParams { m: 1 }).unwrap();
    assert!((value + 1.5).abs() < 1e-12);

    // m = 2: 1/4 + 1
    let value = michalewicz(&x, &MichalewiczParams::default()).unwrap();
    assert!((value + 1.25).abs() < 1e-12);
}

#[test]
fn test_shekel_foxhole_wells() {
    let params = ShekelFoxholeParams::default();

    // first well has a zero denominator: the sum diverges and f = 0
    assert_eq!(shekel_foxhole(&v(&[-32.0, -32.0]), &params).unwrap(), 0.0);

    // second well contributes 1 / (1 + 0)
    let value = shekel_foxhole(&v(&[-16.0, -32.0]), &params).unwrap();
    assert!((value - 1.0 / 1.002).abs() < 1e-4, "f(-16, -32) = {}", value);

    // far away every well is negligible and f approaches 1 / 0.002
    let value = shekel_foxhole(&v(&[1000.0, 1000.0]), &params).unwrap();
    assert!((value - 500.0).abs() < 1e-6);
}

#[test]
fn test_penalty_1_components() {
    // y = (1, 4.25): only the tail term and u(12) = 100 * 2^4 remain
    let x = v(&[-1.0, 12.0]);
    let expected = PI / 2.0 * 3.25f64.powi(2) + 1600.0;
    let value = penalty_1(&x, &PenaltyParams::penalty_1()).unwrap();
    assert!((value - expected).abs() < 1e-9, "penalty_1 = {}", value);
}

#[test]
fn test_penalty_2_components() {
    // tail (6 - 1)^2 counted once for the single pair, plus u(6) = 100
    let x = v(&[1.0, 6.0]);
    let value = penalty_2(&x, &PenaltyParams::penalty_2()).unwrap();
    assert!((value - 102.5).abs() < 1e-9, "penalty_2 = {}", value);
}

#[test]
fn test_penalty_boundaries() {
    for params in [PenaltyParams::penalty_1(), PenaltyParams::penalty_2()] {
        let a = params.a;
        assert_eq!(penalty_u(a, &params), 0.0);
        assert_eq!(penalty_u(-a, &params), 0.0);
        assert_eq!(penalty_u(a + 1.0, &params), params.k);
        assert_eq!(penalty_u(-a - 2.0, &params), params.k * 16.0);
        assert!(penalty_u(a + 1e-6, &params) > 0.0);
    }

    // the penalty is exactly the difference made by k
    let unpenalized = PenaltyParams { k: 0.0, ..PenaltyParams::penalty_1() };
    for (x, expected) in [(10.0, 0.0), (-10.0, 0.0), (10.5, 6.25), (-11.0, 100.0)] {
        let x = v(&[x]);
        let diff = penalty_1(&x, &PenaltyParams::penalty_1()).unwrap()
            - penalty_1(&x, &unpenalized).unwrap();
        assert!((diff - expected).abs() < 1e-9, "x = {}: diff {}", x[0], diff);
    }
}

#[test]
fn test_non_finite_inputs_propagate() {
    let x = v(&[f64::NAN, 1.0]);
    for id in FunctionId::ALL {
        if id == FunctionId::FletcherPowell {
            continue;
        }
        let value = evaluate(id, &x, &FunctionParams::default()).unwrap();
        assert!(value.is_nan(), "{} gave {}", id, value);
    }

    let x = v(&[f64::INFINITY, 0.0]);
    assert_eq!(sphere(&x).unwrap(), f64::INFINITY);
    assert!(penalty_1(&x, &PenaltyParams::penalty_1()).unwrap().is_nan());
}
