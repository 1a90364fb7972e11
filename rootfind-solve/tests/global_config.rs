//! The process-wide config is shared by every test in a binary, so all
//! global mutation lives in this single test.

use std::f64::consts::SQRT_2;

use approx::assert_relative_eq;
use rootfind_solve::{Config, ConfigError, ErrorKind, find, infallible};

fn square_minus_two(x: f64) -> f64 {
    x * x - 2.0
}

#[test]
fn find_reads_global_config_at_call_time() {
    assert_eq!(Config::global(), Config::DEFAULT);

    let precise = find(infallible(square_minus_two), 1.0, 2.0).expect("default config");
    assert_relative_eq!(precise, SQRT_2, epsilon = 1e-5);

    let coarse = Config {
        precision: 1e-2,
        ..Config::DEFAULT
    };
    let previous = Config::set_global(coarse).expect("valid config");
    assert_eq!(previous, Config::DEFAULT);

    let rough = find(infallible(square_minus_two), 1.0, 2.0).expect("coarse config");
    assert!((rough * rough - 2.0).abs() < 1e-2);

    let capped = Config {
        max_iteration: 2,
        ..coarse
    };
    Config::set_global(capped).expect("valid config");
    let err = find(infallible(square_minus_two), 1.0, 2.0).expect_err("too few iterations");
    assert_eq!(err.kind(), ErrorKind::MaximalIteration);

    let invalid = Config {
        precision: f64::NAN,
        ..Config::DEFAULT
    };
    assert!(matches!(
        Config::set_global(invalid),
        Err(ConfigError::Precision(_))
    ));
    assert_eq!(Config::global(), capped);

    Config::set_global(Config::DEFAULT).expect("valid config");
    let restored = find(infallible(square_minus_two), 1.0, 2.0).expect("default config");
    assert_relative_eq!(restored, precise);
}
