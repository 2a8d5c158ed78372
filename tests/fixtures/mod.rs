//! Shared fixtures for integration testing

use elo_rating::{EloCalculator, EloOptions};

/// A match scenario with its exact IEEE-754 expectation for player A
#[derive(Debug, Clone, Copy)]
pub struct DeltaScenario {
    pub name: &'static str,
    pub options: EloOptions,
    pub rating_a: f64,
    pub rating_b: f64,
    pub score: f64,
    pub expected_delta: f64,
}

/// Known rating deltas
pub fn delta_scenarios() -> Vec<DeltaScenario> {
    vec![
        DeltaScenario {
            name: "win with defaults",
            options: EloOptions::new(),
            rating_a: 2000.0,
            rating_b: 1600.0,
            score: 1.0,
            expected_delta: 2.1818181818181825,
        },
        DeltaScenario {
            name: "win with k=60",
            options: EloOptions::new().with_k(60.0),
            rating_a: 2000.0,
            rating_b: 1600.0,
            score: 1.0,
            expected_delta: 5.454545454545457,
        },
        DeltaScenario {
            name: "win with k=60 n=1200",
            options: EloOptions::new().with_k(60.0).with_n(1200.0),
            rating_a: 2000.0,
            rating_b: 1600.0,
            score: 1.0,
            expected_delta: 19.020840783168524,
        },
        DeltaScenario {
            name: "loss between equals",
            options: EloOptions::new(),
            rating_a: 2000.0,
            rating_b: 2000.0,
            score: 0.0,
            expected_delta: -12.0,
        },
        DeltaScenario {
            name: "draw between equals",
            options: EloOptions::new(),
            rating_a: 2000.0,
            rating_b: 2000.0,
            score: 0.5,
            expected_delta: 0.0,
        },
    ]
}

/// Known outcomes of a 2000-rated player losing to a 1400-rated one, as JSON
pub fn outcome_scenarios() -> Vec<(EloOptions, &'static str)> {
    vec![
        (
            EloOptions::new(),
            r#"{"a":{"delta":-23.264317679238825,"rating":1976.7356823207613},"b":{"delta":23.264317679238825,"rating":1423.2643176792387}}"#,
        ),
        (
            EloOptions::new().with_k(60.0),
            r#"{"a":{"delta":-58.160794198097065,"rating":1941.8392058019028},"b":{"delta":58.160794198097065,"rating":1458.1607941980972}}"#,
        ),
        (
            EloOptions::new().with_k(60.0).with_n(100.0),
            r#"{"a":{"delta":-59.99994000006,"rating":1940.00005999994},"b":{"delta":59.99994000006,"rating":1459.99994000006}}"#,
        ),
    ]
}

/// Calculator configured from scenario options
pub fn calculator_for(options: EloOptions) -> EloCalculator {
    init_tracing();
    EloCalculator::new(options)
}

/// Install a test-friendly tracing subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elo_rating=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
