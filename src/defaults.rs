//! Shared default values for simulation configuration.
//! These values are used by the `sigevo` binary and as baseline parameters in
//! tests and benchmarks.

pub const POPULATION_SIZE: usize = 100;

// Initial genotype (all organisms start identical)
pub const INIT_PREF_POS: f64 = 0.5;
pub const INIT_PREF_VALUE: f64 = 0.5;
pub const INIT_SIGNAL_POS: f64 = 0.5;
pub const INIT_SIGNAL_VALUE: f64 = 0.5;

// Mate choice
pub const LOVE_SLOPE: f64 = -8.0;

// Mutation effect magnitudes
pub const POS_MUT_EFFECT: f64 = 0.01;
pub const VALUE_MUT_EFFECT: f64 = 0.1;

// Per-field mutation probabilities (values >= 1 mean "mutate every time")
pub const PREF_POS_MUT_PROB: f64 = 1.0;
pub const PREF_VALUE_MUT_PROB: f64 = 1.0;
pub const SIGNAL_POS_MUT_PROB: f64 = 1.0;
pub const SIGNAL_VALUE_MUT_PROB: f64 = 1.0;

// Driver loop
pub const UPDATES: u64 = 10_000_000;
pub const REPORT_EVERY: u64 = 1000;
