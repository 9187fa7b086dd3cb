//! Command line self-check: generate random input, sort it, and verify the result.

use std::io::{self, Write};

use clap::Parser;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::check::{check_sorted, CheckError};
use crate::mergesort::mergesort;

/// Sort random integers with mergesort and check the result is in order.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dpv_mergesort", version, long_about = None)]
pub struct DriverConfig {
    /// Number of elements to generate per trial
    #[arg(long, default_value_t = 200)]
    pub len: usize,

    /// Smallest generated value (inclusive)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub min: i32,

    /// Largest generated value (inclusive)
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i32,

    /// Seed for the input generator, random if not given
    #[arg(long)]
    pub seed: Option<u64>,

    /// How many generate-sort-verify rounds to run
    #[arg(long, default_value_t = 1)]
    pub trials: usize,

    /// Don't print the original and sorted arrays
    #[arg(long, short)]
    pub quiet: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            len: 200,
            min: 1,
            max: 100,
            seed: None,
            trials: 1,
            quiet: false,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.min > self.max {
            return Err(DriverError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.trials == 0 {
            return Err(DriverError::NoTrials);
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("at least one trial is required")]
    NoTrials,

    #[error("sorted output failed verification: {0}")]
    Check(#[from] CheckError<i32>),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub trials: usize,
    pub elements_checked: usize,
}

/// Generates `len` values uniformly drawn from `min..=max`.
///
/// Panics if `min > max`, [`DriverConfig::validate`] rejects that case up front.
pub fn generate_input(len: usize, min: i32, max: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new_inclusive(min, max);

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Runs every configured trial, writing the report to `out`.
///
/// Stops at the first trial whose output is out of order.
pub fn run<W: Write>(config: &DriverConfig, out: &mut W) -> Result<RunSummary, DriverError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
    debug!(?config, seed, "starting self-check");

    let mut elements_checked = 0;
    for trial in 0..config.trials {
        let trial_seed = seed.wrapping_add(trial as u64);
        let input = generate_input(config.len, config.min, config.max, trial_seed);

        if config.trials > 1 {
            writeln!(out, "Trial {} (seed {trial_seed})", trial + 1)?;
        }
        if !config.quiet {
            writeln!(out, "Original array: {input:?}")?;
        }

        let sorted = mergesort(&input);

        if !config.quiet {
            writeln!(out, "Sorted   array: {sorted:?}")?;
        }

        verify(&sorted, out)?;
        info!(trial, trial_seed, len = sorted.len(), "trial passed");

        elements_checked += sorted.len();
    }

    Ok(RunSummary {
        seed,
        trials: config.trials,
        elements_checked,
    })
}

/// Checks `sorted` and writes either the offending pair or the success line.
pub fn verify<W: Write>(sorted: &[i32], out: &mut W) -> Result<(), DriverError> {
    if let Err(err) = check_sorted(sorted) {
        writeln!(out, "{err}")?;
        return Err(err.into());
    }

    writeln!(out, "All elements in sorted order: #{}", sorted.len())?;

    Ok(())
}
