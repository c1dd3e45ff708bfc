//! Timing harness for the calibration sweeps.

use std::time::{Duration, Instant};

/// Sorted timing samples from repeated runs of one benchmark closure.
#[derive(Debug, Clone)]
pub struct Samples {
    pub name: String,
    durations: Vec<Duration>,
}

impl Samples {
    #[must_use]
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    #[must_use]
    pub fn min(&self) -> Duration {
        self.durations.first().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn max(&self) -> Duration {
        self.durations.last().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn median(&self) -> Duration {
        let n = self.durations.len();
        if n == 0 {
            return Duration::ZERO;
        }
        if n % 2 == 1 {
            self.durations[n / 2]
        } else {
            (self.durations[n / 2 - 1] + self.durations[n / 2]) / 2
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mean(&self) -> Duration {
        let n = self.durations.len();
        if n == 0 {
            return Duration::ZERO;
        }
        self.durations.iter().sum::<Duration>() / n as u32
    }
}

/// Run `f` for `warmup` unmeasured iterations, then `runs` measured ones.
pub fn sample<F>(name: &str, warmup: u32, runs: u32, mut f: F) -> Samples
where
    F: FnMut(),
{
    for _ in 0..warmup {
        f();
    }

    let mut durations = Vec::with_capacity(runs as usize);
    for _ in 0..runs {
        let start = Instant::now();
        f();
        durations.push(start.elapsed());
    }
    durations.sort();

    Samples {
        name: name.to_string(),
        durations,
    }
}

/// Median wall-clock time of `runs` iterations, with one warmup run.
pub fn time_median<F>(runs: u32, f: F) -> Duration
where
    F: FnMut(),
{
    sample("", 1, runs, f).median()
}
