//! Application entry point and dispatch.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use anyhow::Result;

use decmath_calibration::CalibrationEngine;
use decmath_core::{fft_mul, karatsuba_mul, mul_with, standard_mul, LongInt, Options};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "decmath", &mut std::io::stdout());
        return Ok(());
    }

    if config.calibrate {
        return run_calibration(config);
    }

    if let Some(ref path) = config.input {
        return run_sum_file(path);
    }

    run_arith(config)
}

fn run_arith(config: &AppConfig) -> Result<()> {
    let lhs = parse_operand(config.lhs.as_deref(), "first positional argument")?;
    let rhs = parse_operand(config.rhs.as_deref(), "second positional argument")?;

    match config.op.as_str() {
        "add" => println!("{}", &lhs + &rhs),
        "sub" => println!("{}", &lhs - &rhs),
        "cmp" => println!("{}", ordering_name(lhs.compare(&rhs))),
        "mul" => run_multiply(config, &lhs, &rhs)?,
        other => return Err(AppError::UnknownOp(other.to_string()).into()),
    }

    Ok(())
}

fn run_multiply(config: &AppConfig, lhs: &LongInt, rhs: &LongInt) -> Result<()> {
    let opts = resolve_options(config);

    let product = match config.algo.as_str() {
        "auto" => timed(config, "auto", || mul_with(lhs, rhs, &opts)),
        "standard" => timed(config, "standard", || standard_mul(lhs, rhs)),
        "karatsuba" => timed(config, "karatsuba", || karatsuba_mul(lhs, rhs)),
        "fft" => timed(config, "fft", || fft_mul(lhs, rhs)),
        "all" => run_all_algorithms(config, lhs, rhs)?,
        other => return Err(AppError::UnknownAlgo(other.to_string()).into()),
    };

    println!("{product}");
    Ok(())
}

/// Run every multiplier and cross-validate the results.
fn run_all_algorithms(config: &AppConfig, lhs: &LongInt, rhs: &LongInt) -> Result<LongInt> {
    let runs: [(&str, fn(&LongInt, &LongInt) -> LongInt); 3] = [
        ("standard", standard_mul),
        ("karatsuba", karatsuba_mul),
        ("fft", fft_mul),
    ];

    let mut reference: Option<(&str, LongInt)> = None;
    for (name, mul) in runs {
        let product = timed(config, name, || mul(lhs, rhs));
        match &reference {
            None => reference = Some((name, product)),
            Some((ref_name, ref_product)) => {
                if product != *ref_product {
                    tracing::error!(reference = *ref_name, candidate = name, "product mismatch");
                    return Err(
                        AppError::Mismatch(ref_product.to_string(), product.to_string()).into(),
                    );
                }
            }
        }
    }

    // runs is non-empty, so reference is always set
    Ok(reference.map(|(_, p)| p).unwrap_or_else(LongInt::zero))
}

/// Sum the decimal integers listed one per line in `path`.
fn run_sum_file(path: &str) -> Result<()> {
    let content = std::fs::read_to_string(path).map_err(AppError::Io)?;

    let mut total = LongInt::zero();
    let mut count = 0usize;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value: LongInt = line.parse().map_err(AppError::Parse)?;
        total = &total + &value;
        count += 1;
    }

    tracing::info!(count, path, "summed input file");
    println!("{total}");
    Ok(())
}

fn run_calibration(config: &AppConfig) -> Result<()> {
    let mut engine = CalibrationEngine::new();
    if !config.quiet {
        engine = engine.with_progress(Box::new(|p| {
            eprintln!("[{}/{}] {}", p.current, p.total, p.step);
        }));
    }

    let profile = engine.calibrate();

    if !config.quiet {
        println!("Calibration complete:");
        println!("  Karatsuba threshold: {} digits", profile.karatsuba_threshold);
        println!("  FFT threshold: {} digits", profile.fft_threshold);
    }

    decmath_calibration::io::save_profile(&profile).map_err(AppError::Io)?;
    Ok(())
}

/// Thresholds come from flags, then the cached tuning profile, then defaults.
fn resolve_options(config: &AppConfig) -> Options {
    let mut opts = Options {
        karatsuba_threshold: config.karatsuba_threshold,
        fft_threshold: config.fft_threshold,
    };

    if opts.karatsuba_threshold == 0 || opts.fft_threshold == 0 {
        let profile = decmath_calibration::cached_or_default();
        if opts.karatsuba_threshold == 0 {
            opts.karatsuba_threshold = profile.karatsuba_threshold;
        }
        if opts.fft_threshold == 0 {
            opts.fft_threshold = profile.fft_threshold;
        }
    }

    opts.normalize()
}

fn parse_operand(raw: Option<&str>, position: &'static str) -> Result<LongInt> {
    let raw = raw.ok_or(AppError::MissingOperand(position))?;
    Ok(raw.parse().map_err(AppError::Parse)?)
}

fn timed<F: FnOnce() -> LongInt>(config: &AppConfig, name: &str, f: F) -> LongInt {
    let start = Instant::now();
    let result = f();
    report_timing(config, name, start.elapsed());
    result
}

fn report_timing(config: &AppConfig, name: &str, elapsed: Duration) {
    if config.timings && !config.quiet {
        eprintln!("{name}: {elapsed:.3?}");
    }
}

fn ordering_name(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}
