use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "graphwalk workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmarks with and without the `tracing` feature
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run this bench target
        #[arg(long)]
        bench: Option<String>,
    },
}

/// A feature configuration to benchmark, saved as a criterion baseline.
struct Variant {
    baseline: &'static str,
    features: &'static [&'static str],
}

const VARIANTS: &[Variant] = &[
    Variant {
        baseline: "plain",
        features: &[],
    },
    Variant {
        baseline: "traced",
        features: &["tracing"],
    },
];

const BENCHES: &[&str] = &["search_benchmark", "lazy_cache_benchmark", "min_cut_benchmark"];

/// The part of criterion's `estimates.json` the report needs.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            bench,
        } => {
            if !report_only {
                let targets: Vec<&str> = match bench.as_deref() {
                    Some(name) => {
                        if !BENCHES.contains(&name) {
                            anyhow::bail!("unknown bench target `{name}`, expected one of {BENCHES:?}");
                        }
                        vec![name]
                    }
                    None => BENCHES.to_vec(),
                };
                run_benchmarks(&targets, quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(targets: &[&str], quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    for variant in VARIANTS {
        println!("\n>>> Benchmarking variant: {}", variant.baseline);
        let start = Instant::now();

        for target in targets {
            let mut cmd = Command::new("cargo");
            cmd.env("CARGO_INCREMENTAL", "0");

            cmd.args(["bench", "-p", "graphwalk", "--bench", target])
                .arg("--no-default-features");
            if !variant.features.is_empty() {
                cmd.arg("--features").arg(variant.features.join(","));
            }

            // Args for the test runner (Criterion) go after --
            cmd.arg("--");
            cmd.arg("--save-baseline").arg(variant.baseline);

            if quick {
                cmd.arg("--measurement-time").arg("0.1");
                cmd.arg("--noplot");
                cmd.arg("--sample-size").arg("10");
            }

            let status = cmd
                .status()
                .with_context(|| format!("Failed to run {target} for {}", variant.baseline))?;

            if !status.success() {
                eprintln!("Warning: {target} failed for {}", variant.baseline);
            }
        }

        println!("Finished {} in {:.2?}", variant.baseline, start.elapsed());
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for variant in VARIANTS {
        write!(file, " {} (mean) |", variant.baseline)?;
    }
    writeln!(file, " traced / plain |")?;

    write!(file, "|---|")?;
    for _ in VARIANTS {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for (workload, timings) in &results {
        write!(file, "| {workload} |")?;
        for variant in VARIANTS {
            match timings.get(variant.baseline) {
                Some(&ns) => write!(file, " {} |", format_duration(ns))?,
                None => write!(file, " N/A |")?,
            }
        }
        match (timings.get("traced"), timings.get("plain")) {
            (Some(traced), Some(plain)) if *plain > 0.0 => {
                writeln!(file, " **{:.2}x** |", traced / plain)?;
            }
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_duration(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

/// Walks criterion's output tree collecting `workload -> baseline -> mean ns`.
///
/// Layout: `<group>/<bench>/<baseline>/estimates.json`; the workload name is
/// the path between `target/criterion` and the baseline directory.
fn collect_results(root: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(e) => e,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
                continue;
            }

            let Some(baseline_dir) = path.parent() else { continue };
            let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if !VARIANTS.iter().any(|v| v.baseline == baseline) {
                continue;
            }
            let Some(workload_dir) = baseline_dir.parent() else { continue };
            let Ok(workload) = workload_dir.strip_prefix(root) else { continue };

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let estimates: Estimates = serde_json::from_str(&content)
                .with_context(|| format!("Malformed {}", path.display()))?;

            if estimates.mean.point_estimate > 0.0 {
                results
                    .entry(workload.display().to_string())
                    .or_default()
                    .insert(baseline.to_string(), estimates.mean.point_estimate);
            }
        }
    }

    Ok(())
}
