//! QSim - sparse quantum register simulator
//! Command-line runner for small circuits and textbook quantum algorithms

mod config;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use config::RunnerConfig;
use qsim_algorithms::{
    bernstein_vazirani, deutsch, deutsch_jozsa, grover, hidden_string_function, shor, super_dense,
};
use qsim_core::{BitQualifier, QState};
use serde_json::json;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qsim")]
#[command(author = "QSim Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "QSim - sparse quantum register simulator", long_about = None)]
struct Cli {
    /// Seed for measurement randomness (overrides QSIM_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Tracing filter directive (overrides QSIM_LOG), e.g. "qsim_core=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute (f(0) + f(1)) mod 2 with a single call to f
    Deutsch {
        #[arg(short, long, value_enum)]
        function: SingleBitFunction,
    },

    /// Decide whether a function is constant or balanced
    DeutschJozsa {
        /// Number of input bits
        #[arg(short, long, default_value_t = 3)]
        bits: usize,

        #[arg(short, long, value_enum)]
        function: PromiseFunction,
    },

    /// Recover the hidden string u of f(x) = x·u
    BernsteinVazirani {
        /// Hidden bit string, e.g. 01101
        #[arg(long, value_name = "BITS")]
        hidden: String,
    },

    /// Send two classical bits through one entangled qubit
    SuperDense {
        /// Two-bit message, e.g. 10
        #[arg(short, long, value_name = "BITS")]
        message: String,
    },

    /// Search for the only x with f(x) = 1
    Grover {
        /// Number of input bits
        #[arg(short, long, default_value_t = 8)]
        bits: usize,

        /// The value f marks
        #[arg(short, long)]
        target: u64,
    },

    /// Find a non-trivial factor with Shor's algorithm
    Factor {
        /// Number to factor (a product of two distinct primes works best)
        #[arg(short, long)]
        n: u64,
    },

    /// Apply the quantum Fourier transform to a basis state
    Qft {
        /// Basis state, e.g. 001 or |001>
        #[arg(short, long)]
        state: QState,

        /// Bits to transform: all, 3, 2,0 or 1..2
        #[arg(short, long, default_value = "all")]
        bits: BitQualifier,
    },

    /// Prepare a basis state, optionally apply Hadamards, and measure
    Measure {
        /// Basis state, e.g. 1000
        #[arg(short, long)]
        state: QState,

        /// Bits that receive a Hadamard before measuring
        #[arg(long, value_name = "BITS")]
        hadamard: Option<BitQualifier>,

        /// Bits to measure
        #[arg(short, long, default_value = "all")]
        bits: BitQualifier,
    },
}

/// Funções de um bit para o algoritmo de Deutsch
#[derive(Clone, Copy, Debug, ValueEnum)]
enum SingleBitFunction {
    Identity,
    Not,
    Zero,
    One,
}

impl SingleBitFunction {
    fn eval(self, x: u64) -> u64 {
        match self {
            Self::Identity => x & 1,
            Self::Not => (x + 1) % 2,
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Funções prometidas constantes ou balanceadas
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PromiseFunction {
    Zero,
    One,
    /// Paridade dos bits de entrada
    Parity,
    /// 1 na metade superior do domínio
    Half,
}

impl PromiseFunction {
    fn eval(self, x: u64, num_bits: usize) -> u64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Parity => u64::from(x.count_ones() % 2),
            Self::Half => (x >> (num_bits - 1)) & 1,
        }
    }
}

/// Resultado de um comando: texto para humanos e JSON para `--json`
#[derive(Debug)]
struct Report {
    message: String,
    data: serde_json::Value,
}

impl Report {
    fn new(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = RunnerConfig::from_env().with_overrides(cli.seed, cli.log.clone(), cli.json);
    init_tracing(&config);

    let started = Instant::now();
    match run(cli.command, &config) {
        Ok(report) => {
            if config.json {
                println!("{}", report.data);
            } else {
                println!("{}", report.message);
                println!(
                    "{} {:.3}s",
                    "Time taken:".dimmed(),
                    started.elapsed().as_secs_f64()
                );
            }
        }
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(config: &RunnerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands, config: &RunnerConfig) -> anyhow::Result<Report> {
    let mut rng = config.rng();
    tracing::info!(seed = ?config.seed, "starting run");

    match command {
        Commands::Deutsch { function } => {
            let result = deutsch(|x| function.eval(x), &mut rng)?;
            Ok(Report::new(
                format!("{} {}", "(f(0) + f(1)) mod 2 =".bold(), result.to_string().cyan()),
                json!({
                    "algorithm": "deutsch",
                    "function": format!("{function:?}"),
                    "result": result,
                }),
            ))
        }

        Commands::DeutschJozsa { bits, function } => {
            if bits == 0 {
                bail!("deutsch-jozsa needs at least one input bit");
            }
            let verdict = deutsch_jozsa(bits, |x| function.eval(x, bits), &mut rng)?;
            Ok(Report::new(
                format!("{} {}", "f is".bold(), verdict.to_string().cyan()),
                json!({ "algorithm": "deutsch-jozsa", "bits": bits, "verdict": verdict }),
            ))
        }

        Commands::BernsteinVazirani { hidden } => {
            let f = hidden_string_function(&hidden).context("invalid hidden string")?;
            let found = bernstein_vazirani(f, hidden.trim().len(), &mut rng)?;
            Ok(Report::new(
                format!("{} {}", "Hidden string is:".bold(), found.cyan()),
                json!({ "algorithm": "bernstein-vazirani", "hidden": found }),
            ))
        }

        Commands::SuperDense { message } => {
            let decoded = super_dense(&message, &mut rng)?;
            Ok(Report::new(
                format!("{} {}", "Decoded string is:".bold(), decoded.cyan()),
                json!({ "algorithm": "super-dense", "sent": message, "decoded": decoded }),
            ))
        }

        Commands::Grover { bits, target } => {
            if bits == 0 || bits >= 64 || target >> bits != 0 {
                bail!("target {target} does not fit in {bits} bits");
            }
            let found = grover::search(bits, |x| u64::from(x == target), &mut rng)?;
            Ok(Report::new(
                format!("{} {}", "The desired value is".bold(), found.to_string().cyan()),
                json!({ "algorithm": "grover", "bits": bits, "result": found }),
            ))
        }

        Commands::Factor { n } => {
            let factor =
                shor::factor(n, &mut rng).with_context(|| format!("could not factor {n}"))?;
            Ok(Report::new(
                format!(
                    "{} {} {} {}",
                    "One of the factors of".bold(),
                    n,
                    "is".bold(),
                    factor.to_string().cyan()
                ),
                json!({ "algorithm": "shor", "n": n, "factor": factor }),
            ))
        }

        Commands::Qft { state, bits } => {
            let transformed = state.qft(bits)?;
            Ok(Report::new(
                transformed.to_string(),
                json!({
                    "input": state.to_string(),
                    "output": transformed.to_string(),
                    "state": transformed,
                }),
            ))
        }

        Commands::Measure {
            state,
            hadamard,
            bits,
        } => {
            let prepared = match hadamard {
                Some(hadamard) => state.hadamard(hadamard)?,
                None => state,
            };
            let measurement = prepared.measure_with(bits, &mut rng)?;
            Ok(Report::new(
                format!(
                    "{} {}\n{} {}\n{} {}",
                    "Prepared:".bold(),
                    prepared,
                    "Result:".bold(),
                    measurement.as_bit_string().cyan(),
                    "New state:".bold(),
                    measurement.new_state
                ),
                json!({
                    "prepared": prepared.to_string(),
                    "result": measurement.result,
                    "bits": measurement.as_bit_string(),
                    "newState": measurement.new_state.to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> RunnerConfig {
        RunnerConfig {
            seed: Some(17),
            ..RunnerConfig::default()
        }
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["qsim", "--seed", "3", "--json", "qft", "--state", "001"])
            .unwrap();
        assert_eq!(cli.seed, Some(3));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Qft { bits: BitQualifier::All, .. }));
    }

    #[test]
    fn test_cli_parses_bit_qualifiers() {
        let cli = Cli::try_parse_from([
            "qsim", "measure", "--state", "1000", "--hadamard", "2,0", "--bits", "1..2",
        ])
        .unwrap();
        match cli.command {
            Commands::Measure { hadamard, bits, .. } => {
                assert_eq!(hadamard, Some(BitQualifier::Bits(vec![2, 0])));
                assert_eq!(bits, BitQualifier::Range { from: 1, to: 2 });
            }
            _ => panic!("expected measure"),
        }
        assert!(Cli::try_parse_from(["qsim", "qft", "--state", "012"]).is_err());
    }

    #[test]
    fn test_deutsch_report() {
        let report = run(
            Commands::Deutsch {
                function: SingleBitFunction::Not,
            },
            &seeded(),
        )
        .unwrap();
        assert_eq!(report.data["result"], 1);
    }

    #[test]
    fn test_deutsch_jozsa_report() {
        let report = run(
            Commands::DeutschJozsa { bits: 3, function: PromiseFunction::Half },
            &seeded(),
        )
        .unwrap();
        assert_eq!(report.data["verdict"], "Balanced");
    }

    #[test]
    fn test_qft_report() {
        let report = run(
            Commands::Qft {
                state: "01".parse().unwrap(),
                bits: BitQualifier::All,
            },
            &seeded(),
        )
        .unwrap();
        assert_eq!(report.message, "0.5 |00> + 0.5i |01> - 0.5 |10> - 0.5i |11>");
    }

    #[test]
    fn test_measure_report_collapses() {
        let report = run(
            Commands::Measure {
                state: "1000".parse().unwrap(),
                hadamard: Some(BitQualifier::Bits(vec![2, 0])),
                bits: BitQualifier::Range { from: 1, to: 2 },
            },
            &seeded(),
        )
        .unwrap();
        let result = report.data["result"].as_u64().unwrap();
        assert!(result == 0 || result == 2, "{result}");
    }

    #[test]
    fn test_grover_rejects_wide_target() {
        let err = run(Commands::Grover { bits: 2, target: 9 }, &seeded()).unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn test_factor_even_number() {
        let report = run(Commands::Factor { n: 10 }, &seeded()).unwrap();
        assert_eq!(report.data["factor"], 2);
    }
}
