//! Command-line arguments and top-level execution for the `artbench` binary.
//!
//! With no arguments the binary runs the reference workload: 10000
//! iterations of the simple-state monitor on a fair coin seeded with 0.

use clap::Parser;
use log::{debug, error};

use artbench_engine::{ConfigError, Harness, HarnessConfig, RunReport, DEFAULT_ITERATIONS};
use artbench_hooks::HookKind;

/// Timed runtime-verification driver.
#[derive(Clone, Debug, Parser)]
#[command(name = "artbench", version, about)]
pub struct Args {
    /// Number of hook invocations.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// Seed for the nondeterminism coin.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Hook to drive: noop, anti-op, nondet-anti-op, simple-state, sign-check.
    #[arg(long, default_value_t = HookKind::default())]
    pub hook: HookKind,

    /// Probability that the coin yields 1.
    #[arg(long, default_value_t = 0.5)]
    pub p_one: f64,

    /// Record and log (at debug level) every iteration's accumulator values.
    #[arg(long)]
    pub trace: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: 0,
            hook: HookKind::default(),
            p_one: 0.5,
            trace: false,
        }
    }
}

impl Args {
    /// Map the arguments onto a [`HarnessConfig`].
    pub fn to_config(&self) -> HarnessConfig {
        HarnessConfig {
            iterations: self.iterations,
            seed: self.seed,
            p_one: self.p_one,
            record_trace: self.trace,
            ..HarnessConfig::default()
        }
    }
}

/// Build the harness and run the selected hook.
///
/// Configuration errors are returned, never raised; the binary logs them
/// and still exits 0.
pub fn execute(args: &Args) -> Result<RunReport, ConfigError> {
    let mut harness = Harness::new(args.to_config())?;
    let mut hook = args.hook.build();
    let report = harness.run(&mut hook);

    if let Some(trace) = &report.trace {
        for step in trace {
            debug!(
                "iteration {}: {} -> hook -> {} -> +{} -> {}",
                step.iteration, step.before_hook, step.after_hook, step.iteration, step.after_add
            );
        }
    }
    Ok(report)
}

/// Run with `args` and render the stdout line, if any.
///
/// Returns `None` after logging when the configuration is invalid.
pub fn run_to_line(args: &Args) -> Option<String> {
    match execute(args) {
        Ok(report) => Some(report.to_string()),
        Err(e) => {
            error!("invalid configuration: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_match_defaults() {
        let parsed = Args::try_parse_from(["artbench"]).unwrap();
        assert_eq!(parsed.iterations, 10_000);
        assert_eq!(parsed.seed, 0);
        assert_eq!(parsed.hook, HookKind::SimpleState);
        assert_eq!(parsed.p_one, 0.5);
        assert!(!parsed.trace);
        assert_eq!(parsed.to_config(), Args::default().to_config());
    }

    #[test]
    fn flags_parse() {
        let parsed = Args::try_parse_from([
            "artbench",
            "--iterations",
            "3",
            "--hook",
            "anti-op",
            "--seed",
            "9",
            "--p-one",
            "0.25",
            "--trace",
        ])
        .unwrap();
        assert_eq!(parsed.iterations, 3);
        assert_eq!(parsed.hook, HookKind::AntiOp);
        assert_eq!(parsed.seed, 9);
        assert_eq!(parsed.p_one, 0.25);
        assert!(parsed.trace);
    }

    #[test]
    fn unknown_hook_is_a_usage_error() {
        assert!(Args::try_parse_from(["artbench", "--hook", "flip"]).is_err());
    }

    #[test]
    fn execute_anti_op_three() {
        let args = Args {
            iterations: 3,
            hook: HookKind::AntiOp,
            trace: true,
            ..Args::default()
        };
        let report = execute(&args).unwrap();
        assert_eq!(report.sum(), 1);
        assert_eq!(report.trace.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn invalid_probability_yields_no_line() {
        let args = Args {
            p_one: 2.0,
            ..Args::default()
        };
        assert!(matches!(
            execute(&args),
            Err(ConfigError::InvalidProbability { .. })
        ));
        assert_eq!(run_to_line(&args), None);
    }

    #[test]
    fn line_format() {
        let args = Args {
            iterations: 0,
            ..Args::default()
        };
        assert_eq!(run_to_line(&args).as_deref(), Some("0 took 0s (sum=0)"));
    }
}
