use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::domain::{Algorithm, DeathPolicy};

/// Engine and window settings, filled from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub size: usize,
    pub tick_interval: Duration,
    pub death_policy: DeathPolicy,
    pub algorithm: Algorithm,
    /// Probability that a cell starts alive when the grid is randomized
    pub random_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            death_policy: DeathPolicy::Instant,
            algorithm: Algorithm::Serial,
            random_density: 0.3,
        }
    }
}

impl Config {
    pub const DEFAULT_SIZE: usize = 40;
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            bail!("grid size must be positive");
        }
        if self.tick_interval.is_zero() {
            bail!("tick interval must be positive");
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            bail!("random density {} is not in 0.0..=1.0", self.random_density);
        }
        Ok(())
    }

    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("h", "help", "print this help menu");
        opts.optflag("f", "fading", "dead cells fade out for one generation");
        opts.optflag("p", "parallel", "evaluate rows on all cores");
        opts.optopt("n", "size", "grid side length (default 40)", "N");
        opts.optopt(
            "i",
            "interval",
            "milliseconds between generations while running (default 100)",
            "MILLIS",
        );
        opts.optopt("d", "density", "alive ratio for random fill (default 0.3)", "F");
        opts
    }

    /// Parse command line arguments (without the program name).
    /// Returns `Ok(None)` when help was requested and printed.
    pub fn from_args<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let opts = Self::options();
        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid command line")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: life [options]"));
            return Ok(None);
        }

        let defaults = Self::default();
        let size = matches
            .opt_get::<usize>("size")
            .context("--size expects a positive integer")?
            .unwrap_or(defaults.size);
        let interval_ms = matches
            .opt_get::<u64>("interval")
            .context("--interval expects milliseconds")?;
        let random_density = matches
            .opt_get::<f64>("density")
            .context("--density expects a number")?
            .unwrap_or(defaults.random_density);

        let config = Self {
            size,
            tick_interval: interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_interval),
            death_policy: if matches.opt_present("fading") {
                DeathPolicy::Fading
            } else {
                DeathPolicy::Instant
            },
            algorithm: if matches.opt_present("parallel") {
                Algorithm::Parallel
            } else {
                Algorithm::Serial
            },
            random_density,
        };
        config.validate()?;
        Ok(Some(config))
    }

    pub fn from_env() -> Result<Option<Self>> {
        let args = std::env::args().skip(1).collect::<Vec<_>>();
        Self::from_args(&args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args::<&str>(&[]).unwrap().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.size, 40);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_parse_all_options() {
        let args = ["--size", "12", "--interval", "250", "--fading", "-p", "-d", "0.5"];
        let config = Config::from_args(&args).unwrap().unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.death_policy, DeathPolicy::Fading);
        assert_eq!(config.algorithm, Algorithm::Parallel);
        assert_eq!(config.random_density, 0.5);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_args(&["--size", "0"]).is_err());
        assert!(Config::from_args(&["--size", "big"]).is_err());
        assert!(Config::from_args(&["--interval", "0"]).is_err());
        assert!(Config::from_args(&["--density", "1.5"]).is_err());
        assert!(Config::from_args(&["--bogus"]).is_err());
    }

    #[test]
    fn test_empty_owned_args_use_defaults() {
        let args: Vec<String> = Vec::new();
        assert_eq!(Config::from_args(&args).unwrap(), Some(Config::default()));
    }

    #[test]
    fn test_help_returns_none() {
        assert_eq!(Config::from_args(&["--help"]).unwrap(), None);
    }
}
