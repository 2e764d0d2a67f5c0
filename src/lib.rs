//! udr: usage data record parser.
//!
//! Parses usage-accounting lines of the form `<ID>,<payload>` into
//! normalised [`UsageRecord`] values. The last character of the ID selects
//! the layout:
//!
//! | suffix | layout   | payload                                   |
//! |--------|----------|-------------------------------------------|
//! | `6`    | hex      | 24 lowercase hex digits                   |
//! | `4`    | extended | `<dmcc>,<mnc>,<bytes_used>,<cellid>`      |
//! | other  | default  | `<bytes_used>`                            |
//!
//! Parsing never fails loudly. A line that cannot be parsed yields `None`
//! in its slot; a field that cannot be coerced yields `None` inside an
//! otherwise valid record.
//!
//! ```rust
//! let records = udr::parse(["123,500", "45546,deadbeef00000000cafe0102", "77,1,2,3,4"]);
//!
//! assert_eq!(records[0].as_ref().unwrap().bytes_used, Some(500));
//! assert_eq!(records[1].as_ref().unwrap().ip.as_deref(), Some("202.254.1.2"));
//! assert!(records[2].is_none());
//! ```

use rayon::prelude::*;

pub use udr_core::config::{BatchConfig, Config, DispatchConfig};
pub use udr_core::{DispatchError, FormatKind, UsageRecord};

/// A configured parser. [`Parser::default`] uses the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: Config,
}

impl Parser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build a parser from a TOML config file layered over the defaults.
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        Config::load_from(path).map(Self::new)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse one line. `None` if the line is structurally invalid.
    pub fn parse_line(&self, line: &str) -> Option<UsageRecord> {
        self.try_parse_line(line).ok()
    }

    /// Parse one line, keeping the rejection reason.
    pub fn try_parse_line(&self, line: &str) -> Result<UsageRecord, DispatchError> {
        udr_core::dispatch(line, &self.config.dispatch).inspect_err(|err| {
            tracing::debug!(%err, line, "line rejected");
        })
    }

    /// Parse one line given as raw bytes. Non-UTF-8 input yields `None`.
    pub fn parse_bytes(&self, line: &[u8]) -> Option<UsageRecord> {
        udr_core::dispatch_bytes(line, &self.config.dispatch)
            .inspect_err(|err| tracing::debug!(%err, len = line.len(), "line rejected"))
            .ok()
    }

    /// Parse a batch. One slot per line, in input order.
    ///
    /// Batches of at least [`BatchConfig::parallel_threshold`] lines are
    /// spread across the rayon thread pool.
    pub fn parse_batch<S>(&self, lines: &[S]) -> Vec<Option<UsageRecord>>
    where
        S: AsRef<str> + Sync,
    {
        let parallel = lines.len() >= self.config.batch.parallel_threshold;
        let records: Vec<Option<UsageRecord>> = if parallel {
            lines.par_iter().map(|l| self.parse_line(l.as_ref())).collect()
        } else {
            lines.iter().map(|l| self.parse_line(l.as_ref())).collect()
        };

        let parsed = records.iter().filter(|r| r.is_some()).count();
        tracing::debug!(
            total = records.len(),
            parsed,
            rejected = records.len() - parsed,
            "batch parsed"
        );
        records
    }

    /// Parse a single line or a batch; see [`ParseInput`].
    pub fn parse(&self, input: impl ParseInput) -> Vec<Option<UsageRecord>> {
        input.parse_with(self)
    }
}

/// Anything [`parse`] accepts: a single line or a batch of lines.
pub trait ParseInput {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>>;
}

impl ParseInput for &str {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>> {
        vec![parser.parse_line(self)]
    }
}

impl ParseInput for String {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>> {
        self.as_str().parse_with(parser)
    }
}

impl ParseInput for &String {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>> {
        self.as_str().parse_with(parser)
    }
}

impl<S: AsRef<str> + Sync> ParseInput for &[S] {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>> {
        parser.parse_batch(self)
    }
}

impl<S: AsRef<str> + Sync> ParseInput for &Vec<S> {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>> {
        parser.parse_batch(self)
    }
}

impl<S: AsRef<str> + Sync> ParseInput for Vec<S> {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>> {
        parser.parse_batch(&self)
    }
}

impl<S: AsRef<str> + Sync, const N: usize> ParseInput for [S; N] {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>> {
        parser.parse_batch(&self)
    }
}

impl<S: AsRef<str> + Sync, const N: usize> ParseInput for &[S; N] {
    fn parse_with(self, parser: &Parser) -> Vec<Option<UsageRecord>> {
        parser.parse_batch(self)
    }
}

/// Parse a single line or a batch with the default configuration.
pub fn parse(input: impl ParseInput) -> Vec<Option<UsageRecord>> {
    Parser::default().parse(input)
}

/// Parse one line with the default configuration.
pub fn parse_line(line: &str) -> Option<UsageRecord> {
    Parser::default().parse_line(line)
}

/// Parse one line of raw bytes with the default configuration.
pub fn parse_bytes(line: &[u8]) -> Option<UsageRecord> {
    Parser::default().parse_bytes(line)
}
