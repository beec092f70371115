//! Static port authorization rules
//!
//! A rule set is an ordered list of inclusive port intervals with union
//! semantics: a port is allowed when any interval covers it. Rule counts are
//! expected to be small, so membership is a linear scan.

use thiserror::Error;

/// Errors from building or parsing port rules
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PortRuleError {
    #[error("invalid port range: low {low} exceeds high {high}")]
    Inverted { low: u16, high: u16 },

    #[error("invalid port range spec: {0:?}")]
    BadSpec(String),

    #[error("invalid port number: {0:?}")]
    BadPort(String),
}

/// Result type for port-rule operations
pub type Result<T> = std::result::Result<T, PortRuleError>;

/// One inclusive port interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    low: u16,
    high: u16,
}

impl PortRange {
    /// Create a range covering `low..=high`. Inverted bounds are rejected.
    pub fn new(low: u16, high: u16) -> Result<Self> {
        if low > high {
            return Err(PortRuleError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    /// A range covering a single port.
    pub fn single(port: u16) -> Self {
        Self {
            low: port,
            high: port,
        }
    }

    pub fn low(&self) -> u16 {
        self.low
    }

    pub fn high(&self) -> u16 {
        self.high
    }

    /// Inclusive membership on both ends.
    pub fn contains(&self, port: u16) -> bool {
        port >= self.low && port <= self.high
    }
}

/// Ordered collection of port rules. Overlap between rules is permitted and
/// carries no meaning beyond the union.
#[derive(Debug, Clone, Default)]
pub struct PortRuleSet {
    rules: Vec<PortRange>,
}

impl PortRuleSet {
    /// Empty rule set; allows no port at all.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = PortRange>,
    {
        Self {
            rules: ranges.into_iter().collect(),
        }
    }

    /// Parse a rule spec like `"20-22,80,443"`.
    ///
    /// Items are comma-separated; each item is either a single port or an
    /// inclusive `low-high` range. Whitespace around items is ignored.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let mut rules = Vec::new();

        for item in spec.split(',') {
            let item = item.trim();
            if item.is_empty() {
                return Err(PortRuleError::BadSpec(spec.to_string()));
            }

            match item.split_once('-') {
                Some((low, high)) => {
                    let low = parse_port(low.trim())?;
                    let high = parse_port(high.trim())?;
                    rules.push(PortRange::new(low, high)?);
                }
                None => rules.push(PortRange::single(parse_port(item)?)),
            }
        }

        Ok(Self { rules })
    }

    pub fn push(&mut self, rule: PortRange) {
        self.rules.push(rule);
    }

    /// True when any rule covers `port`. An empty set allows nothing.
    pub fn is_allowed(&self, port: u16) -> bool {
        self.rules.iter().any(|rule| rule.contains(port))
    }

    /// First rule covering `port`, for reporting which interval matched.
    pub fn matching_rule(&self, port: u16) -> Option<PortRange> {
        self.rules.iter().copied().find(|rule| rule.contains(port))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[PortRange] {
        &self.rules
    }
}

fn parse_port(text: &str) -> Result<u16> {
    text.parse()
        .map_err(|_| PortRuleError::BadPort(text.to_string()))
}
