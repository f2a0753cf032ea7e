//! Schema-driven parsing of curl-style flags
//!
//! A fixed [`FlagSpec`] table declares every recognized flag up front: its
//! canonical long name, aliases, whether it takes a value, and how repeats
//! combine. Anything outside the table is skipped silently, which is what a
//! best-effort curl sniffer wants.

use indexmap::IndexMap;

/// Whether a flag is a bare switch or consumes the next token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    Boolean,
    Value,
}

/// How repeated occurrences of a value flag combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagAccumulation {
    /// Later occurrences replace earlier ones (last one wins)
    Overwrite,
    /// Every occurrence is kept, in order
    Append,
}

/// One recognized flag
///
/// Aliases of a single character match `-x` style tokens; longer aliases
/// match `--alias` style tokens and fold into the canonical name.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arity: FlagArity,
    pub accumulation: FlagAccumulation,
}

impl FlagSpec {
    fn matches(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            return long == self.name || self.aliases.iter().any(|a| a.len() > 1 && *a == long);
        }
        if let Some(short) = token.strip_prefix('-') {
            return self.aliases.iter().any(|a| a.len() == 1 && *a == short);
        }
        false
    }
}

/// Result of matching an argument vector against a schema
#[derive(Debug, Default)]
pub struct FlagMatches {
    positional: Vec<String>,
    switches: Vec<&'static str>,
    values: IndexMap<&'static str, Vec<String>>,
}

impl FlagMatches {
    /// Tokens that matched no flag and were not consumed as a flag value
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Whether a boolean flag occurred at least once
    pub fn is_set(&self, name: &str) -> bool {
        self.switches.iter().any(|s| *s == name)
    }

    /// The winning value of an overwrite-mode flag
    pub fn last(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value of an append-mode flag, in occurrence order
    pub fn all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Match `argv` against `schema`.
///
/// A value flag at the end of input with nothing after it is dropped.
/// Unrecognized flag tokens are skipped without consuming a value.
pub fn parse(argv: &[String], schema: &'static [FlagSpec]) -> FlagMatches {
    let mut matches = FlagMatches::default();
    let mut iter = argv.iter();

    while let Some(token) = iter.next() {
        if let Some(spec) = schema.iter().find(|s| s.matches(token)) {
            match spec.arity {
                FlagArity::Boolean => {
                    matches.switches.push(spec.name);
                }
                FlagArity::Value => {
                    if let Some(value) = iter.next() {
                        let entry = matches.values.entry(spec.name).or_default();
                        if spec.accumulation == FlagAccumulation::Overwrite {
                            entry.clear();
                        }
                        entry.push(value.clone());
                    }
                }
            }
        } else if token.starts_with('-') && token != "-" {
            tracing::debug!(flag = %token, "skipping unrecognized flag");
        } else {
            matches.positional.push(token.clone());
        }
    }

    matches
}
