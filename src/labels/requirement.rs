//! Single label requirement

use super::{validate_key, validate_value, Labels};
use crate::error::{ListerError, ListerResult};
use std::collections::BTreeSet;
use std::fmt;

/// Comparison applied by a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    In,
    NotIn,
    Exists,
    DoesNotExist,
    GreaterThan,
    LessThan,
}

/// One `key <op> values` clause of a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    key: String,
    operator: Operator,
    values: BTreeSet<String>,
}

impl Requirement {
    /// Build a validated requirement
    pub fn new<I, S>(key: impl Into<String>, operator: Operator, values: I) -> ListerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let requirement = Self {
            key: key.into(),
            operator,
            values: values.into_iter().map(Into::into).collect(),
        };
        requirement
            .check()
            .map_err(|reason| ListerError::invalid_selector(requirement.to_string(), reason))?;
        Ok(requirement)
    }

    /// Build a validated requirement, reporting only the reason on failure
    pub(crate) fn try_new(
        key: String,
        operator: Operator,
        values: BTreeSet<String>,
    ) -> Result<Self, String> {
        let requirement = Self {
            key,
            operator,
            values,
        };
        requirement.check()?;
        Ok(requirement)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn values(&self) -> &BTreeSet<String> {
        &self.values
    }

    /// Evaluate against a label set
    pub fn matches(&self, labels: &Labels) -> bool {
        let value = labels.get(&self.key);
        match self.operator {
            Operator::Equals | Operator::In => value.is_some_and(|v| self.values.contains(v)),
            Operator::NotEquals | Operator::NotIn => value.is_none_or(|v| !self.values.contains(v)),
            Operator::Exists => value.is_some(),
            Operator::DoesNotExist => value.is_none(),
            Operator::GreaterThan | Operator::LessThan => {
                let Some(actual) = value.and_then(|v| v.parse::<i64>().ok()) else {
                    return false;
                };
                let Some(bound) = self.integer_bound() else {
                    return false;
                };
                if self.operator == Operator::GreaterThan {
                    actual > bound
                } else {
                    actual < bound
                }
            }
        }
    }

    fn integer_bound(&self) -> Option<i64> {
        self.values.iter().next().and_then(|v| v.parse().ok())
    }

    fn check(&self) -> Result<(), String> {
        validate_key(&self.key)?;

        match self.operator {
            Operator::In | Operator::NotIn => {
                if self.values.is_empty() {
                    return Err("for 'in', 'notin' operators, values set can't be empty".to_string());
                }
            }
            Operator::Equals | Operator::NotEquals => {
                if self.values.len() != 1 {
                    return Err("exact-match compatibility requires one single value".to_string());
                }
            }
            Operator::Exists | Operator::DoesNotExist => {
                if !self.values.is_empty() {
                    return Err("values set must be empty for exists and does not exist".to_string());
                }
            }
            Operator::GreaterThan | Operator::LessThan => {
                if self.values.len() != 1 {
                    return Err("for 'gt', 'lt' operators, exactly one value is required".to_string());
                }
                if self.integer_bound().is_none() {
                    return Err("for 'gt', 'lt' operators, the value must be an integer".to_string());
                }
                return Ok(());
            }
        }

        self.values.iter().try_for_each(|v| validate_value(v))
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = || self.values.iter().cloned().collect::<Vec<_>>().join(",");
        match self.operator {
            Operator::Exists => write!(f, "{}", self.key),
            Operator::DoesNotExist => write!(f, "!{}", self.key),
            Operator::Equals => write!(f, "{}={}", self.key, joined()),
            Operator::NotEquals => write!(f, "{}!={}", self.key, joined()),
            Operator::GreaterThan => write!(f, "{}>{}", self.key, joined()),
            Operator::LessThan => write!(f, "{}<{}", self.key, joined()),
            Operator::In => write!(f, "{} in ({})", self.key, joined()),
            Operator::NotIn => write!(f, "{} notin ({})", self.key, joined()),
        }
    }
}
