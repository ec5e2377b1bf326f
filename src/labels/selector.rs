//! Conjunction of label requirements

use super::parser;
use super::requirement::{Operator, Requirement};
use super::Labels;
use crate::error::{ListerError, ListerResult};
use std::fmt;
use std::str::FromStr;

/// Immutable label filter
///
/// An entity matches when every requirement matches. The empty selector
/// (see [`Selector::everything`]) matches every entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    requirements: Vec<Requirement>,
}

impl Selector {
    /// Selector that matches every entity
    pub fn everything() -> Self {
        Self::default()
    }

    /// Equality selector requiring every label in `labels`
    ///
    /// Fails when a key or value is not a valid label.
    pub fn from_labels(labels: &Labels) -> ListerResult<Self> {
        let requirements = labels
            .iter()
            .map(|(key, value)| Requirement::new(key.clone(), Operator::Equals, [value.clone()]))
            .collect::<ListerResult<Vec<_>>>()?;
        Ok(Self::from_requirements(requirements))
    }

    /// Parse the textual selector form (`app=web,tier!=db,!legacy`)
    pub fn parse(input: &str) -> ListerResult<Self> {
        let requirements = parser::parse(input)
            .map_err(|reason| ListerError::invalid_selector(input, reason))?;
        Ok(Self::from_requirements(requirements))
    }

    /// Build from already-validated requirements
    pub fn from_requirements(mut requirements: Vec<Requirement>) -> Self {
        requirements.sort_by(|a, b| a.key().cmp(b.key()));
        Self { requirements }
    }

    /// Add a requirement, keeping requirements ordered by key
    pub fn and(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        Self::from_requirements(self.requirements)
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Whether this selector matches everything
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Evaluate against a label set
    pub fn matches(&self, labels: &Labels) -> bool {
        self.requirements.iter().all(|r| r.matches(labels))
    }
}

impl FromStr for Selector {
    type Err = ListerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.requirements.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(","))
    }
}
