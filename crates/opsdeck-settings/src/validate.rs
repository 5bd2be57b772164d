//! Module configuration validation.
//!
//! Route matching itself never fails, so a bad configuration shows up only
//! as a sidebar that highlights the wrong thing. These checks surface such
//! mistakes at load time instead.

use std::collections::BTreeSet;

use opsdeck_core::{PhaseKey, SectionKey};
use thiserror::Error;

use crate::types::ModuleConfig;

/// A problem found in a module's navigation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    /// The module defines no sections.
    #[error("no sections defined")]
    EmptySections,
    /// Two sections share a key.
    #[error("duplicate section key `{0}`")]
    DuplicateSectionKey(SectionKey),
    /// A section has no items.
    #[error("section `{0}` has no items")]
    EmptySection(SectionKey),
    /// Two items share an href.
    #[error("duplicate route `{0}`")]
    DuplicateHref(String),
    /// An item is neither the base route nor below it.
    #[error("route `{0}` is outside the module's base route")]
    ItemOutsideBaseRoute(String),
    /// Phases would be matched to sections by position, but the counts differ.
    #[error("{sections} section(s) but {phases} workflow phase(s) and no phaseMap")]
    PositionalPhaseMismatch {
        /// Number of sections.
        sections: usize,
        /// Number of phases.
        phases: usize,
    },
    /// The phase map names a phase that is not configured.
    #[error("phaseMap references unknown phase `{0}`")]
    UnknownPhaseInMap(PhaseKey),
    /// The phase map names a section that is not configured.
    #[error("phaseMap references unknown section `{0}`")]
    UnknownSectionInMap(SectionKey),
}

impl ModuleConfig {
    /// Check the configuration for inconsistencies.
    ///
    /// Returns every issue found; an empty list means the module is valid.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.sections.is_empty() {
            issues.push(ConfigIssue::EmptySections);
        }

        let mut keys = BTreeSet::new();
        let mut hrefs = BTreeSet::new();
        for section in &self.sections {
            if !keys.insert(section.key.as_str()) {
                issues.push(ConfigIssue::DuplicateSectionKey(section.key.clone()));
            }
            if section.items.is_empty() {
                issues.push(ConfigIssue::EmptySection(section.key.clone()));
            }
            for item in &section.items {
                if !hrefs.insert(item.href.as_str()) {
                    issues.push(ConfigIssue::DuplicateHref(item.href.clone()));
                }
                if !is_under_base(&item.href, &self.base_route) {
                    issues.push(ConfigIssue::ItemOutsideBaseRoute(item.href.clone()));
                }
            }
        }

        match &self.phase_map {
            Some(map) => {
                let phases: BTreeSet<&str> =
                    self.workflow_phases.iter().map(|p| p.key.as_str()).collect();
                for (section, phase) in map {
                    if !keys.contains(section.as_str()) {
                        issues.push(ConfigIssue::UnknownSectionInMap(section.clone()));
                    }
                    if !phases.contains(phase.as_str()) {
                        issues.push(ConfigIssue::UnknownPhaseInMap(phase.clone()));
                    }
                }
            }
            None => {
                let phases = self.workflow_phases.len();
                if phases > 0 && phases != self.sections.len() {
                    issues.push(ConfigIssue::PositionalPhaseMismatch {
                        sections: self.sections.len(),
                        phases,
                    });
                }
            }
        }

        issues
    }
}

fn is_under_base(href: &str, base_route: &str) -> bool {
    if base_route.is_empty() || base_route == "/" {
        return href.starts_with('/');
    }
    href == base_route
        || href
            .strip_prefix(base_route)
            .is_some_and(|rest| rest.starts_with('/'))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
