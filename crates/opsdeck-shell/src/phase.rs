//! Workflow phase resolution.
//!
//! Three strategies, in order of preference:
//! - [`PhaseResolver::Mapped`]: a caller-supplied function of the active section
//! - [`PhaseResolver::Table`]: an explicit section-to-phase table from configuration
//! - [`PhaseResolver::Positional`]: the phase at the active section's index
//!
//! Every strategy falls back to the first configured phase, and to the empty
//! key when no phases are configured at all.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use opsdeck_core::{PhaseKey, SectionKey, WorkflowPhase};

/// Caller-supplied mapping from the active section to a phase.
pub type PhaseFn = Arc<dyn Fn(Option<&SectionKey>) -> PhaseKey + Send + Sync>;

/// Strategy for deriving the current workflow phase.
#[derive(Clone, Default)]
pub enum PhaseResolver {
    /// Delegate to a function; its result is used as-is.
    Mapped(PhaseFn),
    /// Look the active section up in a table; unmapped sections get the first phase.
    Table(BTreeMap<SectionKey, PhaseKey>),
    /// Pair sections and phases by list position.
    #[default]
    Positional,
}

impl PhaseResolver {
    /// Wrap a mapping function.
    pub fn mapped<F>(f: F) -> Self
    where
        F: Fn(Option<&SectionKey>) -> PhaseKey + Send + Sync + 'static,
    {
        Self::Mapped(Arc::new(f))
    }

    /// Resolve the phase for the active section.
    ///
    /// `active` is the active section's key and its index in the module's
    /// section list.
    pub fn resolve(&self, active: Option<(usize, &SectionKey)>, phases: &[WorkflowPhase]) -> PhaseKey {
        match self {
            Self::Mapped(f) => f(active.map(|(_, key)| key)),
            Self::Table(table) => active
                .and_then(|(_, key)| table.get(key))
                .cloned()
                .unwrap_or_else(|| first_phase(phases)),
            Self::Positional => active
                .and_then(|(index, _)| phases.get(index))
                .map_or_else(|| first_phase(phases), |phase| phase.key.clone()),
        }
    }
}

fn first_phase(phases: &[WorkflowPhase]) -> PhaseKey {
    phases
        .first()
        .map_or_else(PhaseKey::empty, |phase| phase.key.clone())
}

impl fmt::Debug for PhaseResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapped(_) => f.write_str("Mapped(<fn>)"),
            Self::Table(table) => f.debug_tuple("Table").field(table).finish(),
            Self::Positional => f.write_str("Positional"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn phases() -> Vec<WorkflowPhase> {
        vec![
            WorkflowPhase::new("setup", "Setup"),
            WorkflowPhase::new("process", "Process"),
            WorkflowPhase::new("review", "Review"),
        ]
    }

    #[test]
    fn positional_uses_section_index() {
        let key = SectionKey::from("payroll");
        let phase = PhaseResolver::Positional.resolve(Some((1, &key)), &phases());
        assert_eq!(phase, "process");
    }

    #[test]
    fn positional_no_active_section_is_first_phase() {
        assert_eq!(PhaseResolver::Positional.resolve(None, &phases()), "setup");
    }

    #[test]
    fn positional_index_out_of_range_is_first_phase() {
        let key = SectionKey::from("reports");
        assert_eq!(
            PhaseResolver::Positional.resolve(Some((7, &key)), &phases()),
            "setup"
        );
    }

    #[test]
    fn no_phases_is_empty() {
        let key = SectionKey::from("payroll");
        assert!(PhaseResolver::Positional.resolve(Some((0, &key)), &[]).is_empty());
        assert!(PhaseResolver::Positional.resolve(None, &[]).is_empty());
        assert!(PhaseResolver::Table(BTreeMap::new()).resolve(None, &[]).is_empty());
    }

    #[test]
    fn table_lookup_and_fallback() {
        let mut table = BTreeMap::new();
        let _ = table.insert(SectionKey::from("payroll"), PhaseKey::from("review"));
        let resolver = PhaseResolver::Table(table);

        let payroll = SectionKey::from("payroll");
        let leave = SectionKey::from("leave");
        assert_eq!(resolver.resolve(Some((1, &payroll)), &phases()), "review");
        assert_eq!(resolver.resolve(Some((2, &leave)), &phases()), "setup");
        assert_eq!(resolver.resolve(None, &phases()), "setup");
    }

    #[test]
    fn mapped_function_wins_even_without_active_section() {
        let resolver = PhaseResolver::mapped(|section| match section.map(SectionKey::as_str) {
            Some("payroll") => PhaseKey::from("process"),
            Some(_) => PhaseKey::from("setup"),
            None => PhaseKey::from("idle"),
        });
        let payroll = SectionKey::from("payroll");
        assert_eq!(resolver.resolve(Some((0, &payroll)), &phases()), "process");
        assert_eq!(resolver.resolve(None, &phases()), "idle");
    }

    #[test]
    fn debug_does_not_expose_closure() {
        let resolver = PhaseResolver::mapped(|_| PhaseKey::empty());
        assert_eq!(format!("{resolver:?}"), "Mapped(<fn>)");
        assert_eq!(format!("{:?}", PhaseResolver::default()), "Positional");
    }
}
