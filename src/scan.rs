use crate::counts::StateCounts;
use crate::error::{MatrixError, Result};
use crate::matrix::VariantMatrix;

/// Reference-state specification for [`process_variable_sites`]: none at
/// all, one state for every site, or one state per site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RefStates {
    #[default]
    Absent,
    Uniform(i8),
    PerSite(Vec<i8>),
}

impl RefStates {
    fn for_site(&self, site: usize) -> Option<i8> {
        match self {
            RefStates::Absent => None,
            RefStates::Uniform(state) => Some(*state),
            RefStates::PerSite(states) => Some(states[site]),
        }
    }
}

/// Count states at every site and keep only the variable ones.
///
/// Each site gets a fresh [`StateCounts`] seeded with its resolved
/// reference state; sites where zero or one distinct non-missing state is
/// present contribute no entry. The output is in site order, so it stays
/// monotonic with `positions`.
pub fn process_variable_sites(
    m: &VariantMatrix,
    refstates: &RefStates,
) -> Result<Vec<StateCounts>> {
    if let RefStates::PerSite(states) = refstates {
        if states.len() != m.nsites() {
            return Err(MatrixError::RefStatesLength {
                got: states.len(),
                expected: m.nsites(),
            });
        }
    }

    let mut variable = Vec::new();
    for site in 0..m.nsites() {
        let mut counts = match refstates.for_site(site) {
            Some(state) => StateCounts::with_refstate(state),
            None => StateCounts::new(),
        };
        counts.apply(m.site(site)?.iter())?;
        if counts.is_variable() {
            variable.push(counts);
        }
    }
    Ok(variable)
}
