use crate::error::{MatrixError, Result};
use crate::matrix::VariantMatrix;

/// Size of the allelic alphabet: states `0..=7`. Four nucleotide states
/// plus headroom for small multiallelic encodings. Anything else that is
/// not [`VariantMatrix::MASK`] is malformed data.
pub const MAX_ALLELES: usize = 8;

/// Frequency table of the allelic states observed at one site (or pooled
/// over several views).
///
/// `counts[s]` is the number of non-missing observations of state `s` and
/// `n` their total, so `n == counts.iter().sum()`. Cells equal to
/// [`VariantMatrix::MASK`] contribute to neither. The optional reference
/// state is stored for callers that polarize variation; the counter never
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCounts {
    pub counts: [u32; MAX_ALLELES],
    pub refstate: Option<i8>,
    pub n: u32,
}

impl Default for StateCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCounts {
    pub fn new() -> Self {
        Self {
            counts: [0; MAX_ALLELES],
            refstate: None,
            n: 0,
        }
    }

    pub fn with_refstate(refstate: i8) -> Self {
        Self {
            refstate: Some(refstate),
            ..Self::new()
        }
    }

    /// Fold a run of genotype states into the table.
    ///
    /// Additive: repeated calls pool their observations, which is how a
    /// caller accumulates one table over several sample views. A state
    /// outside `0..MAX_ALLELES` (other than the mask) fails with
    /// `InvalidState` and leaves the table untouched.
    pub fn apply<I>(&mut self, states: I) -> Result<()>
    where
        I: IntoIterator<Item = i8>,
    {
        let mut staged = [0u32; MAX_ALLELES];
        let mut seen = 0u32;
        for state in states {
            if state == VariantMatrix::MASK {
                continue;
            }
            let slot = usize::try_from(state)
                .ok()
                .filter(|&s| s < MAX_ALLELES)
                .ok_or(MatrixError::InvalidState { state })?;
            staged[slot] += 1;
            seen += 1;
        }
        for (total, add) in self.counts.iter_mut().zip(staged) {
            *total += add;
        }
        self.n += seen;
        Ok(())
    }

    /// Number of distinct states with a nonzero count.
    pub fn n_states(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// A site is variable when more than one distinct non-missing state
    /// was observed.
    pub fn is_variable(&self) -> bool {
        self.n_states() > 1
    }
}
