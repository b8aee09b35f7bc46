use itertools::Itertools;
use log::debug;

use crate::matrix::VariantMatrix;
use crate::view::{SampleView, SiteView};

/// Remove every site for which `remove` returns true.
///
/// All predicate decisions are taken against the pre-mutation buffer;
/// only then are the retained rows compacted forward in place, with
/// `positions` compacted in lock-step. Retained sites keep their relative
/// order. Removing every site leaves a valid zero-sized matrix.
///
/// Returns the number of sites removed. Single pass over the buffer,
/// O(nsites * nsam).
pub fn filter_sites<F>(m: &mut VariantMatrix, mut remove: F) -> usize
where
    F: FnMut(&SiteView) -> bool,
{
    let nsam = m.nsam;
    let removals: Vec<bool> = (0..m.nsites)
        .map(|site| {
            let start = site * nsam;
            remove(&SiteView::new(&m.data[start..start + nsam]))
        })
        .collect();

    let mut kept = 0usize;
    for site in 0..m.nsites {
        if removals[site] {
            continue;
        }
        if kept != site {
            let start = site * nsam;
            m.data.copy_within(start..start + nsam, kept * nsam);
            m.positions[kept] = m.positions[site];
        }
        kept += 1;
    }

    let removed = m.nsites - kept;
    m.data.truncate(kept * nsam);
    m.positions.truncate(kept);
    m.nsites = kept;
    debug!("filter_sites removed {removed} of {} site(s)", kept + removed);
    removed
}

/// Remove every sample (column) for which `remove` returns true.
///
/// Decisions are taken once per sample against the pre-mutation buffer,
/// then every row is independently compacted over the retained columns.
/// `positions` and `nsites` are untouched; retained columns keep their
/// relative order. Removing every sample leaves `nsam == 0`.
///
/// Returns the number of samples removed. O(nsites * nsam) total.
pub fn filter_haplotypes<F>(m: &mut VariantMatrix, mut remove: F) -> usize
where
    F: FnMut(&SampleView) -> bool,
{
    let removals: Vec<bool> = (0..m.nsam)
        .map(|sample| remove(&SampleView::new(&m.data, sample, m.nsam, m.nsites)))
        .collect();
    let keep: Vec<usize> = removals.iter().positions(|&r| !r).collect();
    let removed = m.nsam - keep.len();
    if removed == 0 {
        return 0;
    }

    let mut out = 0usize;
    for site in 0..m.nsites {
        let base = site * m.nsam;
        for &sample in &keep {
            m.data[out] = m.data[base + sample];
            out += 1;
        }
    }
    m.data.truncate(out);
    m.nsam = keep.len();
    debug!(
        "filter_haplotypes removed {removed} of {} sample(s)",
        keep.len() + removed
    );
    removed
}
