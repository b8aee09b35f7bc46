use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut2};

use crate::error::{MatrixError, Result};
use crate::source::VariantSource;
use crate::view::{SampleView, SampleViewMut, SiteView, SiteViewMut};

/// Dense matrix of genotype calls.
///
/// One contiguous row-major `i8` buffer, logically `[nsites][nsam]`: each
/// row holds every sample's state at one site, and `positions` carries one
/// genomic coordinate per site. The buffer and the position list are owned;
/// they only change shape through [`crate::filter::filter_sites`] and
/// [`crate::filter::filter_haplotypes`].
#[derive(Debug, Clone, PartialEq)]
pub struct VariantMatrix {
    pub(crate) data: Vec<i8>,
    pub(crate) positions: Vec<f64>,
    pub(crate) nsites: usize,
    pub(crate) nsam: usize,
}

impl VariantMatrix {
    /// Reserved sentinel for missing data. Never a valid allelic state.
    pub const MASK: i8 = i8::MIN;

    /// Build from a flat row-major buffer and one position per site.
    ///
    /// The sample count is inferred as `data.len() / positions.len()`;
    /// the division must be exact. Empty data with no positions is a
    /// valid zero-sized matrix.
    pub fn new(data: Vec<i8>, positions: Vec<f64>) -> Result<Self> {
        let nsites = positions.len();
        if nsites == 0 {
            if !data.is_empty() {
                return Err(MatrixError::InvalidShape {
                    data_len: data.len(),
                    n_positions: 0,
                });
            }
            return Ok(Self {
                data,
                positions,
                nsites: 0,
                nsam: 0,
            });
        }
        if data.len() % nsites != 0 {
            return Err(MatrixError::InvalidShape {
                data_len: data.len(),
                n_positions: nsites,
            });
        }
        let nsam = data.len() / nsites;
        Ok(Self {
            data,
            positions,
            nsites,
            nsam,
        })
    }

    /// Build from a 2-D genotype array and a 1-D position array.
    ///
    /// Dimensionality is enforced by the argument types; the position
    /// count must equal the number of rows. Both arrays are moved in.
    pub fn from_array(data: Array2<i8>, positions: Array1<f64>) -> Result<Self> {
        let (nsites, nsam) = data.dim();
        if positions.len() != nsites {
            return Err(MatrixError::PositionsLength {
                n_positions: positions.len(),
                n_rows: nsites,
            });
        }
        let n_cells = nsites * nsam;
        let data = if data.is_standard_layout() {
            // The backing vec may be larger than the logical window (e.g.
            // after slice_move) and may start at a nonzero offset.
            let (vec, offset) = data.into_raw_vec_and_offset();
            let start = offset.unwrap_or(0);
            if start == 0 && vec.len() == n_cells {
                vec
            } else {
                vec[start..start + n_cells].to_vec()
            }
        } else {
            data.iter().copied().collect()
        };
        Ok(Self {
            data,
            positions: positions.to_vec(),
            nsites,
            nsam,
        })
    }

    /// Build by draining a variant source in iteration order.
    ///
    /// Every record must carry the same number of genotypes as the first;
    /// source errors propagate unchanged.
    pub fn from_variants(source: &mut dyn VariantSource) -> Result<Self> {
        let n_sites_hint = source.n_sites();
        let mut data = Vec::with_capacity(n_sites_hint * source.n_samples());
        let mut positions = Vec::with_capacity(n_sites_hint);
        let mut nsam: Option<usize> = None;

        for (site, record) in source.enumerate() {
            let variant = record?;
            let expected = *nsam.get_or_insert(variant.genotypes.len());
            if variant.genotypes.len() != expected {
                return Err(MatrixError::RaggedVariant {
                    site,
                    got: variant.genotypes.len(),
                    expected,
                });
            }
            data.extend_from_slice(&variant.genotypes);
            positions.push(variant.position);
        }
        debug!(
            "accumulated {} site(s) x {} sample(s) from variant source",
            positions.len(),
            nsam.unwrap_or(0)
        );
        Self::new(data, positions)
    }

    pub fn nsites(&self) -> usize {
        self.nsites
    }

    pub fn nsam(&self) -> usize {
        self.nsam
    }

    /// The flat row-major genotype buffer.
    pub fn data(&self) -> &[i8] {
        &self.data
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Bounds-checked immutable view of site `site` (one row).
    pub fn site(&self, site: usize) -> Result<SiteView<'_>> {
        let row = self.row(site)?;
        Ok(SiteView::new(row))
    }

    /// Bounds-checked mutable view of site `site`.
    pub fn site_mut(&mut self, site: usize) -> Result<SiteViewMut<'_>> {
        self.check_site(site)?;
        let start = site * self.nsam;
        Ok(SiteViewMut::new(&mut self.data[start..start + self.nsam]))
    }

    /// Bounds-checked immutable view of sample `sample` (one column).
    pub fn sample(&self, sample: usize) -> Result<SampleView<'_>> {
        self.check_sample(sample)?;
        Ok(SampleView::new(&self.data, sample, self.nsam, self.nsites))
    }

    /// Bounds-checked mutable view of sample `sample`.
    pub fn sample_mut(&mut self, sample: usize) -> Result<SampleViewMut<'_>> {
        self.check_sample(sample)?;
        Ok(SampleViewMut::new(
            &mut self.data,
            sample,
            self.nsam,
            self.nsites,
        ))
    }

    /// Zero-copy export of the buffer as an `(nsites, nsam)` array view.
    pub fn as_array(&self) -> ArrayView2<'_, i8> {
        ArrayView2::from_shape((self.nsites, self.nsam), &self.data)
            .expect("buffer length equals nsites * nsam")
    }

    /// Mutable zero-copy export. Writes land directly in the buffer.
    pub fn as_array_mut(&mut self) -> ArrayViewMut2<'_, i8> {
        ArrayViewMut2::from_shape((self.nsites, self.nsam), &mut self.data)
            .expect("buffer length equals nsites * nsam")
    }

    pub fn positions_array(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.positions[..])
    }

    pub(crate) fn row(&self, site: usize) -> Result<&[i8]> {
        self.check_site(site)?;
        let start = site * self.nsam;
        Ok(&self.data[start..start + self.nsam])
    }

    fn check_site(&self, site: usize) -> Result<()> {
        if site >= self.nsites {
            return Err(MatrixError::SiteOutOfRange {
                site,
                nsites: self.nsites,
            });
        }
        Ok(())
    }

    fn check_sample(&self, sample: usize) -> Result<()> {
        if sample >= self.nsam {
            return Err(MatrixError::SampleOutOfRange {
                sample,
                nsam: self.nsam,
            });
        }
        Ok(())
    }
}
