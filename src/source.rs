use crate::error::Result;

/// One variant record produced by a construction adapter: a fixed-length
/// genotype row plus its genomic position.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub genotypes: Vec<i8>,
    pub position: f64,
}

/// An external sequence of variant records, drained in order by
/// [`crate::matrix::VariantMatrix::from_variants`]. The size hints let the
/// matrix reserve its buffers up front; they do not have to be exact.
pub trait VariantSource: Iterator<Item = Result<Variant>> {
    fn n_samples(&self) -> usize;
    fn n_sites(&self) -> usize;
}
