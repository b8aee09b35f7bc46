use varmat::{Result, Variant, VariantMatrix, VariantSource};

/// Two sites, four samples. Site 1 carries a singleton.
pub fn singleton_matrix() -> VariantMatrix {
    VariantMatrix::new(vec![0, 1, 1, 0, 0, 0, 0, 1], vec![0.1, 0.2]).unwrap()
}

/// Two sites, two samples. Both sites are variable.
pub fn two_sample_matrix() -> VariantMatrix {
    VariantMatrix::new(vec![0, 1, 1, 0], vec![0.1, 0.2]).unwrap()
}

/// In-memory variant source backing `from_variants` tests.
pub struct VecSource {
    n_samples: usize,
    n_sites: usize,
    variants: std::vec::IntoIter<Variant>,
}

impl VecSource {
    pub fn new(variants: Vec<Variant>) -> Self {
        Self {
            n_samples: variants.first().map_or(0, |v| v.genotypes.len()),
            n_sites: variants.len(),
            variants: variants.into_iter(),
        }
    }
}

impl Iterator for VecSource {
    type Item = Result<Variant>;

    fn next(&mut self) -> Option<Self::Item> {
        self.variants.next().map(Ok)
    }
}

impl VariantSource for VecSource {
    fn n_samples(&self) -> usize {
        self.n_samples
    }

    fn n_sites(&self) -> usize {
        self.n_sites
    }
}
