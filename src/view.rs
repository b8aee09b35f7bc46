//! Non-owning windows over a `VariantMatrix` buffer.
//!
//! A view is a (buffer, offset, stride, length) descriptor. Site views
//! cover one contiguous row; sample views walk one column with stride
//! `nsam`. All views borrow the matrix, so none can survive a structural
//! mutation (`filter_sites` / `filter_haplotypes` take `&mut` and the
//! borrow checker rejects a live view across the call).

/// Immutable view of one site: `nsam` contiguous genotypes.
#[derive(Debug, Clone, Copy)]
pub struct SiteView<'m> {
    data: &'m [i8],
}

impl<'m> SiteView<'m> {
    pub(crate) fn new(data: &'m [i8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, sample: usize) -> Option<i8> {
        self.data.get(sample).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i8> + 'm {
        self.data.iter().copied()
    }

    pub fn as_slice(&self) -> &'m [i8] {
        self.data
    }
}

/// Mutable view of one site. Elements can be rewritten in place; the
/// window itself cannot grow or shrink.
#[derive(Debug)]
pub struct SiteViewMut<'m> {
    data: &'m mut [i8],
}

impl<'m> SiteViewMut<'m> {
    pub(crate) fn new(data: &'m mut [i8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, sample: usize) -> Option<i8> {
        self.data.get(sample).copied()
    }

    /// Overwrite the genotype of one sample. Returns `false` if the
    /// index is outside the window.
    pub fn set(&mut self, sample: usize, state: i8) -> bool {
        match self.data.get_mut(sample) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.data.iter().copied()
    }

    pub fn as_mut_slice(&mut self) -> &mut [i8] {
        self.data
    }
}

/// Immutable view of one sample: `nsites` genotypes at column `offset`,
/// stride `nsam`.
#[derive(Debug, Clone, Copy)]
pub struct SampleView<'m> {
    data: &'m [i8],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'m> SampleView<'m> {
    pub(crate) fn new(data: &'m [i8], offset: usize, stride: usize, len: usize) -> Self {
        Self {
            data,
            offset,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, site: usize) -> Option<i8> {
        if site >= self.len {
            return None;
        }
        self.data.get(self.offset + site * self.stride).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i8> + 'm {
        // stride == nsam, and a sample view only exists when nsam > 0
        self.data
            .iter()
            .copied()
            .skip(self.offset)
            .step_by(self.stride)
            .take(self.len)
    }

    pub fn to_vec(&self) -> Vec<i8> {
        self.iter().collect()
    }
}

/// Mutable view of one sample.
#[derive(Debug)]
pub struct SampleViewMut<'m> {
    data: &'m mut [i8],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'m> SampleViewMut<'m> {
    pub(crate) fn new(data: &'m mut [i8], offset: usize, stride: usize, len: usize) -> Self {
        Self {
            data,
            offset,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, site: usize) -> Option<i8> {
        if site >= self.len {
            return None;
        }
        self.data.get(self.offset + site * self.stride).copied()
    }

    /// Overwrite the genotype at one site. Returns `false` if the index
    /// is outside the window.
    pub fn set(&mut self, site: usize, state: i8) -> bool {
        if site >= self.len {
            return false;
        }
        match self.data.get_mut(self.offset + site * self.stride) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.data
            .iter()
            .copied()
            .skip(self.offset)
            .step_by(self.stride)
            .take(self.len)
    }
}
