use std::fs::File;
use std::path::Path;

use ndarray::{Array1, Array2};
use ndarray_npy::{NpzReader, NpzWriter};

use crate::error::{MatrixError, Result};
use crate::matrix::VariantMatrix;

/// Persist a matrix as an NPZ archive holding the arrays `data`
/// (2-D i8) and `positions` (1-D f64). This pair is the whole persisted
/// state; everything else is derived on load.
pub fn save_npz(m: &VariantMatrix, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| MatrixError::WriteWithPath {
        source: e,
        path: path.as_ref().to_path_buf(),
    })?;
    let mut npz = NpzWriter::new(file);
    npz.add_array("data", &m.as_array())?;
    npz.add_array("positions", &m.positions_array())?;
    npz.finish()?;
    Ok(())
}

/// Restore a matrix written by [`save_npz`]. Shape validation is shared
/// with [`VariantMatrix::from_array`].
pub fn load_npz(path: impl AsRef<Path>) -> Result<VariantMatrix> {
    let file = File::open(path.as_ref()).map_err(|e| MatrixError::ReadWithPath {
        source: e,
        path: path.as_ref().to_path_buf(),
    })?;
    let mut npz = NpzReader::new(file)?;
    let data: Array2<i8> = npz.by_name("data")?;
    let positions: Array1<f64> = npz.by_name("positions")?;
    VariantMatrix::from_array(data, positions)
}
