use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("data length {data_len} is not an exact multiple of the {n_positions} position(s)")]
    InvalidShape {
        data_len: usize,
        n_positions: usize,
    },

    #[error("got {n_positions} positions for {n_rows} data rows")]
    PositionsLength { n_positions: usize, n_rows: usize },

    #[error("variant {site} carries {got} genotypes (expected {expected})")]
    RaggedVariant {
        site: usize,
        got: usize,
        expected: usize,
    },

    #[error("got {got} reference states for {expected} sites")]
    RefStatesLength { got: usize, expected: usize },

    #[error("site index {site} out of range (nsites={nsites})")]
    SiteOutOfRange { site: usize, nsites: usize },

    #[error("sample index {sample} out of range (nsam={nsam})")]
    SampleOutOfRange { sample: usize, nsam: usize },

    #[error("allelic state {state} outside the supported alphabet")]
    InvalidState { state: i8 },

    #[error("could not read {path}")]
    ReadWithPath {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to {path}")]
    WriteWithPath {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not read matrix archive")]
    ReadNpz(#[from] ndarray_npy::ReadNpzError),

    #[error("could not write matrix archive")]
    WriteNpz(#[from] ndarray_npy::WriteNpzError),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
