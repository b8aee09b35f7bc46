//! Dense variant-matrix core.
//!
//! Genotype calls for `nsam` samples at `nsites` polymorphic sites are
//! held in one contiguous row-major `i8` buffer alongside a per-site
//! position list. On top of that sit zero-copy row/column views, in-place
//! site/sample filtering, and per-site allelic-state counting with a
//! reserved missing-data sentinel. Everything is sequential and
//! deterministic; there is no parallelism and no file-format parsing.

pub mod counts;
pub mod error;
pub mod filter;
pub mod matrix;
pub mod npz;
pub mod scan;
pub mod source;
pub mod view;

pub use counts::{MAX_ALLELES, StateCounts};
pub use error::{MatrixError, Result};
pub use filter::{filter_haplotypes, filter_sites};
pub use matrix::VariantMatrix;
pub use npz::{load_npz, save_npz};
pub use scan::{RefStates, process_variable_sites};
pub use source::{Variant, VariantSource};
pub use view::{SampleView, SampleViewMut, SiteView, SiteViewMut};
