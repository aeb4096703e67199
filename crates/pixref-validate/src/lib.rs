//! # pixref-validate
//!
//! Cross-implementation validation for the pixel reference kernels.
//!
//! A driver runs the same operation through the reference kernels and one
//! or two other implementations, then hands all outputs to [`validate`].
//! The returned [`ValidationReport`] says which candidates stayed within the
//! allowed delta and, for those that did not, where they first diverged.
//!
//! # Modules
//!
//! - [`validator`] - comparison, per-task tolerances, reports
//! - [`random`] - seeded input generators
//! - [`ValidateError`] - structural failures (candidate count, lengths) and wrapped kernel errors
//!
//! # Usage
//!
//! ```rust
//! use pixref_ops::blur::blur;
//! use pixref_validate::random::random_image;
//! use pixref_validate::{validate_task, Task};
//!
//! let input = random_image(11, 4, 16, 8).unwrap();
//! let reference = blur(&input, 4, 16, 8, 3, None).unwrap();
//! let candidate = reference.clone();
//!
//! let report = validate_task(Task::Blur, 4, &reference, &[("toolkit", &candidate[..])]).unwrap();
//! assert!(report.passed());
//! println!("{report}");
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for the config and report types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod random;
pub mod validator;

pub use error::{ValidateError, ValidateResult};
pub use validator::{
    validate, validate_task, CandidateReport, Mismatch, Sample, Task, ValidationConfig, ValidationReport,
    DEFAULT_ALLOWED_DELTA, DEFAULT_DIFF_CAP, MAX_CANDIDATES,
};
