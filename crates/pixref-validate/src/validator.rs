//! Elementwise comparison of candidate outputs against the reference.
//!
//! A candidate passes when every compared element differs from the
//! reference by at most [`ValidationConfig::allowed_delta`]. Value
//! differences are data, returned in a [`ValidationReport`]; only structural
//! problems (differing lengths, no candidates) are errors.
//!
//! # Diff strip
//!
//! From the first mismatch on, each compared element appends one marker to
//! the candidate's diff strip, `.` for a match and `X` for a mismatch, until
//! [`ValidationConfig::diff_cap`] markers have been written:
//!
//! ```text
//! reference  10 10 10 10 10 10
//! candidate  10 10 20 10 20 20     delta 3
//! strip            X.XX
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixref_validate::{validate, ValidationConfig};
//!
//! let reference = [10u8, 10, 10, 10];
//! let toolkit = [11u8, 9, 10, 13];
//! let intrinsic = [10u8, 10, 30, 10];
//! let report = validate(
//!     "blur",
//!     &reference,
//!     &[("toolkit", &toolkit[..]), ("intrinsic", &intrinsic[..])],
//!     &ValidationConfig::default(),
//! )
//! .unwrap();
//!
//! assert!(report.candidates[0].passed);
//! assert!(!report.candidates[1].passed);
//! assert!(!report.passed());
//! ```

use crate::{ValidateError, ValidateResult};

use std::fmt;

use tracing::{debug, warn};

/// Default allowed delta for byte-valued kernels.
pub const DEFAULT_ALLOWED_DELTA: u64 = 3;

/// Default length of a diff strip.
pub const DEFAULT_DIFF_CAP: usize = 80;

/// Most candidates a single validation call compares.
pub const MAX_CANDIDATES: usize = 2;

/// An element type the validator can compare.
pub trait Sample: Copy + PartialEq + fmt::Debug {
    /// Widens the element for delta computation and reporting.
    fn to_i64(self) -> i64;

    /// Absolute difference between two elements.
    #[inline]
    fn delta(self, other: Self) -> u64 {
        (self.to_i64() - other.to_i64()).unsigned_abs()
    }
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

impl_sample!(u8, i32, u32);

/// How candidates are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationConfig {
    /// Largest accepted absolute difference per element.
    pub allowed_delta: u64,
    /// Skip every 4th element (the padding/alpha lane of 3-wide data).
    pub skip_alpha: bool,
    /// Maximum markers in a diff strip.
    pub diff_cap: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allowed_delta: DEFAULT_ALLOWED_DELTA,
            skip_alpha: false,
            diff_cap: DEFAULT_DIFF_CAP,
        }
    }
}

impl ValidationConfig {
    /// Exact comparison: no delta allowed.
    pub fn exact() -> Self {
        Self::default().with_allowed_delta(0)
    }

    /// Default config for outputs of the given vector size; 3-wide data
    /// skips its padding lane.
    pub fn for_vector_size(vector_size: usize) -> Self {
        Self::default().with_skip_alpha(vector_size == 3)
    }

    /// Sets the allowed delta.
    pub fn with_allowed_delta(mut self, delta: u64) -> Self {
        self.allowed_delta = delta;
        self
    }

    /// Enables or disables skipping every 4th element.
    pub fn with_skip_alpha(mut self, skip: bool) -> Self {
        self.skip_alpha = skip;
        self
    }

    /// Sets the diff strip cap.
    pub fn with_diff_cap(mut self, cap: usize) -> Self {
        self.diff_cap = cap;
        self
    }
}

/// The ten reference operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    /// Porter-Duff / arithmetic blend
    Blend,
    /// Gaussian blur
    Blur,
    /// Color matrix
    ColorMatrix,
    /// 3x3 / 5x5 convolution
    Convolve,
    /// Per-channel histogram
    Histogram,
    /// Dot-product histogram
    HistogramDot,
    /// 1D lookup
    Lut,
    /// 3D lookup
    Lut3d,
    /// Bicubic resize
    Resize,
    /// YUV to RGBA
    YuvToRgb,
}

impl Task {
    /// Every task.
    pub const ALL: [Task; 10] = [
        Self::Blend,
        Self::Blur,
        Self::ColorMatrix,
        Self::Convolve,
        Self::Histogram,
        Self::HistogramDot,
        Self::Lut,
        Self::Lut3d,
        Self::Resize,
        Self::YuvToRgb,
    ];

    /// Lower-case name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blend => "blend",
            Self::Blur => "blur",
            Self::ColorMatrix => "color_matrix",
            Self::Convolve => "convolve",
            Self::Histogram => "histogram",
            Self::HistogramDot => "histogram_dot",
            Self::Lut => "lut",
            Self::Lut3d => "lut3d",
            Self::Resize => "resize",
            Self::YuvToRgb => "yuv_to_rgb",
        }
    }

    /// Histograms are counts and must match exactly; byte kernels allow
    /// [`DEFAULT_ALLOWED_DELTA`].
    pub fn allowed_delta(self) -> u64 {
        match self {
            Self::Histogram | Self::HistogramDot => 0,
            _ => DEFAULT_ALLOWED_DELTA,
        }
    }

    /// Default config for this task.
    pub fn default_config(self) -> ValidationConfig {
        ValidationConfig::default().with_allowed_delta(self.allowed_delta())
    }

    /// Default config for this task on data of `vector_size` channels.
    ///
    /// Histogram outputs are count tables, never padded pixels, so alpha
    /// skipping stays off for them.
    pub fn config_for(self, vector_size: usize) -> ValidationConfig {
        let skip = vector_size == 3 && !matches!(self, Self::Histogram | Self::HistogramDot);
        self.default_config().with_skip_alpha(skip)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The first element where a candidate diverged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mismatch {
    /// Element index
    pub index: usize,
    /// Reference value
    pub expected: i64,
    /// Candidate value
    pub actual: i64,
}

/// Outcome for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateReport {
    /// Candidate name, e.g. `"toolkit"`
    pub name: String,
    /// `true` when no element exceeded the allowed delta
    pub passed: bool,
    /// Number of elements exceeding the allowed delta
    pub mismatch_count: usize,
    /// First element exceeding the allowed delta
    pub first_mismatch: Option<Mismatch>,
    /// `.`/`X` markers starting at the first mismatch
    pub diff: String,
}

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    /// Task name
    pub task: String,
    /// Elements per buffer
    pub element_count: usize,
    /// Config the comparison ran with
    pub config: ValidationConfig,
    /// One entry per candidate, in call order
    pub candidates: Vec<CandidateReport>,
}

impl ValidationReport {
    /// `true` only when every candidate passed.
    pub fn passed(&self) -> bool {
        self.candidates.iter().all(|c| c.passed)
    }

    /// Looks up a candidate by name.
    pub fn candidate(&self, name: &str) -> Option<&CandidateReport> {
        self.candidates.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed() { "PASSED" } else { "FAILED" };
        writeln!(
            f,
            "{}: {verdict} ({} elements, delta {}{})",
            self.task,
            self.element_count,
            self.config.allowed_delta,
            if self.config.skip_alpha { ", alpha skipped" } else { "" }
        )?;
        for c in &self.candidates {
            match &c.first_mismatch {
                None => writeln!(f, "  {}: ok", c.name)?,
                Some(m) => {
                    writeln!(
                        f,
                        "  {}: {} mismatches, first at [{}]: reference {} vs {}",
                        c.name, c.mismatch_count, m.index, m.expected, m.actual
                    )?;
                    writeln!(f, "    {}", c.diff)?;
                }
            }
        }
        Ok(())
    }
}

fn compare<T: Sample>(name: &str, reference: &[T], candidate: &[T], config: &ValidationConfig) -> CandidateReport {
    let mut report = CandidateReport {
        name: name.to_string(),
        passed: true,
        mismatch_count: 0,
        first_mismatch: None,
        diff: String::new(),
    };

    for (index, (&expected, &actual)) in reference.iter().zip(candidate).enumerate() {
        if config.skip_alpha && index % 4 == 3 {
            continue;
        }
        let bad = expected.delta(actual) > config.allowed_delta;
        if bad {
            report.mismatch_count += 1;
            if report.first_mismatch.is_none() {
                report.first_mismatch = Some(Mismatch {
                    index,
                    expected: expected.to_i64(),
                    actual: actual.to_i64(),
                });
            }
        }
        if report.first_mismatch.is_some() && report.diff.len() < config.diff_cap {
            report.diff.push(if bad { 'X' } else { '.' });
        }
    }

    report.passed = report.mismatch_count == 0;
    report
}

/// Compares each named candidate against `reference`.
///
/// Fails with [`ValidateError::LengthMismatch`] if any candidate's length
/// differs from the reference, before any element is compared, and with
/// [`ValidateError::CandidateCount`] unless there are 1 to
/// [`MAX_CANDIDATES`] candidates.
pub fn validate<T: Sample>(
    task: &str,
    reference: &[T],
    candidates: &[(&str, &[T])],
    config: &ValidationConfig,
) -> ValidateResult<ValidationReport> {
    if candidates.is_empty() || candidates.len() > MAX_CANDIDATES {
        return Err(ValidateError::CandidateCount {
            task: task.to_string(),
            count: candidates.len(),
            max: MAX_CANDIDATES,
        });
    }
    for (name, candidate) in candidates {
        if candidate.len() != reference.len() {
            return Err(ValidateError::LengthMismatch {
                task: task.to_string(),
                candidate: name.to_string(),
                expected: reference.len(),
                actual: candidate.len(),
            });
        }
    }
    debug!(task, elements = reference.len(), candidates = candidates.len(), ?config, "validate");

    let report = ValidationReport {
        task: task.to_string(),
        element_count: reference.len(),
        config: *config,
        candidates: candidates
            .iter()
            .map(|(name, candidate)| compare(name, reference, candidate, config))
            .collect(),
    };

    for c in report.candidates.iter().filter(|c| !c.passed) {
        warn!(
            task,
            candidate = %c.name,
            mismatches = c.mismatch_count,
            first = ?c.first_mismatch,
            diff = %c.diff,
            "validation failed"
        );
    }
    Ok(report)
}

/// [`validate`] with the task's default config for `vector_size` data.
pub fn validate_task<T: Sample>(
    task: Task,
    vector_size: usize,
    reference: &[T],
    candidates: &[(&str, &[T])],
) -> ValidateResult<ValidationReport> {
    validate(task.name(), reference, candidates, &task.config_for(vector_size))
}
