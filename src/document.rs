// SPDX-License-Identifier: MIT
use crate::digits::{self, DecodeError};
use crate::polynomial::Polynomial;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

/// One test case of the input document: the `keys` header plus the
/// available root entries, keyed `"1"`..`"n"` (sparse keys allowed).
#[derive(Clone, Debug, Deserialize)]
pub struct TestCase {
    pub keys: CaseKeys,
    #[serde(flatten)]
    pub entries: BTreeMap<String, RootEntry>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct CaseKeys {
    /// Count of available root entries.
    pub n: u32,
    /// Count of required values; the case's degree is `k - 1`.
    pub k: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RootEntry {
    pub base: BaseSpec,
    pub value: String,
}

/// A numeral base as documents actually carry it: a JSON integer, a JSON
/// real, or a text rendering of an integer.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum BaseSpec {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl BaseSpec {
    /// The base as an integer, or `InvalidBase` naming the original value
    /// for fractional reals and non-numeric text.
    pub fn to_integer(&self) -> Result<i64, DecodeError> {
        match self {
            BaseSpec::Integer(value) => Ok(*value),
            BaseSpec::Real(value) => {
                if value.fract() == 0.0 && value.abs() <= i64::max_value() as f64 {
                    Ok(*value as i64)
                } else {
                    Err(DecodeError::InvalidBase(value.to_string()))
                }
            }
            BaseSpec::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| DecodeError::InvalidBase(text.clone())),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CaseError {
    /// Fewer usable root entries than the case's degree requires.
    InsufficientRoots { required: usize, available: usize },
    /// An entry failed to decode; `key` is its position in the document.
    Entry { key: u32, source: DecodeError },
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CaseError::InsufficientRoots {
                required,
                available,
            } => write!(
                f,
                "insufficient roots: need {} but only {} entries are usable",
                required, available
            ),
            CaseError::Entry { key, source } => {
                write!(f, "entry \"{}\": {}", key, source)
            }
        }
    }
}

impl Error for CaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CaseError::InsufficientRoots { .. } => None,
            CaseError::Entry { source, .. } => Some(source),
        }
    }
}

/// The per-case output record. Every numeric value is exact decimal text;
/// coefficient magnitudes routinely exceed fixed-width ranges.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CaseRecord {
    pub case: usize,
    pub n: u32,
    pub k: u32,
    pub degree: usize,
    pub roots: Vec<String>,
    pub coefficients_low_to_high: Vec<String>,
    pub coefficients_high_to_low: Vec<String>,
}

/// Decodes the roots a case requires, in ascending key order.
///
/// `degree = k - 1` roots are used; entries are scanned from key `1` to
/// key `n` and missing keys are skipped, so a sparse document still
/// yields the first `degree` present entries. Entries beyond that count
/// are ignored.
fn select_roots(case: &TestCase) -> Result<Vec<BigInt>, CaseError> {
    let degree = (case.keys.k as usize).saturating_sub(1);
    let mut roots = Vec::with_capacity(degree);
    for key in 1..=case.keys.n {
        if roots.len() == degree {
            break;
        }
        if let Some(entry) = case.entries.get(&key.to_string()) {
            let base = entry
                .base
                .to_integer()
                .map_err(|source| CaseError::Entry { key, source })?;
            let root = digits::decode(base, &entry.value)
                .map_err(|source| CaseError::Entry { key, source })?;
            roots.push(root);
        }
    }
    if roots.len() < degree {
        return Err(CaseError::InsufficientRoots {
            required: degree,
            available: roots.len(),
        });
    }
    Ok(roots)
}

/// Runs one case end to end: select and decode its roots, synthesize the
/// monic polynomial, and render the result record.
pub fn solve_case(index: usize, case: &TestCase) -> Result<CaseRecord, CaseError> {
    let roots = select_roots(case)?;
    let root_text = roots.iter().map(BigInt::to_string).collect();
    let polynomial = Polynomial::from_roots(roots);
    Ok(CaseRecord {
        case: index,
        n: case.keys.n,
        k: case.keys.k,
        degree: polynomial.degree(),
        roots: root_text,
        coefficients_low_to_high: polynomial.iter().map(BigInt::to_string).collect(),
        coefficients_high_to_low: polynomial
            .iter_high_to_low()
            .map(BigInt::to_string)
            .collect(),
    })
}

/// Runs every case independently; a failed case never aborts the rest.
pub fn solve_document(cases: &[TestCase]) -> Vec<Result<CaseRecord, CaseError>> {
    cases
        .iter()
        .enumerate()
        .map(|(index, case)| solve_case(index, case))
        .collect()
}
