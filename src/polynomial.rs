// SPDX-License-Identifier: MIT
use num_traits::{One, Zero};
use std::fmt;
use std::iter;
use std::ops::{AddAssign, Mul, Neg};
use std::slice;
use std::vec;

/// A single-variable monic polynomial, stored as its coefficients.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, n)`
///
/// # Invariants
///
/// `self.coefficients().last()` is always `Some(v)` where `v.is_one()`,
/// since the only constructor multiplies monic linear factors together.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T> Polynomial<T>
where
    T: Zero + One + AddAssign + Clone,
    for<'a> &'a T: Neg<Output = T> + Mul<&'a T, Output = T>,
{
    /// Expands `prod (x - r)` over the given roots, in order.
    ///
    /// Starts from the constant polynomial `1`; each root extends the
    /// running coefficient sequence by one: multiplying by `x` shifts every
    /// coefficient up an index, multiplying by `-r` scales it in place, and
    /// the sum of the two is the product by `(x - r)`.
    ///
    /// The empty root list yields `[1]`. The result length is always
    /// `roots.len() + 1`, the leading coefficient always exactly one.
    pub fn from_roots<I: IntoIterator<Item = T>>(roots: I) -> Self {
        let mut coefficients = vec![T::one()];
        for root in roots {
            let negated_root = -&root;
            let mut next = vec![T::zero(); coefficients.len() + 1];
            for (index, coefficient) in coefficients.iter().enumerate() {
                next[index] += &negated_root * coefficient;
                next[index + 1] += coefficient.clone();
            }
            coefficients = next;
        }
        Self { coefficients }
    }
}

impl<T> Polynomial<T> {
    pub fn coefficients(&self) -> &Vec<T> {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
    /// Coefficients from the constant term up to the leading term.
    pub fn iter(&self) -> slice::Iter<T> {
        self.coefficients.iter()
    }
    /// The reversed presentation, leading term first. Borrows the stored
    /// sequence; nothing is recomputed.
    pub fn iter_high_to_low(&self) -> iter::Rev<slice::Iter<T>> {
        self.coefficients.iter().rev()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")
        } else {
            for (power, coefficient) in self.coefficients.iter().enumerate() {
                match power {
                    0 => write!(f, "{}", coefficient)?,
                    1 => write!(f, " + {}*x", coefficient)?,
                    _ => write!(f, " + {}*x^{}", coefficient, power)?,
                }
            }
            Ok(())
        }
    }
}
