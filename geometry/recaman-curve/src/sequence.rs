//! Recamán's sequence ([OEIS A005132](https://oeis.org/A005132)).

use hashbrown::HashSet;

use crate::error::{CurveError, CurveResult};

/// The first `n` terms of Recamán's sequence.
///
/// Starting from `a(0) = 0`, each term is `a(i-1) - i` when that value is
/// non-negative and has not appeared yet, otherwise `a(i-1) + i`.
///
/// # Example
///
/// ```
/// use recaman_curve::RecamanSequence;
///
/// let seq = RecamanSequence::generate(8).unwrap();
/// assert_eq!(seq.terms(), &[0, 1, 3, 6, 2, 7, 13, 20]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecamanSequence {
    terms: Vec<u64>,
}

impl RecamanSequence {
    /// Generate the first `n` terms.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptySequence`] if `n` is zero, or
    /// [`CurveError::TermOverflow`] if a term would not fit in a `u64`.
    pub fn generate(n: usize) -> CurveResult<Self> {
        if n == 0 {
            return Err(CurveError::EmptySequence);
        }

        let mut terms = Vec::with_capacity(n);
        let mut seen = HashSet::with_capacity(n);
        let mut a: u64 = 0;
        terms.push(a);
        seen.insert(a);

        for step in 1..n as u64 {
            a = match a.checked_sub(step) {
                Some(down) if !seen.contains(&down) => down,
                _ => a
                    .checked_add(step)
                    .ok_or(CurveError::TermOverflow { step })?,
            };
            terms.push(a);
            seen.insert(a);
        }

        Ok(Self { terms })
    }

    /// All terms, in order.
    #[inline]
    #[must_use]
    pub fn terms(&self) -> &[u64] {
        &self.terms
    }

    /// Number of terms.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always `false`; a generated sequence holds at least `a(0)`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Smallest term (always 0).
    #[must_use]
    pub fn min(&self) -> u64 {
        self.terms.iter().copied().min().unwrap_or(0)
    }

    /// Largest term.
    #[must_use]
    pub fn max(&self) -> u64 {
        self.terms.iter().copied().max().unwrap_or(0)
    }

    /// Consecutive `(a(i-1), a(i))` pairs, one per arc.
    pub fn steps(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.terms.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn single_term() {
        let seq = RecamanSequence::generate(1).unwrap();
        assert_eq!(seq.terms(), &[0]);
        assert_eq!(seq.steps().count(), 0);
    }

    #[test]
    fn matches_oeis_prefix() {
        let seq = RecamanSequence::generate(20).unwrap();
        assert_eq!(
            seq.terms(),
            &[0, 1, 3, 6, 2, 7, 13, 20, 12, 21, 11, 22, 10, 23, 9, 24, 8, 25, 43, 62]
        );
    }

    #[test]
    fn zero_length_rejected() {
        assert_eq!(RecamanSequence::generate(0), Err(CurveError::EmptySequence));
    }

    #[test]
    fn steps_differ_by_index() {
        let seq = RecamanSequence::generate(500).unwrap();
        for (i, (prev, next)) in seq.steps().enumerate() {
            assert_eq!(prev.abs_diff(next), i as u64 + 1);
        }
    }

    #[test]
    fn prefers_subtraction_when_unused() {
        let seq = RecamanSequence::generate(500).unwrap();
        let terms = seq.terms();
        for i in 1..terms.len() {
            let step = i as u64;
            let prev = terms[i - 1];
            let down_allowed = prev >= step && !terms[..i].contains(&(prev - step));
            if down_allowed {
                assert_eq!(terms[i], prev - step, "term {i}");
            } else {
                assert_eq!(terms[i], prev + step, "term {i}");
            }
        }
    }

    #[test]
    fn min_and_max() {
        let seq = RecamanSequence::generate(8).unwrap();
        assert_eq!(seq.min(), 0);
        assert_eq!(seq.max(), 20);
        assert_eq!(seq.len(), 8);
        assert!(!seq.is_empty());
    }
}
