//! A deterministic, in-memory `SeekableCursor` over fixed-width tuples of
//! decimal digits — the reference cursor used to exercise the filtered
//! cursor's state machine without a real storage engine, which is out of
//! scope for this crate.
//!
//! Row `i` of an `N`-column digits cursor is the base-10 digits of `i`,
//! zero-padded to `N` places, in ascending lexicographic (and numeric)
//! order — e.g. for `N = 3`: `000, 001, 002, ..., 999`.

use super::SeekableCursor;
use rangeplan_expr::Value;
use std::convert::Infallible;

#[derive(Debug, Clone)]
pub struct DigitsCursor {
    n: usize,
    /// `None` before the first row or after being exhausted/reset.
    position: Option<Vec<i64>>,
}

impl DigitsCursor {
    pub fn new(n: usize) -> Self { Self { n, position: None } }

    /// Increments `digits[..len]` as a base-10 odometer with carry, zeroing
    /// the tail on success. `false` iff the prefix was already all-9s.
    fn increment_prefix(digits: &mut [i64], len: usize) -> bool {
        let mut i = len;
        while i > 0 {
            i -= 1;
            if digits[i] < 9 {
                digits[i] += 1;
                for d in &mut digits[i + 1..] {
                    *d = 0;
                }
                return true;
            }
            digits[i] = 0;
        }
        false
    }
}

impl SeekableCursor for DigitsCursor {
    type Row = Vec<i64>;
    type Error = Infallible;

    fn move_next(&mut self) -> Result<bool, Infallible> {
        match &mut self.position {
            None => {
                self.position = Some(vec![0; self.n]);
                Ok(true)
            }
            Some(digits) => Ok(Self::increment_prefix(digits, self.n)),
        }
    }

    fn current(&self) -> Option<&Vec<i64>> { self.position.as_ref() }

    fn get_column_value(&self, ordinal: usize) -> Value {
        let digits = self.position.as_ref().expect("get_column_value called before positioning");
        Value::I64(digits[ordinal])
    }

    fn seek_to(&mut self, prefix_length: usize, key_values: &[Value], following: bool) -> Result<bool, Infallible> {
        if prefix_length == 0 {
            // Comparing zero components is always vacuously "equal", never
            // "greater" — there is no row past an empty prefix.
            return if following {
                self.position = None;
                Ok(false)
            } else {
                self.position = Some(vec![0; self.n]);
                Ok(true)
            };
        }

        let mut digits: Vec<i64> = (0..self.n)
            .map(|i| {
                if i < prefix_length {
                    match &key_values[i] {
                        Value::I64(v) => *v,
                        other => panic!("digits cursor key components must be I64, got {other:?}"),
                    }
                } else {
                    0
                }
            })
            .collect();

        if following && !Self::increment_prefix(&mut digits, prefix_length) {
            self.position = None;
            return Ok(false);
        }

        self.position = Some(digits);
        Ok(true)
    }

    fn reset(&mut self) -> Result<(), Infallible> {
        self.position = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_in_order() {
        let mut c = DigitsCursor::new(2);
        let mut rows = Vec::new();
        while c.move_next().unwrap() {
            rows.push(c.current().unwrap().clone());
        }
        assert_eq!(rows.len(), 100);
        assert_eq!(rows[0], vec![0, 0]);
        assert_eq!(rows[1], vec![0, 1]);
        assert_eq!(rows[99], vec![9, 9]);
    }

    #[test]
    fn seek_to_lower_bound_lands_at_or_after() {
        let mut c = DigitsCursor::new(2);
        assert!(c.seek_to(1, &[Value::I64(4)], false).unwrap());
        assert_eq!(c.current().unwrap(), &vec![4, 0]);
    }

    #[test]
    fn seek_to_following_skips_past_prefix() {
        let mut c = DigitsCursor::new(2);
        assert!(c.seek_to(1, &[Value::I64(4)], true).unwrap());
        assert_eq!(c.current().unwrap(), &vec![5, 0]);
    }

    #[test]
    fn seek_to_following_past_max_prefix_is_exhausted() {
        let mut c = DigitsCursor::new(2);
        assert!(!c.seek_to(1, &[Value::I64(9)], true).unwrap());
        assert_eq!(c.current(), None);
    }

    #[test]
    fn seek_to_empty_prefix_following_is_always_exhausted() {
        let mut c = DigitsCursor::new(2);
        assert!(!c.seek_to(0, &[], true).unwrap());
    }
}
