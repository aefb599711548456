//! Residue-range compression.
//!
//! Collapses a selection's residue numbers into maximal consecutive runs,
//! the form used in selection expressions (`12-47`, `102`).

use std::fmt;

/// An inclusive run of consecutive residue numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResiRange {
    pub start: i32,
    pub end: i32,
}

impl ResiRange {
    /// Number of residues in the run (always at least 1).
    pub fn count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn contains(&self, resi: i32) -> bool {
        self.start <= resi && resi <= self.end
    }
}

impl fmt::Display for ResiRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Compress residue numbers into sorted, deduplicated consecutive ranges.
///
/// Input order and duplicates do not matter; the atoms of one residue all
/// report the same number.
pub fn compress_ranges(resi: &[i32]) -> Vec<ResiRange> {
    let mut unique: Vec<i32> = resi.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let mut ranges = Vec::new();
    let mut iter = unique.into_iter();
    let Some(first) = iter.next() else {
        return ranges;
    };

    let mut current = ResiRange {
        start: first,
        end: first,
    };
    for r in iter {
        if r == current.end + 1 {
            current.end = r;
        } else {
            ranges.push(current);
            current = ResiRange { start: r, end: r };
        }
    }
    ranges.push(current);
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_mixed() {
        let ranges = compress_ranges(&[4, 2, 1, 3, 7, 9, 8, 2]);
        assert_eq!(
            ranges,
            vec![
                ResiRange { start: 1, end: 4 },
                ResiRange { start: 7, end: 9 },
            ]
        );
    }

    #[test]
    fn test_singletons() {
        let ranges = compress_ranges(&[5, 10, 3]);
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].to_string(), "3");
        assert_eq!(ranges[1].to_string(), "5");
        assert_eq!(ranges[2].to_string(), "10");
    }

    #[test]
    fn test_display_run() {
        let ranges = compress_ranges(&[12, 13, 14]);
        assert_eq!(ranges[0].to_string(), "12-14");
    }

    #[test]
    fn test_empty() {
        assert!(compress_ranges(&[]).is_empty());
    }

    #[test]
    fn test_negative_numbers() {
        // Insertion-code-free numbering can start below 1.
        let ranges = compress_ranges(&[-2, -1, 0, 5]);
        assert_eq!(
            ranges,
            vec![
                ResiRange { start: -2, end: 0 },
                ResiRange { start: 5, end: 5 },
            ]
        );
    }

    #[test]
    fn test_contains_and_count() {
        let r = ResiRange { start: 3, end: 7 };
        assert_eq!(r.count(), 5);
        assert!(r.contains(3));
        assert!(r.contains(7));
        assert!(!r.contains(8));
    }
}
