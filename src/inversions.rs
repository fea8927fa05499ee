//! Inversion counting by merge sort
//!
//! Counts pairs (i, j), i < j, with `seq[i] > seq[j]` in O(N log N). The
//! caller's slice is never touched; sorting happens on a private working copy
//! with its own merge buffer, so concurrent calls share nothing.

/// Number of inversions in `seq`
///
/// ```
/// use sospecha::inversions::count_inversions;
///
/// assert_eq!(count_inversions(&[3, 1, 2]), 2);
/// ```
pub fn count_inversions<T: PartialOrd + Copy>(seq: &[T]) -> u64 {
    if seq.len() < 2 {
        return 0;
    }
    let mut data = seq.to_vec();
    let mut aux = seq.to_vec();
    let high = data.len() - 1;
    merge_count(&mut data, &mut aux, 0, high)
}

/// Sort `data[low..=high]` in place, returning the inversions it removed
fn merge_count<T: PartialOrd + Copy>(
    data: &mut [T],
    aux: &mut [T],
    low: usize,
    high: usize,
) -> u64 {
    if low >= high {
        return 0;
    }

    let mid = low + (high - low) / 2;
    let left = merge_count(data, aux, low, mid);
    let right = merge_count(data, aux, mid + 1, high);

    aux[low..=high].copy_from_slice(&data[low..=high]);

    let mut cross = 0u64;
    let (mut i, mut j) = (low, mid + 1);
    for slot in data[low..=high].iter_mut() {
        if i > mid {
            *slot = aux[j];
            j += 1;
        } else if j > high {
            *slot = aux[i];
            i += 1;
        } else if aux[i] <= aux[j] {
            // ties take the left element first: stable, and not an inversion
            *slot = aux[i];
            i += 1;
        } else {
            *slot = aux[j];
            j += 1;
            cross += (mid - i + 1) as u64;
        }
    }

    left + right + cross
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sequence() {
        assert_eq!(count_inversions(&[3, 1, 2]), 2);
        assert_eq!(count_inversions(&[2, 1]), 1);
    }

    #[test]
    fn test_sorted_has_none() {
        let seq: Vec<usize> = (0..64).collect();
        assert_eq!(count_inversions(&seq), 0);
    }

    #[test]
    fn test_reversed_has_all_pairs() {
        let n = 50u64;
        let seq: Vec<u64> = (0..n).rev().collect();
        assert_eq!(count_inversions(&seq), n * (n - 1) / 2);
    }

    #[test]
    fn test_ties_are_not_inversions() {
        assert_eq!(count_inversions(&[1, 1, 1, 1]), 0);
        assert_eq!(count_inversions(&[2, 1, 1, 2]), 2);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(count_inversions::<usize>(&[]), 0);
        assert_eq!(count_inversions(&[9]), 0);
    }

    #[test]
    fn test_input_untouched() {
        let seq = vec![5, 4, 3, 2, 1];
        let _ = count_inversions(&seq);
        assert_eq!(seq, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_matches_quadratic_count() {
        let seq = [4, 8, 1, 1, 7, 3, 9, 2, 2, 6];
        let mut naive = 0;
        for i in 0..seq.len() {
            for j in (i + 1)..seq.len() {
                if seq[i] > seq[j] {
                    naive += 1;
                }
            }
        }
        assert_eq!(count_inversions(&seq), naive);
    }
}
