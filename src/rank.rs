//! Tie-aware ranking
//!
//! `rank` produces 1-indexed mid-ranks (tied values share the mean of the
//! positions they occupy), so ranks always sum to N(N+1)/2. `dense_groups`
//! compresses a sorted run into consecutive group ids for tie counting.

/// Mid-rank transform of `values`
///
/// ```
/// use sospecha::rank::rank;
///
/// assert_eq!(rank(&[10.0, 20.0, 20.0, 5.0]), vec![2.0, 3.5, 3.5, 1.0]);
/// ```
pub fn rank(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end (0-based) hold ranks start+1..=end
        let mid_rank = (start + end + 1) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = mid_rank;
        }
        start = end;
    }

    ranks
}

/// Group ids for an already-sorted sequence
///
/// Equal adjacent values share an id; ids start at 1 and increase by one at
/// every change, so the output is non-decreasing.
pub fn dense_groups<T: PartialEq>(sorted: &[T]) -> Vec<usize> {
    let mut groups = Vec::with_capacity(sorted.len());
    let mut current = 0;
    for (i, value) in sorted.iter().enumerate() {
        if i == 0 || *value != sorted[i - 1] {
            current += 1;
        }
        groups.push(current);
    }
    groups
}

/// Σ C(t, 2) over the sizes `t` of each group id
pub fn tied_pairs(groups: &[usize]) -> u64 {
    let Some(&max_id) = groups.iter().max() else {
        return 0;
    };
    let mut counts = vec![0u64; max_id + 1];
    for &g in groups {
        counts[g] += 1;
    }
    counts.iter().map(|&t| t * t.saturating_sub(1) / 2).sum()
}
