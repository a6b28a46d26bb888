pub mod types;
pub use types::*;

use log::debug;
use std::time::Instant;

/// Furthest-reaching x for each diagonal `k = x - y`; `-1` where the
/// diagonal has not been reached.
struct V {
    data: Vec<isize>,
    offset: isize,
}

impl V {
    fn new(max_d: usize) -> Self {
        V {
            data: vec![-1; 2 * max_d + 2],
            offset: max_d as isize,
        }
    }

    fn get(&self, k: isize) -> isize {
        usize::try_from(k + self.offset)
            .ok()
            .and_then(|i| self.data.get(i))
            .copied()
            .unwrap_or(-1)
    }

    fn set(&mut self, k: isize, val: isize) {
        self.data[(k + self.offset) as usize] = val;
    }
}

/// Computes the diff between two sequences using the Myers algorithm.
///
/// # Examples
///
/// ```
/// use diffly::myers::{diff, Edit};
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let result = diff(&old, &new);
/// assert_eq!(result, vec![
///     Edit::Equal(1),
///     Edit::Delete(2),
///     Edit::Equal(3),
///     Edit::Insert(4),
/// ]);
/// ```
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> Diff<T> {
    diff_with_deadline(old, new, None)
}

/// Same as [`diff`], but gives up on a minimal script once `deadline` has passed.
///
/// The common prefix and suffix are always reported as equal. When the search
/// runs out of time, whatever lies between them is reported as a single
/// deletion of the old elements followed by a single insertion of the new
/// ones: still a valid script, just not a minimal one.
pub fn diff_with_deadline<T: Eq + Clone>(
    old: &[T],
    new: &[T],
    deadline: Option<Instant>,
) -> Diff<T> {
    let prefix = common_prefix(old, new);
    let suffix = common_suffix(&old[prefix..], &new[prefix..]);
    let old_middle = &old[prefix..old.len() - suffix];
    let new_middle = &new[prefix..new.len() - suffix];

    let mut edits: Diff<T> = old[..prefix].iter().cloned().map(Edit::Equal).collect();
    edits.extend(diff_middle(old_middle, new_middle, deadline));
    edits.extend(old[old.len() - suffix..].iter().cloned().map(Edit::Equal));
    edits
}

/// Number of leading elements `a` and `b` share.
pub fn common_prefix<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Number of trailing elements `a` and `b` share.
pub fn common_suffix<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn diff_middle<T: Eq + Clone>(old: &[T], new: &[T], deadline: Option<Instant>) -> Diff<T> {
    if old.is_empty() {
        return new.iter().map(|e| Edit::Insert(e.clone())).collect();
    }
    if new.is_empty() {
        return old.iter().map(|e| Edit::Delete(e.clone())).collect();
    }

    match bisect(old, new, deadline) {
        Some((x, y)) if (x, y) != (0, 0) && (x, y) != (old.len(), new.len()) => {
            let mut edits = diff_with_deadline(&old[..x], &new[..y], deadline);
            edits.extend(diff_with_deadline(&old[x..], &new[y..], deadline));
            edits
        }
        _ => {
            if expired(deadline) {
                debug!(
                    "myers search hit its deadline ({} old, {} new elements), falling back to replace-all",
                    old.len(),
                    new.len()
                );
            }
            old.iter()
                .map(|e| Edit::Delete(e.clone()))
                .chain(new.iter().map(|e| Edit::Insert(e.clone())))
                .collect()
        }
    }
}

fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|limit| Instant::now() >= limit)
}

/// Runs the search from both corners at once and returns the point where the
/// two paths meet (the middle snake), splitting the problem in two.
///
/// One row of diagonals per direction is kept, so memory stays linear in the input.
/// `None` means the sequences have nothing in common, or the deadline passed.
fn bisect<T: Eq>(old: &[T], new: &[T], deadline: Option<Instant>) -> Option<(usize, usize)> {
    let n = old.len() as isize;
    let m = new.len() as isize;
    let max_d = (n + m + 1) / 2;
    let delta = n - m;
    // With an odd delta the paths meet while extending forward, otherwise in reverse.
    let front = delta % 2 != 0;

    let mut forward = V::new(max_d as usize);
    let mut reverse = V::new(max_d as usize);
    forward.set(1, 0);
    reverse.set(1, 0);

    // Diagonals that ran off the grid are skipped in later rounds.
    let (mut k1_start, mut k1_end, mut k2_start, mut k2_end) = (0, 0, 0, 0);

    for d in 0..max_d {
        if expired(deadline) {
            return None;
        }

        for k1 in (-d + k1_start..=d - k1_end).step_by(2) {
            let mut x1 = if k1 == -d || (k1 != d && forward.get(k1 - 1) < forward.get(k1 + 1)) {
                forward.get(k1 + 1)
            } else {
                forward.get(k1 - 1) + 1
            };
            let mut y1 = x1 - k1;
            while x1 >= 0 && x1 < n && y1 >= 0 && y1 < m && old[x1 as usize] == new[y1 as usize] {
                x1 += 1;
                y1 += 1;
            }
            forward.set(k1, x1);

            if x1 > n {
                k1_end += 2;
            } else if y1 > m {
                k1_start += 2;
            } else if front {
                let x2 = reverse.get(delta - k1);
                if x2 != -1 && x1 >= 0 && y1 >= 0 && x1 >= n - x2 {
                    return Some((x1 as usize, y1 as usize));
                }
            }
        }

        for k2 in (-d + k2_start..=d - k2_end).step_by(2) {
            let mut x2 = if k2 == -d || (k2 != d && reverse.get(k2 - 1) < reverse.get(k2 + 1)) {
                reverse.get(k2 + 1)
            } else {
                reverse.get(k2 - 1) + 1
            };
            let mut y2 = x2 - k2;
            while x2 >= 0
                && x2 < n
                && y2 >= 0
                && y2 < m
                && old[(n - x2 - 1) as usize] == new[(m - y2 - 1) as usize]
            {
                x2 += 1;
                y2 += 1;
            }
            reverse.set(k2, x2);

            if x2 > n {
                k2_end += 2;
            } else if y2 > m {
                k2_start += 2;
            } else if !front {
                let k1 = delta - k2;
                let x1 = forward.get(k1);
                let y1 = x1 - k1;
                if x1 != -1 && x1 <= n && (0..=m).contains(&y1) && x1 >= n - x2 {
                    return Some((x1 as usize, y1 as usize));
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    fn sides<T: Clone>(edits: &[Edit<T>]) -> (Vec<T>, Vec<T>) {
        let old = edits
            .iter()
            .filter(|e| !matches!(e, Edit::Insert(_)))
            .map(|e| e.clone().into_inner())
            .collect();
        let new = edits
            .iter()
            .filter(|e| !matches!(e, Edit::Delete(_)))
            .map(|e| e.clone().into_inner())
            .collect();
        (old, new)
    }

    fn changes<T>(edits: &[Edit<T>]) -> usize {
        edits.iter().filter(|e| !matches!(e, Edit::Equal(_))).count()
    }

    /// Length of the longest common subsequence, by dynamic programming.
    fn lcs(a: &[u8], b: &[u8]) -> usize {
        let mut row = vec![0; b.len() + 1];
        for x in a {
            let mut diagonal = 0;
            for (j, y) in b.iter().enumerate() {
                let above = row[j + 1];
                row[j + 1] = if x == y {
                    diagonal + 1
                } else {
                    above.max(row[j])
                };
                diagonal = above;
            }
        }
        row[b.len()]
    }

    proptest! {
        #[test]
        fn test_reconstructs_both_sides(old in prop::collection::vec(0u8..4, 0..40), new in prop::collection::vec(0u8..4, 0..40)) {
            let result = diff(&old, &new);
            prop_assert_eq!(sides(&result), (old, new));
        }

        #[test]
        fn test_script_is_minimal(old in prop::collection::vec(0u8..3, 0..30), new in prop::collection::vec(0u8..3, 0..30)) {
            let result = diff(&old, &new);
            prop_assert_eq!(changes(&result), old.len() + new.len() - 2 * lcs(&old, &new));
        }

        #[test]
        fn test_same_input_is_all_equal(items in prop::collection::vec(any::<u8>(), 0..30)) {
            let result = diff(&items, &items);
            prop_assert!(result.iter().all(|e| matches!(e, Edit::Equal(_))));
            prop_assert_eq!(result.len(), items.len());
        }

        #[test]
        fn test_expired_deadline_keeps_affixes(old in prop::collection::vec(0u8..4, 0..30), new in prop::collection::vec(0u8..4, 0..30)) {
            let expired = Instant::now() - Duration::from_millis(1);
            let result = diff_with_deadline(&old, &new, Some(expired));
            prop_assert_eq!(sides(&result), (old.clone(), new.clone()));

            let prefix = common_prefix(&old, &new);
            let suffix = common_suffix(&old[prefix..], &new[prefix..]);
            let equals = result.iter().filter(|e| matches!(e, Edit::Equal(_))).count();
            prop_assert_eq!(equals, prefix + suffix);
            prop_assert!(result[..prefix].iter().all(|e| matches!(e, Edit::Equal(_))));
            prop_assert!(result[result.len() - suffix..].iter().all(|e| matches!(e, Edit::Equal(_))));
        }
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(diff(&[] as &[u8], &[1, 2]), vec![Edit::Insert(1), Edit::Insert(2)]);
        assert_eq!(diff(&[1, 2], &[]), vec![Edit::Delete(1), Edit::Delete(2)]);
    }

    #[test]
    fn test_replacement_between_equal_lines() {
        let result = diff(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(
            result,
            [
                Edit::Equal("a"),
                Edit::Delete("b"),
                Edit::Insert("x"),
                Edit::Equal("c")
            ]
        );
    }

    #[test]
    fn test_nothing_in_common() {
        let result = diff(&["a", "b", "c"], &["x", "y", "z"]);
        assert_eq!(
            result,
            vec![
                Edit::Delete("a"),
                Edit::Delete("b"),
                Edit::Delete("c"),
                Edit::Insert("x"),
                Edit::Insert("y"),
                Edit::Insert("z")
            ]
        )
    }

    #[test]
    fn test_duplicates_keep_affixes() {
        let result = diff(&["a", "a", "b"], &["a", "b", "b"]);
        assert_eq!(
            result,
            vec![
                Edit::Equal("a"),
                Edit::Delete("a"),
                Edit::Insert("b"),
                Edit::Equal("b")
            ]
        );
    }

    #[test]
    fn test_insertion_in_middle() {
        let result = diff(&["a", "c"], &["a", "b", "c"]);
        assert_eq!(
            result,
            vec![Edit::Equal("a"), Edit::Insert("b"), Edit::Equal("c")]
        );
    }

    #[test]
    fn test_split_on_shared_middle() {
        let old = ["a", "same", "b"];
        let new = ["x", "same", "y"];
        assert_eq!(
            diff(&old, &new),
            vec![
                Edit::Delete("a"),
                Edit::Insert("x"),
                Edit::Equal("same"),
                Edit::Delete("b"),
                Edit::Insert("y")
            ]
        );
    }

    #[test]
    fn test_long_disjoint_inputs() {
        let old: Vec<u32> = (0..3000).collect();
        let new: Vec<u32> = (3000..6000).collect();
        let result = diff(&old, &new);
        assert_eq!(result.len(), 6000);
        assert!(result[..3000].iter().all(|e| matches!(e, Edit::Delete(_))));
        assert!(result[3000..].iter().all(|e| matches!(e, Edit::Insert(_))));
    }

    #[test]
    fn test_long_inputs_with_interleaved_matches() {
        let old: Vec<u32> = (0..4000).map(|i| if i % 2 == 0 { i } else { i + 10_000 }).collect();
        let new: Vec<u32> = (0..4000).map(|i| if i % 2 == 0 { i } else { i + 20_000 }).collect();
        let result = diff(&old, &new);
        assert_eq!(sides(&result), (old, new));
        assert_eq!(changes(&result), 4000);
    }

    #[test]
    fn test_expired_deadline_replaces_middle() {
        let old = vec!["a", "b", "c", "d"];
        let new = vec!["a", "c", "x", "d"];
        let expired = Instant::now() - Duration::from_millis(1);
        let result = diff_with_deadline(&old, &new, Some(expired));
        assert_eq!(
            result,
            vec![
                Edit::Equal("a"),
                Edit::Delete("b"),
                Edit::Delete("c"),
                Edit::Insert("c"),
                Edit::Insert("x"),
                Edit::Equal("d")
            ]
        );
    }

    #[test]
    fn test_affixes() {
        assert_eq!(common_prefix(&[1, 2, 3], &[1, 2, 4]), 2);
        assert_eq!(common_suffix(&[1, 2, 3], &[0, 2, 3]), 2);
        assert_eq!(common_prefix::<u8>(&[], &[1]), 0);
    }
}
