use super::{common_overlap, merge, Atom};
use crate::myers::{common_suffix, Chunk, Op};
use std::cmp::max;

/// Trades minimality for readability.
///
/// Expects a script that already went through [`merge`]. Three things happen,
/// in order:
///
/// 1. equalities that are no longer than the edits on both of their sides
///    are folded into those edits, so `a<del>b</del>c` style noise becomes one
///    change;
/// 2. edits sitting between two equalities slide to the boundary that scores
///    best, where either end of the text and blank elements are preferred;
/// 3. a deletion whose tail opens the following insertion (or the other way
///    round) gets that overlap pulled out as an equality, as long as the
///    overlap covers at least half of one of them.
pub fn semantic<T: Atom>(chunks: Vec<Chunk<T>>) -> Vec<Chunk<T>> {
    let mut chunks = chunks;
    if eliminate_equalities(&mut chunks) {
        chunks = merge(chunks);
    }
    shift_to_boundaries(&mut chunks);
    extract_overlaps(&mut chunks);
    chunks.retain(|c| !c.is_empty());
    chunks
}

fn eliminate_equalities<T: Atom>(chunks: &mut Vec<Chunk<T>>) -> bool {
    let mut changed = false;
    // Indices of the equalities seen so far, most recent last.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<usize> = None;
    let (mut inserted_before, mut deleted_before) = (0, 0);
    let (mut inserted_after, mut deleted_after) = (0, 0);
    let mut pointer: isize = 0;

    while (pointer as usize) < chunks.len() {
        let p = pointer as usize;
        match chunks[p].op {
            Op::Equal => {
                equalities.push(p);
                inserted_before = inserted_after;
                deleted_before = deleted_after;
                inserted_after = 0;
                deleted_after = 0;
                last_equality = Some(chunks[p].len()).filter(|&len| len > 0);
            }
            op => {
                if op == Op::Insert {
                    inserted_after += chunks[p].len();
                } else {
                    deleted_after += chunks[p].len();
                }
                if let (Some(len), Some(&index)) = (last_equality, equalities.last()) {
                    if len <= max(inserted_before, deleted_before)
                        && len <= max(inserted_after, deleted_after)
                    {
                        let items = chunks[index].items.clone();
                        chunks.insert(index, Chunk::new(Op::Delete, items));
                        chunks[index + 1].op = Op::Insert;
                        // The folded equality, and the one before it which now
                        // has to be looked at again.
                        equalities.pop();
                        equalities.pop();
                        pointer = equalities.last().map_or(-1, |&i| i as isize);
                        inserted_before = 0;
                        deleted_before = 0;
                        inserted_after = 0;
                        deleted_after = 0;
                        last_equality = None;
                        changed = true;
                    }
                }
            }
        }
        pointer += 1;
    }
    changed
}

/// How good a place the gap between `one` and `two` is for an edit boundary.
fn boundary_score<T: Atom>(one: &[T], two: &[T]) -> u8 {
    match (one.last(), two.first()) {
        (None, _) | (_, None) => 6,
        (Some(a), Some(b)) if a.is_blank() || b.is_blank() => 5,
        _ => 0,
    }
}

fn shift_to_boundaries<T: Atom>(chunks: &mut Vec<Chunk<T>>) {
    let mut pointer = 1;
    while pointer + 1 < chunks.len() {
        if chunks[pointer - 1].op == Op::Equal && chunks[pointer + 1].op == Op::Equal {
            let mut before = chunks[pointer - 1].items.clone();
            let mut edit = chunks[pointer].items.clone();
            let mut after = chunks[pointer + 1].items.clone();

            // Slide all the way left first.
            let offset = common_suffix(&before, &edit);
            if offset > 0 {
                let shared = edit.split_off(edit.len() - offset);
                before.truncate(before.len() - offset);
                edit.splice(0..0, shared.iter().cloned());
                after.splice(0..0, shared);
            }

            // Then walk right one element at a time, keeping the best spot.
            let mut best_score = boundary_score(&before, &edit) + boundary_score(&edit, &after);
            let mut best = (before.clone(), edit.clone(), after.clone());
            while !edit.is_empty() && !after.is_empty() && edit[0] == after[0] {
                before.push(edit.remove(0));
                edit.push(after.remove(0));
                let score = boundary_score(&before, &edit) + boundary_score(&edit, &after);
                // >= so ties prefer the rightmost position.
                if score >= best_score {
                    best_score = score;
                    best = (before.clone(), edit.clone(), after.clone());
                }
            }

            let (best_before, best_edit, best_after) = best;
            if chunks[pointer - 1].items != best_before {
                if best_before.is_empty() {
                    chunks.remove(pointer - 1);
                    pointer -= 1;
                } else {
                    chunks[pointer - 1].items = best_before;
                }
                chunks[pointer].items = best_edit;
                if best_after.is_empty() {
                    chunks.remove(pointer + 1);
                    pointer = pointer.saturating_sub(1);
                } else {
                    chunks[pointer + 1].items = best_after;
                }
            }
        }
        pointer += 1;
    }
}

fn extract_overlaps<T: Atom>(chunks: &mut Vec<Chunk<T>>) {
    let mut pointer = 1;
    while pointer < chunks.len() {
        if chunks[pointer - 1].op == Op::Delete && chunks[pointer].op == Op::Insert {
            let deletion = chunks[pointer - 1].items.clone();
            let insertion = chunks[pointer].items.clone();
            let forward = common_overlap(&deletion, &insertion);
            let backward = common_overlap(&insertion, &deletion);
            if forward >= backward {
                if forward > 0
                    && (2 * forward >= deletion.len() || 2 * forward >= insertion.len())
                {
                    chunks.insert(pointer, Chunk::new(Op::Equal, insertion[..forward].to_vec()));
                    chunks[pointer - 1].items = deletion[..deletion.len() - forward].to_vec();
                    chunks[pointer + 1].items = insertion[forward..].to_vec();
                    pointer += 1;
                }
            } else if 2 * backward >= deletion.len() || 2 * backward >= insertion.len() {
                // The insertion's tail opens the deletion: swap them around the overlap.
                chunks.insert(pointer, Chunk::new(Op::Equal, deletion[..backward].to_vec()));
                chunks[pointer - 1] = Chunk::new(
                    Op::Insert,
                    insertion[..insertion.len() - backward].to_vec(),
                );
                chunks[pointer + 1] = Chunk::new(Op::Delete, deletion[backward..].to_vec());
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
}
