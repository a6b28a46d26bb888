use super::{merge, Atom};
use crate::myers::{Chunk, Op};

/// Folds short equalities into the surrounding edits when keeping them apart
/// costs more than it is worth.
///
/// Each edit operation costs `edit_cost`. An equality shorter than that is
/// folded when it has an insertion and a deletion on both sides, or when it
/// has three of those four and is shorter than half the cost.
pub fn efficiency<T: Atom>(chunks: Vec<Chunk<T>>, edit_cost: usize) -> Vec<Chunk<T>> {
    let mut chunks = chunks;
    let mut changed = false;
    // Indices of candidate equalities, most recent last.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<usize> = None;
    let (mut inserted_before, mut deleted_before) = (false, false);
    let (mut inserted_after, mut deleted_after) = (false, false);
    let mut pointer: isize = 0;

    while (pointer as usize) < chunks.len() {
        let p = pointer as usize;
        if chunks[p].op == Op::Equal {
            if chunks[p].len() < edit_cost && (inserted_after || deleted_after) {
                equalities.push(p);
                inserted_before = inserted_after;
                deleted_before = deleted_after;
                last_equality = Some(chunks[p].len()).filter(|&len| len > 0);
            } else {
                equalities.clear();
                last_equality = None;
            }
            inserted_after = false;
            deleted_after = false;
        } else {
            if chunks[p].op == Op::Delete {
                deleted_after = true;
            } else {
                inserted_after = true;
            }
            if let (Some(len), Some(&index)) = (last_equality, equalities.last()) {
                let sides = [inserted_before, deleted_before, inserted_after, deleted_after]
                    .iter()
                    .filter(|&&side| side)
                    .count();
                if sides == 4 || (2 * len < edit_cost && sides == 3) {
                    let items = chunks[index].items.clone();
                    chunks.insert(index, Chunk::new(Op::Delete, items));
                    chunks[index + 1].op = Op::Insert;
                    equalities.pop();
                    last_equality = None;
                    if inserted_before && deleted_before {
                        // Nothing before this point can change any more.
                        inserted_after = true;
                        deleted_after = true;
                        equalities.clear();
                    } else {
                        equalities.pop();
                        pointer = equalities.last().map_or(-1, |&i| i as isize);
                        inserted_after = false;
                        deleted_after = false;
                    }
                    changed = true;
                }
            }
        }
        pointer += 1;
    }

    if changed {
        merge(chunks)
    } else {
        chunks
    }
}
