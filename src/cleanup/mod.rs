//! Passes that rewrite a raw edit script into something nicer to read.
//!
//! All passes work on run-length [`Chunk`]s and keep the script valid: the
//! non-insert chunks still spell the old sequence and the non-delete chunks
//! still spell the new one.

mod efficiency;
mod semantic;

pub use efficiency::efficiency;
pub use semantic::semantic;

use crate::myers::{common_prefix, common_suffix, Chunk, Op};

/// An element the cleanup passes can reason about.
///
/// Blank elements (an empty line, say) are preferred edit boundaries when
/// [`semantic`] slides an edit sideways.
pub trait Atom: Eq + Clone {
    fn is_blank(&self) -> bool {
        false
    }
}

impl Atom for &str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Atom for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

macro_rules! impl_atom {
    ($($t:ty),*) => {
        $(impl Atom for $t {})*
    };
}

impl_atom!(u8, u16, u32, u64, usize, i32, i64, char);

/// Normalizes a script.
///
/// Adjacent chunks of the same kind are merged, every change block is emitted
/// as deletion followed by insertion, elements shared by the start or end of a
/// deletion and its insertion move into the neighbouring equalities, and empty
/// chunks disappear. Single edits sitting between two equalities are then
/// slid sideways when that lets one of the equalities be absorbed,
/// e.g. `A<ins>BA</ins>C` becomes `<ins>AB</ins>AC`.
pub fn merge<T: Atom>(chunks: Vec<Chunk<T>>) -> Vec<Chunk<T>> {
    let mut merged = coalesce(chunks);
    while slide_single_edits(&mut merged) {
        merged = coalesce(merged);
    }
    merged
}

fn coalesce<T: Atom>(chunks: Vec<Chunk<T>>) -> Vec<Chunk<T>> {
    let mut out: Vec<Chunk<T>> = Vec::with_capacity(chunks.len());
    let mut deleted: Vec<T> = Vec::new();
    let mut inserted: Vec<T> = Vec::new();

    for chunk in chunks {
        match chunk.op {
            Op::Delete => deleted.extend(chunk.items),
            Op::Insert => inserted.extend(chunk.items),
            Op::Equal => flush_changes(&mut out, &mut deleted, &mut inserted, chunk.items),
        }
    }
    flush_changes(&mut out, &mut deleted, &mut inserted, Vec::new());
    out
}

fn flush_changes<T: Atom>(
    out: &mut Vec<Chunk<T>>,
    deleted: &mut Vec<T>,
    inserted: &mut Vec<T>,
    following_equal: Vec<T>,
) {
    let mut trailing: Vec<T> = Vec::new();
    if !deleted.is_empty() && !inserted.is_empty() {
        let prefix = common_prefix(inserted, deleted);
        if prefix > 0 {
            let shared: Vec<T> = inserted.drain(..prefix).collect();
            deleted.drain(..prefix);
            push_equal(out, shared);
        }
        let suffix = common_suffix(inserted, deleted);
        if suffix > 0 {
            trailing = inserted.split_off(inserted.len() - suffix);
            deleted.truncate(deleted.len() - suffix);
        }
    }
    if !deleted.is_empty() {
        out.push(Chunk::new(Op::Delete, std::mem::take(deleted)));
    }
    if !inserted.is_empty() {
        out.push(Chunk::new(Op::Insert, std::mem::take(inserted)));
    }
    trailing.extend(following_equal);
    push_equal(out, trailing);
}

fn push_equal<T>(out: &mut Vec<Chunk<T>>, items: Vec<T>) {
    if items.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.op == Op::Equal => last.items.extend(items),
        _ => out.push(Chunk::new(Op::Equal, items)),
    }
}

/// Returns true when something moved, in which case the caller coalesces again.
fn slide_single_edits<T: Atom>(chunks: &mut Vec<Chunk<T>>) -> bool {
    let mut changed = false;
    let mut pointer = 1;
    while pointer + 1 < chunks.len() {
        if chunks[pointer - 1].op == Op::Equal && chunks[pointer + 1].op == Op::Equal {
            let before_len = chunks[pointer - 1].len();
            let after_len = chunks[pointer + 1].len();
            if chunks[pointer].items.ends_with(&chunks[pointer - 1].items) {
                // Shift the edit left, swallowing the previous equality.
                let before = chunks.remove(pointer - 1).items;
                let edit = std::mem::take(&mut chunks[pointer - 1].items);
                let mut shifted = before.clone();
                shifted.extend_from_slice(&edit[..edit.len() - before_len]);
                chunks[pointer - 1].items = shifted;
                let next = std::mem::take(&mut chunks[pointer].items);
                let mut grown = before;
                grown.extend(next);
                chunks[pointer].items = grown;
                changed = true;
            } else if chunks[pointer].items.starts_with(&chunks[pointer + 1].items) {
                // Shift the edit right, swallowing the next equality.
                let after = chunks.remove(pointer + 1).items;
                chunks[pointer - 1].items.extend_from_slice(&after);
                let edit = &mut chunks[pointer].items;
                edit.drain(..after_len);
                edit.extend(after);
                changed = true;
            }
        }
        pointer += 1;
    }
    changed
}

/// Number of elements at the end of `a` that also open `b`.
pub(crate) fn common_overlap<T: Eq>(a: &[T], b: &[T]) -> usize {
    let longest = a.len().min(b.len());
    let Some(first) = b.first() else {
        return 0;
    };
    (1..=longest)
        .rev()
        .find(|&len| a[a.len() - len] == *first && a[a.len() - len..] == b[..len])
        .unwrap_or(0)
}
