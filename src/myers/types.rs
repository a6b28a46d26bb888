/// Alias for a vector of Edit
/// Result of the Myers diff function
pub type Diff<T> = Vec<Edit<T>>;

/// Each element in a diff can be
/// new (Insert)
/// removed (Delete)
/// equal (Equal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Insert(T),
    Delete(T),
    Equal(T),
}

impl<T> Edit<T> {
    pub fn op(&self) -> Op {
        match self {
            Edit::Insert(_) => Op::Insert,
            Edit::Delete(_) => Op::Delete,
            Edit::Equal(_) => Op::Equal,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Edit::Insert(el) | Edit::Delete(el) | Edit::Equal(el) => el,
        }
    }
}

/// The operation shared by a run of edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Equal,
    Insert,
    Delete,
}

/// A run of consecutive elements sharing the same operation.
///
/// This is the shape the cleanup passes work on: `[Equal(a), Equal(b), Delete(c)]`
/// becomes two chunks, `Equal [a, b]` and `Delete [c]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T> {
    pub op: Op,
    pub items: Vec<T>,
}

impl<T> Chunk<T> {
    pub fn new(op: Op, items: Vec<T>) -> Self {
        Chunk { op, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Groups consecutive edits with the same operation into chunks.
pub fn chunks<T>(edits: Diff<T>) -> Vec<Chunk<T>> {
    let mut result: Vec<Chunk<T>> = Vec::new();
    for edit in edits {
        let op = edit.op();
        match result.last_mut() {
            Some(last) if last.op == op => last.items.push(edit.into_inner()),
            _ => result.push(Chunk::new(op, vec![edit.into_inner()])),
        }
    }
    result
}
