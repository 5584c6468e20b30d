//! Nesting scopes: one frame per open JSON container plus a root frame.

use alloc::{string::String, vec, vec::Vec};

/// Array bookkeeping for a scope whose contents map onto repeated elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArrayScope {
    /// The element name every item of the array is emitted under.
    pub element_name: String,
    /// Number of items seen so far.
    pub size: usize,
}

/// One nesting frame.
///
/// At most one array state is active per scope; `pending_tag_name` holds the
/// most recently read field name until a structural token consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Scope {
    pub pending_tag_name: Option<String>,
    pub array: Option<ArrayScope>,
}

impl Scope {
    pub fn is_array(&self) -> bool {
        self.array.is_some()
    }

    pub fn start_array(&mut self, element_name: String) {
        debug_assert!(self.array.is_none(), "array state already active");
        self.array = Some(ArrayScope {
            element_name,
            size: 0,
        });
    }

    /// Reverts the frame to plain object state; the frame itself stays.
    pub fn end_array(&mut self) {
        self.array = None;
    }

    fn clear(&mut self) {
        self.pending_tag_name = None;
        self.array = None;
    }
}

/// Stack of scopes, arena-style: frames are indexed by nesting depth and
/// reused across pushes instead of reallocated, so element-heavy documents
/// do not allocate per element.
#[derive(Debug)]
pub(crate) struct ScopeStack {
    frames: Vec<Scope>,
    depth: usize,
}

impl ScopeStack {
    /// Creates a stack holding only the root frame, which is never popped.
    pub fn new() -> Self {
        Self {
            frames: vec![Scope::default()],
            depth: 0,
        }
    }

    pub fn at_root(&self) -> bool {
        self.depth == 0
    }

    pub fn current(&self) -> &Scope {
        &self.frames[self.depth]
    }

    pub fn current_mut(&mut self) -> &mut Scope {
        &mut self.frames[self.depth]
    }

    /// Pushes a fresh (cleared) frame and makes it current.
    pub fn push(&mut self) {
        self.depth += 1;
        if self.depth == self.frames.len() {
            self.frames.push(Scope::default());
        } else {
            self.frames[self.depth].clear();
        }
    }

    /// Pops the current frame. Popping the root frame is a contract
    /// violation; the state machine reports unmatched closes as errors
    /// before reaching this point.
    pub fn pop(&mut self) {
        debug_assert!(self.depth > 0, "popped the root scope");
        self.depth = self.depth.saturating_sub(1);
    }
}
