//! Wrapping navigation cursor over a fixed number of features.

/// Position of the focused feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// No features loaded.
    #[default]
    Empty,
    /// Focused on `index`, always `< count`.
    At { index: usize, count: usize },
}

impl Cursor {
    /// Moves to the first of `count` features, or to `Empty` when there are none.
    pub fn reset(&mut self, count: usize) {
        *self = if count == 0 {
            Cursor::Empty
        } else {
            Cursor::At { index: 0, count }
        };
    }

    /// Advances with wraparound. Returns `false` when empty.
    pub fn next(&mut self) -> bool {
        match self {
            Cursor::Empty => false,
            Cursor::At { index, count } => {
                *index = (*index + 1) % *count;
                true
            }
        }
    }

    /// Steps back with wraparound. Returns `false` when empty.
    pub fn previous(&mut self) -> bool {
        match self {
            Cursor::Empty => false,
            Cursor::At { index, count } => {
                *index = (*index + *count - 1) % *count;
                true
            }
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Cursor::Empty => None,
            Cursor::At { index, .. } => Some(*index),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Cursor::Empty => 0,
            Cursor::At { count, .. } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cursor::Empty)
    }

    /// One-based `i/n` label of the position, `None` when empty.
    pub fn title(&self) -> Option<String> {
        match self {
            Cursor::Empty => None,
            Cursor::At { index, count } => Some(format!("{}/{}", index + 1, count)),
        }
    }
}
