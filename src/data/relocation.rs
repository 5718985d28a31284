//! Single-element relocation mapping
//!
//! The only permutation primitive the core supports is relocating one
//! element: remove it at `from`, reinsert it at `to`. Everything strictly
//! between the two indices shifts by one toward `from`; everything else
//! stays put. `RelocationMapping` captures that move as a bijection on
//! `[0, len)` in both directions, so every index-keyed structure can be
//! rewritten consistently.

/// Bijective index mapping derived from one `(from, to)` relocation
#[derive(Debug, Clone, PartialEq)]
pub struct RelocationMapping {
    pub from: usize,
    pub to: usize,
    old_to_new: Vec<usize>,
    new_to_old: Vec<usize>,
}

impl RelocationMapping {
    /// Build the mapping for relocating the element at `from` to `to` in a
    /// sequence of `len` elements. Caller guarantees both are in range.
    pub fn new(from: usize, to: usize, len: usize) -> Self {
        debug_assert!(from < len && to < len);

        let mut new_to_old: Vec<usize> = (0..len).collect();
        relocate_slice(&mut new_to_old, from, to);

        let mut old_to_new = vec![0; len];
        for (new_idx, &old_idx) in new_to_old.iter().enumerate() {
            old_to_new[old_idx] = new_idx;
        }

        Self {
            from,
            to,
            old_to_new,
            new_to_old,
        }
    }

    pub fn len(&self) -> usize {
        self.old_to_new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old_to_new.is_empty()
    }

    /// Where the element that used to live at `old` lives now
    pub fn old_to_new(&self, old: usize) -> usize {
        self.old_to_new[old]
    }

    /// Which old position the element now at `new` came from
    pub fn new_to_old(&self, new: usize) -> usize {
        self.new_to_old[new]
    }

    /// The inverse mapping as a slice, new position -> old position. This is
    /// the form handed to `column-reordered` consumers.
    pub fn inverse(&self) -> &[usize] {
        &self.new_to_old
    }
}

/// Apply a single-element relocation to any vector: remove at `from`,
/// reinsert at `to`.
pub fn relocate_slice<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
