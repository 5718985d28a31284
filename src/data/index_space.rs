//! Index space translation - model vs visible vs original column indices
//!
//! The table maintains three overlapping index spaces: the model index (a
//! column's slot in the authoritative sequence, hidden columns included),
//! the visible index (counting only visible columns), and the original index
//! (identity assigned at attach time). These conversions are pure scans over
//! the current sequence; column counts are UI-scale so O(n) is fine.

use anyhow::Result;

use crate::data::column::Column;

/// Convert a model index to its visible index: the count of visible columns
/// at positions before it. Errors only if the index is out of range.
pub fn model_to_visible(columns: &[Column], model_index: usize) -> Result<usize> {
    if model_index >= columns.len() {
        return Err(anyhow::anyhow!(
            "Column index {} out of bounds",
            model_index
        ));
    }
    Ok(columns[..model_index].iter().filter(|c| c.visible).count())
}

/// Convert a visible index back to a model index. Returns None when the
/// visible index exceeds the number of visible columns; callers are expected
/// to stay in range.
pub fn visible_to_model(columns: &[Column], visible_index: usize) -> Option<usize> {
    let mut seen = 0;
    for (model, col) in columns.iter().enumerate() {
        if col.visible {
            if seen == visible_index {
                return Some(model);
            }
            seen += 1;
        }
    }
    None
}

/// The original index of the column currently at `model_index`
pub fn original_of(columns: &[Column], model_index: usize) -> Option<usize> {
    columns.get(model_index).map(|c| c.original_index)
}

/// The current model index of the column constructed with `original_index`
pub fn model_of(columns: &[Column], original_index: usize) -> Option<usize> {
    columns
        .iter()
        .position(|c| c.original_index == original_index)
}

/// Number of currently visible columns
pub fn visible_count(columns: &[Column]) -> usize {
    columns.iter().filter(|c| c.visible).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(visibility: &[bool]) -> Vec<Column> {
        visibility
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let mut c = Column::new(format!("c{}", i)).with_visible(v);
                c.original_index = i;
                c
            })
            .collect()
    }

    #[test]
    fn model_to_visible_skips_hidden() {
        let cols = columns(&[true, false, true, true]);
        assert_eq!(model_to_visible(&cols, 0).unwrap(), 0);
        assert_eq!(model_to_visible(&cols, 1).unwrap(), 1);
        assert_eq!(model_to_visible(&cols, 2).unwrap(), 1);
        assert_eq!(model_to_visible(&cols, 3).unwrap(), 2);
        assert!(model_to_visible(&cols, 4).is_err());
    }

    #[test]
    fn visible_to_model_inverts() {
        let cols = columns(&[true, false, true, true]);
        assert_eq!(visible_to_model(&cols, 0), Some(0));
        assert_eq!(visible_to_model(&cols, 1), Some(2));
        assert_eq!(visible_to_model(&cols, 2), Some(3));
        assert_eq!(visible_to_model(&cols, 3), None);
    }

    #[test]
    fn original_lookup_is_bidirectional() {
        let mut cols = columns(&[true, true, true]);
        // simulate a relocation: [c2, c0, c1]
        cols.rotate_right(1);
        for k in 0..3 {
            let m = model_of(&cols, k).unwrap();
            assert_eq!(original_of(&cols, m), Some(k));
        }
    }
}
