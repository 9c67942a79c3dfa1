//! Small helpers for editing and reshaping in-memory arrays.
//!
//! Positional edits only accept `1 <= pos < len`: index 0 and the slot one
//! past the end are rejected.

use itertools::Itertools;

use crate::error::{ArrayError, Result};

fn check_position(len: usize, pos: usize) -> Result<(), ArrayError> {
    if pos < 1 || pos >= len {
        return Err(ArrayError::InvalidPosition { pos, len });
    }
    Ok(())
}

/// Insert `value` at `pos`, shifting later elements right.
pub fn insert_at<T>(values: &mut Vec<T>, pos: usize, value: T) -> Result<(), ArrayError> {
    check_position(values.len(), pos)?;
    values.insert(pos, value);
    Ok(())
}

/// Remove and return the element at `pos`, shifting later elements left.
pub fn remove_at<T>(values: &mut Vec<T>, pos: usize) -> Result<T, ArrayError> {
    check_position(values.len(), pos)?;
    Ok(values.remove(pos))
}

/// Lay `values` out as a `rows x cols` matrix, filling column by column.
pub fn reshape<T: Clone>(values: &[T], rows: usize, cols: usize) -> Result<Vec<Vec<T>>, ArrayError> {
    if rows.checked_mul(cols) != Some(values.len()) {
        return Err(ArrayError::ShapeMismatch {
            len: values.len(),
            rows,
            cols,
        });
    }

    Ok((0..rows)
        .map(|row| (0..cols).map(|col| values[col * rows + row].clone()).collect())
        .collect())
}

/// Swap rows and columns. Every row must have the same length.
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>, ArrayError> {
    let Some(first) = matrix.first() else {
        return Ok(Vec::new());
    };
    let cols = first.len();
    if let Some((row, found)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, len)| *len != cols)
    {
        return Err(ArrayError::RaggedMatrix {
            row,
            expected: cols,
            found,
        });
    }

    Ok((0..cols)
        .map(|col| matrix.iter().map(|row| row[col].clone()).collect())
        .collect())
}

/// Returns true if any value appears more than once.
pub fn has_duplicates<T: Eq + std::hash::Hash>(values: &[T]) -> bool {
    !values.iter().all_unique()
}
