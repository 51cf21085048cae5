//! Spreadsheet column letters (`A`, `B`, ..., `Z`, `AA`, ...).

use crate::errors::{AppError, AppResult};

/// 0-based index of a column letter: `A` → 0, `Z` → 25, `AA` → 26.
pub fn column_index(letter: &str) -> AppResult<usize> {
    let letter = letter.trim();
    if letter.is_empty() || !letter.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::InvalidColumn(letter.to_string()));
    }

    let mut n: usize = 0;
    for c in letter.chars() {
        let v = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n
            .checked_mul(26)
            .and_then(|n| n.checked_add(v))
            .ok_or_else(|| AppError::InvalidColumn(letter.to_string()))?;
    }

    Ok(n - 1)
}

/// Inverse of `column_index`.
pub fn column_letter(mut index: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    out.iter().rev().collect()
}

/// Indices of `letters` that fall inside a header of `width` columns.
/// Out-of-range letters are ignored.
pub fn resolve_indices(letters: &[String], width: usize) -> AppResult<Vec<usize>> {
    let mut indices = Vec::new();
    for letter in letters {
        let idx = column_index(letter)?;
        if idx < width && !indices.contains(&idx) {
            indices.push(idx);
        }
    }
    Ok(indices)
}
