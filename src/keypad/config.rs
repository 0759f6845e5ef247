use crate::keypad::KeypadError;

/// Static description of one keypad matrix.
///
/// Borrows the application's pin descriptions and a row-major keymap with
/// exactly `rows.len() * columns.len()` entries. A configuration is immutable
/// and is identified by reference: registering the same `KeypadConfig` value
/// twice is rejected, while two configurations with identical contents are
/// distinct.
#[derive(Debug)]
pub struct KeypadConfig<'a, P, K> {
    keymap: &'a [K],
    columns: &'a [P],
    rows: &'a [P],
}

impl<'a, P, K> KeypadConfig<'a, P, K> {
    /// Builds a configuration, validating the keymap dimensions.
    ///
    /// # Errors
    /// [`KeypadError::KeymapMismatch`] if `keymap.len()` is not
    /// `rows.len() * columns.len()`.
    pub fn new(
        keymap: &'a [K],
        columns: &'a [P],
        rows: &'a [P],
    ) -> Result<Self, KeypadError> {
        if keymap.len() != rows.len() * columns.len() {
            return Err(KeypadError::KeymapMismatch);
        }
        Ok(Self {
            keymap,
            columns,
            rows,
        })
    }

    pub fn columns(&self) -> &'a [P] {
        self.columns
    }

    pub fn rows(&self) -> &'a [P] {
        self.rows
    }

    pub fn keymap(&self) -> &'a [K] {
        self.keymap
    }

    /// Mapped value at a (row, column) coordinate.
    ///
    /// Indices are bounded by the pin slices, so any coordinate produced by a
    /// scan resolves within the keymap; the dimensions were validated at
    /// construction.
    pub fn key_at(&self, row: usize, column: usize) -> K
    where
        K: Copy,
    {
        self.keymap[row * self.columns.len() + column]
    }
}
