use crate::keypad::config::KeypadConfig;

/// Build-time selection of which line set is driven and which is sensed.
///
/// The scan engine is written once against this trait; a mode only decides
/// which pin slice plays the output role and how an (output, input) coordinate
/// pair addresses the row-major keymap. Marker types carry no data, so the
/// choice costs nothing at runtime.
pub trait ScanMode {
    /// The driven line set.
    fn output_pins<'c, P, K>(config: &'c KeypadConfig<'_, P, K>) -> &'c [P];

    /// The sensed line set.
    fn input_pins<'c, P, K>(config: &'c KeypadConfig<'_, P, K>) -> &'c [P];

    /// Mapped value for a scan coordinate pair.
    fn key<P, K: Copy>(config: &KeypadConfig<'_, P, K>, output: usize, input: usize) -> K;
}

/// Columns are driven, rows are sensed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowInput;

impl ScanMode for RowInput {
    fn output_pins<'c, P, K>(config: &'c KeypadConfig<'_, P, K>) -> &'c [P] {
        config.columns()
    }

    fn input_pins<'c, P, K>(config: &'c KeypadConfig<'_, P, K>) -> &'c [P] {
        config.rows()
    }

    fn key<P, K: Copy>(config: &KeypadConfig<'_, P, K>, output: usize, input: usize) -> K {
        // output indexes a column, input indexes a row
        config.key_at(input, output)
    }
}

/// Rows are driven, columns are sensed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnInput;

impl ScanMode for ColumnInput {
    fn output_pins<'c, P, K>(config: &'c KeypadConfig<'_, P, K>) -> &'c [P] {
        config.rows()
    }

    fn input_pins<'c, P, K>(config: &'c KeypadConfig<'_, P, K>) -> &'c [P] {
        config.columns()
    }

    fn key<P, K: Copy>(config: &KeypadConfig<'_, P, K>, output: usize, input: usize) -> K {
        // output indexes a row, input indexes a column
        config.key_at(output, input)
    }
}
