//! Indentation depth measurement.
//!
//! Depth is a relative quantity: the scanner only ever compares depths of
//! lines within one file, so the absolute unit does not matter as long as
//! it is applied uniformly.

/// Space-equivalents counted for one leading tab.
pub const TAB_WIDTH: usize = 4;

/// Leading-whitespace depth of a line. Spaces count one unit, tabs count
/// [`TAB_WIDTH`] units. Measurement stops at the first non-whitespace
/// character; lines with no leading whitespace return 0.
pub fn indent_depth(line: &str) -> usize {
    let mut depth = 0;
    for ch in line.chars() {
        match ch {
            ' ' => depth += 1,
            '\t' => depth += TAB_WIDTH,
            _ => break,
        }
    }
    depth
}
