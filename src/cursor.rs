//! Caret preservation across reformatting.
//!
//! Positions are counted in `char`s, not bytes.

/// Separator inserted by the grammar's formatter.
pub fn is_space(c: char) -> bool {
    c == ' '
}

/// Any separator a formatted number may contain: space, dash or parenthesis.
pub fn is_format_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '(' | ')')
}

/// New caret position after `old` was reformatted into `new`, counting only
/// spaces as separators.
///
/// A caret at the end of `old` stays at the end of `new`. Otherwise it is
/// shifted by the number of separators gained (or lost) before it. The result
/// is always within `0..=new.chars().count()`.
///
/// # Example
///
/// ```rust
/// use intl_tel_input::adjust_cursor;
///
/// assert_eq!(adjust_cursor(5, "123456", "123 456"), 6);
/// assert_eq!(adjust_cursor(6, "123456", "123 456"), 7);
/// assert_eq!(adjust_cursor(-3, "123456", "123 456"), 0);
/// ```
pub fn adjust_cursor(position: isize, old: &str, new: &str) -> usize {
    adjust_cursor_with(position, old, new, is_space)
}

/// [`adjust_cursor`] with a custom separator predicate.
pub fn adjust_cursor_with(
    position: isize,
    old: &str,
    new: &str,
    is_separator: impl Fn(char) -> bool,
) -> usize {
    let old_len = old.chars().count();
    let new_len = new.chars().count();

    if position < 0 {
        return 0;
    }
    let position = position.unsigned_abs();
    if position == old_len {
        return new_len;
    }

    let before = |text: &str| {
        text.chars()
            .take(position)
            .filter(|c| is_separator(*c))
            .count()
    };
    let shifted = (position + before(new)).saturating_sub(before(old));

    shifted.min(new_len)
}
