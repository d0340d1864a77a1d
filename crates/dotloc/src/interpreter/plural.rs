//! Plural form selection.
//!
//! The rule is chosen by how many forms a directive lists, not by language:
//! - 2 forms: one / other (English and most Germanic and Romance languages)
//! - 3 forms: one / few / many (Russian, Ukrainian, Serbian, ...)
//! - 4 forms: one / two / few (3..=10) / other
//!
//! Any other form count has no rule and is rejected.

use crate::interpreter::EvalError;

/// Index of the form to use for `count` among `form_count` forms.
///
/// Returns `None` when `form_count` has no selection rule.
///
/// # Examples
///
/// ```
/// use dotloc::interpreter::plural_index;
///
/// // Two forms: 1 is singular, everything else plural
/// assert_eq!(plural_index(1.0, 2), Some(0));
/// assert_eq!(plural_index(0.0, 2), Some(1));
///
/// // Three forms: 21 -> one, 22 -> few, 25 -> many
/// assert_eq!(plural_index(21.0, 3), Some(0));
/// assert_eq!(plural_index(22.0, 3), Some(1));
/// assert_eq!(plural_index(25.0, 3), Some(2));
///
/// assert_eq!(plural_index(1.0, 5), None);
/// ```
pub fn plural_index(count: f64, form_count: usize) -> Option<usize> {
    match form_count {
        2 => Some(if count == 1.0 { 0 } else { 1 }),
        3 => Some(three_form_index(count)),
        4 => Some(four_form_index(count)),
        _ => None,
    }
}

/// Select the plural form for `count`.
///
/// `name` identifies the count replacement in the error raised for an
/// unsupported number of forms.
pub fn select_form<'a>(name: &str, count: f64, forms: &'a [String]) -> Result<&'a str, EvalError> {
    plural_index(count, forms.len())
        .map(|index| forms[index].as_str())
        .ok_or_else(|| EvalError::UnsupportedFormCount {
            name: name.to_string(),
            count: forms.len(),
        })
}

fn three_form_index(count: f64) -> usize {
    if count != count.trunc() {
        return 2;
    }
    let last_digit = count % 10.0;
    let last_two_digits = count % 100.0;
    if last_digit == 1.0 && last_two_digits != 11.0 {
        0
    } else if (2.0..=4.0).contains(&last_digit) && !(12.0..=14.0).contains(&last_two_digits) {
        1
    } else {
        2
    }
}

fn four_form_index(count: f64) -> usize {
    if count == 1.0 {
        0
    } else if count == 2.0 {
        1
    } else if count > 2.0 && count <= 10.0 {
        2
    } else {
        3
    }
}
