/// Computes `2^exp` as a row count, if it fits in a `usize`.
///
/// ## Errors
/// Returns `Err(error)` if `2^exp` overflows `usize`.
///
/// ## Parameters
/// - `exp`: The number of free variables.
/// - `error`: The error to return if the count does not fit.
///
/// ## Example
/// ```
/// use truthtable::util::num::pow2_checked;
///
/// assert_eq!(pow2_checked(3, "too many").unwrap(), 8);
/// assert_eq!(pow2_checked(0, "too many").unwrap(), 1);
/// assert!(pow2_checked(usize::BITS as usize, "too many").is_err());
/// ```
pub fn pow2_checked<E>(exp: usize, error: E) -> Result<usize, E> {
    let Ok(shift) = u32::try_from(exp) else {
        return Err(error);
    };
    1usize.checked_shl(shift).ok_or(error)
}

/// Reads the value of one column out of a row counter.
///
/// Rows are numbered as a binary counter over `width` columns, with column
/// `0` as the most significant bit. A set bit means `true`.
///
/// ## Parameters
/// - `row`: The row index, `0..2^width`.
/// - `width`: The number of columns.
/// - `column`: The column to read, `0..width`.
///
/// ## Example
/// ```
/// use truthtable::util::num::bit_is_set;
///
/// // Row 2 of a two column table is (T, F).
/// assert!(bit_is_set(2, 2, 0));
/// assert!(!bit_is_set(2, 2, 1));
/// ```
#[must_use]
pub const fn bit_is_set(row: usize, width: usize, column: usize) -> bool {
    (row >> (width - 1 - column)) & 1 == 1
}
