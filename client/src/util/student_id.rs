//! Student identifier sanitizing.

#[cfg(test)]
#[path = "student_id_test.rs"]
mod student_id_test;

/// Number of digits in a complete student identifier.
pub const STUDENT_ID_LEN: usize = 8;

/// Keep only ASCII digits, truncated to [`STUDENT_ID_LEN`].
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(STUDENT_ID_LEN).collect()
}

/// True when `id` is exactly [`STUDENT_ID_LEN`] ASCII digits.
pub fn is_complete(id: &str) -> bool {
    id.len() == STUDENT_ID_LEN && id.bytes().all(|b| b.is_ascii_digit())
}
