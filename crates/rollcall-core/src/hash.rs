//! Deterministic document IDs.
//!
//! Classroom and school documents are keyed by a 32-bit polynomial hash
//! (multiplier 31) of their identifying string. The accumulator runs over
//! UTF-16 code units and wraps as a signed 32-bit integer; the key is the
//! absolute value of the final state rendered in decimal.
//!
//! Collisions are not detected: two inputs with the same hash address the
//! same document.

/// Hashes `input` to a non-negative integer.
///
/// `i32::MIN` has no positive counterpart in `i32`, so the result is widened
/// to `u32` (`"polygenelubricants"` hashes to `2147483648`).
pub fn hash_code(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0i32, |acc, unit| {
            acc.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Decimal rendering of [`hash_code`], usable as a document ID.
pub fn hash_id(input: &str) -> String {
    hash_code(input).to_string()
}

/// Classroom key: the semester ID followed by the teacher ID, hashed.
pub fn classroom_id(semester_id: &str, teacher_id: &str) -> String {
    let mut key = String::with_capacity(semester_id.len() + teacher_id.len());
    key.push_str(semester_id);
    key.push_str(teacher_id);
    hash_id(&key)
}

/// School key: the hash of the trimmed street address.
pub fn school_id(address: &str) -> String {
    hash_id(address.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_hashes_to_zero() {
        assert_eq!(hash_code(""), 0);
        assert_eq!(hash_id(""), "0");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(hash_code("a"), 97);
        assert_eq!(hash_code("abc"), 96354);
        assert_eq!(hash_code("hello"), 99162322);
    }

    #[test]
    fn test_negative_accumulator_is_sign_folded() {
        // "abcdefghij" wraps to -634317659
        assert_eq!(hash_code("abcdefghij"), 634317659);
    }

    #[test]
    fn test_minimum_accumulator_does_not_overflow() {
        assert_eq!(hash_code("polygenelubricants"), 2_147_483_648);
        assert_eq!(hash_id("polygenelubricants"), "2147483648");
    }

    #[test]
    fn test_hash_runs_over_utf16_units() {
        // U+1F600 is the surrogate pair D83D DE00
        assert_eq!(hash_code("\u{1F600}"), 0xD83D * 31 + 0xDE00);
        assert_eq!(hash_code("é"), 0xE9);
    }

    #[test]
    fn test_deterministic_and_numeric() {
        for input in ["", "Spring 2025", "123 Main St, Springfield", "\u{1F600}x"] {
            let first = hash_id(input);
            assert_eq!(first, hash_id(input));
            assert!(first.parse::<u64>().is_ok());
        }
    }

    #[test]
    fn test_known_collision_is_not_handled() {
        assert_eq!(hash_id("Aa"), hash_id("BB"));
    }

    #[test]
    fn test_classroom_id_is_ordered_concatenation() {
        assert_eq!(classroom_id("fall", "rec1"), hash_id("fallrec1"));
        assert_ne!(classroom_id("fall", "rec1"), classroom_id("rec1", "fall"));
    }

    #[test]
    fn test_school_id_ignores_surrounding_whitespace() {
        assert_eq!(school_id("  12 Elm Rd "), hash_id("12 Elm Rd"));
    }
}
