//! ISBN normalization and conversion for book metadata lookups.
//!
//! Catalog lookups key on ISBN-10 first; an ISBN-13 that misses is retried
//! as its ISBN-10 equivalent (drop the `978`/`979` prefix, recompute the
//! check digit).

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IsbnError {
    #[error("ISBN must be 10 or 13 characters, got {0}")]
    BadLength(usize),

    #[error("ISBN contains a non-digit character")]
    NonDigit,
}

/// Strip hyphens and whitespace, then check the length is 10 or 13.
pub fn normalize(raw: &str) -> Result<String, IsbnError> {
    let cleaned: String = raw.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect();
    match cleaned.len() {
        10 | 13 => Ok(cleaned),
        other => Err(IsbnError::BadLength(other)),
    }
}

/// Convert a normalized ISBN-13 to its ISBN-10 form.
///
/// Takes the nine payload digits after the prefix and appends the ISBN-10
/// check digit (`X` when the checksum works out to 10).
pub fn isbn13_to_isbn10(isbn13: &str) -> Result<String, IsbnError> {
    if isbn13.len() != 13 {
        return Err(IsbnError::BadLength(isbn13.len()));
    }
    let payload = &isbn13[3..12];

    let mut checksum: u32 = 0;
    for (i, c) in payload.chars().enumerate() {
        let digit = c.to_digit(10).ok_or(IsbnError::NonDigit)?;
        checksum += (10 - i as u32) * digit;
    }
    checksum = (11 - (checksum % 11)) % 11;

    let check = if checksum == 10 {
        "X".to_string()
    } else {
        checksum.to_string()
    };
    Ok(format!("{payload}{check}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize("978-0-441-01359-3").unwrap(), "9780441013593");
        assert_eq!(normalize("0 441 01359 7").unwrap(), "0441013597");
    }

    #[test]
    fn normalize_rejects_bad_lengths() {
        assert_eq!(normalize("12345").unwrap_err(), IsbnError::BadLength(5));
        assert_eq!(normalize("").unwrap_err(), IsbnError::BadLength(0));
    }

    #[test]
    fn converts_isbn13_to_isbn10() {
        // Dune (Ace premium edition): 978-0-441-01359-3 <-> 0-441-01359-7
        assert_eq!(isbn13_to_isbn10("9780441013593").unwrap(), "0441013597");
        // The Rust Programming Language: 978-1-59327-828-1 <-> 1-59327-828-4
        assert_eq!(isbn13_to_isbn10("9781593278281").unwrap(), "1593278284");
    }

    #[test]
    fn check_digit_ten_renders_as_x() {
        // 0-9752298-0-X carries the literal X check digit.
        assert_eq!(isbn13_to_isbn10("9780975229804").unwrap(), "097522980X");
    }

    #[test]
    fn conversion_rejects_non_digits() {
        assert_eq!(
            isbn13_to_isbn10("97804410135x3").unwrap_err(),
            IsbnError::NonDigit
        );
    }
}
