//! Normalization shared by the enumerated-field codecs.
//!
//! The service transmits enumerated values as lower-case, hyphenated tokens
//! while the in-memory symbols use upper-case, underscored names. Decoding
//! normalizes the incoming token into symbol form; the encode direction is a
//! static table on each enum since the symbol sets are closed.

/// Normalizes a wire token into symbol form: upper-cased, hyphens replaced
/// with underscores. `"error-deleting"` and `"ERROR_DELETING"` both normalize
/// to `"ERROR_DELETING"`.
pub(crate) fn to_symbol(token: &str) -> String {
    token.to_uppercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphens_and_case_are_normalized() {
        assert_eq!(to_symbol("error-deleting"), "ERROR_DELETING");
        assert_eq!(to_symbol("error_deleting"), "ERROR_DELETING");
        assert_eq!(to_symbol("In-Use"), "IN_USE");
        assert_eq!(to_symbol("MIGRATING"), "MIGRATING");
    }
}
