//! Diagnostic construction for format-call problems.
//!
//! Each `error_*` function builds one warning from the message table. The
//! caller supplies the anchor range; this module never inspects the AST.

use fmtcheck_common::TextRange;
use fmtcheck_common::diagnostics::{Diagnostic, diagnostic_codes, get_diagnostic_message};
use fmtcheck_scanner::FormatPlaceholder;

fn from_code(file: &str, range: TextRange, code: u32, args: &[&str]) -> Diagnostic {
    match get_diagnostic_message(code) {
        Some(message) => Diagnostic::from_message(file, range, message, args),
        // unreachable with the built-in table
        None => Diagnostic::warning(file.to_string(), range.pos, range.len(), String::new(), code),
    }
}

/// Arguments were passed to a format string that has no placeholders.
/// Anchored on the first argument.
pub fn error_no_format_item(file: &str, first_argument: TextRange) -> Diagnostic {
    from_code(file, first_argument, diagnostic_codes::NO_FORMAT_ITEM_FOUND, &[])
}

/// An argument beyond the last placeholder. Anchored on that argument.
pub fn error_excess_argument(file: &str, argument: TextRange, expected: usize) -> Diagnostic {
    let expected = expected.to_string();
    from_code(
        file,
        argument,
        diagnostic_codes::FORMAT_LINE_EXPECTING_ONLY_PARAMETERS,
        &[&expected],
    )
}

/// A placeholder with no argument. Anchored on the placeholder's text inside
/// the literal.
pub fn error_unused_format_item(file: &str, placeholder: TextRange) -> Diagnostic {
    from_code(file, placeholder, diagnostic_codes::UNUSED_FORMAT_ITEM, &[])
}

/// Summary emitted once per call that had any other problem. Anchored on
/// the method-name token.
pub fn error_invalid_format_usage(file: &str, method_name: TextRange) -> Diagnostic {
    from_code(
        file,
        method_name,
        diagnostic_codes::INVALID_FORMAT_FUNCTION_USAGE,
        &[],
    )
}

/// File range of `placeholder` inside a string literal spanning `literal`.
///
/// Placeholder offsets count characters of the decoded contents; the file
/// range is in bytes and starts one past the literal's opening quote.
/// Escape sequences in the source are not accounted for.
pub fn placeholder_range(
    literal: TextRange,
    contents: &str,
    placeholder: &FormatPlaceholder,
) -> TextRange {
    let start = char_to_byte(contents, placeholder.start);
    let end = char_to_byte(contents, placeholder.end.saturating_add(1));
    TextRange::new(start, end).offset_by(literal.pos.saturating_add(1))
}

fn char_to_byte(text: &str, char_offset: u32) -> u32 {
    text.char_indices()
        .nth(char_offset as usize)
        .map_or(text.len(), |(byte, _)| byte) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmtcheck_scanner::scan;

    #[test]
    fn excess_argument_message_names_the_count() {
        let d = error_excess_argument("a.php", TextRange::new(5, 7), 2);
        assert_eq!(d.message_text, "Format line expecting only 2 parameters");
        assert_eq!(d.start, 5);
        assert_eq!(d.length, 2);
        assert_eq!(d.file, "a.php");
    }

    #[test]
    fn placeholder_range_skips_opening_quote() {
        // "a %d"  at file offset 10
        let contents = "a %d";
        let placeholders = scan(contents);
        let range = placeholder_range(TextRange::new(10, 16), contents, &placeholders[0]);
        assert_eq!(range, TextRange::new(13, 15));
    }

    #[test]
    fn placeholder_range_counts_multibyte_characters() {
        let contents = "é %s";
        let placeholders = scan(contents);
        assert_eq!(placeholders[0].start, 2);
        let range = placeholder_range(TextRange::new(0, 7), contents, &placeholders[0]);
        // 'é' is two bytes
        assert_eq!(range, TextRange::new(4, 6));
    }

    #[test]
    fn placeholder_range_clamps_offsets_at_end_of_u32() {
        let contents = "a %d";
        let placeholders = scan(contents);
        let literal = TextRange::new(u32::MAX - 1, u32::MAX);
        let range = placeholder_range(literal, contents, &placeholders[0]);
        assert_eq!(range, TextRange::new(u32::MAX, u32::MAX));
        assert!(range.is_empty());
    }
}
