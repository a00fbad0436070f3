//! Format-string scanner.
//!
//! Recognises the printf subset `%[width][.precision]<conversion>` where the
//! conversion is one of `i d f s u x X o`. Width and precision are only
//! digits and `.`; flags such as `-` or `+` are not part of the subset and
//! end the specifier as `Invalid`.
//!
//! ```text
//! %1.5f   %05d   %s   %60.60s   %%
//! ```
//!
//! Offsets are character offsets into the format string itself, not into
//! the surrounding source file.

use serde::Serialize;

/// The value kind a conversion letter expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PlaceholderKind {
    Int,
    String,
    Double,
    /// A `%` followed by a character that is neither a modifier nor a
    /// recognised conversion letter.
    Invalid,
}

impl PlaceholderKind {
    /// Map a conversion letter to its kind. Returns `None` for anything
    /// outside `i d f s u x X o`.
    pub const fn from_conversion(ch: char) -> Option<Self> {
        match ch {
            'i' | 'd' | 'u' | 'x' | 'X' | 'o' => Some(Self::Int),
            'f' => Some(Self::Double),
            's' => Some(Self::String),
            _ => None,
        }
    }
}

/// One placeholder occurrence.
///
/// `start` is the offset of the `%`, `end` the offset of the character that
/// closed the specifier (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FormatPlaceholder {
    pub start: u32,
    pub end: u32,
    pub kind: PlaceholderKind,
}

impl FormatPlaceholder {
    /// Number of characters covered, `%` and closing character included.
    pub const fn char_len(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// Scanner states.
///
/// The conversion letter is handled directly in the `Percent`/`Modifier`
/// transitions, so there is no separate terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScannerState {
    Text,
    /// Just saw `%`: `[%]1.5f`
    Percent,
    /// Inside width/precision: `%[1.5]f`
    Modifier,
}

/// Incremental scanner, fed one character at a time.
#[derive(Debug)]
pub struct FormatScanner {
    state: ScannerState,
    start: u32,
    placeholders: Vec<FormatPlaceholder>,
}

impl Default for FormatScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatScanner {
    pub fn new() -> Self {
        Self {
            state: ScannerState::Text,
            start: 0,
            placeholders: Vec::new(),
        }
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// Advance over the character at `offset`.
    pub fn step(&mut self, offset: u32, ch: char) {
        let in_specifier = matches!(self.state, ScannerState::Percent | ScannerState::Modifier);

        match ch {
            '%' => {
                if self.state == ScannerState::Percent {
                    // `%%` is an escaped percent sign
                    self.state = ScannerState::Text;
                } else {
                    self.start = offset;
                    self.state = ScannerState::Percent;
                }
            }
            '0'..='9' | '.' => {
                if in_specifier {
                    self.state = ScannerState::Modifier;
                }
            }
            _ => {
                if in_specifier {
                    let kind = PlaceholderKind::from_conversion(ch).unwrap_or(PlaceholderKind::Invalid);
                    self.placeholders.push(FormatPlaceholder {
                        start: self.start,
                        end: offset,
                        kind,
                    });
                }
                self.state = ScannerState::Text;
            }
        }
    }

    /// Finish scanning. A trailing unterminated `%` produces nothing.
    pub fn finish(self) -> Vec<FormatPlaceholder> {
        self.placeholders
    }
}

/// Scan `text` into its placeholders, left to right.
pub fn scan(text: &str) -> Vec<FormatPlaceholder> {
    if memchr::memchr(b'%', text.as_bytes()).is_none() {
        return Vec::new();
    }

    let mut scanner = FormatScanner::new();
    for (offset, ch) in text.chars().enumerate() {
        scanner.step(offset as u32, ch);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<PlaceholderKind> {
        scan(text).into_iter().map(|p| p.kind).collect()
    }

    #[test]
    fn plain_text_has_no_placeholders() {
        assert!(scan("nothing to see here").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn conversion_letters_map_to_kinds() {
        use PlaceholderKind::*;
        assert_eq!(
            kinds("%i %d %f %s %u %x %X %o"),
            vec![Int, Int, Double, String, Int, Int, Int, Int]
        );
    }

    #[test]
    fn placeholder_spans_percent_through_letter() {
        let found = scan("got %d items, %s");
        assert_eq!(
            found,
            vec![
                FormatPlaceholder { start: 4, end: 5, kind: PlaceholderKind::Int },
                FormatPlaceholder { start: 14, end: 15, kind: PlaceholderKind::String },
            ]
        );
        assert_eq!(found[0].char_len(), 2);
    }

    #[test]
    fn width_and_precision_are_part_of_the_span() {
        let found = scan("%1.5f|%05d|%60.60s");
        assert_eq!(found.len(), 3);
        assert_eq!((found[0].start, found[0].end, found[0].kind), (0, 4, PlaceholderKind::Double));
        assert_eq!((found[1].start, found[1].end), (6, 9));
        assert_eq!((found[2].start, found[2].end, found[2].kind), (11, 17, PlaceholderKind::String));
    }

    #[test]
    fn escaped_percent_is_not_a_placeholder() {
        assert!(scan("100%% done").is_empty());
        assert_eq!(kinds("%%%d"), vec![PlaceholderKind::Int]);
    }

    #[test]
    fn lone_percent_closes_as_invalid_on_next_character() {
        let found = scan("100% done");
        assert_eq!(
            found,
            vec![FormatPlaceholder { start: 3, end: 4, kind: PlaceholderKind::Invalid }]
        );
    }

    #[test]
    fn unknown_letter_after_modifier_is_invalid() {
        let found = scan("%5z");
        assert_eq!(
            found,
            vec![FormatPlaceholder { start: 0, end: 2, kind: PlaceholderKind::Invalid }]
        );
    }

    #[test]
    fn trailing_percent_emits_nothing() {
        assert!(scan("50%").is_empty());
        assert_eq!(kinds("%d and 5%"), vec![PlaceholderKind::Int]);
    }

    #[test]
    fn percent_inside_modifier_restarts_the_specifier() {
        // "%5" is abandoned when the next '%' starts a new specifier
        let found = scan("%5%d");
        assert_eq!(
            found,
            vec![FormatPlaceholder { start: 2, end: 3, kind: PlaceholderKind::Int }]
        );
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let found = scan("é%s");
        assert_eq!(found[0].start, 1);
        assert_eq!(found[0].end, 2);
    }

    #[test]
    fn letters_outside_specifiers_are_inert() {
        assert!(scan("dfsuxXo").is_empty());
    }

    #[test]
    fn placeholders_are_ordered_and_disjoint() {
        let found = scan("%d%s%%%5.2f %q %x");
        for pair in found.windows(2) {
            assert!(pair[0].end < pair[1].start, "{pair:?}");
        }
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn scanner_state_transitions() {
        let mut scanner = FormatScanner::new();
        assert_eq!(scanner.state(), ScannerState::Text);
        scanner.step(0, '%');
        assert_eq!(scanner.state(), ScannerState::Percent);
        scanner.step(1, '1');
        assert_eq!(scanner.state(), ScannerState::Modifier);
        scanner.step(2, '.');
        assert_eq!(scanner.state(), ScannerState::Modifier);
        scanner.step(3, 'f');
        assert_eq!(scanner.state(), ScannerState::Text);
        assert_eq!(scanner.finish().len(), 1);
    }
}
