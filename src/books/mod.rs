//! Static book-name tables for the 66-book Protestant canon.
//!
//! Four parallel naming schemes are carried:
//! - [`CODES`]: canonical 3-letter codes, as they appear in `\id` markers
//!   and in generated anchors.
//! - [`NAMES`]: formal display names, used for page headers and reference
//!   matching.
//! - [`READER_NAMES`]: reader-friendly names ("1 Samuel" rather than
//!   "I Samuel"), used only for reference matching.
//! - [`ALT_CODES`]: legacy short codes, used for cross-reference filenames
//!   and anchors. This table carries one leading front-matter sentinel
//!   entry, so the alt code for canon position `i` is `ALT_CODES[i + 1]`.
//!
//! All tables are read-only and ordered by canon position.

/// Canonical 3-letter codes in canon order.
pub const CODES: [&str; 66] = [
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA",
    "1KI", "2KI", "1CH", "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO",
    "ECC", "SNG", "ISA", "JER", "LAM", "EZK", "DAN", "HOS", "JOL", "AMO",
    "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL", "MAT",
    "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP",
    "COL", "1TH", "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE",
    "2PE", "1JN", "2JN", "3JN", "JUD", "REV",
];

/// Formal display names, parallel to [`CODES`].
pub const NAMES: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "I Samuel",
    "II Samuel",
    "I Kings",
    "II Kings",
    "I Chronicles",
    "II Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "I Corinthians",
    "II Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "I Thessalonians",
    "II Thessalonians",
    "I Timothy",
    "II Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "I Peter",
    "II Peter",
    "I John",
    "II John",
    "III John",
    "Jude",
    "Revelation of John",
];

/// Reader-friendly names, parallel to [`CODES`].
pub const READER_NAMES: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Songs",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Legacy short codes with a leading front-matter sentinel.
///
/// The alt code for canon position `i` is `ALT_CODES[i + 1]`.
pub const ALT_CODES: [&str; 67] = [
    "FRT", // front-matter sentinel, not a book
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA",
    "1KI", "2KI", "1CH", "2CH", "EZR", "NEH", "EST", "JOB", "PSM", "PRV",
    "ECC", "SOS", "ISA", "JER", "LAM", "EZE", "DAN", "HOS", "JOE", "AMO",
    "OBA", "JON", "MIC", "NAH", "HAB", "ZEP", "HAG", "ZEC", "MAL", "MAT",
    "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHI",
    "COL", "1TH", "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAM", "1PE",
    "2PE", "1JN", "2JN", "3JN", "JUD", "REV",
];

/// Numeric canonical id (1-based canon position) for a canonical or legacy
/// short code. Returns `None` for unrecognized codes and for the sentinel.
pub fn book_number(code: &str) -> Option<u8> {
    if let Some(pos) = CODES.iter().position(|c| *c == code) {
        return Some(pos as u8 + 1);
    }
    ALT_CODES[1..]
        .iter()
        .position(|c| *c == code)
        .map(|pos| pos as u8 + 1)
}

/// Canonical code for a numeric canonical id (1-based).
pub fn code_for_number(number: u8) -> Option<&'static str> {
    if number == 0 {
        return None;
    }
    CODES.get(number as usize - 1).copied()
}

/// Display name for a canonical or legacy short code.
pub fn name_for_code(code: &str) -> Option<&'static str> {
    book_number(code).map(|n| NAMES[n as usize - 1])
}
