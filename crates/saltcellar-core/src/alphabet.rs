//! Fixed output alphabets for radix 16, 36 and 62.
//!
//! Each alphabet is a prefix of the next one, so index `i` renders the same
//! character in every alphabet that contains it.

/// 16-character lowercase hexadecimal alphabet.
pub const CHARS_16: &str = "0123456789abcdef";

/// 36-character lowercase alphanumeric alphabet.
pub const CHARS_36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// 62-character mixed-case alphanumeric alphabet.
pub const CHARS_62: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Base-16 alphabet (4 bits per char).
pub const BASE_16: Alphabet = Alphabet::new(CHARS_16);

/// Base-36 alphabet (5 bits per char).
pub const BASE_36: Alphabet = Alphabet::new(CHARS_36);

/// Base-62 alphabet (6 bits per char).
pub const BASE_62: Alphabet = Alphabet::new(CHARS_62);

/// An ordered set of ASCII characters addressed by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: &'static [u8],
}

impl Alphabet {
    const fn new(chars: &'static str) -> Self {
        Self {
            chars: chars.as_bytes(),
        }
    }

    /// Select the alphabet rendered by `bits_per_char` bit groups.
    ///
    /// Returns `None` for anything other than 4, 5 or 6.
    #[must_use]
    pub const fn for_bits(bits_per_char: u8) -> Option<Self> {
        match bits_per_char {
            4 => Some(BASE_16),
            5 => Some(BASE_36),
            6 => Some(BASE_62),
            _ => None,
        }
    }

    /// Number of characters in the alphabet.
    #[must_use]
    pub const fn size(self) -> usize {
        self.chars.len()
    }

    /// Character at `index`, or `None` when `index >= size()`.
    #[must_use]
    pub fn char_at(self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&b| char::from(b))
    }

    /// Whether `c` belongs to this alphabet.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.chars.contains(&b))
    }

    /// The characters as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        // All alphabets are built from `&'static str` constants above.
        std::str::from_utf8(self.chars).unwrap_or_default()
    }
}
