// 8-bit code pages for decoding dictionary characters

/// Replacement for bytes a code page leaves undefined.
pub const UNDEFINED: char = '\u{FFFD}';

/// ISO-8859-3 (Latin-3) upper half, bytes 0xA0..=0xFF.
/// The lower half is identical to ASCII/C1.
const ISO_8859_3_HIGH: [char; 96] = [
    '\u{00A0}', '\u{0126}', '\u{02D8}', '\u{00A3}', '\u{00A4}', UNDEFINED, '\u{0124}', '\u{00A7}',
    '\u{00A8}', '\u{0130}', '\u{015E}', '\u{011E}', '\u{0134}', '\u{00AD}', UNDEFINED, '\u{017B}',
    '\u{00B0}', '\u{0127}', '\u{00B2}', '\u{00B3}', '\u{00B4}', '\u{00B5}', '\u{0125}', '\u{00B7}',
    '\u{00B8}', '\u{0131}', '\u{015F}', '\u{011F}', '\u{0135}', '\u{00BD}', UNDEFINED, '\u{017C}',
    '\u{00C0}', '\u{00C1}', '\u{00C2}', UNDEFINED, '\u{00C4}', '\u{010A}', '\u{0108}', '\u{00C7}',
    '\u{00C8}', '\u{00C9}', '\u{00CA}', '\u{00CB}', '\u{00CC}', '\u{00CD}', '\u{00CE}', '\u{00CF}',
    UNDEFINED, '\u{00D1}', '\u{00D2}', '\u{00D3}', '\u{00D4}', '\u{0120}', '\u{00D6}', '\u{00D7}',
    '\u{011C}', '\u{00D9}', '\u{00DA}', '\u{00DB}', '\u{00DC}', '\u{016C}', '\u{015C}', '\u{00DF}',
    '\u{00E0}', '\u{00E1}', '\u{00E2}', UNDEFINED, '\u{00E4}', '\u{010B}', '\u{0109}', '\u{00E7}',
    '\u{00E8}', '\u{00E9}', '\u{00EA}', '\u{00EB}', '\u{00EC}', '\u{00ED}', '\u{00EE}', '\u{00EF}',
    UNDEFINED, '\u{00F1}', '\u{00F2}', '\u{00F3}', '\u{00F4}', '\u{0121}', '\u{00F6}', '\u{00F7}',
    '\u{011D}', '\u{00F9}', '\u{00FA}', '\u{00FB}', '\u{00FC}', '\u{016D}', '\u{015D}', '\u{02D9}',
];

/// A single-byte character encoding.
///
/// Dictionary graphs store one byte per edge; the code page turns that byte
/// back into a character before alphabet lookup.
#[derive(Clone)]
pub struct CodePage {
    name: &'static str,
    table: [char; 256],
}

impl std::fmt::Debug for CodePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodePage").field("name", &self.name).finish()
    }
}

impl CodePage {
    /// Build a code page from a full 256-entry decode table.
    pub fn from_table(name: &'static str, table: [char; 256]) -> Self {
        Self { name, table }
    }

    /// ISO-8859-1 (Latin-1): every byte maps to the code point of equal value.
    pub fn latin1() -> Self {
        let mut table = [UNDEFINED; 256];
        for (b, slot) in table.iter_mut().enumerate() {
            *slot = char::from(b as u8);
        }
        Self::from_table("ISO-8859-1", table)
    }

    /// ISO-8859-3 (Latin-3), which covers the Esperanto letters.
    pub fn iso_8859_3() -> Self {
        let mut table = [UNDEFINED; 256];
        for (b, slot) in table.iter_mut().enumerate().take(0xA0) {
            *slot = char::from(b as u8);
        }
        table[0xA0..].copy_from_slice(&ISO_8859_3_HIGH);
        Self::from_table("ISO-8859-3", table)
    }

    /// Look up a built-in code page by name, ignoring case and punctuation
    /// (`"latin1"`, `"ISO-8859-3"`, `"iso8859_3"`, ...).
    pub fn by_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "iso88591" | "latin1" => Some(Self::latin1()),
            "iso88593" | "latin3" => Some(Self::iso_8859_3()),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Decode one byte.
    #[inline]
    pub fn decode(&self, byte: u8) -> char {
        self.table[byte as usize]
    }

    /// Find the byte that decodes to `c`, if any.
    pub fn encode(&self, c: char) -> Option<u8> {
        if c == UNDEFINED {
            return None;
        }
        self.table.iter().position(|&t| t == c).map(|b| b as u8)
    }
}
