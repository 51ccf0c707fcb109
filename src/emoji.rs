//! Emoji entries and their UTF-8 hex encoding.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::lut::HEX_TO_STR_8;

/// Base emoji that accept a skin tone modifier (Unicode `Emoji_Modifier_Base`).
const SKIN_TONE_MODIFIABLE_EMOJIS: [char; 102] = [
    '\u{261D}', '\u{26F9}', '\u{270A}', '\u{270B}', '\u{270C}', '\u{270D}', '\u{1F385}', '\u{1F3C2}',
    '\u{1F3C3}', '\u{1F3C4}', '\u{1F3C7}', '\u{1F3CA}', '\u{1F3CB}', '\u{1F3CC}', '\u{1F442}', '\u{1F443}',
    '\u{1F446}', '\u{1F447}', '\u{1F448}', '\u{1F449}', '\u{1F44A}', '\u{1F44B}', '\u{1F44C}', '\u{1F44D}',
    '\u{1F44E}', '\u{1F44F}', '\u{1F450}', '\u{1F466}', '\u{1F467}', '\u{1F468}', '\u{1F469}', '\u{1F46E}',
    '\u{1F470}', '\u{1F471}', '\u{1F472}', '\u{1F473}', '\u{1F474}', '\u{1F475}', '\u{1F476}', '\u{1F477}',
    '\u{1F478}', '\u{1F47C}', '\u{1F481}', '\u{1F482}', '\u{1F483}', '\u{1F485}', '\u{1F486}', '\u{1F487}',
    '\u{1F4AA}', '\u{1F574}', '\u{1F575}', '\u{1F57A}', '\u{1F590}', '\u{1F595}', '\u{1F596}', '\u{1F645}',
    '\u{1F646}', '\u{1F647}', '\u{1F64B}', '\u{1F64C}', '\u{1F64D}', '\u{1F64E}', '\u{1F64F}', '\u{1F6A3}',
    '\u{1F6B4}', '\u{1F6B5}', '\u{1F6B6}', '\u{1F6C0}', '\u{1F6CC}', '\u{1F918}', '\u{1F919}', '\u{1F91A}',
    '\u{1F91B}', '\u{1F91C}', '\u{1F91D}', '\u{1F91E}', '\u{1F91F}', '\u{1F926}', '\u{1F930}', '\u{1F931}',
    '\u{1F932}', '\u{1F933}', '\u{1F934}', '\u{1F935}', '\u{1F936}', '\u{1F937}', '\u{1F938}', '\u{1F939}',
    '\u{1F93D}', '\u{1F93E}', '\u{1F9D1}', '\u{1F9D2}', '\u{1F9D3}', '\u{1F9D4}', '\u{1F9D5}', '\u{1F9D6}',
    '\u{1F9D7}', '\u{1F9D8}', '\u{1F9D9}', '\u{1F9DA}', '\u{1F9DC}', '\u{1F9DD}',
];

static SKIN_TONE_MODIFIABLE: LazyLock<HashSet<char>> =
    LazyLock::new(|| SKIN_TONE_MODIFIABLE_EMOJIS.into_iter().collect());

/// A single emoji read from the source, along with its derived encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiEntry {
    character: String,
    hex_encoding: String,
    modifiable: bool,
}

impl EmojiEntry {
    /// Derive an entry from the raw emoji text.
    pub fn new(character: impl Into<String>) -> EmojiEntry {
        let character = character.into();
        let hex_encoding = hex_encoding(&character);
        let modifiable = is_skin_tone_modifiable(&character);
        EmojiEntry {
            character,
            hex_encoding,
            modifiable,
        }
    }

    pub fn character(&self) -> &str {
        &self.character
    }

    pub fn hex_encoding(&self) -> &str {
        &self.hex_encoding
    }

    /// Length of the hex encoding, twice the byte length.
    pub fn hex_len(&self) -> usize {
        self.hex_encoding.len()
    }

    pub fn byte_length(&self) -> usize {
        self.character.len()
    }

    /// Whether a skin tone modifier can be applied to this emoji.
    pub fn modifiable(&self) -> bool {
        self.modifiable
    }
}

/// Render the UTF-8 bytes of `text` as uppercase hex, two digits per byte.
pub fn hex_encoding(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * 2);
    write_hex(text.as_bytes(), &mut encoded);
    encoded
}

/// Append the hex rendering of `bytes` to `string`.
pub fn write_hex(bytes: &[u8], string: &mut String) {
    for byte in bytes {
        string.push_str(HEX_TO_STR_8[*byte as usize]);
    }
}

/// Exact membership test against the modifier base set.
///
/// Sequences of more than one character never match, even when they
/// start with a modifier base.
pub fn is_skin_tone_modifiable(character: &str) -> bool {
    let mut chars = character.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => SKIN_TONE_MODIFIABLE.contains(&c),
        _ => false,
    }
}
