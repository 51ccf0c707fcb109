//! Length-sorted emoji registry.
//!
//! Entries are grouped by the length of their hex encoding. Groups are laid
//! out in ascending length, and inside each group every entry without a
//! skin tone modifier comes before the modifiable ones. A consumer can then
//! slice either output string with a fixed stride per length and tell
//! modifiable entries apart by their position alone.

use std::io::{self, Write};

use itertools::Itertools;

use crate::emoji::EmojiEntry;

/// All entries sharing one hex encoding length.
#[derive(Debug)]
pub struct LengthGroup {
    hex_len: usize,
    non_modifiable: Vec<EmojiEntry>,
    modifiable: Vec<EmojiEntry>,
}

impl LengthGroup {
    pub fn byte_length(&self) -> usize {
        self.hex_len / 2
    }

    pub fn non_modifiable(&self) -> &[EmojiEntry] {
        &self.non_modifiable
    }

    pub fn modifiable(&self) -> &[EmojiEntry] {
        &self.modifiable
    }

    pub fn total(&self) -> usize {
        self.non_modifiable.len() + self.modifiable.len()
    }

    /// Entries in emission order.
    pub fn entries(&self) -> impl Iterator<Item = &EmojiEntry> {
        self.non_modifiable.iter().chain(&self.modifiable)
    }
}

/// The ordered registry, built once from the catalog entries.
#[derive(Debug)]
pub struct Registry {
    groups: Vec<LengthGroup>,
}

impl Registry {
    /// Group and order the entries.
    ///
    /// Input order is preserved within each partition.
    pub fn build(entries: impl IntoIterator<Item = EmojiEntry>) -> Registry {
        let groups = entries
            .into_iter()
            .into_group_map_by(EmojiEntry::hex_len)
            .into_iter()
            .sorted_unstable_by_key(|(hex_len, _)| *hex_len)
            .map(|(hex_len, members)| {
                let (modifiable, non_modifiable) =
                    members.into_iter().partition(EmojiEntry::modifiable);
                LengthGroup {
                    hex_len,
                    non_modifiable,
                    modifiable,
                }
            })
            .collect();

        Registry { groups }
    }

    pub fn groups(&self) -> &[LengthGroup] {
        &self.groups
    }

    /// Every entry in emission order.
    pub fn entries(&self) -> impl Iterator<Item = &EmojiEntry> {
        self.groups.iter().flat_map(|group| group.entries())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(LengthGroup::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Concatenated hex encodings.
    pub fn encoding_string(&self) -> String {
        self.entries().map(EmojiEntry::hex_encoding).collect()
    }

    /// Concatenated emoji, aligned with [`Registry::encoding_string`].
    pub fn emoji_string(&self) -> String {
        self.entries().map(EmojiEntry::character).collect()
    }

    /// Write the per-group summary followed by both registry strings.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for group in &self.groups {
            writeln!(out, "Length in bytes: {}", group.byte_length())?;
            writeln!(
                out,
                "Number of emojis without modifiable skin tone: {}",
                group.non_modifiable().len()
            )?;
            writeln!(
                out,
                "Number of emojis with modifiable skin tone: {}",
                group.modifiable().len()
            )?;
            writeln!(out, "Total: {}", group.total())?;
        }
        writeln!(out, "{}", self.encoding_string())?;
        writeln!(out, "{}", self.emoji_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(emojis: &[&str]) -> Registry {
        Registry::build(emojis.iter().copied().map(EmojiEntry::new))
    }

    fn report(registry: &Registry) -> String {
        let mut out = Vec::new();
        registry.write_report(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn non_modifiable_precede_modifiable() {
        // Both four bytes wide, only the thumb takes a skin tone.
        let registry = build(&["👍", "😀"]);
        assert_eq!(registry.emoji_string(), "😀👍");
        assert_eq!(registry.encoding_string(), "F09F9880F09F918D");

        let report = report(&registry);
        assert!(report.contains("Length in bytes: 4\n"));
        assert!(report.contains("Number of emojis without modifiable skin tone: 1\n"));
        assert!(report.contains("Number of emojis with modifiable skin tone: 1\n"));
        assert!(report.contains("Total: 2\n"));
    }

    #[test]
    fn groups_ascend_by_length() {
        let registry = build(&["😀", "☝", "©", "✨", "#"]);
        let lengths: Vec<_> = registry.groups().iter().map(LengthGroup::byte_length).collect();
        assert_eq!(lengths, [1, 2, 3, 4]);
        assert_eq!(registry.emoji_string(), "#©✨☝😀");
    }

    #[test]
    fn partitions_are_stable() {
        let registry = build(&["✋", "😀", "☝", "😂", "✊", "😃"]);
        let group = &registry.groups()[0];
        assert_eq!(group.byte_length(), 3);
        let non: Vec<_> = group.non_modifiable().iter().map(EmojiEntry::character).collect();
        assert_eq!(non, Vec::<&str>::new());
        let modifiable: Vec<_> = group.modifiable().iter().map(EmojiEntry::character).collect();
        assert_eq!(modifiable, ["✋", "☝", "✊"]);

        let four = &registry.groups()[1];
        let non: Vec<_> = four.non_modifiable().iter().map(EmojiEntry::character).collect();
        assert_eq!(non, ["😀", "😂", "😃"]);
    }

    #[test]
    fn emission_order_is_sorted() {
        let registry = build(&[
            "😀", "☝", "👍", "✨", "©", "🧝", "😂", "✌", "❤\u{FE0F}", "®",
        ]);
        let order: Vec<_> = registry
            .entries()
            .map(|e| (e.byte_length(), e.modifiable()))
            .collect();
        assert!(order.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn strings_are_position_aligned() {
        let registry = build(&["😀", "☝", "👍", "✨", "©", "❤\u{FE0F}", "👨\u{200D}👩"]);
        let encoding = registry.encoding_string();
        let mut offset = 0;
        for entry in registry.entries() {
            let end = offset + entry.byte_length() * 2;
            assert_eq!(&encoding[offset..end], entry.hex_encoding());
            offset = end;
        }
        assert_eq!(offset, encoding.len());

        let rebuilt: String = registry.entries().map(EmojiEntry::character).collect();
        assert_eq!(rebuilt, registry.emoji_string());
    }

    #[test]
    fn report_ends_with_both_strings() {
        let registry = build(&["☝", "😀"]);
        let report = report(&registry);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 2 * 4 + 2);
        assert_eq!(lines[0], "Length in bytes: 3");
        assert_eq!(lines[4], "Length in bytes: 4");
        assert_eq!(lines[8], "E2989DF09F9880");
        assert_eq!(lines[9], "☝😀");
    }

    #[test]
    fn report_is_deterministic() {
        let emojis = ["😀", "☝", "👍", "✨", "©", "🧝", "😂", "✌"];
        assert_eq!(report(&build(&emojis)), report(&build(&emojis)));
    }

    #[test]
    fn empty_registry_prints_empty_strings() {
        let registry = build(&[]);
        assert!(registry.is_empty());
        assert_eq!(report(&registry), "\n\n");
    }
}
