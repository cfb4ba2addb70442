//! Bucket classification.
//!
//! Classification looks at one character, the first alphabetic one, and
//! resolves it against the profile in two steps: the family's script section
//! first (kana rows, stroke groups, jamo groups, Arabic letters), then the
//! shared default block. Inside a block the answer is the last bucket whose
//! boundary does not collate after the character, found by binary search at
//! primary strength. Simplified Chinese has no section of its own; its
//! ideographs reach the letter buckets through the reading table.

use core::cmp::Ordering;

use crate::locale::LocaleFamily;
use crate::profile::{self, LocaleProfile, ScriptSection};
use crate::reading;
use crate::script;

/// Everything that collates after this string under any tailoring belongs in
/// the trailing catch-all. A bare `Z` would not do: `Ž` and friends carry
/// secondary weights past it while still being Z-bucket letters, so the
/// probe carries the largest code point as a tie-breaker.
const AFTER_LETTERS: &str = "Z\u{10FFFF}";

/// The bucket `text` belongs to in `profile`, as an index into the profile's
/// bucket list. Always in range; classification cannot fail.
pub fn bucket_index(profile: &LocaleProfile, text: &str) -> usize {
    let Some(first) = script::first_alphabetic(text) else {
        return profile.default_block().numeric;
    };
    if let Some(section) = profile.section() {
        if in_section(profile.family(), first) {
            return section_index(profile, section, first);
        }
    }
    if profile.family() == LocaleFamily::SimplifiedChinese && script::is_han(first) {
        if let Some(index) = pinyin_index(profile, first) {
            return index;
        }
    }
    default_index(profile, first)
}

/// Simplified Chinese files an ideograph under its pinyin initial. The zh
/// tailoring orders Han after the whole Latin alphabet even at primary
/// strength, so the letter comes from the reading table, not the collator;
/// a character the table does not cover stays on the collation path and
/// lands in the trailing catch-all.
fn pinyin_index(profile: &LocaleProfile, c: char) -> Option<usize> {
    let initial = reading::readings(c).first()?.as_bytes()[0];
    Some(profile.default_block().letters_start + (initial - b'A') as usize)
}

/// Whether a character routes into the family's script section rather than
/// the default block.
fn in_section(family: LocaleFamily, c: char) -> bool {
    match family {
        LocaleFamily::Japanese => script::is_kana(c) || script::is_han(c),
        LocaleFamily::TraditionalChinese => script::is_han(c),
        LocaleFamily::Korean => script::is_hangul(c) || script::is_han(c),
        LocaleFamily::Arabic => script::is_arabic(c),
        LocaleFamily::Latin | LocaleFamily::SimplifiedChinese => false,
    }
}

fn section_index(profile: &LocaleProfile, section: &ScriptSection, c: char) -> usize {
    // Japanese ideographs skip the row search; they all share 他.
    if let Some(misc) = section.misc {
        if script::is_han(c) {
            return misc;
        }
    }
    match last_at_or_before(profile, section.table, c) {
        Some(i) => section.start + i,
        None => section.underflow,
    }
}

fn default_index(profile: &LocaleProfile, c: char) -> usize {
    let block = profile.default_block();
    match last_at_or_before(profile, profile::LATIN_LETTERS, c) {
        // Before A: scripts the tailoring orders ahead of Latin. The leading
        // empty bucket takes them; Korean has none, so A absorbs them.
        None => block.leading_empty.unwrap_or(block.letters_start),
        // At or past Z: either a Z-bucket letter or a script that collates
        // after the whole alphabet and belongs in the trailing catch-all.
        Some(25) => {
            let mut buf = [0u8; 4];
            if profile.collation().cmp_str(c.encode_utf8(&mut buf), AFTER_LETTERS)
                == Ordering::Greater
            {
                block.overflow
            } else {
                block.letters_start + 25
            }
        }
        Some(i) => block.letters_start + i,
    }
}

/// Index of the last boundary in `table` that collates at or before `c`,
/// or `None` when `c` precedes them all.
fn last_at_or_before(profile: &LocaleProfile, table: &[(char, &str)], c: char) -> Option<usize> {
    let n = table.partition_point(|&(boundary, _)| {
        profile.collation().cmp_char(boundary, c) != Ordering::Greater
    });
    n.checked_sub(1)
}

// ─────────────────────────────────────────────────────────────────────────────
