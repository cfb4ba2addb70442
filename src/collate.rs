use core::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::Locale;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollateError {
    #[error("no collation data for `{locale}`: {detail}")]
    Data { locale: String, detail: String },
}

/// A primary-strength collator tied to one locale's tailoring. Case, accent
/// and width differences never split a bucket at this strength: `ä` lands
/// with `a`, katakana with hiragana, half-width with full-width.
pub struct Collation {
    collator: CollatorBorrowed<'static>,
}

impl Collation {
    pub fn try_new(locale: &Locale) -> Result<Self, CollateError> {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Primary);
        let collator =
            Collator::try_new(locale.clone().into(), options).map_err(|e| CollateError::Data {
                locale: locale.to_string(),
                detail: e.to_string(),
            })?;
        Ok(Self { collator })
    }

    #[inline]
    pub fn cmp_str(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    #[inline]
    pub fn cmp_char(&self, a: char, b: char) -> Ordering {
        let mut buf_a = [0u8; 4];
        let mut buf_b = [0u8; 4];
        self.collator
            .compare(a.encode_utf8(&mut buf_a), b.encode_utf8(&mut buf_b))
    }
}

// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use icu_locale_core::locale;

    #[test]
    fn primary_strength_ignores_case_and_accents() {
        let c = Collation::try_new(&locale!("en")).unwrap();
        assert_eq!(c.cmp_char('a', 'A'), Ordering::Equal);
        assert_eq!(c.cmp_char('ä', 'a'), Ordering::Equal);
        assert_eq!(c.cmp_char('é', 'e'), Ordering::Equal);
    }

    #[test]
    fn letters_keep_their_alphabet_order() {
        let c = Collation::try_new(&locale!("en")).unwrap();
        assert_eq!(c.cmp_char('a', 'b'), Ordering::Less);
        assert_eq!(c.cmp_char('z', 'y'), Ordering::Greater);
        assert_eq!(c.cmp_str("smith", "SMITH"), Ordering::Equal);
    }

    #[test]
    fn kana_width_and_voicing_are_primary_equal() {
        let c = Collation::try_new(&locale!("ja")).unwrap();
        assert_eq!(c.cmp_char('あ', 'ア'), Ordering::Equal); // hiragana == katakana
        assert_eq!(c.cmp_char('か', 'が'), Ordering::Equal); // voicing is secondary
        assert_eq!(c.cmp_char('か', 'さ'), Ordering::Less);
    }

    #[test]
    fn han_collates_past_the_whole_alphabet_even_under_zh() {
        // The zh tailoring keeps Han in its own block after Latin, so the
        // bucket labeler cannot get pinyin initials out of the collator and
        // routes ideographs through the reading table instead.
        let c = Collation::try_new(&locale!("zh")).unwrap();
        assert_eq!(c.cmp_char('杜', 'Z'), Ordering::Greater);
        assert_eq!(c.cmp_str("杜", "Z\u{10FFFF}"), Ordering::Greater);
    }
}
