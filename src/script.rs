use icu_properties::props::Script;
use icu_properties::CodePointMapData;

#[inline(always)]
fn script_of(c: char) -> Script {
    CodePointMapData::<Script>::new().get(c)
}

// Han ideographs, unified or compatibility.
#[inline(always)]
pub fn is_han(c: char) -> bool {
    script_of(c) == Script::Han
}

// Hiragana or katakana.
#[inline(always)]
pub fn is_kana(c: char) -> bool {
    let s = script_of(c);
    s == Script::Hiragana || s == Script::Katakana
}

// Precomposed syllables, conjoining jamo and compatibility jamo alike.
#[inline(always)]
pub fn is_hangul(c: char) -> bool {
    script_of(c) == Script::Hangul
}

#[inline(always)]
pub fn is_arabic(c: char) -> bool {
    script_of(c) == Script::Arabic
}

#[inline(always)]
pub fn is_latin(c: char) -> bool {
    script_of(c) == Script::Latin
}

// The character a name is classified by: digits, punctuation and whitespace
// are skipped. None means no letter anywhere (phone numbers, emoji entries).
#[inline]
pub fn first_alphabetic(text: &str) -> Option<char> {
    text.chars().find(|c| c.is_alphabetic())
}

// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_are_recognised() {
        assert!(is_han('杜'));
        assert!(is_han('鵑'));
        assert!(is_kana('あ'));
        assert!(is_kana('ア')); // katakana too
        assert!(is_hangul('김'));
        assert!(is_hangul('ᄀ'));
        assert!(is_hangul('ㄱ')); // compatibility jamo
        assert!(is_arabic('ن'));
        assert!(is_latin('a'));
        assert!(is_latin('é'));
    }

    #[test]
    fn scripts_do_not_overlap() {
        assert!(!is_kana('杜'));
        assert!(!is_han('あ'));
        assert!(!is_latin('ن'));
        assert!(!is_hangul('A'));
    }

    #[test]
    fn first_alphabetic_skips_noise() {
        assert_eq!(first_alphabetic("John"), Some('J'));
        assert_eq!(first_alphabetic("  12 Monkeys"), Some('M'));
        assert_eq!(first_alphabetic("#1-dad"), Some('d'));
        assert_eq!(first_alphabetic("杜鵑"), Some('杜'));
        assert_eq!(first_alphabetic("+1 (650) 555-1212"), None);
        assert_eq!(first_alphabetic(""), None);
        assert_eq!(first_alphabetic("☎ 42"), None);
    }
}
