//! Han character readings: ideograph to candidate pinyin romanizations,
//! uppercase ASCII with `V` standing in for `ü`. The table is curated for
//! people's names: common surnames in both Simplified and Traditional form,
//! frequent given-name characters, and the polyphonic characters whose
//! surname reading differs from the everyday one (单 is SHAN as a surname
//! but DAN in 菜单).

mod data;

/// One candidate romanization.
pub type Reading = &'static str;

/// Candidate readings for `c`, most common first. Empty for characters the
/// table does not cover.
#[inline]
pub fn readings(c: char) -> &'static [Reading] {
    data::READINGS.get(&c).copied().unwrap_or(&[])
}

// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_reading_characters() {
        assert_eq!(readings('杜'), ["DU"]);
        assert_eq!(readings('鵑'), ["JUAN"]);
        assert_eq!(readings('鹃'), ["JUAN"]); // simplified twin
        assert_eq!(readings('王'), ["WANG"]);
        assert_eq!(readings('日'), ["RI"]);
    }

    #[test]
    fn polyphonic_characters_list_every_candidate() {
        assert_eq!(readings('曾'), ["ZENG", "CENG"]);
        assert_eq!(readings('单'), ["SHAN", "DAN", "CHAN"]);
        assert_eq!(readings('乐'), ["LE", "YUE"]);
        assert_eq!(readings('重'), ["ZHONG", "CHONG"]);
    }

    #[test]
    fn simplified_and_traditional_twins_agree() {
        assert_eq!(readings('张'), readings('張'));
        assert_eq!(readings('刘'), readings('劉'));
        assert_eq!(readings('乐'), readings('樂'));
        assert_eq!(readings('龙'), readings('龍'));
    }

    #[test]
    fn uncovered_characters_romanize_to_nothing() {
        assert!(readings('か').is_empty()); // kana is not Han
        assert!(readings('A').is_empty());
        assert!(readings('〇').is_empty());
    }

    #[test]
    fn readings_are_uppercase_ascii() {
        for (_, candidates) in data::READINGS.entries() {
            for reading in *candidates {
                assert!(!reading.is_empty());
                assert!(reading.chars().all(|c| c.is_ascii_uppercase()), "{reading}");
            }
        }
    }

    #[test]
    fn umlaut_u_is_spelled_v() {
        assert_eq!(readings('吕'), ["LV"]);
        assert_eq!(readings('呂'), ["LV"]);
    }
}
