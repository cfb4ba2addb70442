use core::fmt;

use icu_locale_core::{locale, Locale};

/// The index families the crate ships dedicated bucket layouts for. Every
/// locale maps onto exactly one; anything without a dedicated layout falls
/// back to Latin, whose A–Z index is serviceable for most alphabetic scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleFamily {
    Latin,
    Japanese,
    SimplifiedChinese,
    TraditionalChinese,
    Korean,
    Arabic,
}

impl LocaleFamily {
    pub fn from_locale(locale: &Locale) -> Self {
        match locale.id.language.as_str() {
            "ja" => Self::Japanese,
            "ko" => Self::Korean,
            "ar" => Self::Arabic,
            "zh" => chinese_family(locale),
            _ => Self::Latin,
        }
    }

    // The only families whose lookup-key generation romanizes ideographs.
    #[inline]
    pub fn is_chinese(self) -> bool {
        matches!(self, Self::SimplifiedChinese | Self::TraditionalChinese)
    }

    pub(crate) fn collation_locale(self) -> Locale {
        match self {
            Self::Latin => locale!("en"),
            Self::Japanese => locale!("ja"),
            Self::SimplifiedChinese => locale!("zh"),
            Self::TraditionalChinese => locale!("zh-Hant"),
            Self::Korean => locale!("ko"),
            Self::Arabic => locale!("ar"),
        }
    }
}

impl fmt::Display for LocaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Latin => "latin",
            Self::Japanese => "japanese",
            Self::SimplifiedChinese => "simplified-chinese",
            Self::TraditionalChinese => "traditional-chinese",
            Self::Korean => "korean",
            Self::Arabic => "arabic",
        })
    }
}

// `zh-Hant` anywhere means stroke counts; bare `zh` defaults to pinyin except
// in the three regions that write Traditional.
fn chinese_family(locale: &Locale) -> LocaleFamily {
    if let Some(script) = locale.id.script {
        return match script.as_str() {
            "Hant" => LocaleFamily::TraditionalChinese,
            _ => LocaleFamily::SimplifiedChinese,
        };
    }
    match locale.id.region.as_ref().map(|region| region.as_str()) {
        Some("TW") | Some("HK") | Some("MO") => LocaleFamily::TraditionalChinese,
        _ => LocaleFamily::SimplifiedChinese,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
