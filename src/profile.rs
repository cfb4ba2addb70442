//! Locale profiles: one immutable bucket layout per index family.
//!
//! A [`LocaleProfile`] owns the ordered bucket list for one
//! [`LocaleFamily`] together with the primary-strength collator that orders
//! it. Profiles are built once, on first use, and cached for the lifetime of
//! the process; handles only ever hold `&'static` references to them.
//!
//! Every profile ends with the shared default block: an optional leading
//! empty bucket, `A`–`Z`, the `#` bucket for entries without letters, and a
//! trailing empty bucket for scripts that collate after everything else.
//! Families with a script section (kana rows, stroke groups, jamo groups,
//! Arabic letters) place it in front of that block, behind a leading empty
//! bucket of its own.

use core::fmt;
use std::sync::LazyLock;

use log::{debug, warn};

use crate::collate::{CollateError, Collation};
use crate::locale::LocaleFamily;

/// Label of every catch-all bucket.
pub const EMPTY_LABEL: &str = "";
/// Label of the bucket for entries without a single alphabetic character.
pub const NUMERIC_LABEL: &str = "#";
/// Label of the Japanese bucket for ideographs outside the kana rows.
pub const MISC_IDEOGRAPH_LABEL: &str = "他";

// ── BUCKET TABLES ────────────────────────────────────────────────────────────
//
// Each entry pairs a bucket's lower boundary with its display label. The
// boundary is an exemplar character: a name belongs to the last bucket whose
// boundary does not collate after the name's first letter.

pub(crate) const LATIN_LETTERS: &[(char, &str)] = &[
    ('A', "A"), ('B', "B"), ('C', "C"), ('D', "D"), ('E', "E"), ('F', "F"),
    ('G', "G"), ('H', "H"), ('I', "I"), ('J', "J"), ('K', "K"), ('L', "L"),
    ('M', "M"), ('N', "N"), ('O', "O"), ('P', "P"), ('Q', "Q"), ('R', "R"),
    ('S', "S"), ('T', "T"), ('U', "U"), ('V', "V"), ('W', "W"), ('X', "X"),
    ('Y', "Y"), ('Z', "Z"),
];

/// Gojūon rows. Katakana and voiced kana are primary-equal to the plain
/// hiragana boundary, so カ and が both land in the か row.
const KANA_ROWS: &[(char, &str)] = &[
    ('あ', "あ"), ('か', "か"), ('さ', "さ"), ('た', "た"), ('な', "な"),
    ('は', "は"), ('ま', "ま"), ('や', "や"), ('ら', "ら"), ('わ', "わ"),
];

/// Stroke-count groups. Boundaries are the CLDR index exemplars for
/// `zh-Hant`: the first character of each group from one stroke up to
/// twenty-five. Characters with more strokes stay in the last group.
const STROKE_GROUPS: &[(char, &str)] = &[
    ('一', "1劃"), ('丁', "2劃"), ('丈', "3劃"), ('不', "4劃"), ('且', "5劃"),
    ('丞', "6劃"), ('串', "7劃"), ('並', "8劃"), ('亭', "9劃"), ('乘', "10劃"),
    ('乾', "11劃"), ('傀', "12劃"), ('亂', "13劃"), ('僎', "14劃"), ('僵', "15劃"),
    ('儐', "16劃"), ('優', "17劃"), ('叢', "18劃"), ('嚥', "19劃"), ('嚴', "20劃"),
    ('囁', "21劃"), ('囌', "22劃"), ('變', "23劃"), ('囑', "24劃"), ('廳', "25劃"),
];

/// Leading-consonant groups, one per jamo. Precomposed syllables,
/// compatibility jamo and Hanja all resolve against these boundaries under
/// the Korean tailoring.
const HANGUL_CONSONANTS: &[(char, &str)] = &[
    ('\u{1100}', "\u{1100}"), // ᄀ
    ('\u{1102}', "\u{1102}"), // ᄂ
    ('\u{1103}', "\u{1103}"), // ᄃ
    ('\u{1105}', "\u{1105}"), // ᄅ
    ('\u{1106}', "\u{1106}"), // ᄆ
    ('\u{1107}', "\u{1107}"), // ᄇ
    ('\u{1109}', "\u{1109}"), // ᄉ
    ('\u{110B}', "\u{110B}"), // ᄋ
    ('\u{110C}', "\u{110C}"), // ᄌ
    ('\u{110E}', "\u{110E}"), // ᄎ
    ('\u{110F}', "\u{110F}"), // ᄏ
    ('\u{1110}', "\u{1110}"), // ᄐ
    ('\u{1111}', "\u{1111}"), // ᄑ
    ('\u{1112}', "\u{1112}"), // ᄒ
];

const ARABIC_LETTERS: &[(char, &str)] = &[
    ('\u{0627}', "\u{0627}"), // ا
    ('\u{062A}', "\u{062A}"), // ت
    ('\u{062B}', "\u{062B}"), // ث
    ('\u{062C}', "\u{062C}"), // ج
    ('\u{062D}', "\u{062D}"), // ح
    ('\u{062E}', "\u{062E}"), // خ
    ('\u{062F}', "\u{062F}"), // د
    ('\u{0630}', "\u{0630}"), // ذ
    ('\u{0631}', "\u{0631}"), // ر
    ('\u{0632}', "\u{0632}"), // ز
    ('\u{0633}', "\u{0633}"), // س
    ('\u{0634}', "\u{0634}"), // ش
    ('\u{0635}', "\u{0635}"), // ص
    ('\u{0636}', "\u{0636}"), // ض
    ('\u{0637}', "\u{0637}"), // ط
    ('\u{0638}', "\u{0638}"), // ظ
    ('\u{0639}', "\u{0639}"), // ع
    ('\u{063A}', "\u{063A}"), // غ
    ('\u{0641}', "\u{0641}"), // ف
    ('\u{0642}', "\u{0642}"), // ق
    ('\u{0643}', "\u{0643}"), // ك
    ('\u{0644}', "\u{0644}"), // ل
    ('\u{0645}', "\u{0645}"), // م
    ('\u{0646}', "\u{0646}"), // ن
    ('\u{0647}', "\u{0647}"), // ه
    ('\u{0648}', "\u{0648}"), // و
    ('\u{064A}', "\u{064A}"), // ي
];

// ── BUCKETS ──────────────────────────────────────────────────────────────────

/// What a bucket holds and how classification treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    /// Empty-label bucket for names that precede or follow every labelled
    /// bucket of their block.
    CatchAll,
    /// The `#` bucket: digits, symbols, phone numbers.
    Numeric,
    /// Collation-ranged bucket. The character is its lower boundary.
    Ranged(char),
    /// The Japanese 他 bucket for ideographs outside the kana rows.
    MiscIdeograph,
}

/// One slot of the index bar.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub label: &'static str,
    pub kind: BucketKind,
}

/// The script section of a profile, if the family has one.
pub(crate) struct ScriptSection {
    /// Index of the section's first ranged bucket.
    pub(crate) start: usize,
    /// The boundary table the section was built from.
    pub(crate) table: &'static [(char, &'static str)],
    /// Japanese only: bucket for ideographs, taken without a boundary search.
    pub(crate) misc: Option<usize>,
    /// Bucket for section characters that collate before the first boundary.
    pub(crate) underflow: usize,
}

/// The default block every profile ends with.
pub(crate) struct DefaultBlock {
    /// Leading empty bucket, absent in the Korean layout.
    pub(crate) leading_empty: Option<usize>,
    /// Index of the `A` bucket; `Z` is 25 slots later.
    pub(crate) letters_start: usize,
    /// Index of the `#` bucket.
    pub(crate) numeric: usize,
    /// Index of the trailing empty bucket.
    pub(crate) overflow: usize,
}

// ── PROFILE ──────────────────────────────────────────────────────────────────

/// An immutable index layout for one locale family.
pub struct LocaleProfile {
    family: LocaleFamily,
    collation: Collation,
    buckets: Vec<Bucket>,
    section: Option<ScriptSection>,
    default_block: DefaultBlock,
}

impl LocaleProfile {
    fn build(family: LocaleFamily) -> Result<Self, CollateError> {
        let collation = Collation::try_new(&family.collation_locale())?;
        let mut buckets = Vec::with_capacity(60);

        let section = match family {
            LocaleFamily::Latin | LocaleFamily::SimplifiedChinese => None,
            LocaleFamily::Japanese => {
                buckets.push(catch_all());
                let start = buckets.len();
                push_ranged(&mut buckets, KANA_ROWS);
                let misc = buckets.len();
                buckets.push(Bucket {
                    label: MISC_IDEOGRAPH_LABEL,
                    kind: BucketKind::MiscIdeograph,
                });
                Some(ScriptSection {
                    start,
                    table: KANA_ROWS,
                    misc: Some(misc),
                    underflow: misc,
                })
            }
            LocaleFamily::TraditionalChinese => {
                buckets.push(catch_all());
                let start = buckets.len();
                push_ranged(&mut buckets, STROKE_GROUPS);
                Some(ScriptSection {
                    start,
                    table: STROKE_GROUPS,
                    misc: None,
                    underflow: 0,
                })
            }
            LocaleFamily::Korean => {
                buckets.push(catch_all());
                let start = buckets.len();
                push_ranged(&mut buckets, HANGUL_CONSONANTS);
                Some(ScriptSection {
                    start,
                    table: HANGUL_CONSONANTS,
                    misc: None,
                    underflow: 0,
                })
            }
            LocaleFamily::Arabic => {
                buckets.push(catch_all());
                let start = buckets.len();
                push_ranged(&mut buckets, ARABIC_LETTERS);
                Some(ScriptSection {
                    start,
                    table: ARABIC_LETTERS,
                    misc: None,
                    underflow: 0,
                })
            }
        };

        // Korean is the one layout whose jamo section runs straight into A
        // with no empty bucket between them.
        let leading_empty = !matches!(family, LocaleFamily::Korean);
        let default_block = push_default_block(&mut buckets, leading_empty);

        debug!("built {family} profile: {} buckets", buckets.len());
        Ok(Self {
            family,
            collation,
            buckets,
            section,
            default_block,
        })
    }

    /// The family this profile lays out.
    #[inline]
    pub fn family(&self) -> LocaleFamily {
        self.family
    }

    /// Number of buckets, catch-alls included.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The bucket at `index`, or `None` past the end.
    #[inline]
    pub fn bucket(&self, index: usize) -> Option<Bucket> {
        self.buckets.get(index).copied()
    }

    /// All bucket labels in index order, catch-alls included.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.buckets.iter().map(|b| b.label)
    }

    pub(crate) fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub(crate) fn collation(&self) -> &Collation {
        &self.collation
    }

    pub(crate) fn section(&self) -> Option<&ScriptSection> {
        self.section.as_ref()
    }

    pub(crate) fn default_block(&self) -> &DefaultBlock {
        &self.default_block
    }
}

impl fmt::Debug for LocaleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleProfile")
            .field("family", &self.family)
            .field("buckets", &self.buckets.len())
            .finish()
    }
}

fn catch_all() -> Bucket {
    Bucket {
        label: EMPTY_LABEL,
        kind: BucketKind::CatchAll,
    }
}

fn push_ranged(buckets: &mut Vec<Bucket>, table: &'static [(char, &'static str)]) {
    for &(boundary, label) in table {
        buckets.push(Bucket {
            label,
            kind: BucketKind::Ranged(boundary),
        });
    }
}

fn push_default_block(buckets: &mut Vec<Bucket>, leading_empty: bool) -> DefaultBlock {
    let leading_empty = if leading_empty {
        buckets.push(catch_all());
        Some(buckets.len() - 1)
    } else {
        None
    };
    let letters_start = buckets.len();
    push_ranged(buckets, LATIN_LETTERS);
    let numeric = buckets.len();
    buckets.push(Bucket {
        label: NUMERIC_LABEL,
        kind: BucketKind::Numeric,
    });
    let overflow = buckets.len();
    buckets.push(catch_all());
    DefaultBlock {
        leading_empty,
        letters_start,
        numeric,
        overflow,
    }
}

// ── CACHED PROFILES ──────────────────────────────────────────────────────────

static LATIN: LazyLock<LocaleProfile> = LazyLock::new(|| {
    LocaleProfile::build(LocaleFamily::Latin)
        .expect("embedded en collation data missing - this is a bug")
});
static JAPANESE: LazyLock<LocaleProfile> =
    LazyLock::new(|| build_or_latin(LocaleFamily::Japanese));
static SIMPLIFIED_CHINESE: LazyLock<LocaleProfile> =
    LazyLock::new(|| build_or_latin(LocaleFamily::SimplifiedChinese));
static TRADITIONAL_CHINESE: LazyLock<LocaleProfile> =
    LazyLock::new(|| build_or_latin(LocaleFamily::TraditionalChinese));
static KOREAN: LazyLock<LocaleProfile> = LazyLock::new(|| build_or_latin(LocaleFamily::Korean));
static ARABIC: LazyLock<LocaleProfile> = LazyLock::new(|| build_or_latin(LocaleFamily::Arabic));

/// A family's tailoring can be absent when the embedded collation data has
/// been slimmed down; the Latin layout is the degraded but usable answer.
fn build_or_latin(family: LocaleFamily) -> LocaleProfile {
    LocaleProfile::build(family).unwrap_or_else(|e| {
        warn!("{family} profile unavailable ({e}); serving the latin layout instead");
        LocaleProfile::build(LocaleFamily::Latin)
            .expect("embedded en collation data missing - this is a bug")
    })
}

/// The cached profile for `family`, built on first use.
pub fn family_profile(family: LocaleFamily) -> &'static LocaleProfile {
    match family {
        LocaleFamily::Latin => &LATIN,
        LocaleFamily::Japanese => &JAPANESE,
        LocaleFamily::SimplifiedChinese => &SIMPLIFIED_CHINESE,
        LocaleFamily::TraditionalChinese => &TRADITIONAL_CHINESE,
        LocaleFamily::Korean => &KOREAN,
        LocaleFamily::Arabic => &ARABIC,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
