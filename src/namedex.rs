use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock};

use icu_locale_core::Locale;
use thiserror::Error;

use crate::keys::{self, NameStyle, DEFAULT_ROMANIZATION_CAP};
use crate::labeler;
use crate::locale::LocaleFamily;
use crate::profile::{family_profile, LocaleProfile};

#[derive(Debug, Error)]
pub enum NamedexError {
    #[error("bucket index {index} out of range: the {family} profile has {count} buckets")]
    BucketIndexOutOfRange {
        index: usize,
        count: usize,
        family: LocaleFamily,
    },
    #[error("invalid locale identifier `{input}`: {detail}")]
    InvalidLocale { input: String, detail: String },
}

pub struct Namedex {
    active: RwLock<&'static LocaleProfile>,
    romanization_cap: usize,
}

impl Namedex {
    pub fn new(locale: &Locale) -> Self {
        Self::builder().locale(locale.clone()).build()
    }

    pub fn builder() -> NamedexBuilder {
        NamedexBuilder::default()
    }

    // Bucket indices computed before a switch refer to whichever profile was
    // active when they were computed.
    pub fn set_locale(&self, locale: &Locale) {
        let profile = family_profile(LocaleFamily::from_locale(locale));
        *self.write_active() = profile;
    }

    pub fn set_locale_id(&self, id: &str) -> Result<(), NamedexError> {
        let locale = Locale::try_from_str(id).map_err(|e| NamedexError::InvalidLocale {
            input: id.to_string(),
            detail: e.to_string(),
        })?;
        self.set_locale(&locale);
        Ok(())
    }

    pub fn family(&self) -> LocaleFamily {
        self.active().family()
    }

    /// The profile the handle currently serves queries against.
    pub fn profile(&self) -> &'static LocaleProfile {
        self.active()
    }

    pub fn bucket_index(&self, text: &str) -> usize {
        labeler::bucket_index(self.active(), text)
    }

    pub fn bucket_label(&self, index: usize) -> Result<&'static str, NamedexError> {
        let profile = self.active();
        profile
            .bucket(index)
            .map(|b| b.label)
            .ok_or(NamedexError::BucketIndexOutOfRange {
                index,
                count: profile.bucket_count(),
                family: profile.family(),
            })
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.active().labels().collect()
    }

    pub fn bucket_count(&self) -> usize {
        self.active().bucket_count()
    }

    /// Keys for `name` under `style`, or `None` when the style yields none.
    /// Ambiguous [`NameStyle::Cjk`] names yield keys only while a Chinese
    /// family is active.
    pub fn lookup_keys(&self, name: &str, style: NameStyle) -> Option<BTreeSet<String>> {
        let chinese = self.family().is_chinese();
        keys::lookup_keys(name, style, chinese, self.romanization_cap)
    }

    fn active(&self) -> &'static LocaleProfile {
        // Profiles are 'static, so the reference is copied out of the guard
        // and the whole query runs against one consistent snapshot.
        *self
            .active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_active(&self) -> std::sync::RwLockWriteGuard<'_, &'static LocaleProfile> {
        self.active
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Namedex {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Namedex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Namedex")
            .field("family", &self.family())
            .field("romanization_cap", &self.romanization_cap)
            .finish()
    }
}

pub struct NamedexBuilder {
    locale: Locale,
    romanization_cap: usize,
}

impl Default for NamedexBuilder {
    fn default() -> Self {
        Self {
            locale: Locale::UNKNOWN,
            romanization_cap: DEFAULT_ROMANIZATION_CAP,
        }
    }
}

impl NamedexBuilder {
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn romanization_cap(mut self, cap: usize) -> Self {
        self.romanization_cap = cap;
        self
    }

    pub fn build(self) -> Namedex {
        let profile = family_profile(LocaleFamily::from_locale(&self.locale));
        Namedex {
            active: RwLock::new(profile),
            romanization_cap: self.romanization_cap,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
