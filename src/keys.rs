//! Lookup key generation.
//!
//! A lookup key is a string a typeahead search may match a contact under.
//! Western names expand into token suffixes and initialisms, so "John Paul
//! Jones" is found under `jon`, `paul j` or `jpj`. Chinese names expand into
//! the pinyin of their characters, so 杜鵑 is found under `dujuan`, `dj` or
//! `juan`. Polyphonic characters multiply the romanized variants; the
//! cross-product is capped so a pathological name cannot blow up the index.
//!
//! Generation is pure string work: no locale data is touched, and the same
//! name always yields the same set.

use std::collections::BTreeSet;

use smallvec::{smallvec, SmallVec};

use crate::reading;
use crate::script;

/// How a backend classified the name it is asking keys for.
///
/// The style usually comes from the backend's own heuristics (the scripts
/// seen while normalizing the display name); [`NameStyle::Cjk`] is the
/// undecided case where the scripts alone cannot tell Chinese, Japanese and
/// Korean apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    /// Nothing is known about the name. No keys.
    Undefined,
    /// Space-separated tokens in a bicameral script.
    Western,
    /// Han characters of undetermined language.
    Cjk,
    /// Known Chinese.
    Chinese,
    /// Known Japanese. Romanized keys would need kanji readings the crate
    /// does not carry, so no keys.
    Japanese,
    /// Known Korean. Same story as Japanese.
    Korean,
}

/// Default bound on romanized variants kept per name.
pub const DEFAULT_ROMANIZATION_CAP: usize = 64;

/// Keys for `name` under `style`. `None` means the style yields no keys at
/// all; ambiguous CJK yields keys only when the active family is Chinese.
pub(crate) fn lookup_keys(
    name: &str,
    style: NameStyle,
    chinese_family: bool,
    cap: usize,
) -> Option<BTreeSet<String>> {
    match style {
        NameStyle::Undefined | NameStyle::Japanese | NameStyle::Korean => None,
        NameStyle::Western => Some(western_keys(name)),
        NameStyle::Chinese => Some(chinese_keys(name, cap)),
        NameStyle::Cjk if chinese_family => Some(chinese_keys(name, cap)),
        NameStyle::Cjk => None,
    }
}

// ── WESTERN ──────────────────────────────────────────────────────────────────

/// Suffixes and initialisms of a space-separated name.
///
/// For tokens `t1 … tn` the set holds the trimmed name itself, every proper
/// suffix `tk … tn`, and the uppercase initialism of each of those.
pub fn western_keys(name: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let tokens: SmallVec<[&str; 8]> = name.split_whitespace().collect();
    if tokens.is_empty() {
        return keys;
    }
    keys.insert(name.trim().to_string());
    keys.insert(initialism(&tokens));
    for k in 1..tokens.len() {
        let suffix = &tokens[k..];
        keys.insert(suffix.join(" "));
        keys.insert(initialism(suffix));
    }
    keys
}

fn initialism(tokens: &[&str]) -> String {
    let mut out = String::with_capacity(tokens.len());
    for token in tokens {
        if let Some(c) = token.chars().next() {
            out.extend(c.to_uppercase());
        }
    }
    out
}

// ── CHINESE ──────────────────────────────────────────────────────────────────

/// One unit of a mixed-script name: a Han character or a run of Latin
/// letters and digits. Everything else only separates runs.
enum Token<'a> {
    Han(char),
    Latin(&'a str),
}

/// Pinyin expansion of a Chinese or mixed Chinese/Latin name.
///
/// The name is walked from its last token to its first; after every step the
/// verbatim, romanized and initialism accumulations are all emitted, so each
/// name suffix contributes keys. A character with several readings forks the
/// romanized accumulations, bounded by `cap`; a character with no reading at
/// all drops them, leaving the verbatim keys.
pub fn chinese_keys(name: &str, cap: usize) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let tokens = tokenize(name);
    if tokens.is_empty() {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            keys.insert(trimmed.to_string());
        }
        return keys;
    }

    let mut verbatim = String::new();
    let mut romanized: SmallVec<[String; 4]> = smallvec![String::new()];
    let mut initials: SmallVec<[String; 4]> = smallvec![String::new()];

    for token in tokens.iter().rev() {
        match *token {
            Token::Han(c) => {
                verbatim.insert(0, c);
                let readings = reading::readings(c);
                romanized = fork_prepend(&romanized, readings, |r| r, cap);
                initials = fork_prepend(&initials, readings, first_letter, cap);
            }
            Token::Latin(run) => {
                prepend_spaced(&mut verbatim, run);
                for r in &mut romanized {
                    prepend_spaced(r, run);
                }
                if let Some(c) = run.chars().next() {
                    let initial: String = c.to_uppercase().collect();
                    for i in &mut initials {
                        i.insert_str(0, &initial);
                    }
                }
            }
        }
        keys.insert(verbatim.clone());
        for r in &romanized {
            keys.insert(r.clone());
        }
        for i in &initials {
            keys.insert(i.clone());
        }
    }
    keys
}

fn tokenize(name: &str) -> SmallVec<[Token<'_>; 8]> {
    let mut tokens: SmallVec<[Token<'_>; 8]> = SmallVec::new();
    let mut run_start: Option<usize> = None;
    for (i, c) in name.char_indices() {
        if script::is_han(c) {
            if let Some(start) = run_start.take() {
                tokens.push(Token::Latin(&name[start..i]));
            }
            tokens.push(Token::Han(c));
        } else if c.is_ascii_alphanumeric() || script::is_latin(c) {
            run_start.get_or_insert(i);
        } else if let Some(start) = run_start.take() {
            tokens.push(Token::Latin(&name[start..i]));
        }
    }
    if let Some(start) = run_start {
        tokens.push(Token::Latin(&name[start..]));
    }
    tokens
}

/// Cross-product step: every reading, mapped through `project`, prepended to
/// every accumulated variant. Empty readings empty the result, and `cap`
/// bounds its length.
fn fork_prepend(
    variants: &[String],
    readings: &[reading::Reading],
    project: impl Fn(&str) -> &str,
    cap: usize,
) -> SmallVec<[String; 4]> {
    let mut out: SmallVec<[String; 4]> = SmallVec::new();
    'forking: for r in readings {
        let prefix = project(r);
        for variant in variants {
            if out.len() == cap {
                break 'forking;
            }
            let mut s = String::with_capacity(prefix.len() + variant.len());
            s.push_str(prefix);
            s.push_str(variant);
            out.push(s);
        }
    }
    out
}

/// A reading's initial. Readings are uppercase ASCII, so one byte.
fn first_letter(reading: &str) -> &str {
    &reading[..1]
}

fn prepend_spaced(acc: &mut String, run: &str) {
    if !acc.is_empty() {
        acc.insert(0, ' ');
    }
    acc.insert_str(0, run);
}

// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn set(expected: &[&str]) -> BTreeSet<String> {
        expected.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn western_two_token_name() {
        assert_eq!(
            western_keys("John Smith"),
            set(&["John Smith", "Smith", "JS", "S"])
        );
    }

    #[test]
    fn western_three_token_name() {
        assert_eq!(
            western_keys("John Paul Jones"),
            set(&["John Paul Jones", "Paul Jones", "Jones", "JPJ", "PJ", "J"])
        );
    }

    #[test]
    fn western_single_token_and_blank() {
        assert_eq!(western_keys("Cher"), set(&["Cher", "C"]));
        assert!(western_keys("").is_empty());
        assert!(western_keys("   ").is_empty());
    }

    #[test]
    fn western_trims_but_keeps_inner_form() {
        assert_eq!(
            western_keys("  John Smith  "),
            set(&["John Smith", "Smith", "JS", "S"])
        );
    }

    #[test]
    fn chinese_two_character_name() {
        assert_eq!(
            chinese_keys("杜鵑", DEFAULT_ROMANIZATION_CAP),
            set(&["鵑", "JUAN", "J", "杜鵑", "DUJUAN", "DJ"])
        );
    }

    #[test]
    fn chinese_leading_latin_run_without_space() {
        assert_eq!(
            chinese_keys("D杜鵑", DEFAULT_ROMANIZATION_CAP),
            set(&[
                "鵑", "JUAN", "J", "杜鵑", "DUJUAN", "DJ", "D 杜鵑", "D DUJUAN", "DDJ",
            ])
        );
    }

    #[test]
    fn chinese_leading_latin_word() {
        assert_eq!(
            chinese_keys("MARY 杜鵑", DEFAULT_ROMANIZATION_CAP),
            set(&[
                "鵑", "JUAN", "J", "杜鵑", "DUJUAN", "DJ", "MARY 杜鵑", "MARY DUJUAN", "MDJ",
            ])
        );
    }

    #[test]
    fn chinese_polyphonic_characters_fork_the_romanizations() {
        let keys = chinese_keys("曾好", DEFAULT_ROMANIZATION_CAP);
        assert!(keys.contains("曾好")); // 好 has no table entry
        assert!(!keys.contains("ZENGHAO")); // so romanized variants are gone
        let keys = chinese_keys("单田", DEFAULT_ROMANIZATION_CAP);
        assert!(keys.contains("SHANTIAN"));
        assert!(keys.contains("DANTIAN"));
        assert!(keys.contains("CHANTIAN"));
        assert!(keys.contains("ST") && keys.contains("DT") && keys.contains("CT"));
    }

    #[test]
    fn chinese_cap_bounds_the_fork() {
        // Four polyphonic characters would fork into 2*3*2*2 = 24 romanized
        // variants; a cap of 1 keeps only the first reading of each alive.
        let keys = chinese_keys("长单区重", 1);
        assert!(keys.contains("ZHONG"));
        assert!(!keys.contains("CHONG")); // second reading never forked
        assert!(keys.contains("SHANOUZHONG"));
        assert!(keys.contains("CHANGSHANOUZHONG"));
        assert!(keys.contains("CSOZ"));
        assert!(!keys.iter().any(|k| k.contains("DAN")), "{keys:?}");
        assert!(keys.contains("长单区重")); // verbatim never capped
    }

    #[test]
    fn chinese_latin_only_name_degenerates() {
        assert_eq!(
            chinese_keys("MARY", DEFAULT_ROMANIZATION_CAP),
            set(&["MARY", "M"])
        );
    }

    #[test]
    fn chinese_with_no_tokens_keeps_the_trimmed_name() {
        assert_eq!(chinese_keys(" !!! ", DEFAULT_ROMANIZATION_CAP), set(&["!!!"]));
        assert!(chinese_keys("   ", DEFAULT_ROMANIZATION_CAP).is_empty());
    }

    #[test]
    fn style_dispatch() {
        assert!(lookup_keys("abc", NameStyle::Undefined, true, 64).is_none());
        assert!(lookup_keys("さとう", NameStyle::Japanese, true, 64).is_none());
        assert!(lookup_keys("김철수", NameStyle::Korean, true, 64).is_none());
        assert!(lookup_keys("杜鵑", NameStyle::Cjk, false, 64).is_none());
        assert!(lookup_keys("杜鵑", NameStyle::Cjk, true, 64).is_some());
        assert!(lookup_keys("John", NameStyle::Western, false, 64).is_some());
        assert!(lookup_keys("杜鵑", NameStyle::Chinese, false, 64).is_some());
    }
}
