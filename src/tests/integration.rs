#[cfg(test)]
mod integration_tests {

    use crate::{LocaleFamily, Namedex, NameStyle};
    use icu_locale_core::locale;
    use std::sync::Arc;
    use std::thread;

    /// A small address book exercised under every family in turn, checking
    /// both the label a contact lands under and the rendered index bar.
    #[test]
    fn production_roster_under_every_family() {
        let roster = [
            "Alice Johnson",
            "bob smith",
            "Ärzte ohne Grenzen",
            "杜鵑",
            "MARY 杜鵑",
            "あきら",
            "김철수",
            "نور الدين",
            "+1 (650) 555-1212",
        ];
        let dex = Namedex::default();
        for id in ["en-US", "ja-JP", "zh-CN", "zh-TW", "ko", "ar"] {
            dex.set_locale_id(id).unwrap();
            let labels = dex.labels();
            for name in roster {
                let index = dex.bucket_index(name);
                assert!(index < labels.len(), "{id} / {name}");
                assert_eq!(dex.bucket_label(index).unwrap(), labels[index], "{id} / {name}");
            }
            // the bar always carries exactly one # slot
            assert_eq!(labels.iter().filter(|l| **l == "#").count(), 1, "{id}");
        }
    }

    #[test]
    fn switching_back_reproduces_earlier_indices() {
        let dex = Namedex::new(&locale!("en-US"));
        let before: Vec<usize> = ["Alice", "杜鵑", "42"].iter().map(|n| dex.bucket_index(n)).collect();
        dex.set_locale_id("zh-TW").unwrap();
        dex.set_locale_id("en-US").unwrap();
        let after: Vec<usize> = ["Alice", "杜鵑", "42"].iter().map(|n| dex.bucket_index(n)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn a_failed_switch_leaves_the_handle_untouched() {
        let dex = Namedex::new(&locale!("ja-JP"));
        assert!(dex.set_locale_id("!!not-bcp47!!").is_err());
        assert_eq!(dex.family(), LocaleFamily::Japanese);
        assert_eq!(dex.bucket_label(dex.bucket_index("杜鵑")).unwrap(), "他");
    }

    #[test]
    fn readers_survive_concurrent_locale_switches() {
        let dex = Arc::new(Namedex::default());
        let mut workers = Vec::new();
        for _ in 0..4 {
            let dex = Arc::clone(&dex);
            workers.push(thread::spawn(move || {
                for _ in 0..500 {
                    // 57 is the largest profile; any index must stay under it
                    assert!(dex.bucket_index("杜鵑") < 57);
                    assert!(dex.bucket_index("John Smith") < 57);
                }
            }));
        }
        for round in 0..100 {
            let id = ["en-US", "zh-TW", "ko", "ar", "ja-JP"][round % 5];
            dex.set_locale_id(id).unwrap();
        }
        for worker in workers {
            worker.join().unwrap();
        }
    }

    #[test]
    fn handles_are_independent() {
        let en = Namedex::new(&locale!("en-US"));
        let ja = Namedex::new(&locale!("ja-JP"));
        assert_eq!(en.bucket_label(en.bucket_index("あきら")).unwrap(), "");
        assert_eq!(ja.bucket_label(ja.bucket_index("あきら")).unwrap(), "あ");
        en.set_locale(&locale!("ko"));
        assert_eq!(ja.family(), LocaleFamily::Japanese); // untouched by the other handle
    }

    #[test]
    fn keys_follow_a_locale_switch_mid_session() {
        let dex = Namedex::new(&locale!("en-US"));
        assert!(dex.lookup_keys("杜鵑", NameStyle::Cjk).is_none());
        dex.set_locale_id("zh-CN").unwrap();
        let keys = dex.lookup_keys("杜鵑", NameStyle::Cjk).unwrap();
        assert!(keys.contains("DUJUAN") && keys.contains("DJ"));
        dex.set_locale_id("ja-JP").unwrap();
        assert!(dex.lookup_keys("杜鵑", NameStyle::Cjk).is_none());
    }

    #[test]
    fn degenerate_inputs_never_panic() {
        let dex = Namedex::default();
        for id in ["en-US", "ja-JP", "zh-CN", "zh-TW", "ko", "ar"] {
            dex.set_locale_id(id).unwrap();
            for input in ["", " ", "\t\n", "🙂🙂", "ß", "ﬃ", "\u{FFFD}"] {
                let index = dex.bucket_index(input);
                assert!(dex.bucket_label(index).is_ok(), "{id} / {input:?}");
            }
            assert!(dex.lookup_keys("", NameStyle::Western).unwrap().is_empty());
            assert!(dex.lookup_keys("   ", NameStyle::Chinese).unwrap().is_empty());
        }
    }
}
