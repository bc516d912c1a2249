// Template suite: construction invariants, rendering, capacity, and anchored
// structural matching.

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use stego_core::template::{Bucket, Template, TemplateError};

    fn bucket(words: &[&str]) -> Bucket {
        Bucket::new(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    fn frags(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    // ---- bucket construction invariants ----

    #[test]
    fn bucket_duplicate_word_is_rejected() {
        let err = Bucket::new(vec!["red".into(), "blue".into(), "red".into()]).unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateWord { word } if word == "red"));
    }

    #[test]
    fn bucket_whitespace_word_is_rejected() {
        let err = Bucket::new(vec!["two words".into()]).unwrap_err();
        assert!(matches!(err, TemplateError::WordContainsWhitespace { .. }));

        let err = Bucket::new(vec!["tab\tword".into()]).unwrap_err();
        assert!(matches!(err, TemplateError::WordContainsWhitespace { .. }));
    }

    #[test]
    fn bucket_empty_cases_are_rejected() {
        assert!(matches!(
            Bucket::new(vec![]).unwrap_err(),
            TemplateError::EmptyBucket
        ));
        assert!(matches!(
            Bucket::new(vec!["ok".into(), "".into()]).unwrap_err(),
            TemplateError::EmptyWord { digit: 1 }
        ));
    }

    #[test]
    fn bucket_digit_word_inverse() {
        let b = bucket(&["zero", "one", "two"]);
        assert_eq!(b.len(), 3);
        assert_eq!(b.word(1), Some("one"));
        assert_eq!(b.word(3), None);
        assert_eq!(b.digit_of("two"), Some(2));
        assert_eq!(b.digit_of("three"), None);
    }

    // ---- template construction ----

    #[test]
    fn fragment_count_must_be_buckets_plus_one() {
        let err = Template::new(0, frags(&["a ", " b"]), vec![
            bucket(&["x"]),
            bucket(&["y"]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            TemplateError::FragmentCountMismatch { fragments: 2, buckets: 2 }
        ));
    }

    #[test]
    fn capacity_is_bucket_size_product() {
        let t = Template::new(
            0,
            frags(&["", " ", " ", ""]),
            vec![bucket(&["a", "b", "c"]), bucket(&["d", "e", "f", "g"]), bucket(&["h", "i"])],
        )
        .unwrap();
        assert_eq!(t.slot_count(), 3);
        assert_eq!(t.capacity(), &BigUint::from(24u32)); // 3 * 4 * 2
    }

    // ---- render ----

    #[test]
    fn render_interleaves_fragments_and_words() {
        let t = Template::new(
            7,
            frags(&["The ", " sat on the ", "."]),
            vec![bucket(&["cat", "dog"]), bucket(&["mat", "rug"])],
        )
        .unwrap();

        let sentence = t.render(&["dog", "mat"]).unwrap();
        assert_eq!(sentence, "The dog sat on the mat.");
    }

    #[test]
    fn render_rejects_wrong_arity() {
        let t = Template::new(0, frags(&["", ""]), vec![bucket(&["x", "y"])]).unwrap();
        let err = t.render(&["x", "y"]).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::SlotCountMismatch { expected: 1, actual: 2 }
        ));
    }

    // ---- structural matching ----

    #[test]
    fn match_recovers_rendered_words() {
        let t = Template::new(
            0,
            frags(&["The ", " sat on the ", "."]),
            vec![bucket(&["cat", "dog"]), bucket(&["mat", "rug"])],
        )
        .unwrap();

        let sentence = t.render(&["cat", "rug"]).unwrap();
        let words = t.match_slots(&sentence).unwrap();
        assert_eq!(words, vec!["cat", "rug"]);
    }

    #[test]
    fn match_is_anchored_both_ends() {
        let t = Template::new(
            0,
            frags(&["The ", " sat.", ""]),
            vec![bucket(&["cat"])],
        )
        .unwrap();

        assert!(t.match_slots("The cat sat.").is_some());
        assert!(t.match_slots("The cat sat. ").is_none()); // trailing char
        assert!(t.match_slots(" The cat sat.").is_none()); // leading char
        assert!(t.match_slots("The cat sat").is_none());   // missing fragment
    }

    #[test]
    fn match_rejects_whitespace_in_slot() {
        let t = Template::new(0, frags(&["", ""]), vec![bucket(&["cat"])]).unwrap();
        assert!(t.match_slots("cat").is_some());
        assert!(t.match_slots("two words").is_none());
    }

    #[test]
    fn fragments_with_metacharacters_match_literally() {
        // Fragments containing regex syntax must be treated as exact text.
        let t = Template::new(
            0,
            frags(&["(a+b)* ", " [end]$"]),
            vec![bucket(&["token", "other"])],
        )
        .unwrap();

        let sentence = t.render(&["token"]).unwrap();
        assert_eq!(sentence, "(a+b)* token [end]$");
        assert_eq!(t.match_slots(&sentence).unwrap(), vec!["token"]);

        // The literal must not behave as a pattern.
        assert!(t.match_slots("aab token [end]$").is_none());
    }

    #[test]
    fn match_against_other_template_shape_fails() {
        let t1 = Template::new(0, frags(&["alpha ", ""]), vec![bucket(&["x"])]).unwrap();
        let t2 = Template::new(1, frags(&["beta ", ""]), vec![bucket(&["x"])]).unwrap();

        let sentence = t1.render(&["x"]).unwrap();
        assert!(t1.match_slots(&sentence).is_some());
        assert!(t2.match_slots(&sentence).is_none());
    }
}
