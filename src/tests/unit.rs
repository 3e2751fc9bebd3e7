#[cfg(test)]
mod unit_tests {

    use crate::{
        NormalizationForm, Normalizer, PastEndPolicy, RecordKind, TerminalPunctuation, TextError,
        case_fold, fragment_sentences, normalize, normalize_str, normalize_with_offsets,
        resolve_offsets,
    };
    use std::borrow::Cow;

    #[test]
    fn case_fold_lowercases_and_expands() {
        assert_eq!(case_fold(b" TExt to loWERcase! ").unwrap(), " text to lowercase! ");
        assert_eq!(case_fold("ß".as_bytes()).unwrap(), "ss");
        assert_eq!(
            case_fold("\u{3a3}\u{38a}\u{3a3}\u{3a5}\u{3a6}\u{39f}\u{3a3}".as_bytes()).unwrap(),
            "\u{3c3}\u{3af}\u{3c3}\u{3c5}\u{3c6}\u{3bf}\u{3c3}"
        );
    }

    #[test]
    fn case_fold_applies_nfkc_afterwards() {
        assert_eq!(case_fold("ＡＢＣ ﬁ ①".as_bytes()).unwrap(), "abc fi 1");
        assert_eq!(case_fold("\u{212b}".as_bytes()).unwrap(), "\u{e5}");
    }

    #[test]
    fn long_s_dot_below_examples() {
        let s = "\u{1e9b}\u{0323}".as_bytes();
        assert_eq!(normalize(s, "NFKC").unwrap().as_bytes(), b"\xE1\xB9\xA9");
        assert_eq!(normalize(s, "NFD").unwrap(), "\u{017f}\u{0323}\u{0307}");
        assert_eq!(normalize(s, "NFC").unwrap(), "\u{1e9b}\u{0323}");
        assert_eq!(normalize(s, "NFKD").unwrap(), "s\u{0323}\u{0307}");
    }

    #[test]
    fn unknown_form_is_an_error() {
        assert_eq!(
            normalize(b"abc", "cantfindme"),
            Err(TextError::InvalidNormalizationForm("cantfindme".into()))
        );
        assert!(normalize_with_offsets(b"abc", "cantfindme").is_err());
    }

    #[test]
    fn malformed_utf8_is_an_error() {
        let bad_inputs: [&[u8]; 3] = [b"\xC3\x28", b"\xE2\x82", b"\xff\xfe"];
        for bad in bad_inputs {
            assert!(matches!(normalize(bad, "NFC"), Err(TextError::InvalidEncoding(_))));
            assert!(matches!(case_fold(bad), Err(TextError::InvalidEncoding(_))));
            assert!(matches!(fragment_sentences(bad), Err(TextError::InvalidEncoding(_))));
        }
    }

    #[test]
    fn kadokawa_offsets() {
        let input = "株式会社ＫＡＤＯＫＡＷＡ";
        let (out, map) = normalize_with_offsets(input.as_bytes(), "NFKC").unwrap();
        assert_eq!(out, "株式会社KADOKAWA");
        assert_eq!(map.output_len(), 20);
        assert_eq!(map.input_len(), 36);
        assert_eq!(
            resolve_offsets(&map, &[0, 1, 11, 12, 13, 20, 22]).unwrap(),
            vec![0, 1, 11, 12, 15, 36, 36]
        );
        assert_eq!(map.records()[0].kind, RecordKind::Unchanged);
    }

    #[test]
    fn negative_offset_fails() {
        let (_, map) = normalize_with_offsets(b"abc", "NFC").unwrap();
        assert_eq!(
            resolve_offsets(&map, &[1, -1]),
            Err(TextError::OffsetOutOfRange { offset: -1, len: 3 })
        );
    }

    #[test]
    fn strict_policy_rejects_past_end() {
        let (_, map) = normalize_with_offsets("ｘ".as_bytes(), "NFKC").unwrap();
        assert_eq!(map.resolve(&[1], PastEndPolicy::Reject).unwrap(), vec![3]);
        assert!(map.resolve(&[2], PastEndPolicy::Reject).is_err());
        assert_eq!(map.resolve(&[2], PastEndPolicy::Clamp).unwrap(), vec![3]);
    }

    #[test]
    fn decomposing_forms_do_not_track_offsets() {
        for form in ["NFD", "nfkd"] {
            assert!(matches!(
                normalize_with_offsets(b"abc", form),
                Err(TextError::InvalidNormalizationForm(_))
            ));
        }
    }

    #[test]
    fn empty_input() {
        for form in NormalizationForm::ALL {
            assert_eq!(normalize(b"", form.name()).unwrap(), "");
        }
        let (out, map) = normalize_with_offsets(b"", "NFKC").unwrap();
        assert!(out.is_empty());
        assert_eq!(resolve_offsets(&map, &[0]).unwrap(), vec![0]);
        assert!(fragment_sentences(b"").unwrap().is_empty());
        assert_eq!(case_fold(b"").unwrap(), "");
    }

    #[test]
    fn zero_copy_when_already_normalized() {
        let input = "already NFC: caf\u{e9}";
        let out = normalize_str(input, NormalizationForm::Nfc);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        let n = Normalizer::default();
        assert!(matches!(n.normalize("plain ascii"), Cow::Borrowed(_)));
    }

    #[test]
    fn fragment_examples() {
        let got = fragment_sentences(b"Hello (who are you...) foo bar").unwrap();
        assert_eq!(got.fragments, vec!["Hello (who are you...)", "foo bar"]);

        let got = fragment_sentences(b"Hello!!!!! Who are you??").unwrap();
        assert_eq!(got.fragments, vec!["Hello!!!!!", "Who are you??"]);

        let got = fragment_sentences(b":) :-\\ (=^..^=) |-O").unwrap();
        assert_eq!(got.fragments, vec![":)", ":-\\", "(=^..^=)", "|-O"]);
        assert_eq!(got.starts, vec![0, 3, 7, 16]);
        assert_eq!(got.ends, vec![2, 6, 15, 19]);
    }

    #[test]
    fn final_fragment_is_unterminated() {
        let frags = crate::fragment_str("Done. not yet");
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].terminal, TerminalPunctuation::Period);
        assert_eq!(frags[1].terminal, TerminalPunctuation::None);
        assert_eq!(frags[1].terminal_punc_start, None);
    }
}
