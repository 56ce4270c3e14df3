#[cfg(test)]
mod tests {
    use lexpack_core::{Codec, ConfigError, Dictionary, MalformedInputError};

    fn standard() -> Codec {
        Codec::standard()
    }

// # ✅ 1. Known vectors (standard dictionary)

    #[test]
    fn compress_known_vector() {
        assert_eq!(standard().compress("this is a string"), vec![155, 56, 172, 62, 195, 70]);
    }

    #[test]
    fn decompress_known_vector() {
        let text = standard().decompress(&[155, 56, 172, 62, 195, 70]).unwrap();
        assert_eq!(text, "this is a string");
    }

    #[test]
    fn compress_hello_world() {
        assert_eq!(standard().compress("hello world"), vec![16, 152, 96, 65, 42, 22, 24]);
    }

    #[test]
    fn space_is_code_zero() {
        let codec = standard();
        let encoded = codec.compress("this is a string 👍🏼");
        assert_eq!(
            encoded,
            vec![155, 56, 172, 62, 195, 70, 0, 255, 7, 240, 159, 145, 141, 240, 159, 143, 188]
        );
        assert_eq!(codec.decompress(&encoded).unwrap(), "this is a string 👍🏼");
    }

    #[test]
    fn empty_text_is_empty_bytes() {
        let codec = standard();
        assert!(codec.compress("").is_empty());
        assert_eq!(codec.decompress(&[]).unwrap(), "");
    }

// # ✅ 2. Literal escapes

    #[test]
    fn single_character_escape() {
        assert_eq!(standard().decompress(&[254, 98]).unwrap(), "b");
    }

    #[test]
    fn run_escape_with_explicit_length() {
        assert_eq!(standard().decompress(&[255, 1, 97, 98]).unwrap(), "ab");
    }

    #[test]
    fn unmatched_characters_become_literals() {
        let codec = Codec::create(["a"]).unwrap();
        assert_eq!(codec.compress("ab"), vec![0, 254, b'b']);
        assert_eq!(codec.compress("abd"), vec![0, 255, 1, b'b', b'd']);
    }

    #[test]
    fn non_ascii_literal_run() {
        let codec = standard();
        let encoded = codec.compress("日本");
        assert_eq!(encoded, vec![255, 5, 230, 151, 165, 230, 156, 172]);
        assert_eq!(codec.decompress(&encoded).unwrap(), "日本");
    }

// # ✅ 3. 256-byte boundary

    #[test]
    fn boundary_flush_starts_a_second_run() {
        let codec = standard();
        let text = "=".repeat(260);
        let encoded = codec.compress(&text);

        assert_eq!(&encoded[..2], &[255, 255]);
        assert_eq!(&encoded[258..], &[255, 3, b'=', b'=', b'=', b'=']);
        assert_eq!(encoded.len(), 264);
        assert_eq!(codec.decompress(&encoded).unwrap(), text);
    }

    #[test]
    fn character_split_across_runs_round_trips() {
        let codec = standard();
        let text = "€".repeat(86);
        let encoded = codec.compress(&text);
        assert_eq!(encoded.len(), 262);
        assert_eq!(codec.decompress(&encoded).unwrap(), text);
    }

    #[test]
    fn character_split_into_single_literal_round_trips() {
        // 85 x "€" + "ÿ" = 257 bytes: the cut leaves ÿ's last byte alone, and
        // the following "the" match flushes it as [254, 0xBF].
        let codec = standard();
        let text = format!("{}ÿthe", "€".repeat(85));
        let encoded = codec.compress(&text);

        assert_eq!(&encoded[256..], &[0xAC, 0xC3, 254, 0xBF, 1]);
        assert_eq!(codec.decompress(&encoded).unwrap(), text);
    }

// # ❌ 4. Malformed input

    #[test]
    fn truncated_markers_are_rejected() {
        let codec = standard();
        assert!(matches!(
            codec.decompress(&[254]),
            Err(MalformedInputError::Truncated { len: 1, index: 1 })
        ));
        assert!(matches!(
            codec.decompress(&[255]),
            Err(MalformedInputError::Truncated { len: 1, index: 1 })
        ));
    }

    #[test]
    fn overlong_run_is_rejected() {
        let err = standard().decompress(&[255, 50, 160]).unwrap_err();
        assert_eq!(err, MalformedInputError::RunOutOfBounds { len: 3, start: 1, end: 53 });
    }

    #[test]
    fn no_partial_output_on_failure() {
        // Valid codes first, then a truncated marker.
        let result = standard().decompress(&[155, 56, 254]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_utf8_literal_is_rejected() {
        let err = standard().decompress(&[1, 254, 0xC3]).unwrap_err();
        assert_eq!(err, MalformedInputError::InvalidUtf8 { len: 3, offset: 1 });
    }

    #[test]
    fn code_outside_dictionary_is_rejected() {
        let codec = Codec::create(["a", "b"]).unwrap();
        let err = codec.decompress(&[1, 0, 7]).unwrap_err();
        assert_eq!(
            err,
            MalformedInputError::UnknownCode { len: 3, index: 2, code: 7, dictionary_len: 2 }
        );
    }

// # ❌ 5. Configuration

    #[test]
    fn oversized_dictionary_is_rejected() {
        let entries: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        match Codec::create(entries) {
            Err(ConfigError::TooManyEntries { len, max }) => {
                assert_eq!(len, 300);
                assert_eq!(max, 254);
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn dictionary_of_exactly_254_is_accepted() {
        let entries: Vec<String> = (0..254).map(|i| format!("<{i}>")).collect();
        let codec = Codec::create(entries).unwrap();
        assert_eq!(codec.compress("<253><0>"), vec![253, 0]);
    }

    #[test]
    fn empty_dictionary_copies_everything() {
        let codec = Codec::create(Vec::<String>::new()).unwrap();
        let encoded = codec.compress("hi");
        assert_eq!(encoded, vec![255, 1, b'h', b'i']);
        assert_eq!(codec.decompress(&encoded).unwrap(), "hi");
    }

// # ✅ 6. Dictionaries must match out-of-band

    #[test]
    fn fingerprint_tracks_entries_and_order() {
        let a = Dictionary::from_entries(["x", "y"]).unwrap();
        let b = Dictionary::from_entries(["y", "x"]).unwrap();
        let c = Dictionary::from_entries(["x", "y"]).unwrap();

        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint(), c.fingerprint());
        // Length prefixes keep ["ab"] and ["a", "b"] apart.
        assert_ne!(
            Dictionary::from_entries(["ab"]).unwrap().fingerprint(),
            Dictionary::from_entries(["a", "b"]).unwrap().fingerprint()
        );
    }

    #[test]
    fn codec_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();

        let codec = std::sync::Arc::new(standard());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let codec = codec.clone();
                std::thread::spawn(move || {
                    let text = format!("thread {i} says hello to the world");
                    codec.decompress(&codec.compress(&text)).unwrap() == text
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
