use script_variant::{ScriptError, WideString};

#[test]
fn test_empty() {
    let w = WideString::empty();
    assert!(w.is_empty());
    assert_eq!(w.len(), 0);
    assert_eq!(w.units(), &[] as &[u16]);
    assert_eq!(w, WideString::default());
}

#[test]
fn test_from_units_preserves_interior_nuls() {
    let units = [0x0041, 0x0000, 0x0042];
    let w = WideString::from_units(&units);
    assert_eq!(w.len(), 3);
    assert_eq!(w.units(), &units);
}

#[test]
fn test_nul_terminated_scan() {
    let w = WideString::from_units_nul_terminated(&[0x0048, 0x0069, 0x0000, 0x0021]);
    assert_eq!(w.to_string_lossy(), "Hi");

    // No terminator: the whole slice.
    let w = WideString::from_units_nul_terminated(&[0x0048, 0x0069]);
    assert_eq!(w.to_string_lossy(), "Hi");

    let w = WideString::from_units_nul_terminated(&[0x0000, 0x0041]);
    assert!(w.is_empty());
}

#[test]
fn test_str_round_trip() {
    let w = WideString::from("héllo wörld");
    assert_eq!(w.to_string_lossy(), "héllo wörld");

    // Astral characters occupy two UTF-16 units.
    let w = WideString::from("𝄞");
    assert_eq!(w.len(), 2);
    assert_eq!(w.to_string_lossy(), "𝄞");
}

#[test]
fn test_lossy_display_of_unpaired_surrogate() {
    let w = WideString::from_units(&[0xD800]);
    assert_eq!(w.to_string_lossy(), "\u{FFFD}");
    assert_eq!(format!("{w}"), "\u{FFFD}");
}

#[test]
fn test_decode_utf8() {
    let w = WideString::from_bytes("caf\u{e9}".as_bytes(), encoding_rs::UTF_8);
    assert_eq!(w.to_string_lossy(), "caf\u{e9}");

    let w = WideString::from_bytes(b"", encoding_rs::UTF_8);
    assert!(w.is_empty());
}

#[test]
fn test_decode_legacy_encodings() {
    // windows-1252: 0xE9 is é.
    let w = WideString::from_bytes(b"caf\xe9", encoding_rs::WINDOWS_1252);
    assert_eq!(w.to_string_lossy(), "caf\u{e9}");

    // Shift_JIS multi-byte sequence.
    let w = WideString::from_bytes(b"\x83\x65\x83\x58\x83\x67", encoding_rs::SHIFT_JIS);
    assert_eq!(w.to_string_lossy(), "テスト");
}

#[test]
fn test_lossy_decode_is_deterministic() {
    let a = WideString::from_bytes(b"\xffabc", encoding_rs::UTF_8);
    let b = WideString::from_bytes(b"\xffabc", encoding_rs::UTF_8);
    assert_eq!(a, b);
    assert_eq!(a.to_string_lossy(), "\u{FFFD}abc");
}

#[test]
fn test_declared_encoding_is_authoritative() {
    // A leading BOM is ordinary content, not an encoding override.
    let lossy = WideString::from_bytes(b"\xef\xbb\xbfx", encoding_rs::UTF_8);
    assert_eq!(lossy.to_string_lossy(), "\u{feff}x");
    let strict = WideString::from_bytes_strict(b"\xef\xbb\xbfx", encoding_rs::UTF_8).unwrap();
    assert_eq!(lossy, strict);

    // A UTF-16LE BOM in declared-UTF-8 input stays malformed UTF-8.
    let w = WideString::from_bytes(b"\xff\xfe\x41\x00", encoding_rs::UTF_8);
    assert_eq!(w.to_string_lossy(), "\u{FFFD}\u{FFFD}A\u{0}");
}

#[test]
fn test_strict_decode() {
    let w = WideString::from_bytes_strict(b"plain", encoding_rs::UTF_8).unwrap();
    assert_eq!(w.to_string_lossy(), "plain");

    let err = WideString::from_bytes_strict(b"\xffabc", encoding_rs::UTF_8).unwrap_err();
    assert_eq!(err, ScriptError::Decode("UTF-8"));

    assert!(WideString::from_bytes_strict(b"", encoding_rs::UTF_8)
        .unwrap()
        .is_empty());
}

#[test]
fn test_clone_is_deep() {
    let original = WideString::from("buffer");
    let copy = original.clone();
    assert_ne!(original.units().as_ptr(), copy.units().as_ptr());
    drop(original);
    assert_eq!(copy.to_string_lossy(), "buffer");
}

#[test]
fn test_debug_quotes_content() {
    assert_eq!(format!("{:?}", WideString::from("ab")), "\"ab\"");
}
