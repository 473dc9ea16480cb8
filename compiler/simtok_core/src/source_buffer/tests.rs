use super::*;

#[test]
fn empty_text_is_just_padding() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.as_bytes(), b"");
    assert_eq!(buf.as_sentinel_bytes(), &[0u8; CACHE_LINE][..]);
}

#[test]
fn text_is_copied_verbatim() {
    let source = "char c = '\u{00e9}';\r\n";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
    assert!(!buf.is_empty());
}

#[test]
fn every_byte_after_the_text_is_zero() {
    let buf = SourceBuffer::new("int i;");
    assert!(buf.as_sentinel_bytes()[6..].iter().all(|&b| b == 0));
}

#[test]
fn length_is_a_multiple_of_the_cache_line() {
    for len in [0, 1, 60, 61, 62, 63, 64, 125, 200] {
        let buf = SourceBuffer::new(&"a".repeat(len));
        let total = buf.as_sentinel_bytes().len();
        assert_eq!(total % CACHE_LINE, 0, "text length {len}");
        assert!(total >= len + TAIL, "text length {len}");
    }
}

#[test]
fn tail_spills_into_the_next_cache_line() {
    // 61 bytes + 3 tail bytes fill one line exactly; 62 need a second.
    assert_eq!(SourceBuffer::new(&"a".repeat(61)).as_sentinel_bytes().len(), 64);
    assert_eq!(SourceBuffer::new(&"a".repeat(62)).as_sentinel_bytes().len(), 128);
}

#[test]
fn cursor_reads_from_offset_zero() {
    let buf = SourceBuffer::new("import");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'i');
    assert!(SourceBuffer::new("").cursor().is_eof());
}
