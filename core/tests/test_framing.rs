// Validates the wire framing layer in isolation:
//
// * `FrameWriter` / `VerbatimRun` (flush rule, 256-byte cut)
// * `FrameReader` (bounds checks, span coalescing)
// * `decode_frames`

#[cfg(test)]
mod tests {
    use lexpack_core::framing::{
        decode_frames, Frame, FrameReader, FrameWriter, LeadByte, MalformedInputError, Marker,
        VerbatimRun,
    };

    fn run_of(text: &str) -> (VerbatimRun, FrameWriter) {
        let mut writer = FrameWriter::default();
        let mut run = VerbatimRun::new();
        for ch in text.chars() {
            run.push_char(ch, &mut writer);
        }
        (run, writer)
    }

// # ✅ 1. Lead byte classification

    #[test]
    fn lead_bytes_classify() {
        assert_eq!(LeadByte::classify(0), LeadByte::Code(0));
        assert_eq!(LeadByte::classify(253), LeadByte::Code(253));
        assert_eq!(LeadByte::classify(254), LeadByte::Marker(Marker::Literal));
        assert_eq!(LeadByte::classify(255), LeadByte::Marker(Marker::Run));
    }

// # ✅ 2. Flush rule: one byte vs. many

    #[test]
    fn single_byte_uses_literal_marker() {
        let mut writer = FrameWriter::default();
        writer.push_literal(b"b");
        let (out, counters) = writer.finish(1);
        assert_eq!(out, vec![254, b'b']);
        assert_eq!(counters.frames_literal, 1);
    }

    #[test]
    fn several_bytes_use_run_marker_with_length_minus_one() {
        let mut writer = FrameWriter::default();
        writer.push_literal(b"ab");
        writer.push_code(7);
        let (out, counters) = writer.finish(3);
        assert_eq!(out, vec![255, 1, b'a', b'b', 7]);
        assert_eq!(counters.frames_run, 1);
        assert_eq!(counters.frames_code, 1);
        assert_eq!(counters.bytes_encoded, 5);
    }

    #[test]
    fn full_run_encodes_length_255() {
        let mut writer = FrameWriter::default();
        writer.push_literal(&[b'x'; 256]);
        let (out, _) = writer.finish(256);
        assert_eq!(&out[..2], &[255, 255]);
        assert_eq!(out.len(), 258);
    }

// # ✅ 3. Verbatim run cuts at exactly 256 bytes

    #[test]
    fn run_below_limit_stays_pending() {
        let (run, writer) = run_of(&"=".repeat(255));
        assert_eq!(run.len(), 255);
        assert!(writer.is_empty());
    }

    #[test]
    fn run_at_limit_is_framed_immediately() {
        let (run, writer) = run_of(&"=".repeat(256));
        assert!(run.is_empty());
        assert_eq!(writer.len(), 258);
    }

    #[test]
    fn run_cut_may_split_a_character() {
        // 86 x U+20AC (3 bytes each) = 258 bytes; the cut lands inside char #86.
        let (mut run, mut writer) = run_of(&"€".repeat(86));
        assert_eq!(run.len(), 2);
        run.flush(&mut writer);
        let (out, counters) = writer.finish(258);

        assert_eq!(&out[..2], &[255, 255]);
        assert_eq!(&out[256..], &[0xAC, 0xE2, 255, 1, 0x82, 0xAC]);
        assert_eq!(counters.frames_run, 2);
        assert_eq!(counters.bytes_literal, 258);
    }

    #[test]
    fn flushing_an_empty_run_writes_nothing() {
        let mut writer = FrameWriter::default();
        VerbatimRun::new().flush(&mut writer);
        assert!(writer.is_empty());
    }

// # ✅ 4. Reader: physical frames

    #[test]
    fn decode_frames_splits_physical_frames() {
        let wire = [3, 254, b'b', 255, 1, b'a', b'b', 0];
        let frames = decode_frames(&wire).unwrap();
        assert_eq!(
            frames,
            vec![
                Frame::Code(3),
                Frame::Literal(b'b'),
                Frame::Run(b"ab"),
                Frame::Code(0),
            ]
        );
        let total: usize = frames.iter().map(Frame::wire_len).sum();
        assert_eq!(total, wire.len());
    }

// # ❌ 5. Reader: truncation is rejected with the index it wanted

    #[test]
    fn lone_literal_marker_is_truncated() {
        assert_eq!(
            decode_frames(&[254]),
            Err(MalformedInputError::Truncated { len: 1, index: 1 })
        );
    }

    #[test]
    fn lone_run_marker_is_truncated() {
        assert_eq!(
            decode_frames(&[255]),
            Err(MalformedInputError::Truncated { len: 1, index: 1 })
        );
    }

    #[test]
    fn run_payload_past_end_is_rejected() {
        let err = decode_frames(&[255, 50, 160]).unwrap_err();
        assert_eq!(err, MalformedInputError::RunOutOfBounds { len: 3, start: 1, end: 53 });
        assert_eq!(err.buffer_len(), 3);
        assert_eq!(err.index(), 1);
        assert_eq!(
            err.to_string(),
            "malformed input: buffer has 3 bytes, but wants to read from index 1 to 53"
        );
    }

    #[test]
    fn truncation_after_valid_frames_reports_absolute_index() {
        assert_eq!(
            decode_frames(&[1, 2, 255, 0, b'a', 254]),
            Err(MalformedInputError::Truncated { len: 6, index: 6 })
        );
    }

// # ✅ 6. Reader: literal span coalescing

    #[test]
    fn span_coalesces_consecutive_runs_and_one_trailing_literal() {
        let mut wire = vec![255, 1, b'a', b'b', 255, 0, b'c', 254, b'd', 254, b'e'];
        wire.push(9);
        let mut reader = FrameReader::new(&wire);
        let mut pending = Vec::new();

        reader.read_literal_span(&mut pending).unwrap();
        assert_eq!(pending, b"abcd");
        // The second single literal starts a new span.
        assert_eq!(reader.position(), 9);
        assert_eq!(reader.peek(), Some(LeadByte::Marker(Marker::Literal)));

        pending.clear();
        reader.read_literal_span(&mut pending).unwrap();
        assert_eq!(pending, b"e");
        assert_eq!(reader.read_frame().unwrap(), Some(Frame::Code(9)));
        assert!(reader.is_at_end());

        let counters = reader.finish(5);
        assert_eq!(counters.frames_run, 2);
        assert_eq!(counters.frames_literal, 2);
        assert_eq!(counters.frames_code, 1);
    }

    #[test]
    fn span_stops_at_a_code() {
        let wire = [255, 1, b'a', b'b', 4, 255, 1, b'c', b'd'];
        let mut reader = FrameReader::new(&wire);
        let mut pending = Vec::new();
        reader.read_literal_span(&mut pending).unwrap();
        assert_eq!(pending, b"ab");
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn span_propagates_truncation_of_a_continuation_frame() {
        let wire = [255, 1, b'a', b'b', 255, 9, b'c'];
        let mut reader = FrameReader::new(&wire);
        let mut pending = Vec::new();
        assert_eq!(
            reader.read_literal_span(&mut pending),
            Err(MalformedInputError::RunOutOfBounds { len: 7, start: 5, end: 16 })
        );
    }
}
