#[cfg(test)]
mod _tests_sink {
    use crate::lattice::Lattice2D;
    use crate::matching::sink::{MatchRecord, MemorySink, ResultSink, TextSink, RECORD_HEADER};
    use crate::matching::transformations::TransformationMatrix;

    fn sample_record() -> MatchRecord {
        MatchRecord {
            substrate_transform: TransformationMatrix::new(2, 0, 0, 1),
            film_transform: TransformationMatrix::new(1, 1, -1, 1),
            substrate_supercell: Lattice2D::from_rows([[3.0, 0.0], [0.0, 2.0]]),
            film_supercell: Lattice2D::from_rows([[3.1, 0.0], [0.0, 1.9]]),
            deformation: 0.05,
        }
    }

    #[test]
    fn test_record_line_layout() {
        let line = sample_record().to_line();
        assert_eq!(line, "2 0 0 1 1 1 -1 1 3.00 2.00 3.10 1.90 6 90 0.05");
    }

    #[test]
    fn test_text_sink_writes_header_then_records() {
        let mut sink = TextSink::new(Vec::new());
        sink.begin().unwrap();
        sink.record(&sample_record()).unwrap();
        let buffer = sink.into_inner().unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], RECORD_HEADER);
        assert_eq!(lines[1], sample_record().to_line());
    }

    #[test]
    fn test_memory_sink_starts_fresh_on_begin() {
        let mut sink = MemorySink::new();
        sink.begin().unwrap();
        sink.record(&sample_record()).unwrap();
        assert_eq!(sink.records.len(), 1);

        // a new scan truncates, no append across runs
        sink.begin().unwrap();
        assert!(sink.records.is_empty());
    }
}
