use std::io::{self, Write};

use serde::Serialize;

use crate::lattice::Lattice2D;
use crate::matching::transformations::TransformationMatrix;

/// Header line written before any record.
pub const RECORD_HEADER: &str =
    "a1s a2s b1s b2s a1f a2f b1f b2f |a|_s |b|_s |a|_f |b|_f area angle_ab max(Da,Db,Da+Db)";

/// One sub-threshold combination, as handed to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchRecord {
    pub substrate_transform: TransformationMatrix,
    pub film_transform: TransformationMatrix,
    pub substrate_supercell: Lattice2D,
    pub film_supercell: Lattice2D,
    /// Scalar deformation metric of the combination.
    pub deformation: f64,
}

impl MatchRecord {
    /// Render the record as one line of the result table: transformation
    /// elements, supercell edge lengths to two decimals, integer-rounded
    /// substrate area and cell angle in degrees, and the raw metric.
    pub fn to_line(&self) -> String {
        let (len_a_s, len_b_s) = self.substrate_supercell.lattice_parameters();
        let (len_a_f, len_b_f) = self.film_supercell.lattice_parameters();
        let area = self.substrate_supercell.area().round() as i64;
        let angle = self.substrate_supercell.lattice_angle().to_degrees().round() as i64;
        format!(
            "{} {} {:.2} {:.2} {:.2} {:.2} {} {} {}",
            self.substrate_transform,
            self.film_transform,
            len_a_s,
            len_b_s,
            len_a_f,
            len_b_f,
            area,
            angle,
            self.deformation,
        )
    }
}

/// Receiver for the scan's sub-threshold combinations.
///
/// `begin` is called once per scan before any record; a fresh scan starts
/// a fresh table, there is no append across runs.
pub trait ResultSink {
    fn begin(&mut self) -> io::Result<()>;
    fn record(&mut self, record: &MatchRecord) -> io::Result<()>;
}

/// Sink writing the space-separated text table to any writer.
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        TextSink { writer }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn begin(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{RECORD_HEADER}")
    }

    fn record(&mut self, record: &MatchRecord) -> io::Result<()> {
        writeln!(self.writer, "{}", record.to_line())
    }
}

/// Sink collecting records in memory, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<MatchRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }
}

impl ResultSink for MemorySink {
    fn begin(&mut self) -> io::Result<()> {
        self.records.clear();
        Ok(())
    }

    fn record(&mut self, record: &MatchRecord) -> io::Result<()> {
        self.records.push(*record);
        Ok(())
    }
}
