use std::io::Read;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use glam::DVec3;

use crate::error::{CsvMeshError, Result};

/// Fixed column layout of a capture row: SV_Position.{x, y, z, w}.
const COL_X: usize = 2;
const COL_Y: usize = 3;
const COL_Z: usize = 4;
const COL_W: usize = 5;

/// A data row must carry at least this many fields.
const MIN_FIELDS: usize = 6;

/// Lazy decoder over the data rows of a CSV capture.
///
/// Construction consumes the header row. Each `next()` yields one
/// perspective-divided point; the iterator fuses after the first error,
/// so a failed decode cannot be resumed.
pub struct PointDecoder<R: Read> {
    records: StringRecordsIntoIter<R>,
    row: usize,
    failed: bool,
}

impl<R: Read> PointDecoder<R> {
    /// Wrap `reader` and skip the header row.
    ///
    /// Fails with `MissingHeader` when the stream has no rows at all.
    pub fn new(reader: R) -> Result<Self> {
        let rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = rdr.into_records();

        // Header content is ignored; only its presence matters.
        match records.next() {
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                return Err(CsvMeshError::Input(format!(
                    "Failed to read CSV header: {e}"
                )));
            }
            None => return Err(CsvMeshError::MissingHeader),
        }

        Ok(Self {
            records,
            row: 0,
            failed: false,
        })
    }
}

impl<R: Read> Iterator for PointDecoder<R> {
    type Item = Result<DVec3>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let record = match self.records.next()? {
            Ok(r) => r,
            Err(e) => {
                self.failed = true;
                return Some(Err(CsvMeshError::Input(format!(
                    "Failed to read CSV record: {e}"
                ))));
            }
        };

        self.row += 1;
        let point = decode_record(&record, self.row);
        if point.is_err() {
            self.failed = true;
        }
        Some(point)
    }
}

/// Decode every data row of `reader`, all-or-nothing.
pub fn decode_points<R: Read>(reader: R) -> Result<Vec<DVec3>> {
    PointDecoder::new(reader)?.collect()
}

/// Decode one data row: extract the four position fields and apply the
/// perspective divide. `row` is 1-based, counting from the first row after
/// the header.
fn decode_record(record: &StringRecord, row: usize) -> Result<DVec3> {
    if record.len() < MIN_FIELDS {
        return Err(CsvMeshError::MalformedRow {
            row,
            reason: format!(
                "expected at least {MIN_FIELDS} fields, found {}",
                record.len()
            ),
        });
    }

    let x = parse_field(record, row, COL_X, "SV_Position.x")?;
    let y = parse_field(record, row, COL_Y, "SV_Position.y")?;
    let z = parse_field(record, row, COL_Z, "SV_Position.z")?;
    let w = parse_field(record, row, COL_W, "SV_Position.w")?;

    if w == 0.0 {
        return Err(CsvMeshError::MalformedRow {
            row,
            reason: "zero SV_Position.w component".into(),
        });
    }

    Ok(DVec3::new(x / w, y / w, z / w))
}

/// Parse a single named field as f64.
fn parse_field(record: &StringRecord, row: usize, col: usize, name: &str) -> Result<f64> {
    let raw = record[col].trim();
    raw.parse::<f64>().map_err(|_| CsvMeshError::MalformedRow {
        row,
        reason: format!("{name} field '{raw}' is not a number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    fn decode(input: &str) -> Result<Vec<DVec3>> {
        decode_points(Cursor::new(input.to_string()))
    }

    #[test]
    fn perspective_divide() {
        let points = decode("idx,prim,x,y,z,w\n0,0,2,4,6,2\n").unwrap();
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 1.0);
        assert_relative_eq!(points[0].y, 2.0);
        assert_relative_eq!(points[0].z, 3.0);
    }

    #[test]
    fn header_is_skipped_unconditionally() {
        // Header cells need not be numeric, or even present in count.
        let points = decode("anything at all\n0,0,1,1,1,1\n").unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn empty_stream_is_missing_header() {
        let err = decode("").unwrap_err();
        assert!(matches!(err, CsvMeshError::MissingHeader));
    }

    #[test]
    fn header_only_yields_no_points() {
        let points = decode("idx,prim,x,y,z,w\n").unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn too_few_fields() {
        let err = decode("h,h,h,h,h,h\n0,0,1,2\n").unwrap_err();
        match err {
            CsvMeshError::MalformedRow { row, reason } => {
                assert_eq!(row, 1);
                assert!(reason.contains("at least 6 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_field() {
        let err = decode("h,h,h,h,h,h\n0,0,1,1,1,1\n0,0,abc,1,1,1\n").unwrap_err();
        match err {
            CsvMeshError::MalformedRow { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("SV_Position.x"));
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_w_divisor() {
        let err = decode("h,h,h,h,h,h\n0,0,1,2,3,0\n").unwrap_err();
        match err {
            CsvMeshError::MalformedRow { row, reason } => {
                assert_eq!(row, 1);
                assert!(reason.contains("zero"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let points = decode("h,h,h,h,h,h,h,h\n7,1,1,2,3,1,0.5,meta\n").unwrap();
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 1.0);
        assert_relative_eq!(points[0].y, 2.0);
        assert_relative_eq!(points[0].z, 3.0);
    }

    #[test]
    fn decoder_fuses_after_error() {
        let mut decoder =
            PointDecoder::new(Cursor::new("h,h,h,h,h,h\n0,0,bad,1,1,1\n0,0,1,1,1,1\n".to_string()))
                .unwrap();
        assert!(decoder.next().unwrap().is_err());
        assert!(decoder.next().is_none());
    }

    #[test]
    fn negative_and_fractional_values() {
        let points = decode("h,h,h,h,h,h\n0,0,-1.5,0.25,3e2,0.5\n").unwrap();
        assert_relative_eq!(points[0].x, -3.0);
        assert_relative_eq!(points[0].y, 0.5);
        assert_relative_eq!(points[0].z, 600.0);
    }
}
