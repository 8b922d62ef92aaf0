use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::flatten::FlatRecordSet;

const DELIMITER: char = ',';
const LINE_TERMINATOR: &str = "\r\n";

/// Writes `records` to a new file at `path`
///
/// Column lengths are checked before the file is created, a ragged record
/// set leaves no file behind.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &FlatRecordSet) -> Result<usize> {
    let path = path.as_ref();
    let rows = records.rows()?;

    let io_err = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_rows(&mut out, records, rows).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    debug!(path = %path.display(), rows, columns = records.columns().len(), "wrote records");
    Ok(rows)
}

/// Writes the header and every row of `records` to `out`
pub fn write_records<W: Write>(out: &mut W, records: &FlatRecordSet) -> Result<usize> {
    let rows = records.rows()?;
    write_rows(out, records, rows).map_err(Error::Write)?;
    Ok(rows)
}

fn write_rows<W: Write>(out: &mut W, records: &FlatRecordSet, rows: usize) -> io::Result<()> {
    let columns = records.columns();

    let mut line = String::new();
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        push_field(&mut line, &column.name);
    }
    line.push_str(LINE_TERMINATOR);
    out.write_all(line.as_bytes())?;

    for row in 0..rows {
        line.clear();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                line.push(DELIMITER);
            }
            line.push_str(&format_float(column.values[row]));
        }
        line.push_str(LINE_TERMINATOR);
        out.write_all(line.as_bytes())?;
    }

    Ok(())
}

/// Quotes fields containing the delimiter, a quote or a line break
fn push_field(line: &mut String, field: &str) {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == '"' || c == '\r' || c == '\n');

    if needs_quotes {
        line.push('"');
        line.push_str(&field.replace('"', "\"\""));
        line.push('"');
    } else {
        line.push_str(field);
    }
}

/// Shortest decimal that parses back to the same `f64`
///
/// Spelled `nan`, `inf`, `-inf`, with a trailing `.0` on integral values and
/// a signed two digit exponent (`1e-05`, `1.5e+16`) outside `[1e-4, 1e16)`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0. { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0. || (1e-4..1e16).contains(&magnitude) {
        // Debug keeps the trailing `.0` and never switches to exponents in this range
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(records: &FlatRecordSet) -> String {
        let mut out = Vec::new();
        write_records(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn float_spelling() {
        assert_eq!("0.0", format_float(0.));
        assert_eq!("-0.0", format_float(-0.));
        assert_eq!("1.0", format_float(1.));
        assert_eq!("-0.25", format_float(-0.25));
        assert_eq!("3.141592653589793", format_float(std::f64::consts::PI));
        assert_eq!("12345.678", format_float(12345.678));
        assert_eq!("0.0001", format_float(1e-4));
        assert_eq!("1e-05", format_float(1e-5));
        assert_eq!("-2.5e-10", format_float(-2.5e-10));
        assert_eq!("1000000000000000.0", format_float(1e15));
        assert_eq!("1e+16", format_float(1e16));
        assert_eq!("1.5e+300", format_float(1.5e300));
        assert_eq!("5e-324", format_float(5e-324));
        assert_eq!("nan", format_float(f64::NAN));
        assert_eq!("inf", format_float(f64::INFINITY));
        assert_eq!("-inf", format_float(f64::NEG_INFINITY));
    }

    #[test]
    fn float_spelling_round_trips() {
        let values = [
            0.1,
            -1. / 3.,
            2f64.sqrt(),
            1e-7 / 3.,
            6.02214076e23,
            f64::MAX,
            f64::MIN_POSITIVE,
        ];
        for value in values {
            let parsed: f64 = format_float(value).parse().unwrap();
            assert_eq!(value.to_bits(), parsed.to_bits());
        }
        assert!(format_float(f64::NAN).parse::<f64>().unwrap().is_nan());
        assert_eq!(f64::NEG_INFINITY, format_float(f64::NEG_INFINITY).parse::<f64>().unwrap());
    }

    #[test]
    fn header_then_rows() {
        let mut records = FlatRecordSet::new();
        records.push("base", vec![0., 2.]);
        records.push("pow", vec![1., f64::NAN]);
        assert_eq!("base,pow\r\n0.0,1.0\r\n2.0,nan\r\n", written(&records));
    }

    #[test]
    fn empty_record_set_writes_empty_header() {
        assert_eq!("\r\n", written(&FlatRecordSet::new()));
    }

    #[test]
    fn awkward_names_are_quoted() {
        let mut records = FlatRecordSet::new();
        records.push("a,b", vec![]);
        records.push("say \"hi\"", vec![]);
        assert_eq!("\"a,b\",\"say \"\"hi\"\"\"\r\n", written(&records));
    }

    #[test]
    fn ragged_records_leave_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");

        let mut records = FlatRecordSet::new();
        records.push("a", vec![1., 2.]);
        records.push("b", vec![1.]);

        assert!(matches!(
            write_csv(&path, &records),
            Err(Error::RaggedColumns { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let mut records = FlatRecordSet::new();
        records.push("a", vec![1.]);

        let err = write_csv(&path, &records).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("out.csv"));
    }
}
