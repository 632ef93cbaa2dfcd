use std::{error::Error, io::{BufRead, Write}};

use log::{debug, warn};
use serde_json::{json, Value};

use crate::bounds::Bounds;
use crate::format::Format;
use crate::poly::{parse_point, Point};


#[derive(Debug, Default, PartialEq)]
pub struct Filter {
    pub read: usize,
    pub kept: usize,
    pub skipped: usize,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `x,y` lines and writes the points contained in `bounds`.
    /// Blank lines and `#` comments are ignored, malformed lines are skipped.
    pub fn filter<T: Bounds, R: BufRead, W: Write>(&mut self, reader: R, w: &mut W, bounds: &T, format: Format) -> Result<(), Box<dyn Error>> {
        let mut kept: Vec<Value> = Vec::new();
        for (n, line) in reader.split(b'\n').enumerate() {
            let bytes = line?;
            let line = match std::str::from_utf8(&bytes) {
                Ok(s) => s.trim(),
                Err(e) => {
                    warn!("Skipping line {}: {}", n + 1, e);
                    self.read += 1;
                    self.skipped += 1;
                    continue;
                }
            };
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.read += 1;
            let p = match parse_point(line) {
                Ok(p) => p,
                Err(e) => {
                    warn!("Skipping line {}: {}", n + 1, e);
                    self.skipped += 1;
                    continue;
                }
            };
            if bounds.contains(p.x, p.y) {
                self.kept += 1;
                self.write(w, p, format, &mut kept)?;
            }
        }
        if format == Format::Json {
            serde_json::to_writer(&mut *w, &kept)?;
            writeln!(w)?;
        }
        debug!("Filter finished: {:?}", self);
        Ok(())
    }

    fn write<W: Write>(&self, w: &mut W, p: Point, format: Format, kept: &mut Vec<Value>) -> Result<(), Box<dyn Error>> {
        match format {
            Format::Plain => writeln!(w, "{},{}", p.x, p.y)?,
            Format::Json => kept.push(json!({ "x": p.x, "y": p.y })),
        }
        Ok(())
    }
}

#[cfg(test)]
const INPUT: &str = "# sample\n0.5,0.5\n\n2,2\nnot a point\n 1 , 1 \n3,0.5\n";

#[test]
fn filter_polygon_test() {
    use crate::bounds::Polygon;
    let square = Polygon(vec![Point::new(0.0, 0.0), Point::new(0.0, 4.0), Point::new(4.0, 4.0), Point::new(4.0, 0.0)]);
    let mut f = Filter::new();
    let mut out = Vec::new();
    f.filter(INPUT.as_bytes(), &mut out, &square, Format::Plain).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0.5,0.5\n2,2\n1,1\n3,0.5\n");
    assert_eq!(f, Filter { read: 5, kept: 4, skipped: 1 });
}

#[test]
fn filter_bbox_json_test() {
    use crate::bounds::Bbox;
    let b = Bbox { xmin: 0.0, ymin: 0.0, xmax: 1.0, ymax: 1.0 };
    let mut f = Filter::new();
    let mut out = Vec::new();
    f.filter(INPUT.as_bytes(), &mut out, &b, Format::Json).unwrap();
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v, json!([{ "x": 0.5, "y": 0.5 }, { "x": 1.0, "y": 1.0 }]));
    assert_eq!(f.kept, 2);
}

#[test]
fn filter_invalid_utf8_test() {
    let input: &[u8] = b"0.5,0.5\n\xff\xfe,1\n1,1\r\n";
    let mut f = Filter::new();
    let mut out = Vec::new();
    f.filter(input, &mut out, &true, Format::Plain).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0.5,0.5\n1,1\n");
    assert_eq!(f, Filter { read: 3, kept: 2, skipped: 1 });
}

#[test]
fn filter_unbounded_test() {
    let mut f = Filter::new();
    let mut out = Vec::new();
    f.filter(INPUT.as_bytes(), &mut out, &true, Format::Plain).unwrap();
    assert_eq!(f, Filter { read: 5, kept: 4, skipped: 1 });
}
