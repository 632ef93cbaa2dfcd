use std::{error::Error, io::Write};

use serde_json::{json, Value};

use crate::format::Format;
use crate::poly::{pnpoly, winding_number, Point};


pub struct Classification {
    pub point: Point,
    pub inside: bool,
    pub winding: Option<i32>,
}

pub fn classify(vertices: &[Point], points: &[Point], winding: bool) -> Vec<Classification> {
    points.iter().map(|&point| Classification {
        point,
        inside: pnpoly(vertices, point),
        winding: if winding { Some(winding_number(vertices, point)) } else { None },
    }).collect()
}

fn to_json_val(c: &Classification) -> Value {
    let mut v = json!({ "x": c.point.x, "y": c.point.y, "inside": c.inside });
    if let Some(wn) = c.winding {
        v["winding"] = json!(wn);
    }
    v
}

pub fn write_classifications<W: Write>(w: &mut W, cs: &[Classification], format: Format) -> Result<(), Box<dyn Error>> {
    match format {
        Format::Plain => {
            for c in cs {
                let flag = if c.inside { 1 } else { 0 };
                match c.winding {
                    Some(wn) => writeln!(w, "{}\t{}", flag, wn)?,
                    None => writeln!(w, "{}", flag)?,
                }
            }
        },
        Format::Json => {
            let vals: Vec<Value> = cs.iter().map(to_json_val).collect();
            serde_json::to_writer(&mut *w, &vals)?;
            writeln!(w)?;
        },
    }
    Ok(())
}

#[test]
fn classify_plain_test() {
    let tri = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
    let cs = classify(&tri, &[Point::new(1.0, 1.0), Point::new(3.0, 3.0)], false);
    let mut out = Vec::new();
    write_classifications(&mut out, &cs, Format::Plain).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n0\n");

    let cs = classify(&tri, &[Point::new(1.0, 1.0), Point::new(3.0, 3.0)], true);
    let mut out = Vec::new();
    write_classifications(&mut out, &cs, Format::Plain).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\t1\n0\t0\n");
}

#[test]
fn classify_json_test() {
    let square = [Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0), Point::new(1.0, 0.0)];
    let cs = classify(&square, &[Point::new(0.5, 0.5)], true);
    let mut out = Vec::new();
    write_classifications(&mut out, &cs, Format::Json).unwrap();
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v, json!([{ "x": 0.5, "y": 0.5, "inside": true, "winding": -1 }]));
}
