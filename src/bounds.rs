use std::error::Error;

use crate::poly::{parse_vertices, parse_wkt, pnpoly, Point};


#[derive(Clone, Debug, PartialEq)]
pub struct Bbox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon(pub Vec<Point>);

#[derive(Clone, Debug, PartialEq)]
pub enum BoundsType {
    Bbox(Bbox),
    Polygon(Polygon),
    None
}

impl BoundsType {
    /// Polygon WKT takes precedence over a vertex list, which takes precedence over a bbox.
    pub fn from_args(polygon: Option<&str>, vertices: Option<&str>, bbox: Option<&str>) -> Result<Self, Box<dyn Error>> {
        Ok(if let Some(wkt) = polygon {
            BoundsType::Polygon(Polygon(parse_wkt(wkt)?))
        } else if let Some(v) = vertices {
            BoundsType::Polygon(Polygon(parse_vertices(v)?))
        } else if let Some(b) = bbox {
            BoundsType::Bbox(parse_bbox(b)?)
        } else {
            BoundsType::None
        })
    }
}

/// `xmin,ymin,xmax,ymax`
pub fn parse_bbox(s: &str) -> Result<Bbox, Box<dyn Error>> {
    let e = s.split(',').map(|e| e.trim().parse::<f64>()).collect::<Result<Vec<f64>, _>>()?;
    match e[..] {
        [xmin, ymin, xmax, ymax] => Ok(Bbox { xmin, ymin, xmax, ymax }),
        _ => Err(format!("expected 4 comma separated numbers in bbox, got {}", e.len()).into()),
    }
}

pub trait Bounds {
    fn contains(&self, x: f64, y: f64) -> bool;
}

impl Bounds for Bbox {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax &&
        y >= self.ymin && y <= self.ymax
    }
}

impl Bounds for Polygon {
    fn contains(&self, x: f64, y: f64) -> bool { pnpoly(&self.0, Point::new(x, y)) }
}

impl Bounds for bool {
    fn contains(&self, _x: f64, _y: f64) -> bool { true }
}

#[test]
fn bbox_test() {
    let b = parse_bbox("0, 0, 2, 1").unwrap();
    assert_eq!(b, Bbox { xmin: 0.0, ymin: 0.0, xmax: 2.0, ymax: 1.0 });
    assert!(b.contains(1.0, 0.5));
    assert!(b.contains(0.0, 0.0));
    assert!(b.contains(2.0, 1.0));
    assert!(!b.contains(2.1, 0.5));
    assert!(parse_bbox("0,0,2").is_err());
    assert!(parse_bbox("0,0,2,x").is_err());
}

#[test]
fn polygon_bounds_test() {
    let p = Polygon(parse_vertices("0,0 4,0 0,4").unwrap());
    assert!(p.contains(1.0, 1.0));
    assert!(!p.contains(3.0, 3.0));
    assert!(true.contains(1e9, -1e9));
}

#[test]
fn from_args_test() {
    let wkt = "POLYGON ((0 0, 1 0, 1 1, 0 0))";
    match BoundsType::from_args(Some(wkt), Some("5,5 6,5 6,6"), Some("0,0,1,1")).unwrap() {
        BoundsType::Polygon(p) => assert_eq!(p.0.len(), 3),
        _ => panic!("expected polygon"),
    }
    match BoundsType::from_args(None, Some("5,5 6,5 6,6"), Some("0,0,1,1")).unwrap() {
        BoundsType::Polygon(p) => assert_eq!(p.0[0], Point::new(5.0, 5.0)),
        _ => panic!("expected polygon"),
    }
    assert!(matches!(BoundsType::from_args(None, None, Some("0,0,1,1")).unwrap(), BoundsType::Bbox(_)));
    assert_eq!(BoundsType::from_args(None, None, None).unwrap(), BoundsType::None);
    assert!(BoundsType::from_args(Some("garbage"), None, None).is_err());
}
