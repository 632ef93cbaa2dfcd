use std::error::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[inline]
// Even-odd crossing number test (PNPOLY, W. Randolph Franklin)
// https://wrfranklin.org/Research/Short_Notes/pnpoly.html
//
// The ring is implicitly closed. Points exactly on an edge or vertex get an
// implementation-defined answer. Non-finite input gives an unspecified answer
// but never panics.
pub fn pnpoly(vertices: &[Point], query: Point) -> bool {
    let mut inside = false;
    let mut j = match vertices.len() {
        0 => return false,
        n => n - 1,
    };
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        // Strict on one side only, so horizontal edges never reach the division.
        if (vi.y > query.y) != (vj.y > query.y) {
            let x_cross = (vj.x - vi.x) * (query.y - vi.y) / (vj.y - vi.y) + vi.x;
            if query.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[inline]
// Winding number algorithm
// https://en.wikipedia.org/wiki/Point_in_polygon#Winding_number_algorithm
// https://web.archive.org/web/20130126163405/http://geomalgorithms.com/a03-_inclusion.html
pub fn winding_number(vertices: &[Point], query: Point) -> i32 {
    #[inline]
    fn is_left(a: Point, b: Point, p: Point) -> f64 {
        ((b.x - a.x) * (p.y - a.y)) - ((p.x - a.x) * (b.y - a.y))
    }
    let mut wn = 0;
    let n = vertices.len();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        if a.y <= query.y {
            if b.y > query.y && is_left(a, b, query) > 0.0 {
                wn += 1;
            }
        } else if b.y <= query.y && is_left(a, b, query) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Exterior ring of a WKT `POLYGON`, without the repeated closing vertex.
pub fn parse_wkt(wkt: &str) -> Result<Vec<Point>, Box<dyn Error>> {
    use geo_types::Polygon;
    use wkt::TryFromWkt;
    let p: Polygon<f64> = Polygon::try_from_wkt_str(wkt)?;
    let mut ring: Vec<Point> = p.exterior().coords().map(|c| Point::new(c.x, c.y)).collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    Ok(ring)
}

pub fn parse_point(s: &str) -> Result<Point, Box<dyn Error>> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    Ok(Point::new(x.trim().parse::<f64>()?, y.trim().parse::<f64>()?))
}

/// Whitespace separated `x,y` pairs.
pub fn parse_vertices(s: &str) -> Result<Vec<Point>, Box<dyn Error>> {
    s.split_whitespace().map(parse_point).collect()
}

#[cfg(test)]
fn ring(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

#[test]
fn pnpoly_square_test() {
    let p = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    assert!(pnpoly(&p, Point::new(0.5, 0.5)));
    assert!(pnpoly(&p, Point::new(0.9, 0.1)));
    assert!(!pnpoly(&p, Point::new(2.0, 2.0)));
    assert!(!pnpoly(&p, Point::new(-1.5, -1.5)));
}

#[test]
fn pnpoly_triangle_test() {
    let p = ring(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
    assert!(pnpoly(&p, Point::new(1.0, 1.0)));
    assert!(!pnpoly(&p, Point::new(3.0, 3.0)));
}

#[test]
fn pnpoly_concave_test() {
    // U shape opening upwards
    let p = ring(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (2.0, 3.0), (2.0, 1.0), (1.0, 1.0), (1.0, 3.0), (0.0, 3.0)]);
    assert!(pnpoly(&p, Point::new(0.5, 2.5)));
    assert!(pnpoly(&p, Point::new(2.5, 2.5)));
    assert!(pnpoly(&p, Point::new(1.5, 0.5)));
    assert!(!pnpoly(&p, Point::new(1.5, 2.0)));
}

#[test]
fn pnpoly_orientation_test() {
    let cw = ring(&[(0.0, 0.0), (0.0, 4.0), (2.0, 6.0), (4.0, 4.0), (4.0, 0.0)]);
    let ccw: Vec<Point> = cw.iter().rev().copied().collect();
    for x in -2..=6 {
        for y in -2..=8 {
            let q = Point::new(x as f64 + 0.25, y as f64 + 0.5);
            assert_eq!(pnpoly(&cw, q), pnpoly(&ccw, q), "{:?}", q);
        }
    }
}

#[test]
fn pnpoly_translation_test() {
    let p = ring(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
    let (dx, dy) = (-7.0, 13.0);
    let moved: Vec<Point> = p.iter().map(|v| Point::new(v.x + dx, v.y + dy)).collect();
    for x in -2..=6 {
        for y in -2..=6 {
            let q = Point::new(x as f64 + 0.5, y as f64 + 0.25);
            let qm = Point::new(q.x + dx, q.y + dy);
            assert_eq!(pnpoly(&p, q), pnpoly(&moved, qm), "{:?}", q);
        }
    }
}

#[test]
fn pnpoly_degenerate_test() {
    let empty: Vec<Point> = vec![];
    let single = ring(&[(1.0, 1.0)]);
    for q in [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(-3.0, 7.5)] {
        assert!(!pnpoly(&empty, q));
        assert!(!pnpoly(&single, q));
    }
    // Two vertices enclose nothing
    let segment = ring(&[(0.0, 0.0), (2.0, 2.0)]);
    assert!(!pnpoly(&segment, Point::new(0.5, 1.0)));
}

#[test]
fn pnpoly_horizontal_edge_test() {
    let p = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);
    assert!(!pnpoly(&p, Point::new(-1.0, 2.0)));
    assert!(!pnpoly(&p, Point::new(5.0, 2.0)));
    // On the edge itself; classification is implementation defined, it just must not fault
    let _ = pnpoly(&p, Point::new(2.0, 2.0));
    let _ = pnpoly(&p, Point::new(2.0, 0.0));
    assert!(pnpoly(&p, Point::new(2.0, 1.0)));
}

#[test]
fn pnpoly_non_finite_test() {
    let p = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let _ = pnpoly(&p, Point::new(f64::NAN, 0.5));
    let _ = pnpoly(&p, Point::new(0.5, f64::INFINITY));
    assert!(!pnpoly(&p, Point::new(f64::INFINITY, 0.5)));
}

#[test]
fn wn_test() {
    let p = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    assert_eq!(winding_number(&p, Point::new(0.5, 0.5)), -1);
    assert_eq!(winding_number(&p, Point::new(1.5, 1.5)), 0);
    assert_eq!(winding_number(&p, Point::new(-1.5, -1.5)), 0);
    assert_eq!(winding_number(&p, Point::new(0.9, 0.1)), -1);
    let rev: Vec<Point> = p.iter().rev().copied().collect();
    assert_eq!(winding_number(&rev, Point::new(0.5, 0.5)), 1);
}

#[test]
fn wn_agrees_with_pnpoly_test() {
    let p = ring(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (2.0, 3.0), (2.0, 1.0), (1.0, 1.0), (1.0, 3.0), (0.0, 3.0)]);
    for x in -1..=4 {
        for y in -1..=4 {
            let q = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            assert_eq!(winding_number(&p, q) != 0, pnpoly(&p, q), "{:?}", q);
        }
    }
}

#[test]
fn parse_wkt_test() {
    let denmark = "POLYGON ((7.87 54.69, 7.78 57.25, 9.63 58.08, 10.71 58.11, 12.05 56.69, 13.15 56.42, 14.2 55.47, 15.5 55.33, 15.28 54.64, 12.98 54.94, 12.29 54.35, 12.46 53.64, 11.41 53.42, 10.07 53.18, 8.78 53.52, 7.87 54.69))";
    let p = parse_wkt(denmark).unwrap();
    assert_eq!(p.len(), 15);
    assert_eq!(p[0], Point::new(7.87, 54.69));
    assert_eq!(p[14], Point::new(8.78, 53.52));
    assert!(pnpoly(&p, Point::new(10.0, 56.0)));
    assert!(!pnpoly(&p, Point::new(56.0, 10.0)));
    assert!(parse_wkt("POINT (1 2)").is_err());
}

#[test]
fn parse_vertices_test() {
    let p = parse_vertices("0,0 4,0  0,4").unwrap();
    assert_eq!(p, ring(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]));
    assert!(parse_vertices("").unwrap().is_empty());
    assert!(parse_vertices("0,0 4").is_err());
    assert_eq!(parse_point(" 1.5 , -2").unwrap(), Point::new(1.5, -2.0));
    assert!(parse_point("1.5;2").is_err());
}
