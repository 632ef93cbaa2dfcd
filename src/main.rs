use std::{error::Error, fs::File, io::{self, BufRead, BufReader, Write}};
use clap::{Parser, Subcommand, Args};
use simple_logger::SimpleLogger;
use log::info;

use pnpoly::bounds::{BoundsType, Polygon};
use pnpoly::classify::{classify, write_classifications};
use pnpoly::filter::Filter;
use pnpoly::format::Format;
use pnpoly::poly::{parse_point, Point};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test points against a polygon
    Contains(Contains),
    /// Keep the points of a file that fall within bounds
    Filter(FilterArgs),
}

#[derive(Args)]
pub struct Contains {
    /// Polygon (WKT)
    #[clap(short, long, conflicts_with = "vertices", required_unless_present = "vertices", allow_hyphen_values = true)]
    polygon: Option<String>,

    /// Polygon vertices (whitespace separated x,y pairs)
    #[clap(short, long, allow_hyphen_values = true)]
    vertices: Option<String>,

    /// Query point (x,y), may be repeated
    #[clap(long = "point", required = true, allow_hyphen_values = true)]
    points: Vec<String>,

    /// Also report the winding number
    #[clap(short, long)]
    winding: bool,

    /// Output format (plain or json)
    #[clap(short, long, default_value = "plain")]
    format: Format,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Input path with one x,y per line, - for stdin
    #[clap(short, long)]
    input: String,

    /// Filter by polygon (WKT)
    #[clap(short, long, allow_hyphen_values = true)]
    polygon: Option<String>,

    /// Filter by polygon vertices (whitespace separated x,y pairs)
    #[clap(short, long, allow_hyphen_values = true)]
    vertices: Option<String>,

    /// Filter by bbox (xmin,ymin,xmax,ymax)
    #[clap(short, long, allow_hyphen_values = true)]
    bbox: Option<String>,

    /// Output format (plain or json)
    #[clap(short, long, default_value = "plain")]
    format: Format,
}

fn contains<W: Write>(args: &Contains, w: &mut W) -> Result<(), Box<dyn Error>> {
    let bounds = BoundsType::from_args(args.polygon.as_deref(), args.vertices.as_deref(), None)?;
    let vertices = match bounds {
        BoundsType::Polygon(Polygon(v)) => v,
        _ => return Err("a polygon is required".into()),
    };
    info!("Polygon with {} vertices", vertices.len());
    let points = args.points.iter().map(|p| parse_point(p)).collect::<Result<Vec<Point>, _>>()?;
    let cs = classify(&vertices, &points, args.winding);
    write_classifications(w, &cs, args.format)
}

fn filter(args: &FilterArgs) -> Result<(), Box<dyn Error>> {
    let bounds_type = BoundsType::from_args(args.polygon.as_deref(), args.vertices.as_deref(), args.bbox.as_deref())?;
    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(&args.input)?))
    };
    let mut out = io::stdout().lock();
    let mut f = Filter::new();

    info!("Reading {}", args.input);
    match bounds_type {
        BoundsType::Bbox(b) => f.filter(reader, &mut out, &b, args.format)?,
        BoundsType::Polygon(p) => f.filter(reader, &mut out, &p, args.format)?,
        BoundsType::None => f.filter(reader, &mut out, &true, args.format)?,
    }
    info!("Read {} points", f.read);
    info!("Kept {} points", f.kept);
    if f.skipped > 0 {
        info!("Skipped {} malformed lines", f.skipped);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().env().init()?;
    let cli = Cli::parse();
    match &cli.command {
        Commands::Contains(args) => contains(args, &mut io::stdout().lock())?,
        Commands::Filter(args) => filter(args)?,
    }
    Ok(())
}

#[cfg(test)]
fn run_contains(argv: &[&str]) -> Result<String, Box<dyn Error>> {
    let cli = Cli::try_parse_from(argv.iter().copied())?;
    let mut out = Vec::new();
    match &cli.command {
        Commands::Contains(args) => contains(args, &mut out)?,
        Commands::Filter(_) => return Err("expected contains".into()),
    }
    Ok(String::from_utf8(out)?)
}

#[test]
fn contains_negative_coordinates_test() {
    let out = run_contains(&["pnpoly", "contains", "--vertices", "-1,-1 1,-1 1,1 -1,1", "--point", "-0.5,0.5", "--point", "-2,0"]).unwrap();
    assert_eq!(out, "1\n0\n");
    let out = run_contains(&["pnpoly", "contains", "-v", "0,0 4,0 0,4", "--point", "-1,2", "-f", "json"]).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, serde_json::json!([{ "x": -1.0, "y": 2.0, "inside": false }]));
}

#[test]
fn contains_wkt_winding_test() {
    let out = run_contains(&["pnpoly", "contains", "--polygon", "POLYGON ((0 0, 4 0, 0 4, 0 0))", "--point", "1,1", "--winding"]).unwrap();
    assert_eq!(out, "1\t1\n");
}

#[test]
fn contains_args_test() {
    use clap::error::ErrorKind;
    let conflict = Cli::try_parse_from(["pnpoly", "contains", "-p", "POLYGON ((0 0, 1 0, 1 1, 0 0))", "-v", "0,0 1,0 1,1", "--point", "0,0"]);
    assert_eq!(conflict.err().map(|e| e.kind()), Some(ErrorKind::ArgumentConflict));
    let missing = Cli::try_parse_from(["pnpoly", "contains", "--point", "0,0"]);
    assert_eq!(missing.err().map(|e| e.kind()), Some(ErrorKind::MissingRequiredArgument));
    let no_point = Cli::try_parse_from(["pnpoly", "contains", "-v", "0,0 1,0 1,1"]);
    assert_eq!(no_point.err().map(|e| e.kind()), Some(ErrorKind::MissingRequiredArgument));
    assert!(run_contains(&["pnpoly", "contains", "-v", "0,0 1,0 1,1", "--point", "0;0"]).is_err());
}

#[test]
fn contains_requires_polygon_test() {
    let args = Contains { polygon: None, vertices: None, points: vec!["0,0".to_string()], winding: false, format: Format::Plain };
    let err = contains(&args, &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "a polygon is required");
}

#[test]
fn filter_args_test() {
    let cli = Cli::try_parse_from(["pnpoly", "filter", "--input", "-", "--bbox", "-1,-1,1,1", "--format", "json"]).unwrap();
    match cli.command {
        Commands::Filter(args) => {
            assert_eq!(args.bbox.as_deref(), Some("-1,-1,1,1"));
            assert_eq!(args.format, Format::Json);
            let b = BoundsType::from_args(args.polygon.as_deref(), args.vertices.as_deref(), args.bbox.as_deref()).unwrap();
            assert!(matches!(b, BoundsType::Bbox(_)));
        },
        Commands::Contains(_) => panic!("expected filter"),
    }
    let cli = Cli::try_parse_from(["pnpoly", "filter", "-i", "points.txt", "-v", "-2,-2 2,-2 0,2", "-b", "0,0,1,1"]).unwrap();
    match cli.command {
        Commands::Filter(args) => {
            let b = BoundsType::from_args(args.polygon.as_deref(), args.vertices.as_deref(), args.bbox.as_deref()).unwrap();
            assert_eq!(b, BoundsType::Polygon(Polygon(vec![Point::new(-2.0, -2.0), Point::new(2.0, -2.0), Point::new(0.0, 2.0)])));
        },
        Commands::Contains(_) => panic!("expected filter"),
    }
}
