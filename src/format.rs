use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// One value per line
    Plain,
    /// A single JSON array
    Json,
}

#[test]
fn format_test() {
    use std::str::FromStr;
    assert_eq!(Format::from_str("json").unwrap(), Format::Json);
    assert_eq!(Format::from_str("plain").unwrap(), Format::Plain);
    assert!(Format::from_str("xml").is_err());
    assert_eq!(Format::Plain.to_string(), "plain");
}
