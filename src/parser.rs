//! Problem-file parser — component F.
//!
//! Reads the whole file into a `String`, strips `%`-prefixed comment lines with a single
//! multi-line `Regex` (mirroring the reference crate's own `regex`-driven field extraction in
//! `config.rs`), then tokenizes the remainder on whitespace and consumes the resulting integer
//! stream in the exact order the input grammar (§6) specifies.

use std::path::Path;

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{Configuration, Package, Vehicle};
use crate::errors::ParseError;
use crate::setting::Setting;

static COMMENT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)%.*$").expect("static regex is valid"));

struct TokenCursor<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    path: &'a Path,
}

impl<'a> TokenCursor<'a> {
    fn next_usize(&mut self, field: &str) -> Result<usize, ParseError> {
        let raw = self.tokens.next().ok_or_else(|| ParseError::InputMalformed {
            path: self.path.to_path_buf(),
            reason: format!("expected {field}, found end of input"),
        })?;
        raw.parse::<usize>().map_err(|_| ParseError::InputMalformed {
            path: self.path.to_path_buf(),
            reason: format!("expected {field} to be a non-negative integer, found {raw:?}"),
        })
    }
}

/// Parses a problem file into a `Setting` and its initial `Configuration`.
pub fn parse_file(path: &Path) -> Result<(Setting, Configuration), ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::InputOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let stripped = COMMENT_LINE.replace_all(&text, "");
    parse_tokens(&stripped, path)
}

fn parse_tokens(text: &str, path: &Path) -> Result<(Setting, Configuration), ParseError> {
    let mut cursor = TokenCursor { tokens: text.split_whitespace(), path };

    let city_count = cursor.next_usize("city count")?;
    let place_count = cursor.next_usize("place count")?;

    let mut place_city = Vec::with_capacity(place_count);
    for place in 0..place_count {
        place_city.push(cursor.next_usize(&format!("city of place {place}"))?);
    }

    let mut airports = Vec::with_capacity(city_count);
    for city in 0..city_count {
        airports.push(cursor.next_usize(&format!("airport of city {city}"))?);
    }
    for (city, &airport) in airports.iter().enumerate() {
        let registered = place_city.get(airport).copied().ok_or_else(|| ParseError::InputMalformed {
            path: path.to_path_buf(),
            reason: format!("airport {airport} of city {city} is not a valid place id"),
        })?;
        if registered != city {
            return Err(ParseError::InputMalformed {
                path: path.to_path_buf(),
                reason: format!("airport {airport} is registered in city {registered}, not {city}"),
            });
        }
    }

    let truck_count = cursor.next_usize("truck count")?;
    let mut trucks = Vec::with_capacity(truck_count);
    for truck in 0..truck_count {
        let position = cursor.next_usize(&format!("place of truck {truck}"))?;
        trucks.push(Vehicle::new(position));
    }

    let airplane_count = cursor.next_usize("airplane count")?;
    let mut airplanes = Vec::with_capacity(airplane_count);
    for airplane in 0..airplane_count {
        let position = cursor.next_usize(&format!("airport of airplane {airplane}"))?;
        airplanes.push(Vehicle::new(position));
    }

    let package_count = cursor.next_usize("package count")?;
    let mut packages = Vec::with_capacity(package_count);
    for package in 0..package_count {
        let position = cursor.next_usize(&format!("source place of package {package}"))?;
        let destination = cursor.next_usize(&format!("destination place of package {package}"))?;
        packages.push(Package::new(position, destination));
    }

    let setting = Setting::new(place_city, airports);
    let initial = Configuration::new(trucks, airplanes, packages, &setting);
    Ok((setting, initial))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> tempfile_stub::NamedFile {
        tempfile_stub::NamedFile::new(contents)
    }

    // A minimal stand-in for a temp-file helper: writes to a unique path under std::env::temp_dir.
    mod tempfile_stub {
        use std::fs::File;
        use std::io::Write as _;
        use std::path::{Path, PathBuf};

        pub struct NamedFile {
            pub path: PathBuf,
        }

        impl NamedFile {
            pub fn new(contents: &str) -> Self {
                let path = std::env::temp_dir().join(format!(
                    "logistics-planner-parser-test-{}-{}.txt",
                    std::process::id(),
                    contents.len()
                ));
                let mut file = File::create(&path).expect("create temp file");
                file.write_all(contents.as_bytes()).expect("write temp file");
                NamedFile { path }
            }

            pub fn path(&self) -> &Path {
                &self.path
            }
        }

        impl Drop for NamedFile {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.path);
            }
        }
    }

    #[test]
    fn parses_minimal_single_place_instance() {
        let contents = "\
            % one city, one place, no vehicles, one package already home\n\
            1\n1\n0\n0\n0\n0\n1\n0 0\n";
        let file = write_temp(contents);
        let (setting, config) = parse_file(file.path()).expect("valid instance parses");
        assert_eq!(setting.city_count(), 1);
        assert_eq!(config.packages.len(), 1);
        assert!(config.is_goal());
    }

    #[test]
    fn truncated_input_is_a_typed_error_not_a_panic() {
        let file = write_temp("1\n1\n0\n0\n");
        let result = parse_file(file.path());
        assert!(matches!(result, Err(ParseError::InputMalformed { .. })));
    }

    #[test]
    fn missing_file_is_a_typed_open_failure() {
        let missing = std::env::temp_dir().join("logistics-planner-does-not-exist.txt");
        let result = parse_file(&missing);
        assert!(matches!(result, Err(ParseError::InputOpenFailure { .. })));
    }

    #[test]
    fn mismatched_airport_is_malformed_not_a_panic() {
        // Two cities, two places; city 0's declared airport is place 1, which belongs to city 1.
        let contents = "2\n2\n0 1\n1 0\n0\n0\n0\n";
        let file = write_temp(contents);
        let result = parse_file(file.path());
        assert!(matches!(result, Err(ParseError::InputMalformed { .. })));
    }

    #[test]
    fn comment_lines_are_ignored_anywhere() {
        let contents = "% header comment\n1 % trailing comment on a data line\n1\n0\n0\n0\n0\n0\n";
        let file = write_temp(contents);
        let (setting, config) = parse_file(file.path()).expect("comments do not break parsing");
        assert_eq!(setting.place_count(), 1);
        assert!(config.packages.is_empty());
    }
}
