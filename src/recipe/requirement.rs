use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
  static ref EXACT_VERSION_REGEX: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)*$").unwrap();
}

/// A reference to an external dependency package, kept verbatim as written in
/// the requirement data source. The identifier is split at the first '/' only
/// so that option-override scopes ("name/*") can be matched against it;
/// nothing here validates the syntax. Identifiers the external engine would
/// reject are forwarded to it untouched.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RequirementIdentifier {
  raw: String,
  name: String,
  version_spec: Option<String>
}

impl RequirementIdentifier {
  pub fn parse_lenient(raw_identifier: impl AsRef<str>) -> Self {
    let raw: String = raw_identifier.as_ref().to_string();

    return match raw.split_once('/') {
      Some((name, version_spec)) => Self {
        name: name.to_string(),
        version_spec: Some(version_spec.to_string()),
        raw
      },
      None => Self {
        name: raw.clone(),
        version_spec: None,
        raw
      }
    }
  }

  pub fn raw_identifier(&self) -> &str {
    &self.raw
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn version_spec(&self) -> Option<&str> {
    self.version_spec.as_deref()
  }

  // A plain dotted version can be forwarded into a find_package(...) version
  // argument. Ranges and other constraint syntax cannot, so they are left for
  // the external engine to interpret.
  pub fn exact_version(&self) -> Option<&str> {
    self.version_spec()
      .filter(|spec| EXACT_VERSION_REGEX.is_match(spec))
  }
}

impl fmt::Display for RequirementIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.raw)
  }
}

#[cfg(test)]
struct IdentifierTestGroup<'a> {
  raw: &'a str,
  expected_name: &'a str,
  expected_version_spec: Option<&'a str>,
  expected_exact_version: Option<&'a str>
}

#[test]
fn test_lenient_identifier_split() {
  let groups: Vec<IdentifierTestGroup<'_>> = vec![
    IdentifierTestGroup {
      raw: "libfoo/1.2.3",
      expected_name: "libfoo",
      expected_version_spec: Some("1.2.3"),
      expected_exact_version: Some("1.2.3")
    },
    IdentifierTestGroup {
      raw: "zlib/[>=1.2 <2]",
      expected_name: "zlib",
      expected_version_spec: Some("[>=1.2 <2]"),
      expected_exact_version: None
    },
    IdentifierTestGroup {
      raw: "openssl/3.2.0",
      expected_name: "openssl",
      expected_version_spec: Some("3.2.0"),
      expected_exact_version: Some("3.2.0")
    },
    // No version separator at all. Still forwarded, never rejected locally.
    IdentifierTestGroup {
      raw: "just-a-name",
      expected_name: "just-a-name",
      expected_version_spec: None,
      expected_exact_version: None
    },
    IdentifierTestGroup {
      raw: "weird//double",
      expected_name: "weird",
      expected_version_spec: Some("/double"),
      expected_exact_version: None
    }
  ];

  for group in groups {
    let identifier = RequirementIdentifier::parse_lenient(group.raw);

    assert_eq!(identifier.raw_identifier(), group.raw);
    assert_eq!(identifier.name(), group.expected_name);
    assert_eq!(identifier.version_spec(), group.expected_version_spec);
    assert_eq!(identifier.exact_version(), group.expected_exact_version);
  }
}
