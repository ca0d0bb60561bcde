use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use super::requirement::RequirementIdentifier;

pub type OptionMap = BTreeMap<String, OptionValue>;
pub type DependencyOptionOverrides = BTreeMap<OptionScope, OptionMap>;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum OptionValue {
  Bool(bool),
  Text(String)
}

impl OptionValue {
  pub fn cmake_value_string(&self) -> String {
    return match self {
      Self::Bool(true) => String::from("TRUE"),
      Self::Bool(false) => String::from("FALSE"),
      Self::Text(text) => text.clone()
    }
  }
}

/// Which dependency an option override applies to. Written "name/*" in the
/// recipe, meaning every version of that dependency.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct OptionScope {
  dependency_name: String
}

impl OptionScope {
  pub fn any_version_of(dependency_name: impl AsRef<str>) -> Self {
    Self {
      dependency_name: dependency_name.as_ref().to_string()
    }
  }

  pub fn dependency_name(&self) -> &str {
    &self.dependency_name
  }

  pub fn applies_to(&self, requirement: &RequirementIdentifier) -> bool {
    return self.dependency_name == requirement.name();
  }

  pub fn pattern_string(&self) -> String {
    format!("{}/*", self.dependency_name)
  }
}

/// The recipe's built-in override table: force openssl's non-module,
/// statically linked build before the external engine resolves it. These are
/// the only two overrides the recipe declares, and they are scoped to openssl
/// alone.
pub fn default_option_overrides() -> DependencyOptionOverrides {
  let mut openssl_options = OptionMap::new();
  openssl_options.insert(String::from("no_module"), OptionValue::Bool(true));
  openssl_options.insert(String::from("shared"), OptionValue::Bool(false));

  let mut overrides = DependencyOptionOverrides::new();
  overrides.insert(OptionScope::any_version_of("openssl"), openssl_options);
  return overrides;
}

pub fn options_matching_requirement(
  overrides: &DependencyOptionOverrides,
  requirement: &RequirementIdentifier
) -> OptionMap {
  let mut matched = OptionMap::new();

  for (scope, option_map) in overrides {
    if scope.applies_to(requirement) {
      for (option_key, value) in option_map {
        matched.insert(option_key.clone(), value.clone());
      }
    }
  }

  return matched;
}

#[test]
fn test_default_overrides_target_openssl_only() {
  let overrides = default_option_overrides();

  let openssl = RequirementIdentifier::parse_lenient("openssl/3.2.0");
  let matched = options_matching_requirement(&overrides, &openssl);

  assert_eq!(matched.len(), 2);
  assert_eq!(matched.get("no_module"), Some(&OptionValue::Bool(true)));
  assert_eq!(matched.get("shared"), Some(&OptionValue::Bool(false)));

  for other_raw in ["libfoo/1.2.3", "openssl-extras/1.0", "zlib/[>=1.2 <2]"] {
    let other = RequirementIdentifier::parse_lenient(other_raw);
    assert!(options_matching_requirement(&overrides, &other).is_empty());
  }
}

#[test]
fn test_scope_matches_every_version_of_named_dependency() {
  let scope = OptionScope::any_version_of("openssl");

  assert!(scope.applies_to(&RequirementIdentifier::parse_lenient("openssl/1.1.1")));
  assert!(scope.applies_to(&RequirementIdentifier::parse_lenient("openssl/[>=3]")));
  assert!(scope.applies_to(&RequirementIdentifier::parse_lenient("openssl")));
  assert!(!scope.applies_to(&RequirementIdentifier::parse_lenient("libopenssl/1.0")));
  assert_eq!(scope.pattern_string(), "openssl/*");
}

#[test]
fn test_cmake_value_strings() {
  assert_eq!(OptionValue::Bool(true).cmake_value_string(), "TRUE");
  assert_eq!(OptionValue::Bool(false).cmake_value_string(), "FALSE");
  assert_eq!(
    OptionValue::Text(String::from("custom")).cmake_value_string(),
    "custom"
  );
}
