use crate::recipe::options::OptionMap;
use crate::recipe::requirement::RequirementIdentifier;

/// One requirement as handed to the external engine: the identifier verbatim
/// from the data source, plus whichever default option overrides the recipe
/// scoped to it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RegisteredRequirement {
  pub identifier: RequirementIdentifier,
  pub options: OptionMap
}

/// The dependency-resolution engine boundary. Everything past registration
/// (resolution, fetching, building, caching) happens on the other side of
/// this trait.
pub trait DependencyEngine {
  fn register_requirement(&mut self, registration: RegisteredRequirement) -> Result<(), String>;
}

/// Captures registrations in call order, so tests can assert on exactly what
/// the recipe forwarded without touching the filesystem.
#[cfg(test)]
pub struct RecordingEngine {
  pub registrations: Vec<RegisteredRequirement>
}

#[cfg(test)]
impl RecordingEngine {
  pub fn new() -> Self {
    Self {
      registrations: Vec::new()
    }
  }

  pub fn registered_raw_identifiers(&self) -> Vec<&str> {
    self.registrations.iter()
      .map(|registration| registration.identifier.raw_identifier())
      .collect()
  }
}

#[cfg(test)]
impl DependencyEngine for RecordingEngine {
  fn register_requirement(&mut self, registration: RegisteredRequirement) -> Result<(), String> {
    self.registrations.push(registration);
    Ok(())
  }
}
