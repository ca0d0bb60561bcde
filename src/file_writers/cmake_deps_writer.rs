use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::dependency_engine::{DependencyEngine, RegisteredRequirement};
use crate::recipe::layout::RecipeFolders;

pub const DEPENDENCIES_FILE_NAME: &'static str = "dependencies.cmake";

const GENERATED_FILE_HEADER: &'static str =
  "# This file was generated by crecipe-rust. Do not edit by hand.";

/// Production engine boundary for the CMakeDeps generator selection: records
/// each forwarded requirement, then flushes one dependency-description file
/// the external CMake build includes. Resolution and fetching of the
/// requirements themselves stay on the external engine's side.
pub struct CMakeDepsEngine {
  generators_folder: PathBuf,
  registrations: Vec<RegisteredRequirement>
}

impl CMakeDepsEngine {
  pub fn new(folders: &RecipeFolders) -> Self {
    Self {
      generators_folder: folders.generators_folder().to_path_buf(),
      registrations: Vec::new()
    }
  }

  pub fn registration_count(&self) -> usize {
    self.registrations.len()
  }

  pub fn write_dependency_files(&self) -> io::Result<PathBuf> {
    fs::create_dir_all(&self.generators_folder)?;

    let dependencies_file_path: PathBuf = self.generators_folder.join(DEPENDENCIES_FILE_NAME);
    let mut dependencies_file = File::create(&dependencies_file_path)?;

    writeln!(&mut dependencies_file, "{}\n", GENERATED_FILE_HEADER)?;

    for registration in &self.registrations {
      writeln!(&mut dependencies_file,
        "# requirement: {}",
        registration.identifier.raw_identifier()
      )?;

      for (option_key, value) in &registration.options {
        writeln!(&mut dependencies_file,
          "set({}_{} {})",
          registration.identifier.name(),
          option_key,
          value.cmake_value_string()
        )?;
      }

      match registration.identifier.exact_version() {
        Some(version) => writeln!(&mut dependencies_file,
          "find_package({} {} REQUIRED)\n",
          registration.identifier.name(),
          version
        )?,
        None => writeln!(&mut dependencies_file,
          "find_package({} REQUIRED)\n",
          registration.identifier.name()
        )?
      }
    }

    Ok(dependencies_file_path)
  }
}

impl DependencyEngine for CMakeDepsEngine {
  fn register_requirement(&mut self, registration: RegisteredRequirement) -> Result<(), String> {
    self.registrations.push(registration);
    Ok(())
  }
}

#[cfg(test)]
mod cmake_deps_writer_tests {
  use std::fs;

  use super::*;
  use crate::recipe::layout::cmake_layout;
  use crate::recipe::options::{OptionMap, OptionValue};
  use crate::recipe::requirement::RequirementIdentifier;
  use crate::recipe::settings::BuildSettings;

  fn registration_for(raw: &str, options: OptionMap) -> RegisteredRequirement {
    RegisteredRequirement {
      identifier: RequirementIdentifier::parse_lenient(raw),
      options
    }
  }

  #[test]
  fn dependency_file_lists_requirements_in_registration_order() {
    let project_dir = tempfile::tempdir().unwrap();
    let folders = cmake_layout(project_dir.path(), &BuildSettings::host_defaults());

    let mut engine = CMakeDepsEngine::new(&folders);
    engine.register_requirement(registration_for("libfoo/1.2.3", OptionMap::new())).unwrap();
    engine.register_requirement(registration_for("libbar/2.0.0", OptionMap::new())).unwrap();

    let written_path = engine.write_dependency_files().unwrap();
    let contents = fs::read_to_string(written_path).unwrap();

    let libfoo_position = contents.find("find_package(libfoo 1.2.3 REQUIRED)").unwrap();
    let libbar_position = contents.find("find_package(libbar 2.0.0 REQUIRED)").unwrap();
    assert!(libfoo_position < libbar_position);
  }

  #[test]
  fn option_overrides_are_written_as_cache_variables() {
    let project_dir = tempfile::tempdir().unwrap();
    let folders = cmake_layout(project_dir.path(), &BuildSettings::host_defaults());

    let mut options = OptionMap::new();
    options.insert(String::from("no_module"), OptionValue::Bool(true));
    options.insert(String::from("shared"), OptionValue::Bool(false));

    let mut engine = CMakeDepsEngine::new(&folders);
    engine.register_requirement(registration_for("openssl/3.2.0", options)).unwrap();

    let contents = fs::read_to_string(engine.write_dependency_files().unwrap()).unwrap();
    assert!(contents.contains("set(openssl_no_module TRUE)"));
    assert!(contents.contains("set(openssl_shared FALSE)"));
  }

  #[test]
  fn version_ranges_fall_back_to_unversioned_find_package() {
    let project_dir = tempfile::tempdir().unwrap();
    let folders = cmake_layout(project_dir.path(), &BuildSettings::host_defaults());

    let mut engine = CMakeDepsEngine::new(&folders);
    engine.register_requirement(registration_for("zlib/[>=1.2 <2]", OptionMap::new())).unwrap();

    let contents = fs::read_to_string(engine.write_dependency_files().unwrap()).unwrap();
    assert!(contents.contains("find_package(zlib REQUIRED)"));
  }
}
