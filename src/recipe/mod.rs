pub mod layout;
pub mod options;
pub mod requirement;
pub mod settings;

use std::io;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::dependency_engine::{DependencyEngine, RegisteredRequirement};
use crate::file_writers::CMakeToolchain;
use crate::recipe_data::RequirementProvider;

use self::layout::{cmake_layout, RecipeFolders};
use self::options::{default_option_overrides, options_matching_requirement, DependencyOptionOverrides};
use self::requirement::RequirementIdentifier;
use self::settings::BuildSettings;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PackageType {
  Application,
  Library
}

impl PackageType {
  pub fn name_string(&self) -> &'static str {
    match self {
      Self::Application => "application",
      Self::Library => "library"
    }
  }
}

/// Which dependency-description format the external engine emits for the
/// build system to consume.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum DependencyGenerator {
  CMakeDeps
}

impl DependencyGenerator {
  pub fn name_string(&self) -> &'static str {
    match self {
      Self::CMakeDeps => "CMakeDeps"
    }
  }
}

/// The package recipe descriptor: static packaging metadata plus the three
/// lifecycle hooks the external driver invokes once each per
/// build-configuration pass. All real work (resolution, toolchain file
/// persistence) happens behind the injected collaborator boundaries.
pub struct Recipe {
  package_type: PackageType,
  settings: BuildSettings,
  generator: DependencyGenerator,
  default_options: DependencyOptionOverrides,
  folders: Option<RecipeFolders>
}

impl Recipe {
  /// An application recipe using the CMakeDeps generator and the built-in
  /// openssl option overrides. This is the only recipe shape this tool
  /// evaluates today.
  pub fn new_application(settings: BuildSettings) -> Self {
    Self {
      package_type: PackageType::Application,
      settings,
      generator: DependencyGenerator::CMakeDeps,
      default_options: default_option_overrides(),
      folders: None
    }
  }

  pub fn get_package_type(&self) -> &PackageType {
    &self.package_type
  }

  pub fn get_settings(&self) -> &BuildSettings {
    &self.settings
  }

  pub fn get_generator(&self) -> &DependencyGenerator {
    &self.generator
  }

  pub fn get_default_options(&self) -> &DependencyOptionOverrides {
    &self.default_options
  }

  pub fn get_folders(&self) -> Option<&RecipeFolders> {
    self.folders.as_ref()
  }

  /// Layout hook: registers the conventional source/build directory mapping
  /// for the later generation steps. Only registers state; touches nothing
  /// on disk.
  pub fn layout(&mut self, project_root: impl AsRef<Path>) {
    self.folders = Some(cmake_layout(project_root, &self.settings));
  }

  /// Generation hook: builds the transient toolchain configuration and
  /// triggers file emission. The user-presets path is suppressed on every
  /// pass so no machine-local file lands in shared output; there is no
  /// configuration path that re-enables it.
  pub fn generate(&self) -> io::Result<()> {
    // The driver gives no ordering guarantee between hooks, so a generation
    // call before the layout hook falls back to the current-directory layout.
    let fallback_folders: RecipeFolders;
    let folders: &RecipeFolders = match &self.folders {
      Some(folders) => folders,
      None => {
        fallback_folders = cmake_layout(".", &self.settings);
        &fallback_folders
      }
    };

    let mut toolchain = CMakeToolchain::new(&self.settings, folders);
    toolchain.suppress_user_presets();
    toolchain.generate()
  }

  /// Requirements hook: forwards each identifier from the provider to the
  /// engine, in source order, pairing it with whichever default option
  /// overrides are scoped to it. An empty or absent source registers
  /// nothing and succeeds. Returns how many requirements were registered.
  pub fn requirements(
    &self,
    provider: &dyn RequirementProvider,
    engine: &mut dyn DependencyEngine
  ) -> Result<usize, String> {
    let raw_identifiers: Vec<String> = provider.ordered_requirements()?;
    let registered_count: usize = raw_identifiers.len();

    for raw_identifier in raw_identifiers {
      let identifier = RequirementIdentifier::parse_lenient(&raw_identifier);
      let matched_options = options_matching_requirement(&self.default_options, &identifier);

      engine.register_requirement(RegisteredRequirement {
        identifier,
        options: matched_options
      })
        .map_err(|err_message| format!(
          "Failed to register requirement '{}': {}",
          raw_identifier,
          err_message
        ))?;
    }

    Ok(registered_count)
  }
}

#[cfg(test)]
mod recipe_tests {
  use enum_iterator::all;

  use super::*;
  use crate::dependency_engine::RecordingEngine;
  use crate::file_writers::{TOOLCHAIN_FILE_NAME, USER_PRESETS_FILE_NAME};
  use crate::recipe::options::OptionValue;
  use crate::recipe::settings::{BuildType, CompilerFamily, CompilerSpecifier, TargetArch, TargetOs};
  use crate::recipe_data::StaticRequirementList;

  fn requirement_list(raw_identifiers: &[&str]) -> StaticRequirementList {
    StaticRequirementList::new(
      raw_identifiers.iter().map(|raw| raw.to_string()).collect()
    )
  }

  #[test]
  fn empty_requirement_source_registers_nothing() {
    let recipe = Recipe::new_application(BuildSettings::host_defaults());
    let mut engine = RecordingEngine::new();

    let registered = recipe.requirements(&requirement_list(&[]), &mut engine).unwrap();

    assert_eq!(registered, 0);
    assert!(engine.registrations.is_empty());
  }

  #[test]
  fn listed_requirements_register_once_each_in_source_order() {
    let recipe = Recipe::new_application(BuildSettings::host_defaults());
    let mut engine = RecordingEngine::new();

    let registered = recipe.requirements(
      &requirement_list(&["libfoo/1.2.3", "libbar/2.0.0"]),
      &mut engine
    ).unwrap();

    assert_eq!(registered, 2);
    assert_eq!(
      engine.registered_raw_identifiers(),
      vec!["libfoo/1.2.3", "libbar/2.0.0"]
    );
  }

  #[test]
  fn openssl_overrides_apply_regardless_of_settings_axes() {
    for os in all::<TargetOs>() {
      for build_type in all::<BuildType>() {
        let recipe = Recipe::new_application(BuildSettings {
          os,
          compiler: CompilerSpecifier::unversioned(CompilerFamily::default_for_os(&os)),
          build_type,
          arch: TargetArch::X86_64
        });
        let mut engine = RecordingEngine::new();

        recipe.requirements(
          &requirement_list(&["openssl/3.2.0", "libfoo/1.2.3"]),
          &mut engine
        ).unwrap();

        let openssl_registration = &engine.registrations[0];
        assert_eq!(
          openssl_registration.options.get("no_module"),
          Some(&OptionValue::Bool(true))
        );
        assert_eq!(
          openssl_registration.options.get("shared"),
          Some(&OptionValue::Bool(false))
        );

        assert!(engine.registrations[1].options.is_empty());
      }
    }
  }

  #[test]
  fn generation_succeeds_for_every_axis_combination() {
    let project_dir = tempfile::tempdir().unwrap();

    for os in all::<TargetOs>() {
      for family in all::<CompilerFamily>() {
        for build_type in all::<BuildType>() {
          for arch in all::<TargetArch>() {
            let mut recipe = Recipe::new_application(BuildSettings {
              os,
              compiler: CompilerSpecifier::unversioned(family),
              build_type,
              arch
            });

            recipe.layout(project_dir.path());
            recipe.generate().unwrap();

            let folders = recipe.get_folders().unwrap();
            assert!(folders.generators_folder().join(TOOLCHAIN_FILE_NAME).is_file());
          }
        }
      }
    }

    assert!(!project_dir.path().join(USER_PRESETS_FILE_NAME).exists());
  }

  #[test]
  fn recipe_declares_application_packaging_with_cmake_deps() {
    let recipe = Recipe::new_application(BuildSettings::host_defaults());

    assert_eq!(*recipe.get_package_type(), PackageType::Application);
    assert_eq!(recipe.get_generator().name_string(), "CMakeDeps");
    assert_eq!(recipe.get_default_options().len(), 1);
  }
}
