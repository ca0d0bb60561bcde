use std::path::PathBuf;

use crate::file_writers::CMakeDepsEngine;
use crate::logger;
use crate::recipe::settings::BuildSettings;
use crate::recipe::Recipe;
use crate::recipe_data::YamlRecipeData;

pub struct InstallConfig {
  pub project_root: String,
  pub settings: BuildSettings
}

pub struct InstallSummary {
  pub build_identity: String,
  pub generators_folder: PathBuf,
  pub registered_requirement_count: usize
}

/// One full build-configuration pass over the recipe: layout, toolchain
/// generation, then requirement registration through the CMakeDeps engine.
pub fn run_install(config: &InstallConfig) -> Result<InstallSummary, String> {
  let mut recipe = Recipe::new_application(config.settings.clone());
  recipe.layout(&config.project_root);

  recipe.generate()
    .map_err(|io_error| format!(
      "Failed to generate toolchain files under '{}': {}",
      config.project_root,
      io_error
    ))?;

  let folders = recipe.get_folders().unwrap().clone();

  let provider = YamlRecipeData::for_project_root(&config.project_root);

  if !provider.data_file_path().is_file() {
    logger::warn(format!(
      "No requirement data file at '{}'. Zero requirements will be registered.",
      provider.data_file_path().to_str().unwrap_or("<non-utf8 path>")
    ));
  }

  let mut engine = CMakeDepsEngine::new(&folders);

  let registered_requirement_count: usize = recipe.requirements(&provider, &mut engine)?;

  engine.write_dependency_files()
    .map_err(|io_error| format!(
      "Failed to write dependency files to '{}': {}",
      folders.generators_folder().to_str().unwrap_or("<non-utf8 path>"),
      io_error
    ))?;

  Ok(InstallSummary {
    build_identity: recipe.get_settings().identity_string(),
    generators_folder: folders.generators_folder().to_path_buf(),
    registered_requirement_count
  })
}

#[cfg(test)]
mod install_tests {
  use std::fs;

  use super::*;
  use crate::file_writers::{DEPENDENCIES_FILE_NAME, TOOLCHAIN_FILE_NAME, USER_PRESETS_FILE_NAME};
  use crate::recipe_data::RECIPE_DATA_FILE_NAME;

  fn install_config_for(project_root: &std::path::Path) -> InstallConfig {
    InstallConfig {
      project_root: project_root.to_str().unwrap().to_string(),
      settings: BuildSettings::host_defaults()
    }
  }

  #[test]
  fn full_pass_without_data_file_registers_nothing_and_still_generates() {
    let project_dir = tempfile::tempdir().unwrap();

    let summary = run_install(&install_config_for(project_dir.path())).unwrap();

    assert_eq!(summary.registered_requirement_count, 0);
    assert!(summary.generators_folder.join(TOOLCHAIN_FILE_NAME).is_file());
    assert!(summary.generators_folder.join(DEPENDENCIES_FILE_NAME).is_file());
    assert!(!project_dir.path().join(USER_PRESETS_FILE_NAME).exists());
  }

  #[test]
  fn full_pass_forwards_every_listed_requirement() {
    let project_dir = tempfile::tempdir().unwrap();
    fs::write(
      project_dir.path().join(RECIPE_DATA_FILE_NAME),
      "requirements:\n  - \"openssl/3.2.0\"\n  - \"libfoo/1.2.3\"\n"
    ).unwrap();

    let summary = run_install(&install_config_for(project_dir.path())).unwrap();
    assert_eq!(summary.registered_requirement_count, 2);

    let dependency_contents =
      fs::read_to_string(summary.generators_folder.join(DEPENDENCIES_FILE_NAME)).unwrap();
    assert!(dependency_contents.contains("set(openssl_no_module TRUE)"));
    assert!(dependency_contents.contains("set(openssl_shared FALSE)"));
    assert!(dependency_contents.contains("find_package(libfoo 1.2.3 REQUIRED)"));
  }
}
