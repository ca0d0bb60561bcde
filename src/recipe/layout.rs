use std::path::{Path, PathBuf};

use super::settings::BuildSettings;

/// The conventional source/build directory mapping registered by the layout
/// hook and consumed by every later generation step.
#[derive(Debug, Clone)]
pub struct RecipeFolders {
  source_folder: PathBuf,
  build_folder: PathBuf,
  generators_folder: PathBuf
}

impl RecipeFolders {
  pub fn source_folder(&self) -> &Path {
    &self.source_folder
  }

  pub fn build_folder(&self) -> &Path {
    &self.build_folder
  }

  pub fn generators_folder(&self) -> &Path {
    &self.generators_folder
  }
}

/// Establishes the CMake directory convention: sources at the project root,
/// build output under build/ (split per build type for single-config
/// toolchains), generated toolchain and dependency files under
/// <build>/generators.
pub fn cmake_layout(
  project_root: impl AsRef<Path>,
  settings: &BuildSettings
) -> RecipeFolders {
  let source_folder: PathBuf = project_root.as_ref().to_path_buf();

  let build_folder: PathBuf = if settings.is_multi_config()
    { source_folder.join("build") }
    else { source_folder.join("build").join(settings.build_type.name_string()) };

  return RecipeFolders {
    generators_folder: build_folder.join("generators"),
    build_folder,
    source_folder
  }
}

#[cfg(test)]
mod layout_tests {
  use super::*;
  use crate::recipe::settings::{BuildSettings, BuildType, CompilerFamily, CompilerSpecifier, TargetArch, TargetOs};

  fn settings_for(family: CompilerFamily, build_type: BuildType) -> BuildSettings {
    BuildSettings {
      os: TargetOs::Linux,
      compiler: CompilerSpecifier::unversioned(family),
      build_type,
      arch: TargetArch::X86_64
    }
  }

  #[test]
  fn single_config_toolchains_split_build_folder_per_build_type() {
    let folders = cmake_layout("proj", &settings_for(CompilerFamily::GCC, BuildType::Debug));

    assert_eq!(folders.source_folder(), Path::new("proj"));
    assert_eq!(folders.build_folder(), Path::new("proj/build/Debug"));
    assert_eq!(folders.generators_folder(), Path::new("proj/build/Debug/generators"));
  }

  #[test]
  fn multi_config_toolchains_share_one_build_folder() {
    let folders = cmake_layout("proj", &settings_for(CompilerFamily::MSVC, BuildType::Release));

    assert_eq!(folders.build_folder(), Path::new("proj/build"));
    assert_eq!(folders.generators_folder(), Path::new("proj/build/generators"));
  }
}
