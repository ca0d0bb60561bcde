use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::recipe::layout::RecipeFolders;
use crate::recipe::settings::{BuildSettings, CompilerFamily, TargetArch};

pub const TOOLCHAIN_FILE_NAME: &'static str = "toolchain.cmake";
pub const PRESETS_FILE_NAME: &'static str = "CMakePresets.json";
pub const USER_PRESETS_FILE_NAME: &'static str = "CMakeUserPresets.json";

const GENERATED_FILE_HEADER: &'static str =
  "# This file was generated by crecipe-rust. Do not edit by hand.";

/// Transient parameter object for one toolchain generation pass. Built,
/// configured, and dropped per invocation; the emitted files are the only
/// thing that outlives it.
pub struct CMakeToolchain {
  settings: BuildSettings,
  build_folder: PathBuf,
  generators_folder: PathBuf,
  // Where CMakeUserPresets.json would be written. None suppresses the file
  // entirely, keeping machine-local state out of shared output.
  user_presets_path: Option<PathBuf>
}

impl CMakeToolchain {
  pub fn new(settings: &BuildSettings, folders: &RecipeFolders) -> Self {
    Self {
      settings: settings.clone(),
      build_folder: folders.build_folder().to_path_buf(),
      generators_folder: folders.generators_folder().to_path_buf(),
      user_presets_path: Some(folders.source_folder().join(USER_PRESETS_FILE_NAME))
    }
  }

  pub fn suppress_user_presets(&mut self) {
    self.user_presets_path = None;
  }

  pub fn writes_user_presets(&self) -> bool {
    self.user_presets_path.is_some()
  }

  pub fn generate(&self) -> io::Result<()> {
    fs::create_dir_all(&self.generators_folder)?;

    self.write_toolchain_file()?;
    self.write_presets_file()?;

    if let Some(user_presets_path) = &self.user_presets_path {
      self.write_user_presets_file(user_presets_path)?;
    }

    Ok(())
  }

  fn write_toolchain_file(&self) -> io::Result<()> {
    let toolchain_file_path: PathBuf = self.generators_folder.join(TOOLCHAIN_FILE_NAME);
    let mut toolchain_file = File::create(&toolchain_file_path)?;

    writeln!(&mut toolchain_file, "{}", GENERATED_FILE_HEADER)?;
    writeln!(&mut toolchain_file,
      "# Build identity: {}\n",
      self.settings.identity_string()
    )?;

    // Multi-config generators select the configuration at build time, so the
    // build type must not be pinned into their cache.
    if !self.settings.is_multi_config() {
      writeln!(&mut toolchain_file,
        "set(CMAKE_BUILD_TYPE \"{}\" CACHE STRING \"Build configuration declared by the recipe\")",
        self.settings.build_type.name_string()
      )?;
    }

    if let Some(arch_flag) = arch_flag_string(&self.settings) {
      writeln!(&mut toolchain_file,
        "string(APPEND CMAKE_C_FLAGS_INIT \" {}\")",
        arch_flag
      )?;
      writeln!(&mut toolchain_file,
        "string(APPEND CMAKE_CXX_FLAGS_INIT \" {}\")",
        arch_flag
      )?;
    }

    writeln!(&mut toolchain_file,
      "\nlist(PREPEND CMAKE_PREFIX_PATH \"${{CMAKE_CURRENT_LIST_DIR}}\")"
    )?;

    Ok(())
  }

  fn write_presets_file(&self) -> io::Result<()> {
    let preset_name: String = self.settings.build_type.name_string().to_lowercase();

    let presets_document = json!({
      "version": 4,
      "configurePresets": [
        {
          "name": preset_name,
          "displayName": format!("'{}' build configured by the recipe", self.settings.build_type.name_string()),
          "toolchainFile": path_string(&self.generators_folder.join(TOOLCHAIN_FILE_NAME)),
          "binaryDir": path_string(&self.build_folder),
          "cacheVariables": {
            "CMAKE_POLICY_DEFAULT_CMP0091": "NEW"
          }
        }
      ]
    });

    fs::write(
      self.generators_folder.join(PRESETS_FILE_NAME),
      serde_json::to_string_pretty(&presets_document)?
    )
  }

  fn write_user_presets_file(&self, user_presets_path: &Path) -> io::Result<()> {
    let user_presets_document = json!({
      "version": 4,
      "include": [
        path_string(&self.generators_folder.join(PRESETS_FILE_NAME))
      ]
    });

    fs::write(
      user_presets_path,
      serde_json::to_string_pretty(&user_presets_document)?
    )
  }
}

fn path_string(path: &Path) -> String {
  path.to_string_lossy().replace('\\', "/")
}

fn arch_flag_string(settings: &BuildSettings) -> Option<&'static str> {
  // MSVC takes its architecture from the generator platform, not from flags.
  if settings.compiler.family == CompilerFamily::MSVC {
    return None;
  }

  match settings.arch {
    TargetArch::X86 => Some("-m32"),
    TargetArch::X86_64 => Some("-m64"),
    TargetArch::Arm64 => None
  }
}
