use enum_iterator::Sequence;
use serde::{Serialize, Deserialize};

const WINDOWS_OS_STR: &'static str = "windows";
const LINUX_OS_STR: &'static str = "linux";
const MACOS_OS_STR: &'static str = "macos";

#[derive(Serialize, Deserialize, Debug, Hash, PartialEq, Eq, Sequence, Clone, Copy)]
pub enum TargetOs {
  Windows,
  Linux,
  MacOS
}

impl TargetOs {
  pub fn name_string(&self) -> &'static str {
    match self {
      Self::Windows => WINDOWS_OS_STR,
      Self::Linux => LINUX_OS_STR,
      Self::MacOS => MACOS_OS_STR
    }
  }

  pub fn host_default() -> Self {
    if cfg!(windows)                  { Self::Windows }
    else if cfg!(target_os = "macos") { Self::MacOS }
    else                              { Self::Linux }
  }
}

#[derive(Serialize, Deserialize, Debug, Hash, PartialEq, Eq, Sequence, Clone, Copy)]
pub enum CompilerFamily {
  GCC,
  Clang,
  AppleClang,
  MSVC
}

impl CompilerFamily {
  pub fn name_string(&self) -> &'static str {
    match self {
      Self::GCC => "gcc",
      Self::Clang => "clang",
      Self::AppleClang => "apple-clang",
      Self::MSVC => "msvc"
    }
  }

  // MSVC generators produce every build configuration from one configure
  // pass, so the build folder is not split per build type.
  pub fn is_multi_config(&self) -> bool {
    match self {
      Self::MSVC => true,
      _ => false
    }
  }

  pub fn default_for_os(os: &TargetOs) -> Self {
    match os {
      TargetOs::Windows => Self::MSVC,
      TargetOs::MacOS => Self::AppleClang,
      TargetOs::Linux => Self::GCC
    }
  }
}

/// Compiler identity axis: the family plus an optional version constraint.
/// The version participates in the external build-identity key verbatim;
/// nothing here interprets it.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct CompilerSpecifier {
  pub family: CompilerFamily,
  pub version: Option<String>
}

impl CompilerSpecifier {
  pub fn unversioned(family: CompilerFamily) -> Self {
    Self {
      family,
      version: None
    }
  }

  pub fn identity_string(&self) -> String {
    return match &self.version {
      Some(version) => format!("{}-{}", self.family.name_string(), version),
      None => self.family.name_string().to_string()
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Hash, PartialEq, Eq, Sequence, Clone, Copy)]
pub enum BuildType {
  Debug,
  Release,
  MinSizeRel,
  RelWithDebInfo
}

impl BuildType {
  pub fn name_string(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release",
      Self::MinSizeRel => "MinSizeRel",
      Self::RelWithDebInfo => "RelWithDebInfo"
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Hash, PartialEq, Eq, Sequence, Clone, Copy)]
pub enum TargetArch {
  X86,
  X86_64,
  Arm64
}

impl TargetArch {
  pub fn name_string(&self) -> &'static str {
    match self {
      Self::X86 => "x86",
      Self::X86_64 => "x86_64",
      Self::Arm64 => "arm64"
    }
  }

  pub fn host_default() -> Self {
    if cfg!(target_arch = "x86")          { Self::X86 }
    else if cfg!(target_arch = "aarch64") { Self::Arm64 }
    else                                  { Self::X86_64 }
  }
}

/// The four settings axes which participate in the external engine's
/// build-identity key. The axes are declared here in their canonical order;
/// computing the key itself is the external engine's job.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct BuildSettings {
  pub os: TargetOs,
  pub compiler: CompilerSpecifier,
  pub build_type: BuildType,
  pub arch: TargetArch
}

impl BuildSettings {
  pub fn host_defaults() -> Self {
    let os: TargetOs = TargetOs::host_default();

    return Self {
      compiler: CompilerSpecifier::unversioned(CompilerFamily::default_for_os(&os)),
      os,
      build_type: BuildType::Release,
      arch: TargetArch::host_default()
    }
  }

  pub fn identity_string(&self) -> String {
    format!(
      "{}-{}-{}-{}",
      self.os.name_string(),
      self.compiler.identity_string(),
      self.build_type.name_string(),
      self.arch.name_string()
    )
  }

  pub fn is_multi_config(&self) -> bool {
    self.compiler.family.is_multi_config()
  }
}

#[test]
fn test_identity_string_uses_fixed_axis_order() {
  let settings = BuildSettings {
    os: TargetOs::Linux,
    compiler: CompilerSpecifier {
      family: CompilerFamily::GCC,
      version: Some(String::from("13"))
    },
    build_type: BuildType::RelWithDebInfo,
    arch: TargetArch::X86_64
  };

  assert_eq!(settings.identity_string(), "linux-gcc-13-RelWithDebInfo-x86_64");
}

#[test]
fn test_only_msvc_is_multi_config() {
  for family in enum_iterator::all::<CompilerFamily>() {
    assert_eq!(
      family.is_multi_config(),
      matches!(family, CompilerFamily::MSVC)
    );
  }
}
