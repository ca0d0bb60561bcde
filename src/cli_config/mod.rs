use crate::recipe::settings::{BuildSettings, BuildType, CompilerFamily, CompilerSpecifier, TargetArch, TargetOs};

use self::clap_cli_config::{CLIArchIn, CLIBuildTypeIn, CLICompilerIn, CLITargetOsIn, SettingsAxisArgs};
pub mod clap_cli_config;

impl From<CLITargetOsIn> for TargetOs {
  fn from(cli_os: CLITargetOsIn) -> Self {
    match cli_os {
      CLITargetOsIn::Windows => TargetOs::Windows,
      CLITargetOsIn::Linux => TargetOs::Linux,
      CLITargetOsIn::Macos => TargetOs::MacOS
    }
  }
}

impl From<CLICompilerIn> for CompilerFamily {
  fn from(cli_compiler: CLICompilerIn) -> Self {
    match cli_compiler {
      CLICompilerIn::Gcc => CompilerFamily::GCC,
      CLICompilerIn::Clang => CompilerFamily::Clang,
      CLICompilerIn::AppleClang => CompilerFamily::AppleClang,
      CLICompilerIn::Msvc => CompilerFamily::MSVC
    }
  }
}

impl From<CLIBuildTypeIn> for BuildType {
  fn from(cli_build_type: CLIBuildTypeIn) -> Self {
    match cli_build_type {
      CLIBuildTypeIn::Debug => BuildType::Debug,
      CLIBuildTypeIn::Release => BuildType::Release,
      CLIBuildTypeIn::MinSizeRel => BuildType::MinSizeRel,
      CLIBuildTypeIn::RelWithDebInfo => BuildType::RelWithDebInfo
    }
  }
}

impl From<CLIArchIn> for TargetArch {
  fn from(cli_arch: CLIArchIn) -> Self {
    match cli_arch {
      CLIArchIn::X86 => TargetArch::X86,
      CLIArchIn::X86_64 => TargetArch::X86_64,
      CLIArchIn::Arm64 => TargetArch::Arm64
    }
  }
}

/// Resolves the four axis values for one pass, filling unspecified axes from
/// host defaults. The compiler default follows the chosen OS, so overriding
/// just --os still produces a coherent axis set.
pub fn build_settings_from_cli(axis_args: &SettingsAxisArgs) -> BuildSettings {
  let host_defaults: BuildSettings = BuildSettings::host_defaults();

  let os: TargetOs = axis_args.os
    .map(TargetOs::from)
    .unwrap_or(host_defaults.os);

  let compiler_family: CompilerFamily = axis_args.compiler
    .map(CompilerFamily::from)
    .unwrap_or_else(|| CompilerFamily::default_for_os(&os));

  return BuildSettings {
    os,
    compiler: CompilerSpecifier {
      family: compiler_family,
      version: axis_args.compiler_version.clone()
    },
    build_type: axis_args.build_type
      .map(BuildType::from)
      .unwrap_or(host_defaults.build_type),
    arch: axis_args.arch
      .map(TargetArch::from)
      .unwrap_or(host_defaults.arch)
  }
}
