use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy)]
pub enum CLITargetOsIn {
  Windows,
  Linux,
  Macos
}

#[derive(ValueEnum, Clone, Copy)]
pub enum CLICompilerIn {
  Gcc,
  Clang,
  AppleClang,
  Msvc
}

#[derive(ValueEnum, Clone, Copy)]
pub enum CLIBuildTypeIn {
  Debug,
  Release,
  MinSizeRel,
  RelWithDebInfo
}

#[derive(ValueEnum, Clone, Copy)]
pub enum CLIArchIn {
  X86,
  X86_64,
  Arm64
}

#[derive(Parser)]
#[clap(version, about = "Evaluates the application's package recipe and configures its CMake build")]
pub struct Opts {
  /// Root directory of the project being configured
  #[clap(default_value = ".")]
  pub project_root: String,

  #[clap(subcommand)]
  pub subcommand: Option<SubCommandStruct>
}

#[derive(Subcommand)]
pub enum SubCommandStruct {
  /// Run one full build-configuration pass: register the directory layout,
  /// emit toolchain files, and forward the recipe's requirements to the
  /// dependency engine. This is the default when no subcommand is given.
  #[clap()]
  Install(SettingsAxisArgs),

  /// Print the recipe's declared configuration surface and requirement list.
  #[clap()]
  Info(SettingsAxisArgs)
}

/// Settings-axis values for one configuration pass. Each axis defaults to a
/// value detected from the host.
#[derive(Args, Clone)]
pub struct SettingsAxisArgs {
  /// Target operating system axis
  #[clap(value_enum, long)]
  pub os: Option<CLITargetOsIn>,

  /// Compiler identity axis
  #[clap(value_enum, long)]
  pub compiler: Option<CLICompilerIn>,

  /// Compiler version constraint, forwarded into the build identity verbatim
  #[clap(long = "compiler-version")]
  pub compiler_version: Option<String>,

  /// Build configuration axis
  #[clap(value_enum, long = "build-type")]
  pub build_type: Option<CLIBuildTypeIn>,

  /// CPU architecture axis
  #[clap(value_enum, long)]
  pub arch: Option<CLIArchIn>
}
