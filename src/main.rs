mod cli_config;
mod dependency_engine;
mod file_writers;
mod logger;
mod program_actions;
mod recipe;
mod recipe_data;

use clap::Parser;

use cli_config::build_settings_from_cli;
use cli_config::clap_cli_config::{Opts, SettingsAxisArgs, SubCommandStruct};
use program_actions::{print_recipe_info_for_project, run_install, InstallConfig, InstallSummary};

fn main() {
  let opts: Opts = Opts::parse();

  match opts.subcommand {
    Some(SubCommandStruct::Install(axis_args)) => do_install(&opts.project_root, &axis_args),
    Some(SubCommandStruct::Info(axis_args)) => {
      let settings = build_settings_from_cli(&axis_args);

      if let Err(err_message) = print_recipe_info_for_project(&opts.project_root, settings) {
        logger::exit_error_log(err_message);
      }
    },
    // A bare invocation configures the build with host-default axes.
    None => do_install(&opts.project_root, &SettingsAxisArgs {
      os: None,
      compiler: None,
      compiler_version: None,
      build_type: None,
      arch: None
    })
  }
}

fn do_install(project_root: &str, axis_args: &SettingsAxisArgs) {
  let install_config = InstallConfig {
    project_root: project_root.to_string(),
    settings: build_settings_from_cli(axis_args)
  };

  match run_install(&install_config) {
    Ok(summary) => print_install_summary(&summary),
    Err(err_message) => logger::exit_error_log(err_message)
  }
}

fn print_install_summary(summary: &InstallSummary) {
  logger::step_done(format!(
    "Configured build '{}': {} requirement{} forwarded, generator files in '{}'",
    summary.build_identity,
    summary.registered_requirement_count,
    if summary.registered_requirement_count == 1 { "" } else { "s" },
    summary.generators_folder.to_str().unwrap_or("<non-utf8 path>")
  ));
}
