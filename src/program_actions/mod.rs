mod install;
mod recipe_info_print_funcs;

pub use install::*;
pub use recipe_info_print_funcs::*;

use crate::recipe::settings::BuildSettings;
use crate::recipe::Recipe;
use crate::recipe_data::YamlRecipeData;

pub fn print_recipe_info_for_project(
  project_root: &str,
  settings: BuildSettings
) -> Result<(), String> {
  let recipe = Recipe::new_application(settings);
  let data_source = YamlRecipeData::for_project_root(project_root);

  print_recipe_info(&recipe, &data_source)
    .map_err(|err_message| format!(
      "When printing recipe info for project at '{}':\n{}",
      project_root,
      err_message
    ))
}
