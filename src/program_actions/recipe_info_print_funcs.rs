use colored::*;

use crate::recipe::Recipe;
use crate::recipe_data::{RequirementProvider, YamlRecipeData};

pub fn print_recipe_info(
  recipe: &Recipe,
  data_source: &YamlRecipeData
) -> Result<(), String> {
  print_section_header("Recipe");
  println!("package type: {}", recipe.get_package_type().name_string());
  println!("generator: {}", recipe.get_generator().name_string());

  print_section_header("Settings axes");
  let settings = recipe.get_settings();
  println!("os: {}", settings.os.name_string());
  println!("compiler: {}", settings.compiler.identity_string());
  println!("build_type: {}", settings.build_type.name_string());
  println!("arch: {}", settings.arch.name_string());
  println!("build identity: {}", settings.identity_string().cyan());

  print_section_header("Default option overrides");
  for (scope, option_map) in recipe.get_default_options() {
    println!("{}:", scope.pattern_string().green());

    for (option_key, value) in option_map {
      println!("    {} = {}", option_key, value.cmake_value_string());
    }
  }

  print_section_header("Requirements");
  let requirements: Vec<String> = data_source.ordered_requirements()?;

  if requirements.is_empty() {
    println!(
      "None declared in '{}'",
      data_source.data_file_path().to_str().unwrap_or("<non-utf8 path>")
    );
  }
  else {
    for requirement in requirements {
      println!("    {}", requirement);
    }
  }

  Ok(())
}

fn print_section_header(section_name: &str) {
  println!("\n========== {} ==========", section_name.green());
}
