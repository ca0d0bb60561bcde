use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

pub const RECIPE_DATA_FILE_NAME: &'static str = "recipe_data.yaml";

/// Source of the ordered requirement list. The production provider reads the
/// version-pinned data file next to the recipe; tests inject an in-memory
/// list instead.
pub trait RequirementProvider {
  fn ordered_requirements(&self) -> Result<Vec<String>, String>;
}

// The data file's format is owned by the external engine; only the
// requirements key is read here, and any sibling keys are ignored.
#[derive(Serialize, Deserialize, Debug)]
struct RawRecipeData {
  // Option so an explicitly empty "requirements:" key is also tolerated.
  requirements: Option<Vec<String>>
}

pub struct YamlRecipeData {
  data_file_path: PathBuf
}

impl YamlRecipeData {
  pub fn for_project_root(project_root: impl AsRef<Path>) -> Self {
    Self {
      data_file_path: project_root.as_ref().join(RECIPE_DATA_FILE_NAME)
    }
  }

  pub fn data_file_path(&self) -> &Path {
    &self.data_file_path
  }
}

impl RequirementProvider for YamlRecipeData {
  fn ordered_requirements(&self) -> Result<Vec<String>, String> {
    let file_contents: String = match fs::read_to_string(&self.data_file_path) {
      Ok(contents) => contents,
      // An absent data file just means the recipe has no requirements.
      Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
      Err(err) => return Err(format!(
        "Failed to read requirement data file '{}': {}",
        self.data_file_path.to_str().unwrap_or(RECIPE_DATA_FILE_NAME),
        err
      ))
    };

    if file_contents.trim().is_empty() {
      return Ok(Vec::new());
    }

    let raw_data: RawRecipeData = serde_yaml::from_str(&file_contents)
      .map_err(|err| format!(
        "Failed to parse requirement data file '{}': {}",
        self.data_file_path.to_str().unwrap_or(RECIPE_DATA_FILE_NAME),
        err
      ))?;

    Ok(raw_data.requirements.unwrap_or_default())
  }
}

/// Fixed list provider used by tests and by the info printer, which must not
/// fail just because no data file exists yet.
pub struct StaticRequirementList {
  requirements: Vec<String>
}

impl StaticRequirementList {
  pub fn new(requirements: Vec<String>) -> Self {
    Self { requirements }
  }
}

impl RequirementProvider for StaticRequirementList {
  fn ordered_requirements(&self) -> Result<Vec<String>, String> {
    Ok(self.requirements.clone())
  }
}

#[cfg(test)]
mod recipe_data_tests {
  use std::fs;

  use super::*;

  #[test]
  fn missing_data_file_means_zero_requirements() {
    let project_dir = tempfile::tempdir().unwrap();
    let provider = YamlRecipeData::for_project_root(project_dir.path());

    assert_eq!(provider.ordered_requirements().unwrap(), Vec::<String>::new());
  }

  #[test]
  fn empty_data_file_means_zero_requirements() {
    let project_dir = tempfile::tempdir().unwrap();
    fs::write(project_dir.path().join(RECIPE_DATA_FILE_NAME), "").unwrap();

    let provider = YamlRecipeData::for_project_root(project_dir.path());
    assert_eq!(provider.ordered_requirements().unwrap(), Vec::<String>::new());
  }

  #[test]
  fn requirements_are_read_in_listed_order() {
    let project_dir = tempfile::tempdir().unwrap();
    fs::write(
      project_dir.path().join(RECIPE_DATA_FILE_NAME),
      "requirements:\n  - \"libfoo/1.2.3\"\n  - \"libbar/2.0.0\"\n"
    ).unwrap();

    let provider = YamlRecipeData::for_project_root(project_dir.path());
    assert_eq!(
      provider.ordered_requirements().unwrap(),
      vec![String::from("libfoo/1.2.3"), String::from("libbar/2.0.0")]
    );
  }

  #[test]
  fn sibling_keys_in_the_data_file_are_tolerated() {
    let project_dir = tempfile::tempdir().unwrap();
    fs::write(
      project_dir.path().join(RECIPE_DATA_FILE_NAME),
      "sources:\n  \"1.0\":\n    url: \"https://example.com/app-1.0.tar.gz\"\nrequirements:\n  - \"zlib/[>=1.2 <2]\"\n"
    ).unwrap();

    let provider = YamlRecipeData::for_project_root(project_dir.path());
    assert_eq!(
      provider.ordered_requirements().unwrap(),
      vec![String::from("zlib/[>=1.2 <2]")]
    );
  }

  #[test]
  fn data_file_without_requirements_key_means_zero_requirements() {
    let project_dir = tempfile::tempdir().unwrap();
    fs::write(
      project_dir.path().join(RECIPE_DATA_FILE_NAME),
      "sources:\n  \"1.0\":\n    url: \"https://example.com/app-1.0.tar.gz\"\n"
    ).unwrap();

    let provider = YamlRecipeData::for_project_root(project_dir.path());
    assert_eq!(provider.ordered_requirements().unwrap(), Vec::<String>::new());
  }
}
