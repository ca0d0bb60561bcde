mod cmake_deps_writer;
mod toolchain_writer;

pub use cmake_deps_writer::{CMakeDepsEngine, DEPENDENCIES_FILE_NAME};
pub use toolchain_writer::{CMakeToolchain, PRESETS_FILE_NAME, TOOLCHAIN_FILE_NAME, USER_PRESETS_FILE_NAME};
