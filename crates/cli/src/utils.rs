use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::defaults::OUTPUT_EXTENSION;

/// `path` with `suffix` appended to its final component.
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Output path derived from the input path.
pub fn output_path(input: &Path) -> PathBuf {
    append_suffix(input, OUTPUT_EXTENSION)
}
