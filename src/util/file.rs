use std::fs;
use std::path::Path;
use std::path::PathBuf;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::constants::common::MODULE_EXT;
use crate::constants::common::TMP;

/// Replaces the source extension of `source` with the module extension.
#[must_use]
pub fn module_path(source: &Path) -> PathBuf {
    source.with_extension(MODULE_EXT)
}

/// # Panics
#[must_use]
pub fn gen_tmp_module_path() -> PathBuf {
    let dir = make_tmp_dir("module");
    let filename = gen_filename();
    Path::new(&dir).join(format!("{filename}.{MODULE_EXT}"))
}

fn make_tmp_dir(tag: &str) -> String {
    let dir = format!("{TMP}/{tag}");
    if !Path::new(&dir).exists() {
        fs::create_dir_all(&dir).unwrap();
    }
    dir
}

fn gen_filename() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(40)
        .map(char::from)
        .collect::<String>()
}
