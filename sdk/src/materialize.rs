use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::errors::Error;
use crate::source::SourceFileMap;

/// How relative paths coming from the explorer are treated when joined onto
/// the output directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathPolicy {
    /// Join paths verbatim, even if they climb out of the output directory.
    #[default]
    Trust,
    /// Reject absolute paths and `..` components.
    Confine,
}

/// Writes every file of `files` under `root`, creating intermediate
/// directories, and returns how many files were written.
///
/// Existing files are overwritten. Files written before a failure are left
/// on disk.
pub fn materialize(files: &SourceFileMap, root: &Path, policy: PathPolicy) -> Result<usize, Error> {
    ensure_dir(root)?;

    let mut written: usize = 0;
    for (relative_path, content) in files.iter() {
        let full_path = resolve(root, relative_path, policy)?;
        if let Some(parent) = full_path.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&full_path, content).map_err(|source| Error::Io {
            path: full_path.clone(),
            source,
        })?;
        debug!(path = %full_path.display(), bytes = content.len(), "Saved source file");
        written = written.saturating_add(1);
    }
    Ok(written)
}

fn resolve(root: &Path, relative_path: &str, policy: PathPolicy) -> Result<PathBuf, Error> {
    let relative = Path::new(relative_path);
    if policy == PathPolicy::Confine && escapes_root(relative) {
        return Err(Error::PathEscapesRoot {
            path: relative_path.to_owned(),
        });
    }
    Ok(root.join(relative))
}

/// Directory a contract's files go to, `<root>/<contract_name>`.
///
/// Under [`PathPolicy::Confine`] the name must be a single plain path
/// component, so it can neither climb out of `root` nor nest below it.
pub fn contract_dir(root: &Path, contract_name: &str, policy: PathPolicy) -> Result<PathBuf, Error> {
    let name = Path::new(contract_name);
    if policy == PathPolicy::Confine {
        let mut components = name.components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal || contract_name.contains(['/', '\\']) {
            return Err(Error::PathEscapesRoot {
                path: contract_name.to_owned(),
            });
        }
    }
    Ok(root.join(name))
}

fn escapes_root(path: &Path) -> bool {
    path.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}

/// Creates `dir` and its ancestors. A directory that already exists is fine.
fn ensure_dir(dir: &Path) -> Result<(), Error> {
    match fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(source) => Err(Error::Io {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
