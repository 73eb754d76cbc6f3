use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const ID: &str = "abcdef1234567890abcdef1234567890";
pub const OTHER_ID: &str = "0123456789ABCDEF0123456789abcdef";

/// Create a small Notion export with ids on every name.
pub fn create_notion_export() -> TempDir {
    let dir = TempDir::new().unwrap();

    write_page(
        dir.path(),
        &format!("Home {ID}.md"),
        &format!(
            "# Home\n\nSee [Projects](Projects%20{ID}.md) for details\nOwned by Ops {OTHER_ID}\n"
        ),
    );

    let projects = dir.path().join(format!("Projects {ID}"));
    fs::create_dir(&projects).unwrap();
    fs::write(
        projects.join(format!("diagram {OTHER_ID}.png")),
        [0x89, b'P', b'N', b'G', 0x00, b' ', 0x00, 0xff],
    )
    .unwrap();

    let roadmap = projects.join(format!("Roadmap {OTHER_ID}"));
    fs::create_dir(&roadmap).unwrap();
    write_page(&roadmap, "Plan.md", "- ship it\n");

    dir
}

/// Every entry under `root`, keyed by relative path. Directories map to `None`.
pub fn read_tree(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            let content = e.file_type().is_file().then(|| fs::read(e.path()).unwrap());
            (rel, content)
        })
        .collect()
}

/// Strip every permission bit from `path`. Returns false when the file can
/// still be read afterwards, as happens when running as root.
#[cfg(unix)]
pub fn make_unreadable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
    fs::read(path).is_err()
}

fn write_page(dir: impl AsRef<Path>, name: &str, content: &str) {
    fs::write(dir.as_ref().join(name), content).unwrap();
}
