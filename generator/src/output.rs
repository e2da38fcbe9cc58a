use std::{
    fs,
    path::{Path, PathBuf},
};

use normalize_path::NormalizePath as _;

use crate::{
    error::{Error, Result},
    generator::RenderedDocument,
};

pub const INDEX_HTML: &str = "index.html";

/// Write the index page to `<out_dir>/index.html`.
pub fn write_index(out_dir: impl AsRef<Path>, content: &[u8], minify: bool) -> Result<PathBuf> {
    let path = out_dir.as_ref().join(INDEX_HTML);
    write_html(&path, content, minify)?;
    Ok(path)
}

/// Write every document to `<out_dir><target>/index.html` for each of its
/// target paths. Returns the written files in order.
pub fn write_documents(
    out_dir: impl AsRef<Path>,
    documents: &[RenderedDocument],
    minify: bool,
) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let mut ret = Vec::new();

    for doc in documents {
        for target in doc.target_paths() {
            let path = target_dir(out_dir, &target)?.join(INDEX_HTML);
            write_html(&path, &doc.content, minify)?;
            ret.push(path);
        }
    }

    Ok(ret)
}

/// `/foo/bar` -> `<out_dir>/foo/bar`
fn target_dir(out_dir: &Path, target: &str) -> Result<PathBuf> {
    let rel = Path::new(target.trim_start_matches('/'))
        .try_normalize()
        .ok_or_else(|| Error::InvalidTarget {
            path: target.to_string(),
        })?;
    Ok(out_dir.join(rel))
}

fn write_html(path: &Path, content: &[u8], minify: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    log::info!("write: {}", path.display());

    let res = if minify {
        fs::write(path, minify_html::minify(content, &minify_html::Cfg::new()))
    } else {
        fs::write(path, content)
    };
    res.map_err(|e| Error::io(path, e))
}
