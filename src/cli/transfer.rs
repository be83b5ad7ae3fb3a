use std::fs;
use std::path::PathBuf;

use super::open_hierarchy;
use crate::codec::{export_bookmarks, import_bookmarks};

pub fn run_import(data_dir: String, file: PathBuf) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let bytes = fs::read(&file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let summary = import_bookmarks(&hierarchy, &text)?;

    println!("Imported {}", file.display());
    println!(
        "  Folders: {} created, {} reused",
        summary.folders_created, summary.folders_reused
    );
    println!(
        "  Bookmarks: {} added, {} already present",
        summary.bookmarks_added, summary.bookmarks_skipped
    );
    if summary.lines_skipped > 0 {
        println!("  Skipped {} link(s) with unusable URLs", summary.lines_skipped);
    }
    Ok(())
}

pub fn run_export(data_dir: String, output: Option<PathBuf>) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let document = export_bookmarks(&hierarchy.catalog())?;

    match output {
        Some(path) => {
            fs::write(&path, &document)?;
            eprintln!("Exported bookmarks to {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}
