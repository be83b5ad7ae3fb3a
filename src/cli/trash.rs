use super::open_hierarchy;

pub fn run_trash_list(data_dir: String, json: bool) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let trash = hierarchy.catalog().trash()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trash)?);
        return Ok(());
    }

    if trash.is_empty() {
        println!("Trash is empty.");
        return Ok(());
    }

    if !trash.folders.is_empty() {
        println!("Folders:");
        for folder in &trash.folders {
            println!("  [{}] {}", folder.id, folder.name);
        }
    }
    if !trash.bookmarks.is_empty() {
        println!("Bookmarks:");
        for bookmark in &trash.bookmarks {
            println!("  [{}] {} <{}>", bookmark.id, bookmark.title, bookmark.url);
        }
    }

    Ok(())
}

pub fn run_trash_restore_folder(data_dir: String, id: i64) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    hierarchy.restore_folder(id)?;

    println!("Restored folder {id}");
    Ok(())
}

pub fn run_trash_restore_bookmark(data_dir: String, id: i64) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    hierarchy.restore_bookmark(id)?;

    println!("Restored bookmark {id}");
    Ok(())
}

pub fn run_trash_purge_folder(data_dir: String, id: i64) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    hierarchy.purge_folder(id)?;

    println!("Permanently deleted folder {id}");
    Ok(())
}

pub fn run_trash_purge_bookmark(data_dir: String, id: i64) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    hierarchy.purge_bookmark(id)?;

    println!("Permanently deleted bookmark {id}");
    Ok(())
}

pub fn run_trash_empty(data_dir: String) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let purged = hierarchy.empty_trash()?;

    println!(
        "Permanently deleted {} folder(s) and {} bookmark(s)",
        purged.folders, purged.bookmarks
    );
    Ok(())
}
