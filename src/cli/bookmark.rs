use super::open_hierarchy;
use crate::hierarchy::{BookmarkDraft, BookmarkUpdate};

pub fn run_bookmark_add(
    data_dir: String,
    title: String,
    url: String,
    description: Option<String>,
    folder: Option<i64>,
) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let bookmark = hierarchy.create_bookmark(BookmarkDraft {
        title,
        url,
        description,
        folder_id: folder,
    })?;

    println!("Added bookmark '{}' (id {})", bookmark.title, bookmark.id);
    println!("  URL: {}", bookmark.url);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run_bookmark_edit(
    data_dir: String,
    id: i64,
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    clear_description: bool,
    folder: Option<i64>,
    root: bool,
) -> anyhow::Result<()> {
    let description = if clear_description {
        Some(None)
    } else {
        description.map(Some)
    };
    let folder_id = if root { Some(None) } else { folder.map(Some) };

    let update = BookmarkUpdate {
        title,
        url,
        description,
        folder_id,
    };
    if update.title.is_none()
        && update.url.is_none()
        && update.description.is_none()
        && update.folder_id.is_none()
    {
        anyhow::bail!("Nothing to change. Pass at least one of --title, --url, --description, --clear-description, --folder or --root");
    }

    let hierarchy = open_hierarchy(&data_dir)?;
    let bookmark = hierarchy.update_bookmark(id, update)?;

    println!("Updated bookmark '{}' (id {})", bookmark.title, bookmark.id);
    Ok(())
}

pub fn run_bookmark_delete(data_dir: String, id: i64) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    hierarchy.delete_bookmark(id)?;

    println!("Moved bookmark {id} to the trash");
    Ok(())
}

pub fn run_bookmark_reorder(data_dir: String, ids: Vec<i64>) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    hierarchy.reorder_bookmarks(&ids)?;

    println!("Reordered {} bookmark(s)", ids.len());
    Ok(())
}
