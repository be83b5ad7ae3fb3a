use super::open_hierarchy;
use crate::hierarchy::FolderUpdate;

pub fn run_folder_create(
    data_dir: String,
    name: String,
    parent: Option<i64>,
) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let folder = hierarchy.create_folder(&name, parent)?;

    println!("Created folder '{}' (id {})", folder.name, folder.id);
    if let Some(parent) = folder.parent_id {
        println!("  Parent: {parent}");
    }

    Ok(())
}

pub fn run_folder_rename(data_dir: String, id: i64, name: String) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let folder = hierarchy.update_folder(
        id,
        FolderUpdate {
            name: Some(name),
            parent_id: None,
        },
    )?;

    println!("Renamed folder {} to '{}'", folder.id, folder.name);
    Ok(())
}

pub fn run_folder_move(
    data_dir: String,
    id: i64,
    parent: Option<i64>,
    root: bool,
) -> anyhow::Result<()> {
    if parent.is_none() && !root {
        anyhow::bail!("Either --parent or --root is required");
    }

    let hierarchy = open_hierarchy(&data_dir)?;
    let folder = hierarchy.update_folder(
        id,
        FolderUpdate {
            name: None,
            parent_id: Some(parent),
        },
    )?;

    match folder.parent_id {
        Some(parent) => println!("Moved folder '{}' under folder {parent}", folder.name),
        None => println!("Moved folder '{}' to the root level", folder.name),
    }
    Ok(())
}

pub fn run_folder_delete(data_dir: String, id: i64) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let count = hierarchy.delete_folder(id)?;

    println!("Moved {count} folder(s) to the trash");
    Ok(())
}

pub fn run_folder_reorder(data_dir: String, ids: Vec<i64>) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    hierarchy.reorder_folders(&ids)?;

    println!("Reordered {} folder(s)", ids.len());
    Ok(())
}
