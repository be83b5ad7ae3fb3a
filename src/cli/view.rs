use super::open_hierarchy;
use crate::types::Tree;

pub fn run_tree(data_dir: String, json: bool) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let tree = hierarchy.catalog().active_tree()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    if tree.is_empty() {
        println!("No bookmarks yet.");
        return Ok(());
    }

    let mut out = String::new();
    render_level(&mut out, &tree, None, 0);
    print!("{out}");
    Ok(())
}

fn render_level(out: &mut String, tree: &Tree, parent: Option<i64>, depth: usize) {
    let pad = "  ".repeat(depth);
    for folder in tree.child_folders(parent) {
        out.push_str(&format!("{pad}{}/ [{}]\n", folder.name, folder.id));
        render_level(out, tree, Some(folder.id), depth + 1);
    }
    for bookmark in tree.bookmarks_in(parent) {
        out.push_str(&format!(
            "{pad}{} <{}> [{}]\n",
            bookmark.title, bookmark.url, bookmark.id
        ));
    }
}

pub fn run_search(data_dir: String, query: String, json: bool) -> anyhow::Result<()> {
    let hierarchy = open_hierarchy(&data_dir)?;
    let results = hierarchy.catalog().search(&query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No bookmarks match '{query}'.");
        return Ok(());
    }

    for bookmark in &results {
        println!("[{}] {} <{}>", bookmark.id, bookmark.title, bookmark.url);
    }
    println!();
    println!("{} result(s)", results.len());
    Ok(())
}
