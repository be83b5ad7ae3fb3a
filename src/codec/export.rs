use crate::error::Result;
use crate::query::Catalog;
use crate::types::{Bookmark, Folder, Tree};

use super::lines::escape_html;

pub const CONTENT_TYPE: &str = "application/x-netscape-bookmark";
pub const FILE_NAME: &str = "bookmarks.html";

const PREAMBLE: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
";

const INDENT: &str = "    ";

/// Renders every active folder and bookmark as a Netscape bookmark file.
pub fn export_bookmarks(catalog: &Catalog) -> Result<String> {
    Ok(render_document(&catalog.active_tree()?))
}

/// Items whose parent is missing from `tree` (for example a restored folder
/// whose parent is still in the trash) are not reachable and are left out.
pub fn render_document(tree: &Tree) -> String {
    let mut out = String::from(PREAMBLE);
    write_level(&mut out, tree, None, 0);
    out
}

fn write_level(out: &mut String, tree: &Tree, parent: Option<i64>, depth: usize) {
    let pad = INDENT.repeat(depth);
    out.push_str(&format!("{pad}<DL><p>\n"));

    for folder in tree.child_folders(parent) {
        write_folder(out, folder, &pad);
        write_level(out, tree, Some(folder.id), depth + 1);
    }
    for bookmark in tree.bookmarks_in(parent) {
        write_bookmark(out, bookmark, &pad);
    }

    out.push_str(&format!("{pad}</DL><p>\n"));
}

fn write_folder(out: &mut String, folder: &Folder, pad: &str) {
    out.push_str(&format!(
        "{pad}{INDENT}<DT><H3 ADD_DATE=\"{}\">{}</H3>\n",
        folder.created_at.timestamp(),
        escape_html(&folder.name)
    ));
}

fn write_bookmark(out: &mut String, bookmark: &Bookmark, pad: &str) {
    out.push_str(&format!(
        "{pad}{INDENT}<DT><A HREF=\"{}\" ADD_DATE=\"{}\">{}</A>\n",
        escape_html(&bookmark.url),
        bookmark.created_at.timestamp(),
        escape_html(&bookmark.title)
    ));
}
