use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use super::lines::{Line, classify, unescape_html};
use crate::error::Result;
use crate::hierarchy::Hierarchy;
use crate::hierarchy::validation::{
    MAX_FOLDER_NAME_LEN, MAX_TITLE_LEN, check_url, is_forbidden_name_char, sanitize_line,
};
use crate::types::NewBookmark;

/// Pending bookmarks are written once this many have queued up.
pub const BATCH_SIZE: usize = 50;
/// List-open markers beyond this depth are flattened into the deepest scope.
pub const MAX_DEPTH: usize = 128;

const UNTITLED_FOLDER: &str = "Untitled folder";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub folders_created: usize,
    pub folders_reused: usize,
    pub bookmarks_added: usize,
    /// Bookmarks whose `(url, folder)` pair was already stored.
    pub bookmarks_skipped: usize,
    /// Anchor lines dropped because their URL was unusable.
    pub lines_skipped: usize,
}

/// Imports a Netscape bookmark file into the hierarchy.
///
/// Not transactional as a whole: batches written before an error stay
/// written.
pub fn import_bookmarks(hierarchy: &Hierarchy, text: &str) -> Result<ImportSummary> {
    let mut session = ImportSession::new(hierarchy);
    for (number, raw) in text.lines().enumerate() {
        session.feed(number + 1, classify(raw))?;
    }
    session.finish()
}

struct ImportSession<'a> {
    hierarchy: &'a Hierarchy,
    /// Folder that owns new items at each open list level; index 0 is the root.
    scopes: Vec<Option<i64>>,
    /// List-open markers ignored because of `MAX_DEPTH`, still awaiting a close.
    overflow: usize,
    last_folder: Option<i64>,
    pending: Vec<NewBookmark>,
    summary: ImportSummary,
}

impl<'a> ImportSession<'a> {
    fn new(hierarchy: &'a Hierarchy) -> Self {
        Self {
            hierarchy,
            scopes: vec![None],
            overflow: 0,
            last_folder: None,
            pending: Vec::with_capacity(BATCH_SIZE),
            summary: ImportSummary::default(),
        }
    }

    fn current_scope(&self) -> Option<i64> {
        self.scopes.last().copied().flatten()
    }

    fn feed(&mut self, number: usize, line: Line) -> Result<()> {
        match line {
            Line::OpenList => {
                if self.scopes.len() > MAX_DEPTH {
                    self.overflow += 1;
                } else {
                    self.scopes.push(self.last_folder);
                }
            }
            Line::CloseList => {
                if self.overflow > 0 {
                    self.overflow -= 1;
                } else if self.scopes.len() > 1 {
                    self.scopes.pop();
                }
            }
            Line::Heading(raw) => {
                // Folder ids must be settled before bookmarks that follow them.
                self.flush()?;
                let name = folder_name(&raw);
                let (folder, created) = self
                    .hierarchy
                    .find_or_create_folder(&name, self.current_scope())?;
                if created {
                    self.summary.folders_created += 1;
                } else {
                    self.summary.folders_reused += 1;
                }
                self.last_folder = Some(folder.id);
            }
            Line::Anchor { url, title } => match bookmark(&url, &title, self.current_scope()) {
                Some(bookmark) => {
                    self.pending.push(bookmark);
                    if self.pending.len() >= BATCH_SIZE {
                        self.flush()?;
                    }
                }
                None => {
                    debug!(line = number, "skipping bookmark with unusable url");
                    self.summary.lines_skipped += 1;
                }
            },
            Line::Other => {}
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let inserted = self.hierarchy.insert_bookmark_batch(&self.pending)?;
        self.summary.bookmarks_added += inserted;
        self.summary.bookmarks_skipped += self.pending.len() - inserted;
        self.pending.clear();
        Ok(())
    }

    fn finish(mut self) -> Result<ImportSummary> {
        self.flush()?;
        info!(
            folders_created = self.summary.folders_created,
            folders_reused = self.summary.folders_reused,
            bookmarks_added = self.summary.bookmarks_added,
            bookmarks_skipped = self.summary.bookmarks_skipped,
            lines_skipped = self.summary.lines_skipped,
            "imported bookmark file"
        );
        Ok(self.summary)
    }
}

/// Heading text reduced to a valid folder name.
fn folder_name(raw: &str) -> String {
    let decoded = unescape_html(raw);
    let cleaned: String = decoded
        .chars()
        .filter(|c| !is_forbidden_name_char(*c))
        .collect();
    let name = sanitize_line(&cleaned, MAX_FOLDER_NAME_LEN);
    if name.is_empty() {
        UNTITLED_FOLDER.to_string()
    } else {
        name
    }
}

/// The href is kept as written rather than normalized.
fn bookmark(raw_url: &str, raw_title: &str, folder_id: Option<i64>) -> Option<NewBookmark> {
    let url = check_url(&unescape_html(raw_url)).ok()?;
    let mut title = sanitize_line(&unescape_html(raw_title), MAX_TITLE_LEN);
    if title.is_empty() {
        title = sanitize_line(&url, MAX_TITLE_LEN);
    }
    Some(NewBookmark {
        title,
        url,
        description: None,
        folder_id,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::test_support::hierarchy;

    const SAMPLE: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 ADD_DATE="1700000000">Work</H3>
    <DL><p>
        <DT><H3>Projects</H3>
        <DL><p>
            <DT><A HREF="https://example.com/guide">Guide</A>
        </DL><p>
        <DT><A HREF="https://example.com/wiki">Wiki</A>
    </DL><p>
    <DT><A HREF="https://news.example/">News</A>
    <DT><A HREF="javascript:void(0)">Bookmarklet</A>
</DL><p>
"#;

    #[test]
    fn test_import_builds_nesting() {
        let (_temp, h) = hierarchy();

        let summary = import_bookmarks(&h, SAMPLE).unwrap();
        assert_eq!(summary.folders_created, 2);
        assert_eq!(summary.bookmarks_added, 3);
        assert_eq!(summary.lines_skipped, 1);

        let tree = h.catalog().active_tree().unwrap();
        let work = tree.child_folders(None).next().unwrap();
        assert_eq!(work.name, "Work");
        let projects = tree.child_folders(Some(work.id)).next().unwrap();
        assert_eq!(projects.name, "Projects");

        let titles = |folder| -> Vec<String> {
            tree.bookmarks_in(folder).map(|b| b.title.clone()).collect()
        };
        assert_eq!(titles(Some(projects.id)), vec!["Guide"]);
        assert_eq!(titles(Some(work.id)), vec!["Wiki"]);
        assert_eq!(titles(None), vec!["News"]);
    }

    #[test]
    fn test_import_twice_is_idempotent() {
        let (_temp, h) = hierarchy();
        import_bookmarks(&h, SAMPLE).unwrap();
        let again = import_bookmarks(&h, SAMPLE).unwrap();

        assert_eq!(again.folders_created, 0);
        assert_eq!(again.folders_reused, 2);
        assert_eq!(again.bookmarks_added, 0);
        assert_eq!(again.bookmarks_skipped, 3);

        let tree = h.catalog().active_tree().unwrap();
        assert_eq!(tree.folders.len(), 2);
        assert_eq!(tree.bookmarks.len(), 3);
    }

    #[test]
    fn test_trashed_folder_is_not_reused() {
        let (_temp, h) = hierarchy();
        let old = h.create_folder("Work", None).unwrap();
        h.delete_folder(old.id).unwrap();

        let summary = import_bookmarks(&h, SAMPLE).unwrap();
        assert_eq!(summary.folders_created, 2);
        let tree = h.catalog().active_tree().unwrap();
        assert!(tree.folders.iter().all(|f| f.id != old.id));
    }

    #[test]
    fn test_large_import_flushes_in_batches() {
        let (_temp, h) = hierarchy();
        let mut doc = String::from("<DL><p>\n");
        for i in 0..(BATCH_SIZE * 2 + 7) {
            doc.push_str(&format!(
                "<DT><A HREF=\"https://example.com/{i}\">Link {i}</A>\n"
            ));
        }
        doc.push_str("</DL><p>\n");

        let summary = import_bookmarks(&h, &doc).unwrap();
        assert_eq!(summary.bookmarks_added, BATCH_SIZE * 2 + 7);

        let tree = h.catalog().active_tree().unwrap();
        let titles: Vec<&str> = tree.bookmarks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles[0], "Link 0");
        assert_eq!(titles[BATCH_SIZE], format!("Link {BATCH_SIZE}"));
    }

    #[test]
    fn test_unbalanced_markers_do_not_escape_root() {
        let (_temp, h) = hierarchy();
        let doc = "</DL><p>\n</DL><p>\n<DT><H3>Top</H3>\n<DL><p>\n<DT><A HREF=\"https://a.example/\">A</A>\n";

        import_bookmarks(&h, doc).unwrap();
        let tree = h.catalog().active_tree().unwrap();
        let top = tree.child_folders(None).next().unwrap();
        assert_eq!(tree.bookmarks_in(Some(top.id)).count(), 1);
    }

    #[test]
    fn test_headings_and_titles_are_cleaned() {
        let (_temp, h) = hierarchy();
        let doc = concat!(
            "<DL><p>\n",
            "<DT><H3>Tom &amp; &quot;Jerry&quot;</H3>\n",
            "<DT><H3>&lt;&gt;</H3>\n",
            "<DT><A HREF=\"https://example.com/?a=1&amp;b=2\"></A>\n",
            "</DL><p>\n",
        );

        import_bookmarks(&h, doc).unwrap();
        let tree = h.catalog().active_tree().unwrap();
        let names: Vec<&str> = tree.folders.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"Tom & Jerry"));
        assert!(names.contains(&UNTITLED_FOLDER));

        let bookmark = &tree.bookmarks[0];
        assert_eq!(bookmark.url, "https://example.com/?a=1&b=2");
        assert_eq!(bookmark.title, bookmark.url);
    }

    #[test]
    fn test_hrefs_are_stored_as_written() {
        let (_temp, h) = hierarchy();
        let doc = concat!(
            "<DL><p>\n",
            "<DT><A HREF=\"https://example.com\">Bare host</A>\n",
            "<DT><A HREF=\" HTTPS://Docs.Example.org/A \">Mixed case</A>\n",
            "</DL><p>\n",
        );

        let summary = import_bookmarks(&h, doc).unwrap();
        assert_eq!(summary.bookmarks_added, 2);

        let tree = h.catalog().active_tree().unwrap();
        let urls: Vec<&str> = tree.bookmarks.iter().map(|b| b.url.as_str()).collect();
        assert_eq!(urls, vec!["https://example.com", "HTTPS://Docs.Example.org/A"]);
    }

    #[test]
    fn test_depth_is_bounded() {
        let (_temp, h) = hierarchy();
        let mut doc = String::new();
        for _ in 0..(MAX_DEPTH + 10) {
            doc.push_str("<DL><p>\n");
        }
        doc.push_str("<DT><A HREF=\"https://deep.example/\">Deep</A>\n");
        for _ in 0..(MAX_DEPTH + 10) {
            doc.push_str("</DL><p>\n");
        }
        doc.push_str("<DT><A HREF=\"https://shallow.example/\">Shallow</A>\n");

        let summary = import_bookmarks(&h, &doc).unwrap();
        assert_eq!(summary.bookmarks_added, 2);
    }
}
