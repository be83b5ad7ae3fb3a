pub const SCHEMA: &str = r#"
-- Folders form a forest; parent_id NULL = root level
CREATE TABLE IF NOT EXISTS folders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    parent_id INTEGER REFERENCES folders(id) ON DELETE SET NULL,
    sort_order INTEGER NOT NULL DEFAULT 0,
    is_deleted INTEGER NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now'))
);

-- Bookmarks; folder_id NULL = root level
CREATE TABLE IF NOT EXISTS bookmarks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    url TEXT NOT NULL,
    description TEXT,
    folder_id INTEGER REFERENCES folders(id) ON DELETE SET NULL,
    sort_order INTEGER NOT NULL DEFAULT 0,
    is_deleted INTEGER NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now'))
);

-- Owner credentials and internal secrets
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_folders_parent ON folders(parent_id) WHERE is_deleted = 0;
CREATE INDEX IF NOT EXISTS idx_folders_deleted ON folders(is_deleted);
CREATE INDEX IF NOT EXISTS idx_folders_sort ON folders(sort_order ASC, name ASC) WHERE is_deleted = 0;
CREATE INDEX IF NOT EXISTS idx_bookmarks_folder ON bookmarks(folder_id) WHERE is_deleted = 0;
CREATE INDEX IF NOT EXISTS idx_bookmarks_deleted ON bookmarks(is_deleted);
CREATE INDEX IF NOT EXISTS idx_bookmarks_sort ON bookmarks(sort_order ASC, created_at ASC) WHERE is_deleted = 0;
CREATE INDEX IF NOT EXISTS idx_bookmarks_created ON bookmarks(created_at DESC);
CREATE INDEX IF NOT EXISTS idx_bookmarks_url_folder ON bookmarks(url, folder_id);
"#;
