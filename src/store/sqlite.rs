use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

const FOLDER_COLUMNS: &str = "id, name, parent_id, sort_order, is_deleted, created_at";
const BOOKMARK_COLUMNS: &str =
    "id, title, url, description, folder_id, sort_order, is_deleted, created_at";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

// Fixed width so that text ordering matches time ordering.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn folder_from_row(row: &Row<'_>) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
        parent_id: row.get(2)?,
        sort_order: row.get(3)?,
        is_deleted: row.get(4)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

fn bookmark_from_row(row: &Row<'_>) -> rusqlite::Result<Bookmark> {
    Ok(Bookmark {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        description: row.get(3)?,
        folder_id: row.get(4)?,
        sort_order: row.get(5)?,
        is_deleted: row.get(6)?,
        created_at: parse_datetime(&row.get::<_, String>(7)?),
    })
}

fn query_folder(conn: &Connection, id: i64) -> Result<Option<Folder>> {
    conn.query_row(
        &format!("SELECT {FOLDER_COLUMNS} FROM folders WHERE id = ?1"),
        params![id],
        folder_from_row,
    )
    .optional()
    .map_err(Error::from)
}

fn query_bookmark(conn: &Connection, id: i64) -> Result<Option<Bookmark>> {
    conn.query_row(
        &format!("SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE id = ?1"),
        params![id],
        bookmark_from_row,
    )
    .optional()
    .map_err(Error::from)
}

/// Escapes `LIKE` wildcards so user input only matches literally.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Folder operations

    fn create_folder(&self, folder: &NewFolder) -> Result<Folder> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO folders (name, parent_id, sort_order, is_deleted, created_at)
             VALUES (?1, ?2, 0, 0, ?3)",
            params![
                folder.name,
                folder.parent_id,
                format_datetime(&folder.created_at)
            ],
        )?;

        query_folder(&conn, conn.last_insert_rowid())?.ok_or(Error::NotFound)
    }

    fn get_folder(&self, id: i64) -> Result<Option<Folder>> {
        query_folder(&self.conn(), id)
    }

    fn find_active_folder(&self, name: &str, parent_id: Option<i64>) -> Result<Option<Folder>> {
        let conn = self.conn();
        conn.query_row(
            &format!(
                "SELECT {FOLDER_COLUMNS} FROM folders
                 WHERE name = ?1 AND parent_id IS ?2 AND is_deleted = 0
                 ORDER BY id LIMIT 1"
            ),
            params![name, parent_id],
            folder_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_folders(&self, state: RecordState) -> Result<Vec<Folder>> {
        let order = match state {
            RecordState::Active => "sort_order ASC, name ASC, id ASC",
            RecordState::Deleted => "name ASC, id ASC",
        };
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE is_deleted = ?1 ORDER BY {order}"
        ))?;

        let rows = stmt.query_map(params![state.flag()], folder_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn list_active_child_folder_ids(&self, parent_id: i64) -> Result<Vec<i64>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT id FROM folders WHERE parent_id = ?1 AND is_deleted = 0")?;

        let rows = stmt.query_map(params![parent_id], |row| row.get(0))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_folder(&self, folder: &Folder) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE folders SET name = ?1, parent_id = ?2 WHERE id = ?3",
            params![folder.name, folder.parent_id, folder.id],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn set_folder_order(&self, ordered_ids: &[i64]) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        for (index, id) in ordered_ids.iter().enumerate() {
            tx.execute(
                "UPDATE folders SET sort_order = ?1 WHERE id = ?2",
                params![index as i64, id],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn soft_delete_folders(&self, ids: &[i64]) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        for id in ids {
            tx.execute(
                "UPDATE bookmarks SET is_deleted = 1 WHERE folder_id = ?1",
                params![id],
            )?;
            tx.execute(
                "UPDATE folders SET is_deleted = 1 WHERE id = ?1",
                params![id],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn restore_folder(&self, id: i64) -> Result<bool> {
        let rows = self.conn().execute(
            "UPDATE folders SET is_deleted = 0 WHERE id = ?1",
            params![id],
        )?;
        Ok(rows > 0)
    }

    fn purge_folder(&self, id: i64) -> Result<bool> {
        let rows = self.conn().execute(
            "DELETE FROM folders WHERE id = ?1 AND is_deleted = 1",
            params![id],
        )?;
        Ok(rows > 0)
    }

    // Bookmark operations

    fn create_bookmark(&self, bookmark: &NewBookmark) -> Result<Bookmark> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO bookmarks (title, url, description, folder_id, sort_order, is_deleted, created_at)
             VALUES (?1, ?2, ?3, ?4,
                     (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM bookmarks WHERE folder_id IS ?4),
                     0, ?5)",
            params![
                bookmark.title,
                bookmark.url,
                bookmark.description,
                bookmark.folder_id,
                format_datetime(&bookmark.created_at),
            ],
        )?;

        query_bookmark(&conn, conn.last_insert_rowid())?.ok_or(Error::NotFound)
    }

    fn get_bookmark(&self, id: i64) -> Result<Option<Bookmark>> {
        query_bookmark(&self.conn(), id)
    }

    fn list_bookmarks(&self, state: RecordState) -> Result<Vec<Bookmark>> {
        let order = match state {
            RecordState::Active => "sort_order ASC, created_at ASC, id ASC",
            RecordState::Deleted => "created_at DESC, id DESC",
        };
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE is_deleted = ?1 ORDER BY {order}"
        ))?;

        let rows = stmt.query_map(params![state.flag()], bookmark_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_bookmark(&self, bookmark: &Bookmark) -> Result<()> {
        // A bookmark moved to another folder is appended after its new siblings.
        let rows = self.conn().execute(
            "UPDATE bookmarks SET
                 title = ?1,
                 url = ?2,
                 description = ?3,
                 sort_order = CASE
                     WHEN folder_id IS ?4 THEN sort_order
                     ELSE (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM bookmarks WHERE folder_id IS ?4)
                 END,
                 folder_id = ?4
             WHERE id = ?5",
            params![
                bookmark.title,
                bookmark.url,
                bookmark.description,
                bookmark.folder_id,
                bookmark.id
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn set_bookmark_order(&self, ordered_ids: &[i64]) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        for (index, id) in ordered_ids.iter().enumerate() {
            tx.execute(
                "UPDATE bookmarks SET sort_order = ?1 WHERE id = ?2",
                params![index as i64, id],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn soft_delete_bookmark(&self, id: i64) -> Result<bool> {
        let rows = self.conn().execute(
            "UPDATE bookmarks SET is_deleted = 1 WHERE id = ?1",
            params![id],
        )?;
        Ok(rows > 0)
    }

    fn restore_bookmark(&self, id: i64) -> Result<bool> {
        let rows = self.conn().execute(
            "UPDATE bookmarks SET is_deleted = 0 WHERE id = ?1",
            params![id],
        )?;
        Ok(rows > 0)
    }

    fn purge_bookmark(&self, id: i64) -> Result<bool> {
        let rows = self.conn().execute(
            "DELETE FROM bookmarks WHERE id = ?1 AND is_deleted = 1",
            params![id],
        )?;
        Ok(rows > 0)
    }

    fn insert_bookmarks_if_absent(&self, bookmarks: &[NewBookmark]) -> Result<usize> {
        if bookmarks.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn();
        let tx = conn.transaction()?;
        let mut inserted = 0;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO bookmarks (title, url, description, folder_id, sort_order, is_deleted, created_at)
                 SELECT ?1, ?2, ?3, ?4,
                        (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM bookmarks WHERE folder_id IS ?4),
                        0, ?5
                 WHERE NOT EXISTS (SELECT 1 FROM bookmarks WHERE url = ?2 AND folder_id IS ?4)",
            )?;

            for bookmark in bookmarks {
                inserted += stmt.execute(params![
                    bookmark.title,
                    bookmark.url,
                    bookmark.description,
                    bookmark.folder_id,
                    format_datetime(&bookmark.created_at),
                ])?;
            }
        }

        tx.commit()?;
        Ok(inserted)
    }

    fn search_bookmarks(&self, query: &str, limit: i32) -> Result<Vec<Bookmark>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks
             WHERE is_deleted = 0
               AND (title LIKE ?1 ESCAPE '\\' OR url LIKE ?1 ESCAPE '\\')
             ORDER BY created_at DESC, id DESC
             LIMIT ?2"
        ))?;

        let rows = stmt.query_map(params![like_pattern(query), limit], bookmark_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // Trash

    fn empty_trash(&self) -> Result<TrashPurge> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let folders = tx.execute("DELETE FROM folders WHERE is_deleted = 1", [])?;
        let bookmarks = tx.execute("DELETE FROM bookmarks WHERE is_deleted = 1", [])?;

        tx.commit()?;
        Ok(TrashPurge { folders, bookmarks })
    }

    // Settings

    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.conn()
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn list_settings(&self) -> Result<Vec<Setting>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT key, value FROM settings ORDER BY key")?;

        let rows = stmt.query_map([], |row| {
            Ok(Setting {
                key: row.get(0)?,
                value: row.get(1)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn put_setting(&self, setting: &Setting) -> Result<()> {
        self.conn().execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![setting.key, setting.value],
        )?;
        Ok(())
    }

    fn insert_setting_if_absent(&self, setting: &Setting) -> Result<bool> {
        let rows = self.conn().execute(
            "INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)",
            params![setting.key, setting.value],
        )?;
        Ok(rows > 0)
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}
