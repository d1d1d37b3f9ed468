//! SQLite-backed addiction store.
//!
//! Each addiction is one row in `addictions`; its relapse log lives in
//! `relapses`, ordered by insertion sequence. Upserts replace the whole
//! record inside a transaction.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, migrations, AddictionStore};
use crate::addiction::{Addiction, AddictionKind, ColorTag, Losses};
use crate::error::{DatabaseError, Result};

/// SQLite database for addiction records.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data_dir>/cleanslate.db`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("cleanslate.db");
        Self::open_at(&path)
    }

    /// Open (or create) a database file at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened database");
        Self::init(conn)
    }

    /// Open an in-memory database.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrations::migrate(&conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn get(&self, id: &str) -> Result<Option<Addiction>> {
        let row = self
            .conn
            .query_row(
                &format!("{SELECT_ADDICTION} WHERE id = ?1"),
                params![id],
                AddictionRow::from_row,
            )
            .optional()?;
        match row {
            Some(row) => Ok(Some(self.hydrate(row)?)),
            None => Ok(None),
        }
    }

    fn relapses_for(&self, id: &str) -> Result<Vec<DateTime<Utc>>> {
        let mut stmt = self.conn.prepare(
            "SELECT occurred_at FROM relapses WHERE addiction_id = ?1 ORDER BY seq",
        )?;
        let rows = stmt.query_map(params![id], |row| row.get::<_, String>(0))?;

        let mut relapses = Vec::new();
        for raw in rows {
            relapses.push(parse_timestamp("relapses", &raw?)?);
        }
        Ok(relapses)
    }

    fn hydrate(&self, row: AddictionRow) -> Result<Addiction> {
        let relapses = self.relapses_for(&row.id)?;
        let start_date = parse_timestamp("addictions", &row.start_date)?;
        let kind = row.kind.parse::<AddictionKind>().map_err(|e| DatabaseError::CorruptRow {
            table: "addictions".into(),
            message: e.to_string(),
        })?;
        Ok(Addiction {
            id: row.id,
            name: row.name,
            kind,
            category: row.category,
            emoji: row.emoji,
            color: ColorTag::parse_lossy(&row.color),
            losses: Losses {
                money: row.money,
                time: row.time_loss,
                event: row.event,
            },
            start_date,
            relapses,
        })
    }
}

const SELECT_ADDICTION: &str =
    "SELECT id, name, kind, category, emoji, color, money, time_loss, event, start_date
     FROM addictions";

struct AddictionRow {
    id: String,
    name: String,
    kind: String,
    category: String,
    emoji: String,
    color: String,
    money: Option<f64>,
    time_loss: Option<String>,
    event: Option<String>,
    start_date: String,
}

impl AddictionRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            kind: row.get(2)?,
            category: row.get(3)?,
            emoji: row.get(4)?,
            color: row.get(5)?,
            money: row.get(6)?,
            time_loss: row.get(7)?,
            event: row.get(8)?,
            start_date: row.get(9)?,
        })
    }
}

fn parse_timestamp(table: &str, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            DatabaseError::CorruptRow {
                table: table.to_string(),
                message: format!("bad timestamp '{raw}': {e}"),
            }
            .into()
        })
}

fn kind_str(kind: AddictionKind) -> &'static str {
    match kind {
        AddictionKind::Vice => "vice",
        AddictionKind::Habit => "habit",
    }
}

impl AddictionStore for Database {
    fn load_all(&self) -> Result<Vec<Addiction>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_ADDICTION} ORDER BY seq"))?;
        let rows = stmt
            .query_map([], AddictionRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(|row| self.hydrate(row)).collect()
    }

    fn upsert(&mut self, addiction: &Addiction) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO addictions
                (id, name, kind, category, emoji, color, money, time_loss, event, start_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                kind = excluded.kind,
                category = excluded.category,
                emoji = excluded.emoji,
                color = excluded.color,
                money = excluded.money,
                time_loss = excluded.time_loss,
                event = excluded.event,
                start_date = excluded.start_date",
            params![
                addiction.id,
                addiction.name,
                kind_str(addiction.kind),
                addiction.category,
                addiction.emoji,
                addiction.color.as_str(),
                addiction.losses.money,
                addiction.losses.time,
                addiction.losses.event,
                addiction.start_date.to_rfc3339(),
            ],
        )?;

        tx.execute(
            "DELETE FROM relapses WHERE addiction_id = ?1",
            params![addiction.id],
        )?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO relapses (addiction_id, occurred_at) VALUES (?1, ?2)",
            )?;
            for at in &addiction.relapses {
                insert.execute(params![addiction.id, at.to_rfc3339()])?;
            }
        }
        tx.commit()?;

        tracing::debug!(
            id = %addiction.id,
            relapses = addiction.relapses.len(),
            "upserted addiction"
        );
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM relapses WHERE addiction_id = ?1", params![id])?;
        let removed = tx.execute("DELETE FROM addictions WHERE id = ?1", params![id])?;
        tx.commit()?;

        tracing::debug!(id, removed, "deleted addiction");
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addiction::NewAddiction;
    use chrono::{Duration, TimeZone};

    fn sample(category: &str) -> Addiction {
        Addiction::new(NewAddiction {
            category: category.into(),
            kind: AddictionKind::Habit,
            color: ColorTag::Purple,
            losses: Losses {
                money: Some(120.5),
                time: Some("2 hours".into()),
                event: None,
            },
            start_date: Utc.with_ymd_and_hms(2024, 4, 1, 7, 30, 0).unwrap(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn record_and_reload() {
        let mut db = Database::open_memory().unwrap();
        let mut a = sample("gaming");
        a.record_relapse(a.start_date + Duration::days(4));
        a.record_relapse(a.start_date + Duration::days(2));
        db.upsert(&a).unwrap();

        let loaded = db.load_all().unwrap();
        assert_eq!(loaded, vec![a.clone()]);
        // insertion order, not chronological
        assert!(loaded[0].relapses[0] > loaded[0].relapses[1]);
        assert_eq!(db.get(&a.id).unwrap(), Some(a));
    }

    #[test]
    fn upsert_replaces_relapse_log() {
        let mut db = Database::open_memory().unwrap();
        let mut a = sample("shopping");
        a.record_relapse(a.start_date + Duration::days(1));
        db.upsert(&a).unwrap();

        a.restart(a.start_date + Duration::days(9));
        a.name = "Online shopping".into();
        db.upsert(&a).unwrap();

        let loaded = db.get(&a.id).unwrap().unwrap();
        assert!(loaded.relapses.is_empty());
        assert_eq!(loaded.name, "Online shopping");
        assert_eq!(loaded.start_date, a.start_date);
        assert_eq!(db.load_all().unwrap().len(), 1);
    }

    #[test]
    fn load_all_keeps_creation_order() {
        let mut db = Database::open_memory().unwrap();
        let first = sample("alcohol");
        let second = sample("tobacco");
        db.upsert(&first).unwrap();
        db.upsert(&second).unwrap();
        db.upsert(&first).unwrap();

        let ids: Vec<String> = db.load_all().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn delete_removes_relapses() {
        let mut db = Database::open_memory().unwrap();
        let mut a = sample("food");
        a.record_relapse(a.start_date);
        db.upsert(&a).unwrap();

        assert!(db.delete(&a.id).unwrap());
        assert!(!db.delete(&a.id).unwrap());
        let orphans: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM relapses", [], |r| r.get(0))
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn unknown_color_loads_as_blue() {
        let db = Database::open_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO addictions (id, name, kind, category, emoji, color, start_date)
                 VALUES ('x', 'X', 'vice', 'other', '💊', 'teal', '2024-01-01T00:00:00+00:00')",
                [],
            )
            .unwrap();
        let loaded = db.get("x").unwrap().unwrap();
        assert_eq!(loaded.color, ColorTag::Blue);
    }

    #[test]
    fn corrupt_timestamp_is_reported() {
        let db = Database::open_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO addictions (id, name, kind, category, emoji, start_date)
                 VALUES ('bad', 'B', 'vice', 'other', '💊', 'yesterday')",
                [],
            )
            .unwrap();
        assert!(db.load_all().is_err());
    }
}
