use std::path::Path;

use rusqlite::{params_from_iter, Connection, OpenFlags, Row};

use crate::corpus::{CorpusProvider, Document, TokenRecord};
use crate::errors::{CorpusError, Result};

const ANNOTATED_DOCUMENTS_SQL: &str = "
    SELECT id FROM text WHERE (orig_status > 0 OR reg_status > 0)
    ORDER BY id
";

const DOCUMENT_TOKENS_SQL: &str = "
    SELECT sentence_n, n, form_reg, postag_reg FROM token WHERE text_id = ?1
    ORDER BY sentence_n, n
";

/// Corpus stored in an SQLite database.
///
/// The database has a `text` table with columns `id`, `orig_status` and `reg_status`, and a
/// `token` table with columns `text_id`, `sentence_n`, `n`, `form_reg` and `postag_reg`.
pub struct SqliteCorpus {
    connection: Connection,
}

impl SqliteCorpus {
    /// Opens an existing database file read-only.
    ///
    /// # Errors
    ///
    /// If the file does not exist or cannot be opened, an error variant will be returned.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let connection = Connection::open_with_flags(path, flags).map_err(|e| CorpusError {
            operation: "open",
            sql: String::new(),
            params: path.display().to_string(),
            msg: e.to_string(),
        })?;
        Ok(Self::from_connection(connection))
    }

    /// Wraps an open connection.
    pub const fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    fn fetch_all<T, F>(
        &self,
        operation: &'static str,
        sql: &str,
        params: &[i64],
        f: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let corpus_error = |e: rusqlite::Error| CorpusError {
            operation,
            sql: sql.to_string(),
            params: format!("{params:?}"),
            msg: e.to_string(),
        };
        let mut stmt = self.connection.prepare(sql).map_err(corpus_error)?;
        let rows = stmt
            .query_map(params_from_iter(params), f)
            .map_err(corpus_error)?;
        let rows = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(corpus_error)?;
        Ok(rows)
    }
}

impl CorpusProvider for SqliteCorpus {
    fn list_annotated_documents(&self) -> Result<Vec<Document>> {
        self.fetch_all(
            "list_annotated_documents",
            ANNOTATED_DOCUMENTS_SQL,
            &[],
            |row| Ok(Document { id: row.get(0)? }),
        )
    }

    fn list_tokens(&self, document_id: i64) -> Result<Vec<TokenRecord>> {
        self.fetch_all("list_tokens", DOCUMENT_TOKENS_SQL, &[document_id], |row| {
            Ok(TokenRecord {
                sentence_index: row.get(0)?,
                position_index: row.get(1)?,
                raw_form: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                raw_gold_tag: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            })
        })
    }
}
