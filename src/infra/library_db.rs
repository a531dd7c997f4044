//! Library documentation database access
//!
//! Reads the doxygen table of the library reference SQLite database into
//! JSON rows keyed by column name, in column order.

use std::path::Path;

use indexmap::IndexMap;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use serde_json::Value;

/// One database row, column name to value
pub type Row = IndexMap<String, Value>;

/// Query dumping the library table
const LIBRARIES_QUERY: &str = "SELECT * FROM doxygen";

/// Read every library row from the database at `path`
pub fn read_libraries(path: &Path) -> Result<Vec<Row>, rusqlite::Error> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    let mut stmt = conn.prepare(LIBRARIES_QUERY)?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    let rows = stmt.query_map([], |row| {
        let mut record = Row::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            record.insert(column.clone(), to_json(row.get_ref(idx)?));
        }
        Ok(record)
    })?;

    rows.collect()
}

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
