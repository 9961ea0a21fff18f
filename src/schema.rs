//! SQL text for the session-scoped scratch table.
//!
//! Assembled at compile time around the table-name constant. The table is
//! TEMP: each connection gets a private copy, created fresh per trial and
//! dropped automatically when the session ends.

/// Scratch table all strategies load into.
pub const TMPTABLE: &str = "tmptable";

/// DDL for the scratch table. TEMP scope makes creation idempotent across
/// trials regardless of how many prior sessions created and dropped it.
pub const CREATES: &str = const_format::concatcp!(
    "CREATE TEMP TABLE ",
    TMPTABLE,
    " (id NUMERIC, name VARCHAR, grp VARCHAR, ts TIMESTAMP);"
);

/// COPY initiation shared by both bulk strategies. Text format, tab
/// separated, empty string reserved as the null placeholder (unused by
/// the fixed dataset).
pub const COPIES: &str = const_format::concatcp!(
    "COPY ",
    TMPTABLE,
    " (id,name,grp,ts) FROM STDIN WITH NULL AS ''"
);

/// Readback used by the verifier.
pub const SELECTS: &str = const_format::concatcp!("SELECT * FROM ", TMPTABLE);

/// Placeholder INSERT shared by the parameterized and prepared strategies.
/// Parameters travel as text and the server casts them into the numeric
/// and timestamp columns, so the wire payload matches what the
/// quoted-literal variant sends.
pub const INSERTS: &str = const_format::concatcp!(
    "INSERT INTO ",
    TMPTABLE,
    " (id,name,grp,ts) VALUES ($1::TEXT::NUMERIC, $2, $3, $4::TEXT::TIMESTAMP)"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_session_scoped() {
        assert!(CREATES.starts_with("CREATE TEMP TABLE tmptable"));
    }

    #[test]
    fn creates_declares_four_columns() {
        assert_eq!(CREATES.matches(',').count(), 3);
        for column in ["id NUMERIC", "name VARCHAR", "grp VARCHAR", "ts TIMESTAMP"] {
            assert!(CREATES.contains(column));
        }
    }

    #[test]
    fn copy_reserves_empty_string_for_null() {
        assert!(COPIES.starts_with("COPY tmptable"));
        assert!(COPIES.ends_with("FROM STDIN WITH NULL AS ''"));
    }

    #[test]
    fn placeholder_insert_interpolates_nothing() {
        for n in 1..=4 {
            assert!(INSERTS.contains(&format!("${}", n)));
        }
        assert!(!INSERTS.contains('\''));
    }
}
