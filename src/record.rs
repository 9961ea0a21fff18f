use super::*;

/// One synthetic row: four text-encoded fields in column order.
///
/// Immutable once generated. Every record in the dataset carries the same
/// fixed values, so any difference between strategies is protocol cost,
/// never data cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub grp: String,
    pub ts: String,
}

impl Record {
    /// The fixed synthetic row shared by every trial.
    pub fn synthetic() -> Self {
        Self {
            id: String::from("123456789"),
            name: String::from("jsmith"),
            grp: String::from("usrgrp"),
            ts: String::from("2013-09-25 00:00:01"),
        }
    }

    /// Tab-separated, newline-terminated line in column order.
    pub fn encodes(&self) -> String {
        format!("{}\t{}\t{}\t{}\n", self.id, self.name, self.grp, self.ts)
    }

    /// Single-row INSERT with the field values spliced in as quoted
    /// literals.
    ///
    /// No escaping is performed. This is the worst-practice baseline the
    /// benchmark exists to compare against, kept unsafe on purpose: a field
    /// containing a quote character would break the statement. The fixed
    /// dataset contains none. Never use this outside the benchmark.
    pub fn inserts(&self) -> String {
        format!(
            "INSERT INTO {} (id,name,grp,ts) VALUES ('{}','{}','{}','{}')",
            TMPTABLE, self.id, self.name, self.grp, self.ts
        )
    }
}

/// tab-delimited line isomorphism
impl TryFrom<&str> for Record {
    type Error = anyhow::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let ref mut fields = line.trim_end_matches('\n').split('\t');
        let mut take = || {
            fields
                .next()
                .map(String::from)
                .ok_or_else(|| anyhow::anyhow!("broken delimiter"))
        };
        let record = Self {
            id: take()?,
            name: take()?,
            grp: take()?,
            ts: take()?,
        };
        match fields.next() {
            Some(extra) => Err(anyhow::anyhow!("unexpected field: {}", extra)),
            None => Ok(record),
        }
    }
}

/// The full synthetic dataset: a fixed-length, read-only sequence of
/// identical records, regenerated identically for every run. Generated
/// once per process and shared by every trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset(Vec<Record>);

impl Dataset {
    /// Generate the fixed dataset. Pure and deterministic; never fails.
    pub fn synthetic(config: &Config) -> Self {
        Self(vec![Record::synthetic(); config.rows])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }
    /// Serialize every record into one contiguous buffer, one line per row.
    pub fn encodes(&self) -> String {
        self.iter().map(Record::encodes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_roundtrip_is_identity() {
        let ref record = Record::synthetic();
        let line = record.encodes();
        assert_eq!(Record::try_from(line.as_str()).unwrap(), *record);
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(Record::try_from("a\tb\tc").is_err());
    }

    #[test]
    fn rejects_extra_fields() {
        assert!(Record::try_from("a\tb\tc\td\te").is_err());
    }

    #[test]
    fn dataset_has_fixed_shape() {
        let config = Config::default();
        let dataset = Dataset::synthetic(&config);
        assert_eq!(dataset.len(), config.rows);
        assert!(dataset.iter().all(|r| *r == Record::synthetic()));
    }

    #[test]
    fn buffer_has_one_line_per_row() {
        let config = Config::default();
        let buffer = Dataset::synthetic(&config).encodes();
        assert_eq!(buffer.lines().count(), config.rows);
        assert!(buffer.ends_with('\n'));
    }

    #[test]
    fn naive_insert_splices_quoted_literals() {
        assert_eq!(
            Record::synthetic().inserts(),
            "INSERT INTO tmptable (id,name,grp,ts) VALUES ('123456789','jsmith','usrgrp','2013-09-25 00:00:01')"
        );
    }
}
