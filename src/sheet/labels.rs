// Label sources: tabular rows and flat delimited strings
//
// Both sources produce the same thing, a lazy stream of raw
// `(name, start, end)` records. Index parsing and range checks happen in
// the resolver so the two sources cannot drift apart.

use super::SheetError;
use std::io::Read;

/// One raw label triple, fields still as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    /// 1-based position of the record in its source
    pub ordinal: usize,
    pub name: String,
    pub start: String,
    pub end: String,
}

impl LabelRecord {
    /// Create a record, trimming surrounding whitespace from every field
    pub fn new(ordinal: usize, name: &str, start: &str, end: &str) -> Self {
        Self {
            ordinal,
            name: name.trim().to_string(),
            start: start.trim().to_string(),
            end: end.trim().to_string(),
        }
    }
}

/// What to do with tokens left over after the last complete triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingGroup {
    /// Drop an incomplete trailing group without error
    #[default]
    Ignore,
    /// Report an incomplete trailing group as a malformed record
    Reject,
}

/// Options for the delimited-string label source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelOptions {
    /// Token separator
    pub delimiter: char,
    /// Policy for a trailing group of fewer than three tokens
    pub trailing_group: TrailingGroup,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            trailing_group: TrailingGroup::Ignore,
        }
    }
}

impl LabelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token separator
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the trailing-group policy
    pub fn with_trailing_group(mut self, policy: TrailingGroup) -> Self {
        self.trailing_group = policy;
        self
    }
}

/// Label records read from comma-separated rows, one record per line
///
/// No header row is expected. Fields past the third are ignored; rows with
/// fewer than three fields are malformed.
pub struct TableRecords<R: Read> {
    rows: csv::StringRecordsIntoIter<R>,
    ordinal: usize,
}

impl<R: Read> TableRecords<R> {
    pub fn new(reader: R) -> Self {
        let rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        Self { rows, ordinal: 0 }
    }
}

impl<R: Read> Iterator for TableRecords<R> {
    type Item = Result<LabelRecord, SheetError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(e.into())),
        };
        self.ordinal += 1;

        if row.len() < 3 {
            return Some(Err(SheetError::MalformedRecord {
                record: self.ordinal,
                fields: row.iter().map(str::to_string).collect(),
            }));
        }

        Some(Ok(LabelRecord::new(self.ordinal, &row[0], &row[1], &row[2])))
    }
}

/// Label records grouped from a flat delimited string
///
/// Tokens are collected in encounter order and every third token closes a
/// record. Leftover tokens at the end are handled by `TrailingGroup`.
pub struct DelimitedTriples<'a> {
    tokens: std::str::Split<'a, char>,
    pending: Vec<&'a str>,
    ordinal: usize,
    trailing_group: TrailingGroup,
    done: bool,
}

impl<'a> DelimitedTriples<'a> {
    pub fn new(text: &'a str, options: &LabelOptions) -> Self {
        Self {
            tokens: text.split(options.delimiter),
            pending: Vec::with_capacity(3),
            ordinal: 0,
            trailing_group: options.trailing_group,
            done: false,
        }
    }
}

impl<'a> Iterator for DelimitedTriples<'a> {
    type Item = Result<LabelRecord, SheetError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for token in self.tokens.by_ref() {
            self.pending.push(token);
            if self.pending.len() == 3 {
                self.ordinal += 1;
                let [name, start, end] = [self.pending[0], self.pending[1], self.pending[2]];
                let record = LabelRecord::new(self.ordinal, name, start, end);
                self.pending.clear();
                return Some(Ok(record));
            }
        }

        self.done = true;
        if self.pending.is_empty() || self.trailing_group == TrailingGroup::Ignore {
            return None;
        }

        Some(Err(SheetError::MalformedRecord {
            record: self.ordinal + 1,
            fields: self.pending.drain(..).map(str::to_string).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<I>(records: I) -> Vec<LabelRecord>
    where
        I: Iterator<Item = Result<LabelRecord, SheetError>>,
    {
        records.map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_record_trims_fields() {
        let record = LabelRecord::new(1, " walk ", " 0", "3 ");
        assert_eq!(record.name, "walk");
        assert_eq!(record.start, "0");
        assert_eq!(record.end, "3");
    }

    #[test]
    fn test_label_options_builder() {
        let options = LabelOptions::new()
            .with_delimiter(';')
            .with_trailing_group(TrailingGroup::Reject);

        assert_eq!(options.delimiter, ';');
        assert_eq!(options.trailing_group, TrailingGroup::Reject);
        assert_eq!(LabelOptions::default().delimiter, ',');
        assert_eq!(LabelOptions::default().trailing_group, TrailingGroup::Ignore);
    }

    #[test]
    fn test_table_records_in_order() {
        let records = collect(TableRecords::new("idle,0,1\njump,2,4\n".as_bytes()));

        assert_eq!(
            records,
            vec![
                LabelRecord::new(1, "idle", "0", "1"),
                LabelRecord::new(2, "jump", "2", "4"),
            ]
        );
    }

    #[test]
    fn test_table_records_ignore_extra_fields() {
        let records = collect(TableRecords::new("walk,0,3,loop,12\n".as_bytes()));
        assert_eq!(records, vec![LabelRecord::new(1, "walk", "0", "3")]);
    }

    #[test]
    fn test_table_records_quoted_name() {
        let records = collect(TableRecords::new("\"attack, heavy\",4,7\n".as_bytes()));
        assert_eq!(records[0].name, "attack, heavy");
    }

    #[test]
    fn test_table_records_short_row() {
        let mut records = TableRecords::new("idle,0,1\nbroken,2\n".as_bytes());

        assert!(records.next().unwrap().is_ok());
        match records.next().unwrap() {
            Err(SheetError::MalformedRecord { record, fields }) => {
                assert_eq!(record, 2);
                assert_eq!(fields, vec!["broken".to_string(), "2".to_string()]);
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn test_table_records_empty_input() {
        assert_eq!(TableRecords::new("".as_bytes()).count(), 0);
    }

    #[test]
    fn test_delimited_triples_grouping() {
        let options = LabelOptions::default();
        let records = collect(DelimitedTriples::new("idle,0,1,jump,2,4", &options));

        assert_eq!(
            records,
            vec![
                LabelRecord::new(1, "idle", "0", "1"),
                LabelRecord::new(2, "jump", "2", "4"),
            ]
        );
    }

    #[test]
    fn test_delimited_triples_ignore_trailing_group() {
        let options = LabelOptions::default();
        let records = collect(DelimitedTriples::new("walk,0,3,run,4", &options));

        assert_eq!(records, vec![LabelRecord::new(1, "walk", "0", "3")]);
    }

    #[test]
    fn test_delimited_triples_reject_trailing_group() {
        let options = LabelOptions::new().with_trailing_group(TrailingGroup::Reject);
        let mut records = DelimitedTriples::new("walk,0,3,run,4", &options);

        assert!(records.next().unwrap().is_ok());
        match records.next().unwrap() {
            Err(SheetError::MalformedRecord { record, fields }) => {
                assert_eq!(record, 2);
                assert_eq!(fields, vec!["run".to_string(), "4".to_string()]);
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
        assert!(records.next().is_none());
    }

    #[test]
    fn test_delimited_triples_custom_delimiter() {
        let options = LabelOptions::new().with_delimiter('|');
        let records = collect(DelimitedTriples::new("idle|0|1", &options));

        assert_eq!(records, vec![LabelRecord::new(1, "idle", "0", "1")]);
    }

    #[test]
    fn test_delimited_triples_empty_string() {
        let options = LabelOptions::default();
        assert_eq!(DelimitedTriples::new("", &options).count(), 0);

        // A lone empty token is still an incomplete group
        let strict = LabelOptions::new().with_trailing_group(TrailingGroup::Reject);
        assert!(DelimitedTriples::new("", &strict).next().unwrap().is_err());
    }

    #[test]
    fn test_delimited_triples_fused_after_done() {
        let options = LabelOptions::default();
        let mut records = DelimitedTriples::new("a,0,0", &options);

        assert!(records.next().is_some());
        assert!(records.next().is_none());
        assert!(records.next().is_none());
    }
}
