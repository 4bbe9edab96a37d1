use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::model::{AccessDataset, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced while turning a source file into an [`AccessDataset`].
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("cannot open {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Raw row shape shared by the CSV and JSON encodings
// ---------------------------------------------------------------------------

/// The source data ships with a `Pais` column; it is accepted as an alias
/// and normalised to `entity` on the way in.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Entidade", alias = "Pais")]
    entity: String,
    #[serde(rename = "Ano")]
    year: i32,
    #[serde(rename = "Percentual_Acesso")]
    access_percent: f64,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record {
            entity: raw.entity,
            year: raw.year,
            access_percent: raw.access_percent,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – delimited text with a header row (the shipped source format)
/// * `.json` – array of records with the same keys
pub fn load_file(path: &Path) -> Result<AccessDataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(DataLoadError::UnsupportedExtension(other.to_string())),
    };

    warn_out_of_range(&records);
    Ok(AccessDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Record>, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::MalformedRow {
            row: 1,
            reason: e.to_string(),
        })?
        .clone();
    let has = |name: &str| headers.iter().any(|h| h == name);
    if !has("Entidade") && !has("Pais") {
        return Err(DataLoadError::MissingColumn("Entidade"));
    }
    for col in ["Ano", "Percentual_Acesso"] {
        if !has(col) {
            return Err(DataLoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        // 1-based row numbers, counting the header line.
        let raw = result.map_err(|e| DataLoadError::MalformedRow {
            row: i + 2,
            reason: e.to_string(),
        })?;
        records.push(raw.into());
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "Pais": "Brazil", "Ano": 2000, "Percentual_Acesso": 60.0 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Record>, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text)?;
    Ok(raw.into_iter().map(Record::from).collect())
}

// ---------------------------------------------------------------------------
// Range check
// ---------------------------------------------------------------------------

/// The source never promises `[0, 100]`; keep such rows but surface them.
fn warn_out_of_range(records: &[Record]) {
    let out_of_range = records
        .iter()
        .filter(|r| !(0.0..=100.0).contains(&r.access_percent))
        .count();
    if out_of_range > 0 {
        log::warn!("{out_of_range} row(s) have an access percentage outside [0, 100]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_csv_with_pais_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "data.csv",
            "Pais,Ano,Percentual_Acesso\n\
             Brazil,2000,60.0\n\
             Angola,2000,30.5\n",
        );

        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].entity, "Brazil");
        assert_eq!(ds.records[0].year, 2000);
        assert_eq!(ds.records[1].access_percent, 30.5);
    }

    #[test]
    fn loads_csv_with_entidade_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "data.csv",
            "Entidade,Ano,Percentual_Acesso\nIndia,2010,76.3\n",
        );

        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].entity, "India");
    }

    #[test]
    fn loads_csv_with_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "data.csv",
            "Pais,Codigo,Ano,Percentual_Acesso\nBrazil,BRA,2000,60.0\n",
        );

        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].entity, "Brazil");
    }

    #[test]
    fn missing_entity_column_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", "Ano,Percentual_Acesso\n2000,60.0\n");

        let err = load_file(&path).unwrap_err();

        assert!(matches!(err, DataLoadError::MissingColumn("Entidade")));
    }

    #[test]
    fn missing_year_column_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", "Pais,Percentual_Acesso\nBrazil,60.0\n");

        let err = load_file(&path).unwrap_err();

        assert!(matches!(err, DataLoadError::MissingColumn("Ano")));
    }

    #[test]
    fn malformed_row_is_reported_with_its_line_number() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "data.csv",
            "Pais,Ano,Percentual_Acesso\n\
             Brazil,2000,60.0\n\
             Angola,not-a-year,30.0\n",
        );

        let err = load_file(&path).unwrap_err();

        match err {
            DataLoadError::MalformedRow { row, .. } => assert_eq!(row, 3),
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("does-not-exist.csv")).unwrap_err();

        assert!(matches!(err, DataLoadError::Io { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.txt", "Pais,Ano,Percentual_Acesso\n");

        let err = load_file(&path).unwrap_err();

        assert!(matches!(err, DataLoadError::UnsupportedExtension(ext) if ext == "txt"));
    }

    #[test]
    fn out_of_range_percentages_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "data.csv",
            "Pais,Ano,Percentual_Acesso\nAtlantis,2000,123.4\n",
        );

        let ds = load_file(&path).unwrap();

        assert_eq!(ds.records[0].access_percent, 123.4);
    }

    #[test]
    fn loads_json_records() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "data.json",
            r#"[
                { "Pais": "Brazil", "Ano": 2000, "Percentual_Acesso": 60.0 },
                { "Entidade": "Angola", "Ano": 2000, "Percentual_Acesso": 30.0 }
            ]"#,
        );

        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].entity, "Angola");
    }
}
