use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CODE_HEADER: &str = "Número de artículo";
pub const DEFAULT_DESCRIPTION_HEADER: &str = "Descripción del artículo";
pub const DEFAULT_QUANTITY_HEADER: &str = "Cantidad de Etiquetas";

#[derive(Debug, Error)]
pub enum ColumnsError {
    #[error("failed to read column map {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid column map {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Header text identifying each input column. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    pub code: String,
    pub description: String,
    pub quantity: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE_HEADER.to_string(),
            description: DEFAULT_DESCRIPTION_HEADER.to_string(),
            quantity: DEFAULT_QUANTITY_HEADER.to_string(),
        }
    }
}

impl ColumnMap {
    /// Parse a JSON object such as `{"code": "Item", "quantity": "Qty"}`.
    /// Keys left out keep their default header.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ColumnsError> {
        let raw = fs::read_to_string(path).map_err(|source| ColumnsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ColumnsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_the_export_headers() {
        let map = ColumnMap::default();
        assert_eq!(map.code, "Número de artículo");
        assert_eq!(map.description, "Descripción del artículo");
        assert_eq!(map.quantity, "Cantidad de Etiquetas");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let map = ColumnMap::from_json(r#"{"code": "Item"}"#).unwrap();
        assert_eq!(map.code, "Item");
        assert_eq!(map.description, DEFAULT_DESCRIPTION_HEADER);
        assert_eq!(map.quantity, DEFAULT_QUANTITY_HEADER);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ColumnMap::from_json(r#"{"price": "Precio"}"#).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"quantity": "Qty", "description": "Desc"}}"#).unwrap();
        let map = ColumnMap::from_json_file(file.path()).unwrap();
        assert_eq!(map.quantity, "Qty");
        assert_eq!(map.description, "Desc");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = ColumnMap::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ColumnsError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
