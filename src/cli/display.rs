//! Load-phase console notices
//!
//! One line per input file as it is processed, plus the start banner and the
//! closing line of an aborted run. Message text is built by plain functions;
//! the `write_*` wrappers add color and write to any output.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::scenario::loader::{InputKind, LoadError};

/// Banner printed before anything is loaded.
pub const START_BANNER: &str = "--- INICIANDO ANALIZADOR DE MÉTRICAS ---";

/// Closing line of a run that stopped on a load error.
pub const ABORT_MESSAGE: &str =
    "❌ La ejecución ha finalizado debido a errores de carga de archivos.";

/// How a file is named in notices
const fn file_title(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Mission => "Archivo de misión",
        InputKind::Totals => "Archivo total",
    }
}

/// Success notice for a loaded file.
#[must_use]
pub fn loaded_message(kind: InputKind, path: &Path) -> String {
    format!(
        "✅ {} '{}' cargado correctamente.",
        file_title(kind),
        path.display()
    )
}

/// Failure notice naming the offending file.
#[must_use]
pub fn failure_message(err: &LoadError) -> String {
    let path = err.path().display();
    match err {
        LoadError::FileNotFound { kind, .. } => {
            format!("❌ Error: {} '{path}' no encontrado.", file_title(*kind))
        }
        LoadError::Read { source, .. } => {
            format!("❌ Error: No se pudo leer el archivo '{path}': {source}")
        }
        LoadError::InvalidFormat { .. } => {
            format!("❌ Error: El archivo '{path}' no es un JSON válido.")
        }
        LoadError::Schema { source, .. } => {
            format!("❌ Error: El archivo '{path}' no tiene la estructura esperada: {source}")
        }
        LoadError::NoCycles { .. } => {
            format!("❌ Error: El archivo de misión '{path}' no contiene ciclos.")
        }
    }
}

/// Write the start banner.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", START_BANNER.bold())
}

/// Write the success notice for a loaded file.
pub fn write_loaded<W: Write>(out: &mut W, kind: InputKind, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", loaded_message(kind, path).green())
}

/// Write the failure notice for a load error.
pub fn write_failure<W: Write>(out: &mut W, err: &LoadError) -> io::Result<()> {
    // A missing file is set apart from the preceding notices
    if matches!(err, LoadError::FileNotFound { .. }) {
        writeln!(out)?;
    }
    writeln!(out, "{}", failure_message(err).red())
}

/// Write the closing line of an aborted run.
pub fn write_abort<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", ABORT_MESSAGE.red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::Error as _;
    use std::path::PathBuf;

    #[test]
    fn test_loaded_message_mission() {
        let msg = loaded_message(InputKind::Mission, Path::new("metricas_mision_3.json"));
        assert_eq!(
            msg,
            "✅ Archivo de misión 'metricas_mision_3.json' cargado correctamente."
        );
    }

    #[test]
    fn test_loaded_message_totals() {
        let msg = loaded_message(InputKind::Totals, Path::new("metricas_total_3.json"));
        assert_eq!(
            msg,
            "✅ Archivo total 'metricas_total_3.json' cargado correctamente."
        );
    }

    #[test]
    fn test_not_found_message_names_the_file() {
        let err = LoadError::FileNotFound {
            kind: InputKind::Totals,
            path: PathBuf::from("metricas_total_9.json"),
        };
        assert_eq!(
            failure_message(&err),
            "❌ Error: Archivo total 'metricas_total_9.json' no encontrado."
        );
    }

    #[test]
    fn test_invalid_format_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::InvalidFormat {
            kind: InputKind::Mission,
            path: PathBuf::from("metricas_mision_3.json"),
            source,
        };
        assert_eq!(
            failure_message(&err),
            "❌ Error: El archivo 'metricas_mision_3.json' no es un JSON válido."
        );
    }

    #[test]
    fn test_schema_message_includes_detail() {
        let err = LoadError::Schema {
            kind: InputKind::Mission,
            path: PathBuf::from("metricas_mision_3.json"),
            source: serde_json::Error::custom("missing field `ciclo`"),
        };
        let msg = failure_message(&err);
        assert!(msg.contains("metricas_mision_3.json"));
        assert!(msg.contains("missing field `ciclo`"));
    }

    #[test]
    fn test_no_cycles_message() {
        let err = LoadError::NoCycles {
            path: PathBuf::from("metricas_mision_3.json"),
        };
        assert!(failure_message(&err).contains("no contiene ciclos"));
    }

    #[test]
    fn test_not_found_notice_is_set_apart() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_failure(
            &mut out,
            &LoadError::FileNotFound {
                kind: InputKind::Mission,
                path: PathBuf::from("m.json"),
            },
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n❌ Error: Archivo de misión 'm.json' no encontrado.\n"
        );
    }

    #[test]
    fn test_other_failures_follow_directly() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_failure(
            &mut out,
            &LoadError::NoCycles {
                path: PathBuf::from("m.json"),
            },
        )
        .unwrap();

        assert!(String::from_utf8(out).unwrap().starts_with("❌ Error:"));
    }

    #[test]
    fn test_header_and_abort_lines() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_header(&mut out).unwrap();
        write_loaded(&mut out, InputKind::Totals, Path::new("t.json")).unwrap();
        write_abort(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(&format!("\n{START_BANNER}\n")));
        assert!(text.contains("✅ Archivo total 't.json' cargado correctamente."));
        assert!(text.ends_with(&format!("\n{ABORT_MESSAGE}\n")));
    }
}
