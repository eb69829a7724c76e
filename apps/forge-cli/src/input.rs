// [apps/forge-cli/src/input.rs]
/*!
 * =================================================================
 * APARATO: PATTERN INPUT READER (V4.0 - SOBERANO)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO DE ENTRADA)
 * RESPONSABILIDAD: LECTURA DE LOTES DE PATRONES DESDE FICHERO/STDIN
 *
 * # Formato:
 * Registros delimitados por salto de línea (LF o CRLF); las líneas
 * vacías se omiten. El nombre de fichero "-" designa stdin.
 * =================================================================
 */

use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Lee el lote de patrones de un fichero (o de stdin con `"-"`).
pub fn read_pattern_file(path: &str) -> io::Result<Vec<String>> {
    if path == "-" {
        read_pattern_lines(io::stdin().lock())
    } else {
        read_pattern_lines(BufReader::new(File::open(path)?))
    }
}

/// Extrae un patrón por línea, tolerando CRLF y descartando vacíos.
fn read_pattern_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut patterns = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let record = line.trim_end_matches('\r');
        if !record.is_empty() {
            patterns.push(record.to_string());
        }
    }
    Ok(patterns)
}
