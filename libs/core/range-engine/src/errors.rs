// [libs/core/range-engine/src/errors.rs]
// =================================================================
// APARATO: RANGE SOLVER ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DE PROYECCIÓN DE PREFIJOS
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los fallos posibles al proyectar un prefijo al espacio numérico.
///
/// El texto de cada variante es la línea de protocolo que el shell
/// imprime ante el operador; el patrón afectado se descarta y la
/// búsqueda continúa con el resto del lote.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// El prefijo contiene un carácter fuera del alfabeto Base58
    /// (`0`, `O`, `I`, `l` o cualquier símbolo no alfanumérico).
    #[error("Invalid character '{character}' in prefix '{prefix}'")]
    InvalidCharacter {
        /// Carácter rechazado.
        character: char,
        /// Prefijo completo suministrado por el operador.
        prefix: String,
    },

    /// El prefijo no deja margen para los 4 bytes de checksum
    /// (menos de 6 dígitos Base58 libres) o acumula más de 19
    /// caracteres '1' iniciales.
    #[error("Prefix '{prefix}' is too long")]
    TooLong {
        /// Prefijo rechazado.
        prefix: String,
    },

    /// Ningún valor del espacio de la versión configurada puede
    /// producir el prefijo (p.ej. un primer carácter distinto de '1'
    /// con versión mainnet 0).
    #[error("Prefix '{prefix}' not possible")]
    NotPossible {
        /// Prefijo infactible.
        prefix: String,
    },
}
