// [libs/domain/patterns/src/errors.rs]
// =================================================================
// APARATO: PATTERN ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DEL ESTRATO DE PATRONES
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los fallos posibles al preparar patrones de búsqueda.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// El prefijo excede la capacidad del iterador de variantes de
    /// caja (32 caracteres).
    #[error("Prefix '{prefix}' is too long")]
    PrefixTooLong {
        /// Prefijo rechazado.
        prefix: String,
    },
}
