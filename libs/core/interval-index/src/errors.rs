// [libs/core/interval-index/src/errors.rs]
// =================================================================
// APARATO: INTERVAL INDEX ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DEL ÍNDICE DE INTERVALOS
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use std::sync::Arc;
use thiserror::Error;

/// Define los fallos posibles al mutar el índice de intervalos.
#[derive(Error, Debug, Clone)]
pub enum IndexError {
    /// El intervalo nuevo se solapa con uno ya indexado.
    ///
    /// El árbol no se muta; el llamador decide si descartar el patrón
    /// entrante o revertir el lote al que pertenece.
    #[error("overlaps '{existing_pattern}'")]
    Overlap {
        /// Patrón del intervalo ya residente que produce el conflicto.
        existing_pattern: Arc<str>,
    },
}
