// [libs/core/codec-engine/src/errors.rs]
// =================================================================
// APARATO: CODEC ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DE CODIFICACIÓN
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los errores posibles durante la codificación y decodificación.
///
/// Este enum centraliza los fallos del estrato Base58Check, desde
/// caracteres fuera del alfabeto hasta checksums que no certifican.
#[derive(Error, Debug)]
pub enum CodecError {
    /// El texto contiene un carácter que no pertenece al alfabeto Base58,
    /// o su checksum de doble SHA-256 no coincide con el payload.
    ///
    /// Producido por el motor `bs58` durante `decode().with_check()`.
    #[error("Base58Check inválido: {0}")]
    Decode(#[from] bs58::decode::Error),

    /// El payload decodificado no tiene la longitud canónica esperada.
    ///
    /// Las direcciones P2PKH decodifican a 21 bytes (versión + hash160);
    /// un WIF de escalar completo decodifica a 33 bytes.
    #[error("longitud de payload inesperada: esperados {expected}, recibidos {got}")]
    PayloadLength {
        /// Longitud canónica requerida por el llamador.
        expected: usize,
        /// Longitud realmente decodificada.
        got: usize,
    },
}
