// [libs/core/codec-engine/src/base58check.rs]
/*!
 * =================================================================
 * APARATO: BASE58CHECK CODEC (V4.1 - SOBERANO)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: TRANSFORMACIÓN PAYLOAD <-> TEXTO BASE58CHECK
 *
 * VISION HIPER-HOLÍSTICA:
 * Delegamos la aritmética de base y la gestión del checksum al motor
 * `bs58` (with_check), que implementa la misma semántica que el
 * protocolo de referencia: checksum = SHA256d(payload)[0..4] y un
 * carácter '1' por cada byte 0x00 inicial del payload.
 * =================================================================
 */

use crate::errors::CodecError;

/**
 * Codifica un payload arbitrario a texto Base58Check.
 *
 * # Logic:
 * 1. Calcula SHA256(SHA256(payload)) y adjunta los 4 primeros bytes.
 * 2. Convierte el blob resultante a base 58 por división sucesiva.
 * 3. Antepone un '1' por cada byte 0x00 inicial del payload.
 *
 * Para un payload de 25 bytes (dirección) la salida es de 33-34
 * caracteres; la longitud es variable para otros tamaños.
 */
#[must_use]
pub fn encode_base58_check(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/**
 * Decodifica texto Base58Check, certificando el checksum.
 *
 * # Errors:
 * Retorna [`CodecError::Decode`] ante caracteres fuera del alfabeto
 * o un checksum que no coincide con el payload reconstruido.
 */
pub fn decode_base58_check(encoded: &str) -> Result<Vec<u8>, CodecError> {
    Ok(bs58::decode(encoded).with_check(None).into_vec()?)
}

/**
 * Codifica bytes crudos a base 58 SIN checksum.
 *
 * Empleado por las certificaciones del solucionador de rangos para
 * proyectar los endpoints numéricos de un intervalo al espacio de
 * texto sin fabricar un checksum ficticio.
 */
#[must_use]
pub fn encode_base58_raw(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}
