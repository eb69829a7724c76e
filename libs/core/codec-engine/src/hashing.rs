// [libs/core/codec-engine/src/hashing.rs]
/*!
 * =================================================================
 * APARATO: DIGEST ENGINE (V4.1 - HOT-LOOP READY)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: RESÚMENES CRIPTOGRÁFICOS DEL CAMINO DE DIRECCIÓN
 *
 * VISION HIPER-HOLÍSTICA:
 * Cada candidato del bucle caliente atraviesa exactamente un hash160
 * (y, en modo regex, un checksum de doble SHA-256 adicional): estas
 * dos funciones son el costo por iteración del enjambre completo.
 * Se apoyan en los motores Rust puros `sha2` y `ripemd`, sin FFI ni
 * asignaciones en el Heap: los resúmenes intermedios viven en el
 * Stack y el resultado se devuelve por valor como arreglo fijo.
 * =================================================================
 */

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// HASH160 del protocolo: $RIPEMD160(SHA256(data))$.
///
/// Comprime la clave pública serializada de un candidato a los 20
/// bytes que, junto al byte de versión, forman el payload de la
/// dirección P2PKH (y el objetivo de sondeo de los trabajadores).
#[inline(always)]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let compressed = Ripemd160::digest(Sha256::digest(data));

    let mut key_digest = [0u8; 20];
    key_digest.copy_from_slice(&compressed);
    key_digest
}

/// Doble SHA-256 del protocolo ($SHA256(SHA256(data))$).
///
/// Es la función de la que Base58Check extrae sus 4 bytes de checksum.
#[inline(always)]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first_pass = Sha256::digest(data);
    let second_pass = Sha256::digest(first_pass);

    let mut output = [0u8; 32];
    output.copy_from_slice(&second_pass);
    output
}
