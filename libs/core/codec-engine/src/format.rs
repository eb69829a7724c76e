// [libs/core/codec-engine/src/format.rs]
/*!
 * =================================================================
 * APARATO: PROTOCOL ARTIFACT FORMATTER (V4.0 - ZERO-ALLOC PAYLOAD)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: TRANSFORMACIÓN DE CLAVES A BASE58CHECK
 *
 * VISION HIPER-HOLÍSTICA:
 * Implementa la derivación de direcciones P2PKH y del formato WIF
 * con ensamblado del payload sobre el Stack. La versión de red es
 * un parámetro explícito: mainnet (0/128), testnet (111/239) y
 * namecoin (52) comparten el mismo camino de código.
 * =================================================================
 */

use crate::base58check::encode_base58_check;
use crate::hashing::hash160;

/// Longitud canónica del payload de dirección: 1 byte versión + 20 bytes hash160.
pub const ADDRESS_PAYLOAD_SIZE: usize = 21;

/// Longitud canónica del payload WIF: 1 byte versión + escalar de 32 bytes.
pub const WIF_PAYLOAD_SIZE: usize = 33;

/**
 * Transforma un hash160 ya calculado en una dirección P2PKH.
 *
 * Camino caliente del modo regex: el trabajador ya posee el hash160
 * del punto público y solo necesita el texto final.
 */
#[must_use]
#[inline(always)]
pub fn address_from_hash160(address_version: u8, key_digest: &[u8; 20]) -> String {
    let mut address_payload = [0u8; ADDRESS_PAYLOAD_SIZE];
    address_payload[0] = address_version;
    address_payload[1..21].copy_from_slice(key_digest);

    encode_base58_check(&address_payload)
}

/**
 * Deriva la dirección P2PKH de una clave pública serializada.
 *
 * Acepta tanto la forma comprimida (33 bytes) como la Satoshi no
 * comprimida (65 bytes); el motor de búsqueda usa la segunda por
 * compatibilidad de cable con el cliente de referencia.
 */
#[must_use]
pub fn address_from_pubkey_octets(address_version: u8, pubkey_octets: &[u8]) -> String {
    address_from_hash160(address_version, &hash160(pubkey_octets))
}

/**
 * Codifica un escalar secreto en formato WIF.
 *
 * Payload: `versión_privada ‖ escalar big-endian de 32 bytes` envuelto
 * en Base58Check. El escalar conserva su anchura completa aunque tenga
 * bytes iniciales en cero.
 */
#[must_use]
pub fn wif_from_secret(private_version: u8, secret_scalar: &[u8; 32]) -> String {
    let mut wif_payload = [0u8; WIF_PAYLOAD_SIZE];
    wif_payload[0] = private_version;
    wif_payload[1..33].copy_from_slice(secret_scalar);

    encode_base58_check(&wif_payload)
}
