// [libs/domain/search-engine/src/reporter.rs]
/*!
 * =================================================================
 * APARATO: MATCH REPORTER SEAM (V4.0 - SOBERANO)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: COSTURA ENTRE EL MOTOR Y EL ESTRATO DE SALIDA
 *
 * VISION HIPER-HOLÍSTICA:
 * El motor de búsqueda no conoce el formato de consola: entrega un
 * registro completo (patrón, dirección, WIF y material hexadecimal)
 * al manejador inyectado. El shell instala el impresor de protocolo;
 * las certificaciones instalan recolectores en memoria.
 * =================================================================
 */

use secp256k1::{PublicKey, SecretKey};

use vforge_core_codec::format::{address_from_pubkey_octets, wif_from_secret};

/// Registro inmutable de una coincidencia confirmada.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    /// Patrón lógico del operador que produjo la coincidencia.
    pub pattern: String,
    /// Dirección P2PKH codificada en Base58Check.
    pub address: String,
    /// Clave privada en formato WIF.
    pub wif: String,
    /// Clave pública SEC1 no comprimida (0x04 ‖ X ‖ Y).
    pub public_octets: [u8; 65],
    /// Escalar secreto big-endian de anchura completa.
    pub secret_octets: [u8; 32],
}

impl MatchRecord {
    /// Ensambla el registro derivando dirección y WIF del par hallado.
    #[must_use]
    pub fn assemble(
        pattern: &str,
        secret: &SecretKey,
        point: &PublicKey,
        address_version: u8,
        private_version: u8,
    ) -> Self {
        let public_octets = point.serialize_uncompressed();
        let secret_octets = secret.secret_bytes();
        Self {
            pattern: pattern.to_string(),
            address: address_from_pubkey_octets(address_version, &public_octets),
            wif: wif_from_secret(private_version, &secret_octets),
            public_octets,
            secret_octets,
        }
    }
}

/**
 * Trait de gestión de coincidencias (costura SSS del monorepo).
 *
 * La invocación ocurre con el candado de contexto retenido: la
 * emisión y el retiro del patrón son atómicos frente al resto de
 * trabajadores, y el orden de los bloques de salida queda serializado.
 */
pub trait MatchReporter: Send + Sync {
    /// Procesa una coincidencia confirmada contra el conjunto de patrones.
    fn on_match(&self, record: &MatchRecord);
}
