// [libs/core/codec-engine/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: CODEC MASTER HUB (V4.0 - FORGE ALIGNED)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE CODIFICACIÓN BASE58CHECK
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SINGLE AUTHORITY: Toda transformación binario <-> Base58 del
 *    monorepo fluye por este estrato; ningún otro aparato toca el
 *    alfabeto directamente.
 * 2. NOMINAL PURITY: Erradicación de abreviaciones en la API pública.
 * 3. HYGIENE: Cero advertencias de compilación y RustDoc completo.
 *
 * # Mathematical Proof (Encoding Integrity):
 * Base58Check adjunta SHA256(SHA256(payload))[0..4] antes de la
 * conversión de base, de modo que cualquier corrupción de un solo
 * carácter es detectable con probabilidad 1 - 2^-32.
 * =================================================================
 */

/// Constantes del alfabeto Base58 y mapas derivados (inverso, caja).
pub mod alphabet;
/// Codificación y decodificación Base58Check sobre el motor `bs58`.
pub mod base58check;
/// Catálogo de fallos de codificación del sistema.
pub mod errors;
/// Formateo de artefactos del protocolo (direcciones P2PKH, WIF).
pub mod format;
/// Motores de resumen (Digest) Bitcoin Standard (Hash160, SHA256d).
pub mod hashing;

pub use errors::CodecError;
