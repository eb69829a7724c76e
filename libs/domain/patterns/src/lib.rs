// [libs/domain/patterns/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: PATTERN CONTEXT MASTER HUB (V4.0 - FORGE ALIGNED)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: AGREGACIÓN Y RETIRO CONCURRENTE DE PATRONES
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL STRATA: Dos contextos intercambiables frente al motor de
 *    búsqueda: prefijos (sondeo por bignum sobre el índice AVL) y
 *    expresiones regulares (barrido lineal bajo RwLock).
 * 2. RETIREMENT DRIVEN SHUTDOWN: El agotamiento del conjunto de
 *    patrones ES la señal de terminación; ningún canal de
 *    cancelación adicional participa.
 * 3. PROTOCOL LINES: Las líneas de dificultad, advertencia y descarte
 *    de patrones se emiten por stdout con el formato de protocolo
 *    que consume el operador.
 * =================================================================
 */

/// Enumeración de variantes de caja de un prefijo Base58.
pub mod case_iter;
/// Catálogo de fallos del estrato de patrones.
pub mod errors;
/// Contexto de prefijos: índice de intervalos + dificultad acumulada.
pub mod prefix_context;
/// Contexto de expresiones regulares bajo candado lector/escritor.
pub mod regex_context;

pub use case_iter::CaseVariantIterator;
pub use errors::PatternError;
pub use prefix_context::{PrefixContext, PrefixState};
pub use regex_context::{RegexContext, RegexProbeOutcome, RegexState};
