// [libs/domain/search-engine/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: SEARCH ENGINE MASTER HUB (V4.0 - FORGE ALIGNED)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: ORQUESTACIÓN DE BUCLES CALIENTES DE BÚSQUEDA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. INCREMENTAL STRATA: Un trabajador reutiliza una clave aleatoria
 *    durante hasta un millón de candidatos, avanzando el punto por
 *    UNA adición de generador en lugar de una multiplicación escalar
 *    completa por candidato.
 * 2. LOCK HYGIENE: El hashing y la adición de puntos corren SIEMPRE
 *    fuera de los candados de contexto; el sondeo, el retiro y la
 *    generación de claves corren dentro.
 * 3. RETIREMENT DRIVEN SHUTDOWN: El trabajador que observa el
 *    conjunto vacío tras readquirir el candado retorna limpiamente.
 *
 * # Mathematical Proof (Incremental Advance):
 * Si P = k·G, entonces P + G = (k+1)·G; tras n avances el punto es
 * (k+n)·G y la clave real de una coincidencia se reconstruye como
 * k + n sin coste adicional en el bucle.
 * =================================================================
 */

/// Contexto secp256k1 global y caminante incremental de escalares.
pub mod keyspace;
/// Registro de coincidencias y costura hacia el estrato de salida.
pub mod reporter;
/// Tablero de telemetría compartido y línea de estado del operador.
pub mod telemetry;
/// Bucles calientes de búsqueda por prefijo y por expresión regular.
pub mod worker;

pub use keyspace::{global_context, ScalarWalker, REKEY_CEILING};
pub use reporter::{MatchRecord, MatchReporter};
pub use telemetry::TelemetryBoard;
pub use worker::{run_prefix_worker, run_regex_worker};
