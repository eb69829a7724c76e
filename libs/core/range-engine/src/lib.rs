// [libs/core/range-engine/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: RANGE ENGINE MASTER HUB (V4.0 - FORGE ALIGNED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: PROYECCIÓN PREFIJO BASE58 -> INTERVALOS NUMÉRICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. HOT-LOOP LEVERAGE: Un prefijo se resuelve UNA vez a intervalos
 *    [lo, hi] de 200 bits; cada candidato se certifica después con
 *    una comparación de bignum en lugar de una codificación Base58
 *    completa (aceleración >= 10x del bucle interno).
 * 2. NOMINAL PURITY: Erradicación de abreviaciones (pfx -> prefix).
 * 3. HYGIENE: Catálogo thiserror y RustDoc completo.
 *
 * # Mathematical Proof (Range Equivalence):
 * Un texto Base58 con z '1's iniciales y dígitos t1..tk corresponde
 * exactamente a los enteros del intervalo [t·58^m, (t+1)·58^m) dentro
 * de la banda [2^(192-8z), 2^(200-8z)) que fija el conteo de ceros
 * iniciales del payload de 25 bytes.
 * =================================================================
 */

/// Catálogo de fallos del solucionador de rangos.
pub mod errors;
/// El solucionador: prefijo + versión -> 1..=2 intervalos de 200 bits.
pub mod solver;

pub use errors::RangeError;
pub use solver::{solve_prefix_ranges, PrefixRange, TOTAL_SPACE_BITS, VERSION_WINDOW_SHIFT};
