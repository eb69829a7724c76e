// [libs/core/interval-index/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: INTERVAL INDEX MASTER HUB (V4.0 - FORGE ALIGNED)
 * CLASIFICACIÓN: CORE STRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: ÍNDICE ORDENADO DE INTERVALOS DISJUNTOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ARENA SOVEREIGNTY: El árbol es propietario único de cada nodo;
 *    los anillos de hermanos se expresan por índice de slot, jamás
 *    por conteo de referencias, para que el retiro sea eager y la
 *    contabilidad de anchuras permanezca exacta.
 * 2. AVL DISCIPLINE: Balance por nodo en {-1, 0, +1} tras toda
 *    inserción y retiro; la búsqueda puntual es O(log n) bajo el
 *    candado del contexto.
 * 3. OVERLAP SHIELD: La inserción detecta solapamientos durante el
 *    descenso y reporta el patrón en conflicto sin mutar el árbol.
 *
 * # Mathematical Proof (Probe Cost):
 * Con n intervalos vivos el sondeo desciende a lo sumo
 * 1.44·log2(n+2) nodos; cada visita es una comparación de bignum,
 * nunca una codificación Base58.
 * =================================================================
 */

/// Verificador estructural del árbol para las certificaciones.
pub mod audit;
/// Catálogo de fallos del índice de intervalos.
pub mod errors;
/// El árbol AVL de intervalos con arena y anillos de hermanos.
pub mod tree;

pub use errors::IndexError;
pub use tree::{IntervalIndex, RetiredRing, SlotIndex};
