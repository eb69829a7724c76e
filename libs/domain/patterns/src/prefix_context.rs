// [libs/domain/patterns/src/prefix_context.rs]
/*!
 * =================================================================
 * APARATO: PREFIX SEARCH CONTEXT (V4.2 - DIFFICULTY SEALED)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: AGREGACIÓN DE PREFIJOS Y CONTABILIDAD DE DIFICULTAD
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SINGLE MUTEX DISCIPLINE: Un único candado protege índice,
 *    dificultad y probabilidad; los trabajadores lo retienen solo
 *    durante sondeo, retiro y generación de clave, jamás durante el
 *    hashing.
 * 2. WIDTH CONSERVATION: total_width es en todo momento la suma
 *    exacta de anchuras de los intervalos vivos; cada anillo aporta
 *    al entrar lo mismo que resta al retirarse.
 * 3. BATCH ROLLBACK: Si una variante de caja falla, el anillo
 *    parcial del patrón se revierte íntegro antes de continuar.
 *
 * # Mathematical Proof (Difficulty Model):
 * chance = 2^192 / total_width es la esperanza de candidatos por
 * coincidencia: un candidato uniforme de 192 bits cae en los
 * intervalos vivos con probabilidad total_width / 2^192.
 * =================================================================
 */

use std::sync::{Arc, Mutex, MutexGuard};

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use tracing::debug;

use vforge_core_index::{IndexError, IntervalIndex, SlotIndex};
use vforge_core_ranges::{solve_prefix_ranges, PrefixRange, VERSION_WINDOW_SHIFT};

use crate::case_iter::CaseVariantIterator;

/// Umbral de advertencia para la explosión de variantes de caja.
const CASE_VARIANT_WARNING_BITS: usize = 16;

/// Estado mutable del contexto, siempre detrás del candado.
#[derive(Debug)]
pub struct PrefixState {
    index: IntervalIndex,
    pattern_count: usize,
    total_width: BigUint,
    chance: f64,
}

impl PrefixState {
    /// `true` cuando no quedan patrones buscables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Patrones lógicos vivos.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Esperanza de candidatos por coincidencia (0.0 hasta el primer alta).
    #[must_use]
    pub fn chance(&self) -> f64 {
        self.chance
    }

    /// Sondeo puntual del objetivo de 200 bits contra el índice.
    #[must_use]
    pub fn probe(&self, probe_target: &BigUint) -> Option<SlotIndex> {
        self.index.find_containing(probe_target)
    }

    /// Patrón lógico del intervalo alcanzado por un sondeo.
    #[must_use]
    pub fn pattern_at(&self, slot: SlotIndex) -> Arc<str> {
        self.index.pattern_of(slot)
    }

    /**
     * Retira el patrón cuyo intervalo fue alcanzado.
     *
     * Elimina el anillo de hermanos completo, resta su anchura de la
     * dificultad acumulada y decrementa el conteo de patrones.
     * El anuncio de la siguiente dificultad queda a cargo del
     * llamador, que primero comprueba si el índice se agotó.
     */
    pub fn retire(&mut self, slot: SlotIndex) -> Arc<str> {
        let retired = self.index.retire_ring(slot);
        debug_assert!(self.total_width >= retired.width_sum);
        self.total_width -= &retired.width_sum;
        self.pattern_count -= 1;
        debug!(
            pattern = %retired.pattern,
            members = retired.members,
            "🎯 [CONTEXT]: Ring retired from interval index."
        );
        retired.pattern
    }

    /**
     * Recalcula `chance` y emite la línea de dificultad de protocolo.
     *
     * `Next match difficulty: <n> (<k> prefixes)` con varios patrones
     * vivos; `Difficulty: <n>` con uno solo.
     */
    pub fn announce_difficulty(&mut self) {
        let difficulty = (BigUint::one() << VERSION_WINDOW_SHIFT) / &self.total_width;
        if self.pattern_count > 1 {
            println!(
                "Next match difficulty: {} ({} prefixes)",
                difficulty, self.pattern_count
            );
        } else {
            println!("Difficulty: {difficulty}");
        }
        self.chance = difficulty.to_f64().unwrap_or(f64::INFINITY);
    }
}

/// Contexto compartido de búsqueda por prefijos.
#[derive(Debug)]
pub struct PrefixContext {
    address_version: u8,
    private_version: u8,
    verbose: bool,
    state: Mutex<PrefixState>,
}

impl PrefixContext {
    /// Construye un contexto vacío para las versiones de red dadas.
    #[must_use]
    pub fn new(address_version: u8, private_version: u8, verbose: bool) -> Self {
        Self {
            address_version,
            private_version,
            verbose,
            state: Mutex::new(PrefixState {
                index: IntervalIndex::new(),
                pattern_count: 0,
                total_width: BigUint::zero(),
                chance: 0.0,
            }),
        }
    }

    /// Versión de red de las direcciones buscadas.
    #[must_use]
    pub fn address_version(&self) -> u8 {
        self.address_version
    }

    /// Versión de red del formato WIF emitido.
    #[must_use]
    pub fn private_version(&self) -> u8 {
        self.private_version
    }

    /// Adquiere el candado del contexto.
    ///
    /// Los trabajadores lo retienen para sondear, retirar y generar
    /// claves; el hashing del candidato ocurre siempre fuera.
    pub fn lock(&self) -> MutexGuard<'_, PrefixState> {
        self.state
            .lock()
            .expect("SYNC_FAULT: prefix context poisoned by a worker panic")
    }

    /**
     * Carga un lote de patrones de prefijo.
     *
     * # Logic:
     * - Modo sensible a caja: cada patrón se proyecta una vez.
     * - Modo insensible: se enumeran las 2^k variantes y todos los
     *   intervalos resultantes se encadenan en un anillo; si alguna
     *   variante falla, el anillo parcial se revierte.
     * Los fallos por patrón se imprimen y degradan el lote, nunca lo
     * abortan.
     *
     * @returns `false` si ningún patrón quedó buscable (el llamador
     * termina con código 1).
     */
    pub fn add_patterns(&self, patterns: &[String], case_insensitive: bool) -> bool {
        let mut state = self.lock();
        let mut added_count = 0usize;

        for pattern in patterns {
            let anchor = if case_insensitive {
                self.add_case_enumerated(&mut state, pattern)
            } else {
                match solve_prefix_ranges(pattern, self.address_version) {
                    Ok(ranges) => insert_ranges(&mut state.index, pattern, ranges, None),
                    Err(fault) => {
                        println!("{fault}");
                        None
                    }
                }
            };

            let Some(anchor) = anchor else { continue };
            added_count += 1;

            // Contabilidad de dificultad: el anillo aporta su anchura.
            let ring_width = state.index.ring_width_sum(anchor);
            state.total_width += &ring_width;

            if self.verbose {
                let pattern_difficulty =
                    (BigUint::one() << VERSION_WINDOW_SHIFT) / &ring_width;
                println!("Prefix difficulty: {pattern_difficulty:>20} {pattern}");
            }
        }

        state.pattern_count += added_count;

        if state.index.is_empty() {
            println!("No prefix patterns to search");
            return false;
        }
        state.announce_difficulty();
        true
    }

    /// Alta de un patrón con enumeración de variantes de caja.
    fn add_case_enumerated(
        &self,
        state: &mut PrefixState,
        pattern: &str,
    ) -> Option<SlotIndex> {
        let iterator = match CaseVariantIterator::new(pattern) {
            Ok(iterator) => iterator,
            Err(fault) => {
                println!("{fault}");
                return None;
            }
        };

        if iterator.variant_bits() > CASE_VARIANT_WARNING_BITS {
            println!(
                "WARNING: Prefix '{pattern}' has 2^{} case-varied derivatives",
                iterator.variant_bits()
            );
        }

        let mut anchor: Option<SlotIndex> = None;
        for variant in iterator {
            let ranges = match solve_prefix_ranges(&variant, self.address_version) {
                Ok(ranges) => ranges,
                Err(fault) => {
                    println!("{fault}");
                    // Reversión del anillo parcial del patrón.
                    if let Some(anchor) = anchor {
                        state.index.retire_ring(anchor);
                    }
                    return None;
                }
            };
            match insert_ranges(&mut state.index, pattern, ranges, anchor) {
                Some(slot) => {
                    if anchor.is_none() {
                        anchor = Some(slot);
                    }
                }
                None => {
                    if let Some(anchor) = anchor {
                        state.index.retire_ring(anchor);
                    }
                    return None;
                }
            }
        }
        anchor
    }
}

/**
 * Inserta los intervalos de una proyección, encadenados en anillo.
 *
 * Los 1..=2 intervalos del solucionador se enlazan entre sí y, si
 * existe un ancla previa del mismo patrón lógico, con su anillo.
 * Ante un solapamiento se imprime la línea de protocolo, se revierte
 * lo insertado en ESTA llamada y se devuelve `None`.
 */
fn insert_ranges(
    index: &mut IntervalIndex,
    pattern: &str,
    ranges: Vec<PrefixRange>,
    master: Option<SlotIndex>,
) -> Option<SlotIndex> {
    let pattern_label: Arc<str> = match master {
        Some(master) => index.pattern_of(master),
        None => Arc::from(pattern),
    };

    let mut call_anchor: Option<SlotIndex> = None;
    for range in ranges {
        match index.insert(range.low, range.high, Arc::clone(&pattern_label)) {
            Ok(slot) => {
                if let Some(anchor) = call_anchor {
                    index.link_sibling_rings(anchor, slot);
                } else {
                    call_anchor = Some(slot);
                }
            }
            Err(IndexError::Overlap { existing_pattern }) => {
                println!("Prefix '{pattern}' ignored, overlaps '{existing_pattern}'");
                if let Some(anchor) = call_anchor {
                    index.retire_ring(anchor);
                }
                return None;
            }
        }
    }

    let anchor = call_anchor?;
    if let Some(master) = master {
        index.link_sibling_rings(master, anchor);
    }
    Some(anchor)
}
