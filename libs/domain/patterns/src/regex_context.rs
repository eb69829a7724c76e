// [libs/domain/patterns/src/regex_context.rs]
/*!
 * =================================================================
 * APARATO: REGEX SEARCH CONTEXT (V4.2 - IDENTITY VERIFIED)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: BARRIDO CONCURRENTE DE EXPRESIONES REGULARES
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. READ-MOSTLY DISCIPLINE: El barrido corre bajo el candado de
 *    lectura; solo la coincidencia y el retiro escalan a escritura.
 * 2. IDENTITY RE-VERIFY: Tras adquirir la escritura se certifica que
 *    el slot aún alberga el MISMO objeto compilado (Arc::ptr_eq);
 *    sin esta verificación dos hilos podrían retirar el mismo slot
 *    dos veces tras coincidir en paralelo.
 * 3. EQUI-LENGTH INVARIANT: Los arreglos de compilados y fuentes
 *    mutan juntos y solo bajo la escritura.
 * =================================================================
 */

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use regex::Regex;
use tracing::debug;

/// Estado mutable del contexto, siempre detrás del RwLock.
#[derive(Debug, Default)]
pub struct RegexState {
    compiled: Vec<Arc<Regex>>,
    sources: Vec<String>,
}

impl RegexState {
    /// `true` cuando no quedan expresiones vivas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Número de expresiones vivas.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.compiled.len()
    }
}

/// Veredicto de un sondeo regex sobre una dirección candidata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegexProbeOutcome {
    /// El conjunto de patrones se observó vacío: el trabajador termina.
    Drained,
    /// Ninguna expresión coincidió con el candidato.
    Miss,
    /// Una expresión coincidió y fue retirada bajo la escritura.
    Retired {
        /// Expresiones que permanecen vivas tras el retiro.
        remaining: usize,
    },
}

/// Contexto compartido de búsqueda por expresiones regulares.
#[derive(Debug, Default)]
pub struct RegexContext {
    address_version: u8,
    private_version: u8,
    state: RwLock<RegexState>,
}

impl RegexContext {
    /// Construye un contexto vacío para las versiones de red dadas.
    #[must_use]
    pub fn new(address_version: u8, private_version: u8) -> Self {
        Self {
            address_version,
            private_version,
            state: RwLock::new(RegexState::default()),
        }
    }

    /// Versión de red de las direcciones derivadas.
    #[must_use]
    pub fn address_version(&self) -> u8 {
        self.address_version
    }

    /// Versión de red del formato WIF emitido.
    #[must_use]
    pub fn private_version(&self) -> u8 {
        self.private_version
    }

    /**
     * Compila y registra un lote de patrones.
     *
     * Los fallos de compilación se imprimen (el diagnóstico del motor
     * incluye su propio señalador de posición) y el patrón se omite.
     *
     * @returns `false` si el lote no aportó ninguna expresión nueva.
     */
    pub fn add_patterns(&self, patterns: &[String]) -> bool {
        let mut state = self.write();
        let before_count = state.compiled.len();

        for pattern in patterns {
            match Regex::new(pattern) {
                Ok(compiled) => {
                    state.compiled.push(Arc::new(compiled));
                    state.sources.push(pattern.clone());
                }
                Err(fault) => {
                    println!("Regex error: {fault}");
                }
            }
        }

        debug_assert_eq!(state.compiled.len(), state.sources.len());
        state.compiled.len() > before_count
    }

    /// Número de expresiones vivas (instantánea bajo lectura).
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.read().remaining()
    }

    /// Candado exclusivo: la puerta de re-generación de claves de los
    /// trabajadores, que también certifica el vaciado del conjunto.
    pub fn lock_exclusive(&self) -> RwLockWriteGuard<'_, RegexState> {
        self.write()
    }

    /**
     * Sondea una dirección candidata y retira la primera coincidencia.
     *
     * # Logic:
     * 1. Barrido en orden bajo el candado de lectura.
     * 2. Coincidencia: se libera la lectura, se adquiere la escritura
     *    y se verifica que el slot aún contenga el objeto observado
     *    (otro hilo pudo mutar el arreglo durante la promoción). Si
     *    la identidad cambió, el barrido se reinicia sobre el mismo
     *    candidato.
     * 3. Verificada la identidad, `emit` recibe el patrón fuente y el
     *    conteo restante BAJO la escritura (la emisión y el retiro
     *    son atómicos frente a otros sondeos) y el slot se elimina
     *    por intercambio con el último.
     */
    pub fn probe_and_retire(
        &self,
        candidate_address: &str,
        emit: impl FnOnce(&str, usize),
    ) -> RegexProbeOutcome {
        loop {
            // 1. BARRIDO BAJO LECTURA
            let observation = {
                let state = self.read();
                if state.compiled.is_empty() {
                    return RegexProbeOutcome::Drained;
                }
                state
                    .compiled
                    .iter()
                    .enumerate()
                    .find(|(_, compiled)| compiled.is_match(candidate_address))
                    .map(|(slot, compiled)| (slot, Arc::clone(compiled)))
            };
            let Some((slot, observed_regex)) = observation else {
                return RegexProbeOutcome::Miss;
            };

            // 2. PROMOCIÓN Y VERIFICACIÓN DE IDENTIDAD
            let mut state = self.write();
            if state.compiled.is_empty() {
                return RegexProbeOutcome::Drained;
            }
            if slot >= state.compiled.len()
                || !Arc::ptr_eq(&state.compiled[slot], &observed_regex)
            {
                debug!("🔁 [REGEX]: Slot identity changed during upgrade, rescanning.");
                drop(state);
                continue;
            }

            // 3. RETIRO ATÓMICO POR INTERCAMBIO
            state.compiled.swap_remove(slot);
            let source = state.sources.swap_remove(slot);
            debug_assert_eq!(state.compiled.len(), state.sources.len());
            let remaining = state.compiled.len();
            emit(&source, remaining);
            return RegexProbeOutcome::Retired { remaining };
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, RegexState> {
        self.state
            .read()
            .expect("SYNC_FAULT: regex context poisoned by a worker panic")
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegexState> {
        self.state
            .write()
            .expect("SYNC_FAULT: regex context poisoned by a worker panic")
    }
}
