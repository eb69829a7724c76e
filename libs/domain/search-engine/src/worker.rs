// [libs/domain/search-engine/src/worker.rs]
/*!
 * =================================================================
 * APARATO: SEARCH WORKERS (V4.3 - HOT LOOP SEALED)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: BUCLES CALIENTES DE BÚSQUEDA POR HILO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PREFIX MODE: El candidato se certifica por UNA comparación de
 *    bignum contra el índice de intervalos (el objetivo de 200 bits
 *    es el payload de 25 bytes con el checksum aún en cero).
 * 2. REGEX MODE: El candidato se codifica a dirección completa y se
 *    barre contra las expresiones vivas bajo el candado de lectura.
 * 3. SAMPLING CADENCE: 20 000 iteraciones por muestra en modo
 *    prefijo, 10 000 en modo regex (la codificación Base58 encarece
 *    la iteración).
 *
 * # Concurrency:
 * La adición de puntos y el hashing corren SIEMPRE fuera de los
 * candados; entre iteraciones el candado se libera y readquiere para
 * que los retiros ajenos progresen.
 * =================================================================
 */

use std::time::Instant;

use num_bigint::BigUint;

use vforge_core_codec::base58check::encode_base58_check;
use vforge_core_codec::hashing::hash160;
use vforge_domain_patterns::{PrefixContext, RegexContext, RegexProbeOutcome};

use crate::keyspace::ScalarWalker;
use crate::reporter::{MatchRecord, MatchReporter};
use crate::telemetry::TelemetryBoard;

/// Iteraciones entre muestras de telemetría en modo prefijo.
pub const PREFIX_SAMPLE_INTERVAL: u64 = 20_000;

/// Iteraciones entre muestras de telemetría en modo regex.
pub const REGEX_SAMPLE_INTERVAL: u64 = 10_000;

/**
 * Bucle caliente de búsqueda por prefijos.
 *
 * # Logic:
 * 1. Re-generación de clave bajo el candado (que también certifica el
 *    vaciado del conjunto) o avance incremental `P ← P + G`.
 * 2. hash160 de la clave pública no comprimida, fuera del candado.
 * 3. Sondeo del objetivo de 200 bits; ante una coincidencia se
 *    reconstruye `k + n`, se emite el registro y se retira el anillo
 *    del patrón, todo bajo el mismo candado.
 *
 * Retorna cuando el conjunto de patrones queda vacío.
 */
pub fn run_prefix_worker(
    context: &PrefixContext,
    telemetry: &TelemetryBoard,
    reporter: &dyn MatchReporter,
) {
    let mut walker = ScalarWalker::new();
    let mut payload = [0u8; 25];
    payload[0] = context.address_version();

    let mut batch_count: u64 = 0;
    let mut last_sample = Instant::now();

    loop {
        if walker.must_rekey_on_next() {
            {
                let state = context.lock();
                if state.is_empty() {
                    break;
                }
                walker.rekey();
            }
            walker.seal_rekey_interval();
        } else {
            walker.advance();
        }

        // Hashing fuera del candado.
        let pubkey_octets = walker.public_octets();
        payload[1..21].copy_from_slice(&hash160(&pubkey_octets));

        // El objetivo incluye los 4 bytes de checksum en cero: el
        // margen del solucionador hace irrelevantes esos 32 bits.
        let probe_target = BigUint::from_bytes_be(&payload);

        batch_count += 1;
        let mut state = context.lock();
        if let Some(slot) = state.probe(&probe_target) {
            // Romper la línea de estado sobrescribible.
            println!();

            let (secret, point) = walker.finalize_match();
            let pattern = state.retire(slot);
            let record = MatchRecord::assemble(
                &pattern,
                &secret,
                &point,
                context.address_version(),
                context.private_version(),
            );
            reporter.on_match(&record);

            if state.is_empty() {
                break;
            }
            state.announce_difficulty();
        }

        if batch_count >= PREFIX_SAMPLE_INTERVAL {
            telemetry.record_sample(batch_count, &mut last_sample, state.chance());
            batch_count = 0;
        }

        if state.is_empty() {
            break;
        }
        // El candado se libera aquí y se readquiere en la siguiente
        // iteración: los retiros de otros hilos progresan entre lotes.
    }
}

/**
 * Bucle caliente de búsqueda por expresiones regulares.
 *
 * # Logic:
 * 1. Re-generación bajo el candado exclusivo o avance incremental.
 * 2. Dirección completa del candidato: hash160 + checksum + Base58.
 * 3. Barrido bajo lectura; la coincidencia escala a escritura con
 *    verificación de identidad del slot y retiro por intercambio. La
 *    emisión ocurre bajo la escritura; el conteo restante se anuncia
 *    en la misma sección crítica.
 *
 * Retorna cuando el conjunto de expresiones queda vacío.
 */
pub fn run_regex_worker(
    context: &RegexContext,
    telemetry: &TelemetryBoard,
    reporter: &dyn MatchReporter,
) {
    let mut walker = ScalarWalker::new();
    let mut payload = [0u8; 21];
    payload[0] = context.address_version();

    let mut batch_count: u64 = 0;
    let mut last_sample = Instant::now();

    loop {
        if walker.must_rekey_on_next() {
            {
                let gate = context.lock_exclusive();
                if gate.is_empty() {
                    break;
                }
                walker.rekey();
            }
            walker.seal_rekey_interval();
        } else {
            walker.advance();
        }

        // Dirección candidata completa, fuera de los candados.
        let pubkey_octets = walker.public_octets();
        payload[1..21].copy_from_slice(&hash160(&pubkey_octets));
        let candidate_address = encode_base58_check(&payload);

        batch_count += 1;
        let walker_cell = &mut walker;
        let outcome = context.probe_and_retire(&candidate_address, |pattern, remaining| {
            // Romper la línea de estado sobrescribible.
            println!();

            let (secret, point) = walker_cell.finalize_match();
            let record = MatchRecord::assemble(
                pattern,
                &secret,
                &point,
                context.address_version(),
                context.private_version(),
            );
            reporter.on_match(&record);

            if remaining > 0 {
                println!("Regular expressions: {remaining}");
            }
        });

        match outcome {
            RegexProbeOutcome::Drained => break,
            RegexProbeOutcome::Retired { remaining: 0 } => break,
            RegexProbeOutcome::Retired { .. } | RegexProbeOutcome::Miss => {}
        }

        if batch_count >= REGEX_SAMPLE_INTERVAL {
            // Sin modelo de probabilidad en modo regex.
            telemetry.record_sample(batch_count, &mut last_sample, 0.0);
            batch_count = 0;
        }
    }
}
