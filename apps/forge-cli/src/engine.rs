// [apps/forge-cli/src/engine.rs]
/*!
 * =================================================================
 * APARATO: SWARM IGNITION ENGINE (V4.1 - SILICON SYNERGY)
 * CLASIFICACIÓN: APPLICATION LAYER (COORDINATOR)
 * RESPONSABILIDAD: DESPLIEGUE DE HILOS Y SALIDA DE PROTOCOLO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ONE THREAD PER CPU: Hilos de sistema operativo planos, uno por
 *    núcleo lógico por defecto; el hilo principal también trabaja.
 * 2. RETIREMENT DRIVEN JOIN: No existe señal de cancelación; los
 *    hilos retornan al observar el conjunto de patrones vacío y el
 *    coordinador simplemente los reúne.
 * 3. PROTOCOL REPORTER: El impresor de consola emite el bloque
 *    `Pattern:/Address:/Privkey:` (con material hexadecimal bajo -v)
 *    mientras el candado de contexto sigue retenido, serializando la
 *    salida entre trabajadores.
 * =================================================================
 */

use std::thread;

use tracing::error;

use vforge_domain_patterns::{PrefixContext, RegexContext};
use vforge_domain_search::{
    run_prefix_worker, run_regex_worker, MatchRecord, MatchReporter, TelemetryBoard,
};

/// Impresor de protocolo de coincidencias sobre stdout.
struct ConsoleReporter {
    verbose: bool,
}

impl MatchReporter for ConsoleReporter {
    fn on_match(&self, record: &MatchRecord) {
        println!("Pattern: {}", record.pattern);
        if self.verbose {
            // Material de clave en notación hexadecimal.
            println!("Pubkey (hex)  : {}", hex::encode(record.public_octets));
            println!("Privkey (hex) : {}", hex::encode(record.secret_octets));
        }
        println!("Address: {}", record.address);
        println!("Privkey: {}", record.wif);
    }
}

/// Despliega el enjambre en modo prefijo y espera su agotamiento.
pub fn ignite_prefix_search(context: &PrefixContext, worker_count: usize, verbose: bool) {
    let telemetry = TelemetryBoard::new();
    let reporter = ConsoleReporter { verbose };

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(worker_count.saturating_sub(1));
        for worker_index in 1..worker_count {
            let spawned = thread::Builder::new()
                .name(format!("forge-worker-{worker_index}"))
                .spawn_scoped(scope, || run_prefix_worker(context, &telemetry, &reporter));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(spawn_fault) => {
                    error!("❌ [SPAWN_FAULT]: Host refused a worker thread: {spawn_fault}");
                    std::process::exit(1);
                }
            }
        }

        // El hilo principal también trabaja.
        run_prefix_worker(context, &telemetry, &reporter);

        for handle in handles {
            let _ = handle.join();
        }
    });
}

/// Despliega el enjambre en modo regex y espera su agotamiento.
pub fn ignite_regex_search(context: &RegexContext, worker_count: usize, verbose: bool) {
    let telemetry = TelemetryBoard::new();
    let reporter = ConsoleReporter { verbose };

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(worker_count.saturating_sub(1));
        for worker_index in 1..worker_count {
            let spawned = thread::Builder::new()
                .name(format!("forge-worker-{worker_index}"))
                .spawn_scoped(scope, || run_regex_worker(context, &telemetry, &reporter));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(spawn_fault) => {
                    error!("❌ [SPAWN_FAULT]: Host refused a worker thread: {spawn_fault}");
                    std::process::exit(1);
                }
            }
        }

        run_regex_worker(context, &telemetry, &reporter);

        for handle in handles {
            let _ = handle.join();
        }
    });
}
