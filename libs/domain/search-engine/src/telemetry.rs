// [libs/domain/search-engine/src/telemetry.rs]
/*!
 * =================================================================
 * APARATO: TELEMETRY BOARD (V4.1 - HEAD PRINTS POLICY)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: AGREGACIÓN DE TASAS Y LÍNEA DE ESTADO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. EXPLICIT SHARED STATE: El tablero es un objeto compartido que
 *    el coordinador inyecta a cada trabajador; ningún estado global
 *    oculto participa.
 * 2. HEAD PRINTS: Cada trabajador registra su última tasa bajo el
 *    candado de telemetría; solo el trabajador en cabeza del registro
 *    imprime la línea agregada, evitando el entrelazado de stdout sin
 *    serializar el bucle caliente.
 * 3. PROTOCOL LINE: `\r[<rate> K/s][total <n>][Prob <p>%][<t>% in
 *    <eta><unidad>]` con relleno fijo y sin salto de línea; Prob y
 *    ETA se omiten sin modelo de probabilidad (modo regex).
 *
 * # Mathematical Proof (Probability Model):
 * Tras n candidatos con esperanza `chance` por coincidencia,
 * P(al menos una) = 1 - e^(-n/chance); el tiempo hasta la
 * probabilidad objetivo p es t = (-chance·ln(1-p) - n) / tasa.
 * =================================================================
 */

use std::io::Write;
use std::sync::Mutex;
use std::thread::{self, ThreadId};
use std::time::Instant;

/// Umbrales de probabilidad recorridos en orden por la estimación ETA.
const PROBABILITY_TARGETS: [f64; 6] = [0.5, 0.75, 0.8, 0.9, 0.95, 1.0];

/// Anchura fija de la línea de estado (la sobrescritura por `\r`
/// exige cubrir cualquier residuo de la línea anterior).
const STATUS_LINE_WIDTH: usize = 79;

#[derive(Debug, Default)]
struct TelemetryState {
    total_candidates: u64,
    /// Registro `(hilo, última tasa)`; la cabeza imprime.
    rates: Vec<(ThreadId, u64)>,
}

/// Tablero de telemetría compartido entre los trabajadores.
#[derive(Debug, Default)]
pub struct TelemetryBoard {
    state: Mutex<TelemetryState>,
}

impl TelemetryBoard {
    /// Construye un tablero vacío.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total de candidatos agregados hasta el momento.
    #[must_use]
    pub fn total_candidates(&self) -> u64 {
        self.lock().total_candidates
    }

    /**
     * Registra una muestra de lote y, si procede, imprime el estado.
     *
     * # Logic:
     * 1. Deriva la tasa propia del lote: candidatos / segundos
     *    transcurridos desde la muestra anterior del MISMO hilo.
     * 2. Bajo el candado: actualiza la entrada propia (alta en cabeza
     *    la primera vez), suma las tasas ajenas y acumula el total.
     * 3. Solo el hilo en cabeza imprime, ya fuera del candado.
     */
    pub fn record_sample(&self, cycle_count: u64, last_sample: &mut Instant, chance: f64) {
        let now = Instant::now();
        let elapsed_micros = now.duration_since(*last_sample).as_micros().max(1) as u64;
        *last_sample = now;
        let own_rate = cycle_count.saturating_mul(1_000_000) / elapsed_micros;

        let identity = thread::current().id();
        let (aggregate_rate, total, is_head) = {
            let mut state = self.lock();

            // Las entradas de hilos que dejan de muestrear no se podan
            // (paridad deliberada con el registro del linaje): el
            // contrato de los trabajadores es que solo retornan al
            // agotarse el conjunto completo de patrones.
            let mut aggregate_rate = own_rate;
            let mut already_registered = false;
            for (thread_id, last_rate) in &mut state.rates {
                if *thread_id == identity {
                    *last_rate = own_rate;
                    already_registered = true;
                } else {
                    aggregate_rate += *last_rate;
                }
            }
            if !already_registered {
                state.rates.insert(0, (identity, own_rate));
            }
            state.total_candidates += cycle_count;

            let is_head = state
                .rates
                .first()
                .is_some_and(|(thread_id, _)| *thread_id == identity);
            (aggregate_rate, state.total_candidates, is_head)
        };

        if is_head {
            print_status_line(aggregate_rate, total, chance);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TelemetryState> {
        self.state
            .lock()
            .expect("SYNC_FAULT: telemetry board poisoned by a worker panic")
    }
}

/// Construye e imprime la línea de estado sobrescribible.
fn print_status_line(aggregate_rate: u64, total: u64, chance: f64) {
    let mut line = format!("[{aggregate_rate} K/s][total {total}]");

    if chance >= 1.0 {
        let count = total as f64;
        let probability = 1.0 - (-count / chance).exp();
        line.push_str(&format!("[Prob {:.1}%]", probability * 100.0));

        // Primer objetivo aún no superado por la probabilidad actual.
        let mut target = 1.0f64;
        for candidate_target in PROBABILITY_TARGETS {
            if candidate_target < 1.0 && probability <= candidate_target {
                target = candidate_target;
                break;
            }
        }

        if target < 1.0 && aggregate_rate > 0 {
            let mut eta = ((-chance * (1.0 - target).ln()) - count) / aggregate_rate as f64;
            let mut unit = "s";
            if eta > 60.0 {
                eta /= 60.0;
                unit = "min";
                if eta > 60.0 {
                    eta /= 60.0;
                    unit = "h";
                    if eta > 24.0 {
                        eta /= 24.0;
                        unit = "d";
                        if eta > 365.0 {
                            eta /= 365.0;
                            unit = "y";
                        }
                    }
                }
            }
            let target_percent = (100.0 * target) as u32;
            if eta > 1_000_000.0 {
                line.push_str(&format!("[{target_percent}% in {eta:e}{unit}]"));
            } else {
                line.push_str(&format!("[{target_percent}% in {eta:.1}{unit}]"));
            }
        }
    }

    // Relleno a anchura fija para cubrir residuos de la línea previa.
    while line.len() < STATUS_LINE_WIDTH {
        line.push(' ');
    }
    print!("\r{line}");
    std::io::stdout().flush().ok();
}
