// [libs/shared/heimdall/src/lib.rs]
/*!
 * =================================================================
 * APARATO: HEIMDALL NEURAL OBSERVER (V4.2 - FORGE ALIGNED)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L3)
 * RESPONSABILIDAD: GESTIÓN DE TRAZADO Y CAPTURA DE PÁNICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. STDERR DISCIPLINE: Toda traza fluye por stderr; stdout queda
 *    reservado para el protocolo del operador (línea de estado `\r`
 *    y bloques de coincidencia).
 * 2. WORKER SHIELD: Un pánico en cualquier hilo de búsqueda se
 *    registra con sus coordenadas de fuente y su carga útil antes de
 *    que el proceso colapse; sin el hook, un hilo secundario muere
 *    en silencio mientras el resto del enjambre sigue quemando CPU.
 * 3. DUAL MODE: Capa compacta interactiva en desarrollo; tramas JSON
 *    planas en release.
 * =================================================================
 */

use std::panic::{self, PanicHookInfo};
use tracing::{error, info, instrument};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as formatting_layer, EnvFilter};

/// Inicializa el sistema de trazas Heimdall con blindaje de pánicos.
///
/// # Comportamiento:
/// - Desarrollo: logs compactos interactivos por stderr.
/// - Producción: tramas JSON planas por stderr.
///
/// # Errors:
/// Retorna pánico si otro suscriptor global ya ha sido inicializado
/// en el runtime.
#[instrument(skip_all)]
pub fn init_tracing(service_nominal_identifier: &str) {
    // 1. CONFIGURACIÓN DEL FILTRO DINÁMICO (Sovereign Filter)
    let environmental_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "{}={level}",
            service_nominal_identifier,
            level = if cfg!(debug_assertions) { "debug" } else { "info" }
        )
        .into()
    });

    let is_production_strata = !cfg!(debug_assertions);

    // 2. CONSTRUCCIÓN DE LA ARQUITECTURA DE SUSCRIPCIÓN (Dual Mode)
    // stdout pertenece al protocolo del operador: las capas escriben
    // SIEMPRE en stderr.
    if is_production_strata {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(
                formatting_layer::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(
                formatting_layer::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    // 3. BLINDAJE DE HILOS DE BÚSQUEDA (Worker Shield)
    let shielded_service_label = service_nominal_identifier.to_string();
    panic::set_hook(Box::new(move |collapse_report| {
        report_worker_collapse(&shielded_service_label, collapse_report);
    }));

    info!(
        "🛡️  [HEIMDALL]: Trace strata online for [{}]; worker shield armed.",
        service_nominal_identifier
    );
}

/// Proyecta un pánico de hilo al canal de trazas antes del colapso.
fn report_worker_collapse(service_label: &str, collapse_report: &PanicHookInfo<'_>) {
    let source_coordinates = match collapse_report.location() {
        Some(location) => format!("{}:{}", location.file(), location.line()),
        None => "<fuente desconocida>".to_string(),
    };

    // El payload de un pánico llega como &str o como String según el
    // macro que lo originó; cualquier otro tipo se reporta opaco.
    let collapse_detail = if let Some(text) = collapse_report.payload().downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = collapse_report.payload().downcast_ref::<String>() {
        text.clone()
    } else {
        "<payload no textual>".to_string()
    };

    error!(
        target: "panic_monitor",
        service = %service_label,
        source = %source_coordinates,
        "💥 [WORKER_COLLAPSE]: Search thread panicked: {}",
        collapse_detail
    );
}
