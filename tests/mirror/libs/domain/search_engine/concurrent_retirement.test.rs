// [tests/mirror/libs/domain/search_engine/concurrent_retirement.test.rs]
/*!
 * =================================================================
 * APARATO: CONCURRENT RETIREMENT CERTIFIER (V4.2 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-SEARCH
 * RESPONSABILIDAD: M TRABAJADORES, K PATRONES, K COINCIDENCIAS
 *
 * # Mathematical Proof (Termination by Retirement):
 * Con K patrones vivos, cada retiro es atómico frente a los sondeos
 * ajenos: al agotarse el conjunto TODO trabajador que readquiere el
 * candado observa el vacío y retorna. El certificador usa patrones
 * de alta probabilidad ('1B', '1C'; '1' y '.') para que el enjambre
 * converja en milisegundos de cómputo real.
 * =================================================================
 */

use std::sync::Mutex;
use std::thread;

use vforge_core_codec::base58check::decode_base58_check;
use vforge_domain_patterns::{PrefixContext, RegexContext};
use vforge_domain_search::{
    run_prefix_worker, run_regex_worker, MatchRecord, MatchReporter, TelemetryBoard,
};

/// Recolector en memoria para las certificaciones del enjambre.
#[derive(Default)]
struct CollectingReporter {
    records: Mutex<Vec<MatchRecord>>,
}

impl MatchReporter for CollectingReporter {
    fn on_match(&self, record: &MatchRecord) {
        self.records
            .lock()
            .expect("registro de coincidencias íntegro")
            .push(record.clone());
    }
}

#[test]
fn certify_prefix_swarm_emits_one_match_per_pattern_v4() {
    println!("\n📦 [INICIO]: Enjambre de 3 hilos contra {{'1B', '1C'}}...");

    let context = PrefixContext::new(0, 128, false);
    assert!(context.add_patterns(&["1B".to_string(), "1C".to_string()], false));

    let telemetry = TelemetryBoard::new();
    let reporter = CollectingReporter::default();

    thread::scope(|scope| {
        for _ in 0..3 {
            scope.spawn(|| run_prefix_worker(&context, &telemetry, &reporter));
        }
    });

    let records = reporter.records.into_inner().expect("registro íntegro");
    assert_eq!(records.len(), 2, "exactamente una coincidencia por patrón");
    assert!(context.lock().is_empty(), "el índice queda vacío");

    let mut matched: Vec<&str> = records.iter().map(|r| r.pattern.as_str()).collect();
    matched.sort_unstable();
    assert_eq!(matched, ["1B", "1C"]);

    for record in &records {
        // La dirección emitida DEBE portar el prefijo retirado.
        assert!(
            record.address.starts_with(&record.pattern),
            "dirección {} sin el prefijo {}",
            record.address,
            record.pattern
        );

        // Círculo completo: la dirección decodifica al hash160 de la
        // clave pública emitida, y el WIF al escalar emitido.
        let address_payload =
            decode_base58_check(&record.address).expect("checksum de dirección íntegro");
        assert_eq!(address_payload.len(), 21);
        assert_eq!(address_payload[0], 0);

        let wif_payload = decode_base58_check(&record.wif).expect("checksum WIF íntegro");
        assert_eq!(wif_payload.len(), 33);
        assert_eq!(wif_payload[0], 128);
        assert_eq!(&wif_payload[1..], &record.secret_octets);
    }
    println!("   ✅ 2 coincidencias certificadas con círculo completo.");
}

#[test]
fn certify_regex_swarm_drains_and_terminates() {
    let context = RegexContext::new(0, 128);
    // '1' y '.' coinciden con cualquier dirección mainnet: el enjambre
    // converge en los primeros candidatos.
    assert!(context.add_patterns(&["1".to_string(), ".".to_string()]));

    let telemetry = TelemetryBoard::new();
    let reporter = CollectingReporter::default();

    thread::scope(|scope| {
        for _ in 0..2 {
            scope.spawn(|| run_regex_worker(&context, &telemetry, &reporter));
        }
    });

    let records = reporter.records.into_inner().expect("registro íntegro");
    assert_eq!(records.len(), 2, "cada expresión se retira exactamente una vez");
    assert_eq!(context.remaining(), 0);

    for record in &records {
        assert!(record.address.starts_with('1'));
        let wif_payload = decode_base58_check(&record.wif).expect("checksum WIF íntegro");
        assert_eq!(&wif_payload[1..], &record.secret_octets);
    }
}
