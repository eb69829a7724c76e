// [tests/mirror/libs/core/range_engine/range_solver_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: RANGE SOLVER CERTIFIER (V4.2 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-RANGES
 * RESPONSABILIDAD: SOLIDEZ Y COMPLETITUD CONTRA CODIFICACIÓN REAL
 *
 * # Mathematical Proof (Equivalence Under Test):
 * Para un hash160 aleatorio h, Base58Check(v || h) comienza por el
 * prefijo EXACTAMENTE cuando el entero de 200 bits v||h||00000000
 * cae en los intervalos emitidos. Las certificaciones contrastan la
 * proyección numérica contra la codificación textual real.
 * =================================================================
 */

use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;

use vforge_core_codec::base58check::{encode_base58_check, encode_base58_raw};
use vforge_core_ranges::{solve_prefix_ranges, RangeError};

/// Proyecta un valor de 200 bits a texto base 58 crudo (sin checksum).
fn render_endpoint(value: &BigUint) -> String {
    let mut payload = [0u8; 25];
    let raw = value.to_bytes_be();
    payload[25 - raw.len()..].copy_from_slice(&raw);
    encode_base58_raw(&payload)
}

/// Objetivo de sondeo de 200 bits de un hash160: v || h || checksum en cero.
fn probe_value(version: u8, key_digest: &[u8; 20]) -> BigUint {
    let mut payload = [0u8; 25];
    payload[0] = version;
    payload[1..21].copy_from_slice(key_digest);
    BigUint::from_bytes_be(&payload)
}

#[test]
fn certify_bare_one_prefix_spans_the_version_window_v4() {
    println!("\n📦 [INICIO]: Certificación de escenarios canónicos del solucionador...");

    let ranges = solve_prefix_ranges("1", 0).expect("prefijo trivial");
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].low, BigUint::zero());
    assert_eq!(ranges[0].high, (BigUint::one() << 192) - 1u8);
    println!("   ✅ '1' -> [0, 2^192 - 1] certificado.");
}

#[test]
fn certify_foreign_leading_digit_is_rejected() {
    assert!(matches!(
        solve_prefix_ranges("2", 0),
        Err(RangeError::NotPossible { .. })
    ));
}

#[test]
fn certify_long_ascii_prefix_produces_a_single_aligned_range() {
    let ranges = solve_prefix_ranges("1Bitcoin", 0).expect("prefijo factible");
    assert_eq!(ranges.len(), 1, "el dígito 'B' excede al líder del techo");

    let range = &ranges[0];
    assert!(render_endpoint(&range.low).starts_with("1Bitcoin"));
    assert!(render_endpoint(&range.high).starts_with("1Bitcoin"));

    // El primer valor FUERA del intervalo ya escapa del prefijo.
    let past_high = &range.high + 1u8;
    assert!(!render_endpoint(&past_high).starts_with("1Bitcoin"));
}

#[test]
fn certify_dual_range_prefixes_cover_both_text_lengths() {
    // El dígito 'A' (9) cabe bajo el dígito líder del techo de la banda
    // con un '1': el prefijo habita dos longitudes de texto adyacentes.
    let ranges = solve_prefix_ranges("1A", 0).expect("prefijo factible");
    assert_eq!(ranges.len(), 2);
    for range in &ranges {
        assert!(render_endpoint(&range.low).starts_with("1A"));
        assert!(render_endpoint(&range.high).starts_with("1A"));
    }
    // Los dos intervalos son disjuntos y están ordenados.
    assert!(ranges[0].high < ranges[1].low);
}

proptest! {
    /// Completitud y solidez: la pertenencia numérica replica la
    /// comparación textual para hash160 arbitrarios.
    #[test]
    fn membership_matches_real_encoding(
        key_digest in proptest::array::uniform20(any::<u8>()),
        prefix_index in 0usize..4,
    ) {
        const PREFIXES: [&str; 4] = ["1B", "1Fo", "1Test", "11"];
        let prefix = PREFIXES[prefix_index];

        let ranges = solve_prefix_ranges(prefix, 0).expect("prefijos factibles en mainnet");

        let mut address_payload = [0u8; 21];
        address_payload[1..21].copy_from_slice(&key_digest);
        let address = encode_base58_check(&address_payload);

        let target = probe_value(0, &key_digest);
        let contained = ranges
            .iter()
            .any(|range| target >= range.low && target <= range.high);

        prop_assert_eq!(
            address.starts_with(prefix),
            contained,
            "prefijo {} vs dirección {}",
            prefix,
            address
        );
    }

    /// Los intervalos emitidos jamás escapan de la ventana de versión.
    #[test]
    fn emitted_ranges_stay_inside_the_version_window(version in proptest::sample::select(vec![0u8, 52, 111])) {
        for prefix in ["1", "1A", "1zz", "Q", "m", "n9"] {
            let Ok(ranges) = solve_prefix_ranges(prefix, version) else { continue };
            let window_low = BigUint::from(version) << 192;
            let window_high = ((BigUint::from(version) + 1u8) << 192) - 1u8;
            for range in &ranges {
                prop_assert!(range.low < range.high);
                prop_assert!(range.low >= window_low);
                prop_assert!(range.high <= window_high);
            }
        }
    }
}
