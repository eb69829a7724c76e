// [tests/mirror/libs/domain/search_engine/scalar_walker_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: SCALAR WALKER CERTIFIER (V4.1 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-SEARCH
 * RESPONSABILIDAD: PARIDAD DEL AVANCE INCREMENTAL CON k·G DIRECTO
 *
 * # Mathematical Proof (Offset Reconstruction):
 * Tras n adiciones de generador el punto del caminante es (k+n)·G;
 * la reconstrucción k+n debe reproducir EXACTAMENTE la serialización
 * SEC1 del punto alcanzado. La certificación compara octeto a octeto
 * contra la multiplicación escalar directa del contexto global.
 * =================================================================
 */

use secp256k1::PublicKey;
use vforge_domain_search::{global_context, ScalarWalker};

#[test]
fn certify_incremental_walk_matches_direct_multiplication_v4() {
    println!("\n📦 [INICIO]: Paridad del caminante incremental (128 pasos)...");

    let mut walker = ScalarWalker::new();
    walker.rekey();
    walker.seal_rekey_interval();

    for _ in 0..128 {
        walker.advance();
    }
    let reached_octets = walker.public_octets();

    let (secret, point) = walker.finalize_match();
    let derived = PublicKey::from_secret_key(global_context(), &secret);

    assert_eq!(point, derived, "el par reconstruido es consistente");
    assert_eq!(
        hex::encode(reached_octets),
        hex::encode(derived.serialize_uncompressed()),
        "paridad octeto a octeto con la multiplicación directa"
    );
    println!("   ✅ (k + 128)·G reproducido por 128 adiciones de G.");
}

#[test]
fn certify_walker_requires_rekey_after_finalize() {
    let mut walker = ScalarWalker::new();
    assert!(walker.must_rekey_on_next(), "el caminante nace agotado");

    walker.rekey();
    walker.seal_rekey_interval();
    assert!(!walker.must_rekey_on_next());

    walker.advance();
    let _ = walker.finalize_match();
    assert!(walker.must_rekey_on_next(), "la coincidencia fuerza re-generación");
}

#[test]
fn certify_rekey_interval_respects_the_fairness_ceiling() {
    let mut walker = ScalarWalker::new();
    for _ in 0..16 {
        walker.rekey();
        walker.seal_rekey_interval();
        // Tras sellar, el caminante acepta nuevos avances; el umbral
        // queda acotado por el tope de equidad.
        assert!(!walker.must_rekey_on_next());
        for _ in 0..4 {
            walker.advance();
        }
        let (secret, point) = walker.finalize_match();
        assert_eq!(point, PublicKey::from_secret_key(global_context(), &secret));
    }
}
