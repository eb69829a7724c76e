// [tests/mirror/libs/core/codec_engine/base58check_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: BASE58CHECK CERTIFIER (V4.1 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CODEC
 * RESPONSABILIDAD: VALIDACIÓN DEL CODEC CONTRA VECTORES CANÓNICOS
 *
 * # Mathematical Proof (Canonical Vector):
 * La dirección se deriva mediante Base58Check(0x00 || hash160). El
 * vector 00 || 010966776006953D5567439E5E39F86A0D273BEE proviene de
 * la documentación de referencia de Bitcoin y certifica el orden de
 * bytes, el checksum y la proyección de ceros iniciales.
 * =================================================================
 */

use proptest::prelude::*;
use vforge_core_codec::base58check::{decode_base58_check, encode_base58_check};

// --- VECTORES DE VERDAD (GOLDEN VECTORS) ---
const CANONICAL_PAYLOAD_HEX: &str = "00010966776006953D5567439E5E39F86A0D273BEE";
const CANONICAL_ADDRESS: &str = "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM";

#[test]
fn certify_canonical_bitcoin_vector_v4() {
    println!("\n📦 [INICIO]: Certificación del vector canónico Base58Check...");

    let payload = hex::decode(CANONICAL_PAYLOAD_HEX).expect("vector hexadecimal válido");
    let encoded = encode_base58_check(&payload);

    assert_eq!(encoded, CANONICAL_ADDRESS);
    assert_eq!(encoded.len(), 34);
    println!("   ✅ Paridad bit-perfect con la documentación de referencia.");

    let decoded = decode_base58_check(&encoded).expect("checksum íntegro");
    assert_eq!(decoded, payload);
    println!("   ✅ Round-trip decode(encode(x)) == x certificado.");
}

#[test]
fn leading_zero_bytes_project_one_for_one() {
    for zero_count in 0usize..6 {
        let mut payload = vec![0u8; zero_count];
        payload.extend_from_slice(&[0x7F, 0x13, 0x55]);
        let encoded = encode_base58_check(&payload);

        let observed_ones = encoded.bytes().take_while(|&b| b == b'1').count();
        assert_eq!(
            observed_ones, zero_count,
            "cada byte 0x00 inicial produce exactamente un '1'"
        );
    }
}

proptest! {
    /// Round-trip sobre payloads arbitrarios (la inyectividad se
    /// certifica por la propia inversión).
    #[test]
    fn roundtrip_holds_for_arbitrary_payloads(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
        let encoded = encode_base58_check(&payload);
        let decoded = decode_base58_check(&encoded).expect("checksum íntegro");
        prop_assert_eq!(decoded, payload);
    }

    /// Dos payloads distintos jamás colisionan en el mismo texto.
    #[test]
    fn encoding_is_injective(
        first in proptest::collection::vec(any::<u8>(), 0..32),
        second in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        prop_assume!(first != second);
        prop_assert_ne!(encode_base58_check(&first), encode_base58_check(&second));
    }
}
