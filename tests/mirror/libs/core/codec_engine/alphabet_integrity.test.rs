// [tests/mirror/libs/core/codec_engine/alphabet_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: ALPHABET TABLES CERTIFIER (V4.0 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CODEC
 * RESPONSABILIDAD: ESCRUTINIO DE LAS TABLAS DERIVADAS DEL ALFABETO
 * =================================================================
 */

use vforge_core_codec::alphabet::{digit_value, is_case_mutable, B58_ALPHABET};

#[test]
fn certify_alphabet_has_58_unique_symbols() {
    let mut seen = [false; 128];
    for &character in B58_ALPHABET.iter() {
        assert!(character < 128);
        assert!(!seen[character as usize], "símbolo duplicado en el alfabeto");
        seen[character as usize] = true;
    }
    assert_eq!(B58_ALPHABET.len(), 58);
}

#[test]
fn certify_reverse_map_is_a_left_inverse() {
    for (digit, &character) in B58_ALPHABET.iter().enumerate() {
        assert_eq!(digit_value(character), Some(digit as u8));
    }
    // Los cuatro excluidos del protocolo jamás resuelven.
    for character in [b'0', b'O', b'I', b'l'] {
        assert_eq!(digit_value(character), None);
    }
}

#[test]
fn certify_case_mutability_excludes_single_case_letters() {
    // Mutables: sus dos cajas pertenecen al alfabeto.
    for character in [b'a', b'B', b'k', b'Z', b'q'] {
        assert!(is_case_mutable(character), "'{}' debe mutar", character as char);
    }
    // Inmutables: la caja opuesta no existe en el alfabeto.
    for character in [b'i', b'l', b'o', b'L', b'1', b'9', b'-'] {
        assert!(
            !is_case_mutable(character),
            "'{}' no debe mutar",
            character as char
        );
    }
}
