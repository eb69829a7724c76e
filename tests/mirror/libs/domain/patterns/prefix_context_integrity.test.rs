// [tests/mirror/libs/domain/patterns/prefix_context_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: PREFIX CONTEXT CERTIFIER (V4.2 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-PATTERNS
 * RESPONSABILIDAD: ENUMERACIÓN DE CAJA Y RETIRO ATÓMICO DE ANILLOS
 * =================================================================
 */

use vforge_core_ranges::solve_prefix_ranges;
use vforge_domain_patterns::{CaseVariantIterator, PrefixContext};

#[test]
fn certify_case_insensitive_pattern_expands_to_all_variants_v4() {
    println!("\n📦 [INICIO]: Certificación de enumeración de caja '1aB'...");

    let variants: Vec<String> = CaseVariantIterator::new("1aB")
        .expect("prefijo corto")
        .collect();
    assert_eq!(variants.len(), 4);
    for expected in ["1ab", "1Ab", "1aB", "1AB"] {
        assert!(variants.iter().any(|v| v == expected), "falta {expected}");
    }
    println!("   ✅ Las cuatro variantes de caja presentes.");

    // Alta atómica: todas las variantes quedan sondeables.
    let context = PrefixContext::new(0, 128, false);
    assert!(context.add_patterns(&["1aB".to_string()], true));

    let mut state = context.lock();
    assert_eq!(state.pattern_count(), 1);
    for variant in &variants {
        let ranges = solve_prefix_ranges(variant, 0).expect("variante factible");
        let hit = state
            .probe(&ranges[0].low)
            .expect("cada variante debe ser sondeable");
        assert_eq!(&*state.pattern_at(hit), "1aB");
    }
    println!("   ✅ Las variantes sondean al patrón lógico original.");

    // Retiro atómico: eliminar una variante elimina las cuatro.
    let ranges = solve_prefix_ranges("1AB", 0).expect("variante factible");
    let hit = state.probe(&ranges[0].low).expect("variante viva");
    let pattern = state.retire(hit);
    assert_eq!(&*pattern, "1aB");
    assert!(state.is_empty(), "el anillo completo se retira de una vez");
    assert_eq!(state.pattern_count(), 0);
    println!("   ✅ Retiro atómico del anillo certificado.");
}

#[test]
fn certify_overlapping_batch_degrades_without_aborting() {
    let context = PrefixContext::new(0, 128, false);
    // "1B" engloba a "1BX": el segundo se descarta, el primero sobrevive.
    let loaded = context.add_patterns(&["1B".to_string(), "1BX".to_string()], false);
    assert!(loaded);

    let state = context.lock();
    assert_eq!(state.pattern_count(), 1);
    assert!(state.chance() >= 1.0);
}

#[test]
fn certify_case_enumeration_rolls_back_on_internal_overlap() {
    let context = PrefixContext::new(0, 128, false);
    // Alta previa sensible a caja de la variante "1Q".
    assert!(context.add_patterns(&["1Q".to_string()], false));

    // "1q" insensible enumera {1q, 1Q}; la colisión con la residente
    // revierte el anillo parcial completo del patrón entrante.
    assert!(context.add_patterns(&["1q".to_string()], true));

    let mut state = context.lock();
    assert_eq!(state.pattern_count(), 1, "solo la residente sobrevive");

    // La variante minúscula del patrón revertido no debe sondear.
    let ranges = solve_prefix_ranges("1q", 0).expect("variante factible");
    assert!(state.probe(&ranges[0].low).is_none());

    // La residente sigue viva y retirable.
    let ranges = solve_prefix_ranges("1Q", 0).expect("prefijo factible");
    let hit = state.probe(&ranges[0].low).expect("residente viva");
    let pattern = state.retire(hit);
    assert_eq!(&*pattern, "1Q");
    assert!(state.is_empty());
}

#[test]
fn certify_infeasible_batch_reports_empty_set() {
    let context = PrefixContext::new(0, 128, false);
    let loaded = context.add_patterns(
        &["2infeasible".to_string(), "1O".to_string()],
        false,
    );
    assert!(!loaded, "ningún patrón buscable: el shell termina con 1");
}
