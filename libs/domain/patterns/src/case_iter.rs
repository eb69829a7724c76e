// [libs/domain/patterns/src/case_iter.rs]
/*!
 * =================================================================
 * APARATO: CASE VARIANT ITERATOR (V4.1 - FULL ENUMERATION)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: ENUMERACIÓN DE VARIANTES DE CAJA DE UN PREFIJO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FULL SWEEP: Emite las 2^k variantes completas (incluida la
 *    totalmente mayúscula) en orden lexicográfico de bits; cada
 *    variante concreta se re-proyecta por el solucionador de rangos.
 * 2. ALPHABET AWARE: Solo mutan los caracteres cuyas DOS cajas
 *    existen en el alfabeto Base58 (quedan fijos `i`, `l`, `o` y
 *    todo no-alfabético).
 * =================================================================
 */

use vforge_core_codec::alphabet::is_case_mutable;

use crate::errors::PatternError;

/// Capacidad máxima del prefijo enumerable (paridad con el linaje C).
pub const MAX_PREFIX_LENGTH: usize = 32;

/// Iterador de variantes de caja de un prefijo Base58.
///
/// El estado es la plantilla en minúsculas, las posiciones mutables y
/// un contador de bits: el bit `i` activo eleva a mayúscula el
/// carácter en la posición mutable `i`.
#[derive(Debug, Clone)]
pub struct CaseVariantIterator {
    template: Vec<u8>,
    letter_positions: Vec<usize>,
    next_value: Option<u64>,
}

impl CaseVariantIterator {
    /**
     * Prepara la enumeración de un prefijo.
     *
     * # Errors:
     * [`PatternError::PrefixTooLong`] si el prefijo supera los 32
     * caracteres de capacidad.
     */
    pub fn new(prefix: &str) -> Result<Self, PatternError> {
        if prefix.len() > MAX_PREFIX_LENGTH {
            return Err(PatternError::PrefixTooLong {
                prefix: prefix.to_string(),
            });
        }

        let mut template = Vec::with_capacity(prefix.len());
        let mut letter_positions = Vec::new();
        for (position, &character) in prefix.as_bytes().iter().enumerate() {
            if is_case_mutable(character) {
                template.push(character | 0x20);
                letter_positions.push(position);
            } else {
                template.push(character);
            }
        }

        Ok(Self {
            template,
            letter_positions,
            next_value: Some(0),
        })
    }

    /// Número de posiciones mutables (k); el total de variantes es 2^k.
    #[must_use]
    pub fn variant_bits(&self) -> usize {
        self.letter_positions.len()
    }

    /// Total de variantes que produce la enumeración (2^k).
    #[must_use]
    pub fn variant_count(&self) -> u64 {
        1u64 << self.letter_positions.len()
    }
}

impl Iterator for CaseVariantIterator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let value = self.next_value?;
        if value >= self.variant_count() {
            self.next_value = None;
            return None;
        }
        self.next_value = Some(value + 1);

        let mut rendered = self.template.clone();
        for (bit, &position) in self.letter_positions.iter().enumerate() {
            if value & (1u64 << bit) != 0 {
                rendered[position] &= !0x20;
            }
        }
        // La plantilla proviene de un &str ASCII del alfabeto.
        Some(String::from_utf8(rendered).expect("PATTERN_FAULT: plantilla no ASCII"))
    }
}
