// [libs/core/range-engine/src/solver.rs]
/*!
 * =================================================================
 * APARATO: PREFIX RANGE SOLVER (V4.2 - WINDOW SEALED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: RESOLUCIÓN DE INTERVALOS NUMÉRICOS DE PREFIJO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL RANGE STRATA: Un prefijo puede habitar dos longitudes de
 *    texto adyacentes; el solucionador emite el intervalo inferior y,
 *    cuando el primer dígito lo permite, el superior (x58).
 * 2. WINDOW SEALING: La intersección con la ventana de versión es
 *    semiabierta real [v·2^192, (v+1)·2^192); los endpoints emitidos
 *    jamás escapan de la banda de la versión configurada.
 * 3. DEGENERATE PURGE: Todo intervalo colapsado (lo >= hi) se
 *    descarta antes de publicarse.
 * =================================================================
 */

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use vforge_core_codec::alphabet::digit_value;

use crate::errors::RangeError;

/// Anchura total del espacio de búsqueda: 25 bytes (versión ‖ hash160 ‖ checksum).
pub const TOTAL_SPACE_BITS: usize = 200;

/// Desplazamiento de la ventana de versión: los 8 bits superiores son la versión.
pub const VERSION_WINDOW_SHIFT: usize = 192;

/// Máximo de caracteres '1' iniciales admitidos en un prefijo.
const MAX_LEADING_ONES: usize = 19;

/// Dígitos Base58 que deben quedar libres para el checksum de 4 bytes.
const CHECKSUM_DIGIT_MARGIN: u32 = 6;

/// Intervalo inclusivo `[low, high]` sobre el espacio de 200 bits.
///
/// Invariante: `low < high`. La anchura `high - low` alimenta el
/// modelo de dificultad del contexto de prefijos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRange {
    /// Cota inferior inclusiva.
    pub low: BigUint,
    /// Cota superior inclusiva.
    pub high: BigUint,
}

impl PrefixRange {
    /// Anchura del intervalo (`high - low`).
    #[must_use]
    pub fn width(&self) -> BigUint {
        &self.high - &self.low
    }
}

/**
 * Proyecta un prefijo Base58 humano a sus intervalos numéricos.
 *
 * # Logic:
 * 1. Decodifica el prefijo: conteo de '1's iniciales (z) + entero t.
 * 2. Deriva la banda [floor, ceiling] que fija exactamente z ceros
 *    iniciales en el payload de 25 bytes.
 * 3. Para t > 0 construye el intervalo [t·58^m, (t+1)·58^m) y, si el
 *    primer dígito no excede al dígito líder del techo, el intervalo
 *    homólogo una posición de dígito más arriba (x58 + 57).
 * 4. Interseca los supervivientes con la ventana de la versión.
 *
 * # Errors:
 * - [`RangeError::InvalidCharacter`] ante caracteres fuera del alfabeto.
 * - [`RangeError::TooLong`] si el margen de checksum baja de 6 dígitos
 *   o se superan 19 '1's iniciales.
 * - [`RangeError::NotPossible`] si ningún intervalo sobrevive a la
 *   ventana de versión.
 */
pub fn solve_prefix_ranges(
    prefix: &str,
    address_version: u8,
) -> Result<Vec<PrefixRange>, RangeError> {
    let base = BigUint::from(58u32);

    // 1. DECODIFICACIÓN DEL PREFIJO (z '1's iniciales + entero t)
    let mut leading_ones_count = 0usize;
    let mut leading_digit = 0u8;
    let mut target = BigUint::zero();

    for (position, &character) in prefix.as_bytes().iter().enumerate() {
        let digit = digit_value(character).ok_or_else(|| RangeError::InvalidCharacter {
            character: character as char,
            prefix: prefix.to_string(),
        })?;

        if position == leading_ones_count {
            if digit == 0 {
                leading_ones_count += 1;
                if leading_ones_count > MAX_LEADING_ONES {
                    return Err(RangeError::TooLong {
                        prefix: prefix.to_string(),
                    });
                }
                continue;
            }
            // Primer carácter distinto de '1'
            leading_digit = digit;
            target = BigUint::from(digit);
        } else {
            target = &target * 58u32 + u32::from(digit);
        }
    }

    // 2. BANDA DE CEROS INICIALES: valores de 200 bits cuyo payload
    //    arranca con exactamente z bytes 0x00.
    let ceiling: BigUint =
        (BigUint::one() << (TOTAL_SPACE_BITS - 8 * leading_ones_count)) - 1u8;
    let floor: BigUint = BigUint::one() << (VERSION_WINDOW_SHIFT - 8 * leading_ones_count);

    let mut primary_range: Option<(BigUint, BigUint)>;
    let mut upper_range: Option<(BigUint, BigUint)> = None;

    if leading_digit > 0 {
        // Dígitos Base58 del techo: b58pow divisiones hasta quedar <= 58.
        let mut power_count = 0u32;
        let mut quotient = ceiling.clone();
        while quotient > base {
            power_count += 1;
            quotient = quotient / 58u32;
        }
        let ceiling_leading_digit = quotient
            .to_u8()
            .expect("MATH_FAULT: ceiling leading digit escaped base 58");

        let effective_digit_count = (prefix.len() - leading_ones_count) as u32;
        if power_count < effective_digit_count + CHECKSUM_DIGIT_MARGIN {
            // El prefijo constriñe los dígitos del checksum.
            return Err(RangeError::TooLong {
                prefix: prefix.to_string(),
            });
        }

        let mut scale = BigUint::one();
        for _ in 0..(power_count - effective_digit_count) {
            scale *= 58u32;
        }
        let low = &target * &scale;
        let high = &low + &scale - 1u8;

        if leading_digit <= ceiling_leading_digit {
            // Intervalo homólogo con un dígito más de longitud total.
            let upper_low = &low * 58u32;
            let upper_high = &high * 58u32 + 57u32;
            upper_range = intersect(upper_low, upper_high, &floor, &ceiling);
        }

        primary_range = intersect(low, high, &floor, &ceiling);
    } else {
        // Prefijo compuesto solo por '1's: gobierna únicamente la banda.
        primary_range = Some((BigUint::zero(), ceiling));
    }

    // 3. VENTANA DE VERSIÓN: [v·2^192, (v+1)·2^192) en forma inclusiva.
    let window_low = BigUint::from(address_version) << VERSION_WINDOW_SHIFT;
    let window_high =
        ((BigUint::from(address_version) + 1u8) << VERSION_WINDOW_SHIFT) - 1u8;

    primary_range =
        primary_range.and_then(|(low, high)| intersect(low, high, &window_low, &window_high));
    upper_range =
        upper_range.and_then(|(low, high)| intersect(low, high, &window_low, &window_high));

    let mut ranges = Vec::with_capacity(2);
    if let Some((low, high)) = primary_range {
        ranges.push(PrefixRange { low, high });
    }
    if let Some((low, high)) = upper_range {
        ranges.push(PrefixRange { low, high });
    }

    if ranges.is_empty() {
        return Err(RangeError::NotPossible {
            prefix: prefix.to_string(),
        });
    }
    Ok(ranges)
}

/// Interseca `[low, high]` con `[clamp_low, clamp_high]`, purgando degenerados.
fn intersect(
    low: BigUint,
    high: BigUint,
    clamp_low: &BigUint,
    clamp_high: &BigUint,
) -> Option<(BigUint, BigUint)> {
    let low = if &low < clamp_low { clamp_low.clone() } else { low };
    let high = if &high > clamp_high {
        clamp_high.clone()
    } else {
        high
    };
    (low < high).then_some((low, high))
}
