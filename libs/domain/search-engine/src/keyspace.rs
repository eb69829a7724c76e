// [libs/domain/search-engine/src/keyspace.rs]
/*!
 * =================================================================
 * APARATO: SCALAR WALKER & GLOBAL CONTEXT (V4.2 - REKEY SEALED)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: GESTIÓN DE CLAVES Y AVANCE INCREMENTAL DE PUNTOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SINGLETON CONTEXT: El contexto secp256k1 se pre-computa una vez
 *    y se comparte entre todos los hilos de búsqueda.
 * 2. REKEY DISCIPLINE: Cada clave aleatoria sirve como máximo
 *    min(1_000_000, orden - k) candidatos; el tope acota la
 *    aritmética del desplazamiento y evita el arrollo del escalar.
 * 3. OFFSET RECONSTRUCTION: La clave real de una coincidencia es
 *    k + desplazamiento; la reconstrucción certifica en debug que el
 *    punto alcanzado corresponde al escalar reconstruido.
 * =================================================================
 */

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use secp256k1::rand::rngs::OsRng;
use secp256k1::{constants, All, PublicKey, Scalar, Secp256k1, SecretKey};
use tracing::trace;

/// Tope de candidatos explorados por clave aleatoria.
pub const REKEY_CEILING: u64 = 1_000_000;

/**
 * Instancia global y estática del contexto de Curva Elíptica.
 *
 * Este Singleton pre-computa las tablas de multiplicación escalar
 * durante el primer acceso, optimizando todas las operaciones
 * subsiguientes de los hilos de búsqueda.
 */
pub static GLOBAL_CONTEXT: LazyLock<Secp256k1<All>> = LazyLock::new(Secp256k1::new);

/// Punto generador G expresado como clave pública (escalar 1).
static GENERATOR_POINT: LazyLock<PublicKey> = LazyLock::new(|| {
    let mut one_scalar = [0u8; constants::SECRET_KEY_SIZE];
    one_scalar[constants::SECRET_KEY_SIZE - 1] = 1;
    let one_key = SecretKey::from_slice(&one_scalar)
        .expect("MATH_FAULT: unit scalar rejected by curve");
    PublicKey::from_secret_key(global_context(), &one_key)
});

/**
 * Provee acceso seguro y de alto rendimiento al contexto global.
 *
 * @returns Una referencia estática al motor de secp256k1.
 */
#[inline]
#[must_use]
pub fn global_context() -> &'static Secp256k1<All> {
    &GLOBAL_CONTEXT
}

/**
 * Caminante incremental sobre el espacio de claves.
 *
 * Estado por trabajador: clave aleatoria `k`, punto `P = (k+n)·G`,
 * desplazamiento `n` y umbral de re-generación. El avance común es
 * UNA adición de generador; la re-generación completa solo ocurre al
 * agotar el umbral o tras emitir una coincidencia.
 */
#[derive(Debug)]
pub struct ScalarWalker {
    secret: SecretKey,
    point: PublicKey,
    offset: u64,
    rekey_at: u64,
}

impl ScalarWalker {
    /// Construye un caminante que exigirá re-generación inmediata.
    #[must_use]
    pub fn new() -> Self {
        let (secret, point) = global_context().generate_keypair(&mut OsRng);
        Self {
            secret,
            point,
            offset: 0,
            rekey_at: 0,
        }
    }

    /// `true` si el próximo paso debe re-generar la clave aleatoria.
    ///
    /// El llamador ejecuta entonces [`Self::rekey`] BAJO el candado de
    /// contexto y [`Self::seal_rekey_interval`] ya fuera de él.
    #[must_use]
    pub fn must_rekey_on_next(&self) -> bool {
        self.offset + 1 >= self.rekey_at
    }

    /// Re-genera la clave aleatoria y reinicia el desplazamiento.
    pub fn rekey(&mut self) {
        let (secret, point) = global_context().generate_keypair(&mut OsRng);
        self.secret = secret;
        self.point = point;
        self.offset = 0;
    }

    /**
     * Sella el umbral de re-generación de la clave vigente.
     *
     * `rekey_at = min(1_000_000, orden - k)`: el tope de equidad evita
     * que una clave cercana al orden arrolle el escalar durante los
     * avances incrementales.
     */
    pub fn seal_rekey_interval(&mut self) {
        let order = BigUint::from_bytes_be(&constants::CURVE_ORDER);
        let secret_value = BigUint::from_bytes_be(&self.secret.secret_bytes());
        let distance = order - secret_value;
        self.rekey_at = distance.to_u64().map_or(REKEY_CEILING, |d| d.min(REKEY_CEILING));
        debug_assert!(self.rekey_at > 0);
        trace!(rekey_at = self.rekey_at, "🔑 [WALKER]: Rekey interval sealed.");
    }

    /// Avance común: `P ← P + G`, desplazamiento + 1.
    #[inline]
    pub fn advance(&mut self) {
        self.offset += 1;
        self.point = self
            .point
            .combine(&GENERATOR_POINT)
            .expect("MATH_FAULT: generator walk reached the point at infinity");
    }

    /// Serialización SEC1 no comprimida (0x04 ‖ X ‖ Y) del punto vigente.
    #[inline]
    #[must_use]
    pub fn public_octets(&self) -> [u8; 65] {
        self.point.serialize_uncompressed()
    }

    /**
     * Reconstruye el par real de una coincidencia.
     *
     * # Logic:
     * Con desplazamiento n > 0 la clave real es `k + n` (tweak aditivo
     * módulo el orden; el umbral garantiza que no hay arrollo). El
     * caminante queda forzado a re-generar en el siguiente paso.
     */
    pub fn finalize_match(&mut self) -> (SecretKey, PublicKey) {
        if self.offset > 0 {
            let mut tweak_bytes = [0u8; 32];
            tweak_bytes[24..32].copy_from_slice(&self.offset.to_be_bytes());
            let tweak = Scalar::from_be_bytes(tweak_bytes)
                .expect("MATH_FAULT: offset scalar escaped the curve order");
            self.secret = self
                .secret
                .add_tweak(&tweak)
                .expect("MATH_FAULT: reconstructed scalar escaped the curve order");
        }
        // Re-generación inmediata en el próximo paso.
        self.offset = 0;
        self.rekey_at = 0;

        debug_assert_eq!(
            PublicKey::from_secret_key(global_context(), &self.secret),
            self.point,
            "el punto alcanzado no corresponde al escalar reconstruido"
        );
        (self.secret, self.point)
    }
}

impl Default for ScalarWalker {
    fn default() -> Self {
        Self::new()
    }
}
