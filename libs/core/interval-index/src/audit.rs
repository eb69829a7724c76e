// [libs/core/interval-index/src/audit.rs]
/*!
 * =================================================================
 * APARATO: INTERVAL INDEX STRUCTURAL AUDIT (V4.0 - SOBERANO)
 * CLASIFICACIÓN: CORE STRUCTURE // PROVING GROUNDS (ESTRATO L1)
 * RESPONSABILIDAD: VERIFICACIÓN ESTRUCTURAL DEL ÁRBOL AVL
 *
 * VISION HIPER-HOLÍSTICA:
 * Certifica, tras cualquier secuencia de mutaciones, que el árbol
 * conserva sus tres leyes: balance por nodo en {-1, 0, +1} coherente
 * con la etiqueta almacenada, punteros a padre consistentes, y
 * recorrido in-order estrictamente creciente con intervalos
 * disjuntos. Empleado por las certificaciones del Proving Grounds;
 * no participa en el Hot-Loop.
 * =================================================================
 */

use num_bigint::BigUint;

use crate::tree::{BalanceFactor, IntervalIndex, SlotIndex};

impl IntervalIndex {
    /**
     * Audita la estructura completa del árbol.
     *
     * # Errors:
     * Retorna una descripción del primer defecto hallado: etiqueta de
     * balance incoherente, factor fuera de {-1, 0, +1}, puntero a
     * padre roto, intervalo degenerado, solapamiento in-order o
     * población desincronizada.
     */
    pub fn audit_structure(&self) -> Result<(), String> {
        let mut visited_count = 0usize;
        if let Some(root) = self.root_slot() {
            if self.parent(root).is_some() {
                return Err("la raíz declara un padre".to_string());
            }
            self.audit_subtree(root, &mut visited_count)?;
        }
        if visited_count != self.len() {
            return Err(format!(
                "población desincronizada: recorridos {visited_count}, declarados {}",
                self.len()
            ));
        }

        let intervals = self.in_order_intervals();
        for window in intervals.windows(2) {
            if window[0].1 >= window[1].0 {
                return Err("intervalos adyacentes no disjuntos en in-order".to_string());
            }
        }
        Ok(())
    }

    /// Recorrido in-order de los intervalos `(low, high)` del árbol.
    #[must_use]
    pub fn in_order_intervals(&self) -> Vec<(BigUint, BigUint)> {
        let mut intervals = Vec::with_capacity(self.len());
        if let Some(root) = self.root_slot() {
            self.collect_in_order(root, &mut intervals);
        }
        intervals
    }

    fn collect_in_order(&self, slot: SlotIndex, accumulator: &mut Vec<(BigUint, BigUint)>) {
        if let Some(left) = self.left(slot) {
            self.collect_in_order(left, accumulator);
        }
        accumulator.push((self.low_of(slot).clone(), self.high_of(slot).clone()));
        if let Some(right) = self.right(slot) {
            self.collect_in_order(right, accumulator);
        }
    }

    /// Audita recursivamente el subárbol de `slot` y devuelve su altura.
    fn audit_subtree(&self, slot: SlotIndex, visited_count: &mut usize) -> Result<usize, String> {
        *visited_count += 1;

        if self.low_of(slot) >= self.high_of(slot) {
            return Err(format!("intervalo degenerado en slot {slot}"));
        }

        let left_height = match self.left(slot) {
            Some(left) => {
                if self.parent(left) != Some(slot) {
                    return Err(format!("puntero a padre roto en hijo izquierdo de {slot}"));
                }
                self.audit_subtree(left, visited_count)?
            }
            None => 0,
        };
        let right_height = match self.right(slot) {
            Some(right) => {
                if self.parent(right) != Some(slot) {
                    return Err(format!("puntero a padre roto en hijo derecho de {slot}"));
                }
                self.audit_subtree(right, visited_count)?
            }
            None => 0,
        };

        let expected_tag = if left_height == right_height {
            BalanceFactor::Centered
        } else if left_height == right_height + 1 {
            BalanceFactor::LeftHeavy
        } else if right_height == left_height + 1 {
            BalanceFactor::RightHeavy
        } else {
            return Err(format!(
                "factor de balance fuera de rango en slot {slot}: izquierda {left_height}, derecha {right_height}"
            ));
        };
        if self.balance(slot) != expected_tag {
            return Err(format!(
                "etiqueta de balance incoherente en slot {slot}: alturas ({left_height}, {right_height})"
            ));
        }

        Ok(1 + left_height.max(right_height))
    }
}
