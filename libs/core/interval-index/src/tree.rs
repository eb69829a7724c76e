// [libs/core/interval-index/src/tree.rs]
/*!
 * =================================================================
 * APARATO: AVL INTERVAL TREE (V4.3 - ARENA SEALED)
 * CLASIFICACIÓN: CORE STRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: ÁRBOL AVL DE INTERVALOS CON ANILLOS DE HERMANOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. POINTER SURGERY BY INDEX: Las rotaciones LL/LR/RR/RL y el
 *    reemplazo por sucesor in-order operan sobre índices de arena
 *    con punteros a padre explícitos, replicando la disciplina del
 *    algoritmo clásico sin aliasing mutable.
 * 2. RING ATOMICITY: Todos los intervalos derivados de un mismo
 *    patrón lógico forman un anillo circular; retirar cualquiera
 *    retira el anillo completo y devuelve la suma de anchuras.
 * 3. SLOT RECYCLING: Los slots liberados se reciclan vía free-list;
 *    el acceso a un slot muerto es una violación interna y dispara
 *    fail-fast.
 *
 * # Concurrency:
 * Las funciones del árbol son algoritmos puros sobre enlaces; la
 * exclusión mutua es responsabilidad del contexto llamador.
 * =================================================================
 */

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::IndexError;

/// Índice de slot dentro de la arena del árbol.
pub type SlotIndex = usize;

/// Factor de balance AVL de un nodo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BalanceFactor {
    LeftHeavy,
    Centered,
    RightHeavy,
}

/// Nodo del árbol: intervalo + enlaces estructurales + anillo.
#[derive(Debug)]
struct IntervalEntry {
    low: BigUint,
    high: BigUint,
    pattern: Arc<str>,
    /// Siguiente miembro del anillo de hermanos (él mismo si está solo).
    sibling: SlotIndex,
    parent: Option<SlotIndex>,
    left: Option<SlotIndex>,
    right: Option<SlotIndex>,
    balance: BalanceFactor,
}

/// Resultado del retiro de un anillo completo de hermanos.
#[derive(Debug)]
pub struct RetiredRing {
    /// Patrón lógico al que pertenecía el anillo.
    pub pattern: Arc<str>,
    /// Suma de anchuras `high - low` de todos los miembros retirados.
    pub width_sum: BigUint,
    /// Número de intervalos retirados.
    pub members: usize,
}

/// Árbol AVL de intervalos disjuntos `[low, high]` ordenado por `low`.
#[derive(Debug, Default)]
pub struct IntervalIndex {
    arena: Vec<Option<IntervalEntry>>,
    free_slots: Vec<SlotIndex>,
    root: Option<SlotIndex>,
    population: usize,
}

impl IntervalIndex {
    /// Construye un índice vacío.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de intervalos vivos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.population
    }

    /// `true` si el índice no contiene intervalos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.population == 0
    }

    /// Slot raíz del árbol (solo para el estrato de auditoría).
    pub(crate) fn root_slot(&self) -> Option<SlotIndex> {
        self.root
    }

    /**
     * Inserta un intervalo `[low, high]` etiquetado con su patrón.
     *
     * # Logic:
     * Desciende comparando cotas: `node.low > high` va a la izquierda,
     * `node.high < low` a la derecha; cualquier otro caso es un
     * solapamiento y aborta sin mutar el árbol. Tras el enganche se
     * restaura el invariante AVL por rotaciones.
     *
     * # Errors:
     * [`IndexError::Overlap`] con el patrón residente en conflicto.
     */
    pub fn insert(
        &mut self,
        low: BigUint,
        high: BigUint,
        pattern: Arc<str>,
    ) -> Result<SlotIndex, IndexError> {
        debug_assert!(low < high, "intervalo degenerado");

        enum AttachPoint {
            Root,
            LeftOf(SlotIndex),
            RightOf(SlotIndex),
        }

        let mut attach = AttachPoint::Root;
        let mut cursor = self.root;
        while let Some(node) = cursor {
            if *self.low_of(node) > high {
                attach = AttachPoint::LeftOf(node);
                cursor = self.left(node);
            } else if *self.high_of(node) < low {
                attach = AttachPoint::RightOf(node);
                cursor = self.right(node);
            } else {
                return Err(IndexError::Overlap {
                    existing_pattern: Arc::clone(&self.entry(node).pattern),
                });
            }
        }

        let parent = match &attach {
            AttachPoint::Root => None,
            AttachPoint::LeftOf(node) | AttachPoint::RightOf(node) => Some(*node),
        };
        let slot = self.allocate(IntervalEntry {
            low,
            high,
            pattern,
            sibling: 0, // sellado justo después de conocer el slot
            parent,
            left: None,
            right: None,
            balance: BalanceFactor::Centered,
        });
        self.entry_mut(slot).sibling = slot;

        match attach {
            AttachPoint::Root => self.root = Some(slot),
            AttachPoint::LeftOf(node) => self.set_left(node, Some(slot)),
            AttachPoint::RightOf(node) => self.set_right(node, Some(slot)),
        }
        self.population += 1;
        self.insert_fix(slot);
        Ok(slot)
    }

    /**
     * Sondeo puntual: el único intervalo que contiene `probe_target`.
     *
     * Descenso BST estándar; los intervalos son disjuntos, por lo que
     * el contenedor (si existe) es único.
     */
    #[must_use]
    pub fn find_containing(&self, probe_target: &BigUint) -> Option<SlotIndex> {
        let mut cursor = self.root;
        while let Some(node) = cursor {
            if self.low_of(node) > probe_target {
                cursor = self.left(node);
            } else if self.high_of(node) < probe_target {
                cursor = self.right(node);
            } else {
                return Some(node);
            }
        }
        None
    }

    /// Patrón lógico del intervalo residente en `slot`.
    #[must_use]
    pub fn pattern_of(&self, slot: SlotIndex) -> Arc<str> {
        Arc::clone(&self.entry(slot).pattern)
    }

    /// Anchura `high - low` del intervalo residente en `slot`.
    #[must_use]
    pub fn width_of(&self, slot: SlotIndex) -> BigUint {
        let entry = self.entry(slot);
        &entry.high - &entry.low
    }

    /**
     * Fusiona los anillos de hermanos de dos slots.
     *
     * Intercambiar los sucesores de ambos miembros concatena dos
     * anillos disjuntos en uno; funciona igualmente cuando alguno
     * de los dos es un anillo unitario.
     */
    pub fn link_sibling_rings(&mut self, first: SlotIndex, second: SlotIndex) {
        let first_next = self.entry(first).sibling;
        let second_next = self.entry(second).sibling;
        self.entry_mut(first).sibling = second_next;
        self.entry_mut(second).sibling = first_next;
    }

    /// Slots que componen el anillo de hermanos de `start` (incluido).
    #[must_use]
    pub fn ring_slots(&self, start: SlotIndex) -> Vec<SlotIndex> {
        let mut members = vec![start];
        let mut cursor = self.entry(start).sibling;
        while cursor != start {
            members.push(cursor);
            cursor = self.entry(cursor).sibling;
        }
        members
    }

    /// Suma de anchuras de todos los miembros del anillo de `start`.
    #[must_use]
    pub fn ring_width_sum(&self, start: SlotIndex) -> BigUint {
        let mut width_sum = BigUint::zero();
        for member in self.ring_slots(start) {
            width_sum += self.width_of(member);
        }
        width_sum
    }

    /**
     * Retira el anillo completo al que pertenece `slot`.
     *
     * Todos los miembros se desenganchan del árbol y sus slots se
     * reciclan; la suma de anchuras devuelta es exactamente la que
     * el contexto debe restar de su dificultad acumulada.
     */
    pub fn retire_ring(&mut self, slot: SlotIndex) -> RetiredRing {
        let members = self.ring_slots(slot);
        let pattern = self.pattern_of(slot);
        let mut width_sum = BigUint::zero();
        for member in &members {
            width_sum += self.width_of(*member);
        }
        for member in &members {
            self.unlink(*member);
            self.release(*member);
        }
        self.population -= members.len();
        RetiredRing {
            pattern,
            width_sum,
            members: members.len(),
        }
    }

    // -----------------------------------------------------------------
    // ESTRATO DE ARENA (acceso a nodos y reciclaje de slots)
    // -----------------------------------------------------------------

    fn allocate(&mut self, entry: IntervalEntry) -> SlotIndex {
        if let Some(slot) = self.free_slots.pop() {
            self.arena[slot] = Some(entry);
            slot
        } else {
            self.arena.push(Some(entry));
            self.arena.len() - 1
        }
    }

    fn release(&mut self, slot: SlotIndex) {
        self.arena[slot] = None;
        self.free_slots.push(slot);
    }

    fn entry(&self, slot: SlotIndex) -> &IntervalEntry {
        self.arena[slot]
            .as_ref()
            .expect("INDEX_FAULT: acceso a slot reciclado")
    }

    fn entry_mut(&mut self, slot: SlotIndex) -> &mut IntervalEntry {
        self.arena[slot]
            .as_mut()
            .expect("INDEX_FAULT: acceso a slot reciclado")
    }

    pub(crate) fn low_of(&self, slot: SlotIndex) -> &BigUint {
        &self.entry(slot).low
    }

    pub(crate) fn high_of(&self, slot: SlotIndex) -> &BigUint {
        &self.entry(slot).high
    }

    pub(crate) fn left(&self, slot: SlotIndex) -> Option<SlotIndex> {
        self.entry(slot).left
    }

    pub(crate) fn right(&self, slot: SlotIndex) -> Option<SlotIndex> {
        self.entry(slot).right
    }

    pub(crate) fn parent(&self, slot: SlotIndex) -> Option<SlotIndex> {
        self.entry(slot).parent
    }

    pub(crate) fn balance(&self, slot: SlotIndex) -> BalanceFactor {
        self.entry(slot).balance
    }

    fn set_left(&mut self, slot: SlotIndex, child: Option<SlotIndex>) {
        self.entry_mut(slot).left = child;
    }

    fn set_right(&mut self, slot: SlotIndex, child: Option<SlotIndex>) {
        self.entry_mut(slot).right = child;
    }

    fn set_parent(&mut self, slot: SlotIndex, parent: Option<SlotIndex>) {
        self.entry_mut(slot).parent = parent;
    }

    fn set_balance(&mut self, slot: SlotIndex, balance: BalanceFactor) {
        self.entry_mut(slot).balance = balance;
    }

    // -----------------------------------------------------------------
    // ESTRATO DE ROTACIONES (cirugía de enlaces por índice)
    // -----------------------------------------------------------------

    fn rotate_ll(&mut self, item: SlotIndex) {
        let pivot = self.left(item).expect("INDEX_FAULT: rotación LL sin hijo");
        self.set_left(item, self.right(pivot));
        if let Some(child) = self.left(item) {
            self.set_parent(child, Some(item));
        }
        self.set_right(pivot, Some(item));

        let old_parent = self.parent(item);
        match old_parent {
            Some(up) => {
                if self.left(up) == Some(item) {
                    self.set_left(up, Some(pivot));
                } else {
                    debug_assert_eq!(self.right(up), Some(item));
                    self.set_right(up, Some(pivot));
                }
            }
            None => self.root = Some(pivot),
        }
        self.set_parent(pivot, old_parent);
        self.set_parent(item, Some(pivot));
    }

    fn rotate_rr(&mut self, item: SlotIndex) {
        let pivot = self.right(item).expect("INDEX_FAULT: rotación RR sin hijo");
        self.set_right(item, self.left(pivot));
        if let Some(child) = self.right(item) {
            self.set_parent(child, Some(item));
        }
        self.set_left(pivot, Some(item));

        let old_parent = self.parent(item);
        match old_parent {
            Some(up) => {
                if self.right(up) == Some(item) {
                    self.set_right(up, Some(pivot));
                } else {
                    debug_assert_eq!(self.left(up), Some(item));
                    self.set_left(up, Some(pivot));
                }
            }
            None => self.root = Some(pivot),
        }
        self.set_parent(pivot, old_parent);
        self.set_parent(item, Some(pivot));
    }

    fn rotate_lr(&mut self, item: SlotIndex) {
        let left_child = self.left(item).expect("INDEX_FAULT: rotación LR sin hijo");
        let pivot = self
            .right(left_child)
            .expect("INDEX_FAULT: rotación LR sin nieto");

        let old_parent = self.parent(item);
        match old_parent {
            Some(up) => {
                if self.left(up) == Some(item) {
                    self.set_left(up, Some(pivot));
                } else {
                    debug_assert_eq!(self.right(up), Some(item));
                    self.set_right(up, Some(pivot));
                }
            }
            None => self.root = Some(pivot),
        }
        self.set_parent(pivot, old_parent);

        self.set_right(left_child, self.left(pivot));
        if let Some(child) = self.right(left_child) {
            self.set_parent(child, Some(left_child));
        }
        self.set_left(item, self.right(pivot));
        if let Some(child) = self.left(item) {
            self.set_parent(child, Some(item));
        }
        self.set_left(pivot, Some(left_child));
        self.set_right(pivot, Some(item));
        self.set_parent(left_child, Some(pivot));
        self.set_parent(item, Some(pivot));
    }

    fn rotate_rl(&mut self, item: SlotIndex) {
        let right_child = self.right(item).expect("INDEX_FAULT: rotación RL sin hijo");
        let pivot = self
            .left(right_child)
            .expect("INDEX_FAULT: rotación RL sin nieto");

        let old_parent = self.parent(item);
        match old_parent {
            Some(up) => {
                if self.right(up) == Some(item) {
                    self.set_right(up, Some(pivot));
                } else {
                    debug_assert_eq!(self.left(up), Some(item));
                    self.set_left(up, Some(pivot));
                }
            }
            None => self.root = Some(pivot),
        }
        self.set_parent(pivot, old_parent);

        self.set_left(right_child, self.right(pivot));
        if let Some(child) = self.left(right_child) {
            self.set_parent(child, Some(right_child));
        }
        self.set_right(item, self.left(pivot));
        if let Some(child) = self.right(item) {
            self.set_parent(child, Some(item));
        }
        self.set_right(pivot, Some(right_child));
        self.set_left(pivot, Some(item));
        self.set_parent(right_child, Some(pivot));
        self.set_parent(item, Some(pivot));
    }

    // -----------------------------------------------------------------
    // ESTRATO DE REBALANCEO (post-inserción y post-retiro)
    // -----------------------------------------------------------------

    fn insert_fix(&mut self, mut item: SlotIndex) {
        use BalanceFactor::{Centered, LeftHeavy, RightHeavy};

        let mut parent_cursor = self.parent(item);
        while let Some(parent) = parent_cursor {
            if self.left(parent) == Some(item) {
                match self.balance(parent) {
                    LeftHeavy => {
                        // El padre ya cargaba a la izquierda y empeora.
                        if self.balance(item) == LeftHeavy {
                            self.rotate_ll(parent);
                            self.set_balance(item, Centered);
                            self.set_balance(parent, Centered);
                        } else {
                            debug_assert_ne!(self.balance(item), Centered);
                            let grandchild = self
                                .right(item)
                                .expect("INDEX_FAULT: LR sin nieto en insert_fix");
                            let grandchild_balance = self.balance(grandchild);
                            self.rotate_lr(parent);
                            self.set_balance(item, Centered);
                            self.set_balance(parent, Centered);
                            if grandchild_balance == RightHeavy {
                                self.set_balance(item, LeftHeavy);
                            }
                            if grandchild_balance == LeftHeavy {
                                self.set_balance(parent, RightHeavy);
                            }
                            self.set_balance(grandchild, Centered);
                        }
                        break;
                    }
                    Centered => self.set_balance(parent, LeftHeavy),
                    RightHeavy => {
                        self.set_balance(parent, Centered);
                        break;
                    }
                }
            } else {
                match self.balance(parent) {
                    RightHeavy => {
                        if self.balance(item) == RightHeavy {
                            self.rotate_rr(parent);
                            self.set_balance(item, Centered);
                            self.set_balance(parent, Centered);
                        } else {
                            debug_assert_ne!(self.balance(item), Centered);
                            let grandchild = self
                                .left(item)
                                .expect("INDEX_FAULT: RL sin nieto en insert_fix");
                            let grandchild_balance = self.balance(grandchild);
                            self.rotate_rl(parent);
                            self.set_balance(item, Centered);
                            self.set_balance(parent, Centered);
                            if grandchild_balance == RightHeavy {
                                self.set_balance(parent, LeftHeavy);
                            }
                            if grandchild_balance == LeftHeavy {
                                self.set_balance(item, RightHeavy);
                            }
                            self.set_balance(grandchild, Centered);
                        }
                        break;
                    }
                    Centered => self.set_balance(parent, RightHeavy),
                    LeftHeavy => {
                        self.set_balance(parent, Centered);
                        break;
                    }
                }
            }

            item = parent;
            parent_cursor = self.parent(item);
        }
    }

    fn delete_fix(&mut self, removed_child: Option<SlotIndex>, start_parent: SlotIndex) {
        use BalanceFactor::{Centered, LeftHeavy, RightHeavy};

        let mut item = removed_child;
        let mut parent = start_parent;

        if self.left(parent).is_none() && self.right(parent).is_none() {
            // El padre quedó hoja: su subárbol colapsó una unidad.
            debug_assert!(item.is_none());
            self.set_balance(parent, Centered);
            item = Some(parent);
            match self.parent(parent) {
                Some(up) => parent = up,
                None => return,
            }
        }

        loop {
            let continue_from: SlotIndex;

            if item == self.right(parent) {
                // La altura del subárbol derecho disminuyó.
                match self.balance(parent) {
                    LeftHeavy => {
                        let sibling = self
                            .left(parent)
                            .expect("INDEX_FAULT: LeftHeavy sin hijo izquierdo");
                        match self.balance(sibling) {
                            LeftHeavy => {
                                self.rotate_ll(parent);
                                self.set_balance(sibling, Centered);
                                self.set_balance(parent, Centered);
                                continue_from = sibling;
                            }
                            Centered => {
                                self.rotate_ll(parent);
                                self.set_balance(sibling, RightHeavy);
                                self.set_balance(parent, LeftHeavy);
                                break;
                            }
                            RightHeavy => {
                                let grandchild = self
                                    .right(sibling)
                                    .expect("INDEX_FAULT: LR sin nieto en delete_fix");
                                let grandchild_balance = self.balance(grandchild);
                                self.rotate_lr(parent);
                                self.set_balance(sibling, Centered);
                                self.set_balance(parent, Centered);
                                if grandchild_balance == RightHeavy {
                                    self.set_balance(sibling, LeftHeavy);
                                }
                                if grandchild_balance == LeftHeavy {
                                    self.set_balance(parent, RightHeavy);
                                }
                                self.set_balance(grandchild, Centered);
                                continue_from = grandchild;
                            }
                        }
                    }
                    Centered => {
                        self.set_balance(parent, LeftHeavy);
                        break;
                    }
                    RightHeavy => {
                        self.set_balance(parent, Centered);
                        continue_from = parent;
                    }
                }
            } else {
                // La altura del subárbol izquierdo disminuyó.
                match self.balance(parent) {
                    RightHeavy => {
                        let sibling = self
                            .right(parent)
                            .expect("INDEX_FAULT: RightHeavy sin hijo derecho");
                        match self.balance(sibling) {
                            RightHeavy => {
                                self.rotate_rr(parent);
                                self.set_balance(sibling, Centered);
                                self.set_balance(parent, Centered);
                                continue_from = sibling;
                            }
                            Centered => {
                                self.rotate_rr(parent);
                                self.set_balance(sibling, LeftHeavy);
                                self.set_balance(parent, RightHeavy);
                                break;
                            }
                            LeftHeavy => {
                                let grandchild = self
                                    .left(sibling)
                                    .expect("INDEX_FAULT: RL sin nieto en delete_fix");
                                let grandchild_balance = self.balance(grandchild);
                                self.rotate_rl(parent);
                                self.set_balance(sibling, Centered);
                                self.set_balance(parent, Centered);
                                if grandchild_balance == RightHeavy {
                                    self.set_balance(parent, LeftHeavy);
                                }
                                if grandchild_balance == LeftHeavy {
                                    self.set_balance(sibling, RightHeavy);
                                }
                                self.set_balance(grandchild, Centered);
                                continue_from = grandchild;
                            }
                        }
                    }
                    Centered => {
                        self.set_balance(parent, RightHeavy);
                        break;
                    }
                    LeftHeavy => {
                        self.set_balance(parent, Centered);
                        continue_from = parent;
                    }
                }
            }

            item = Some(continue_from);
            match self.parent(continue_from) {
                Some(up) => parent = up,
                None => break,
            }
        }
    }

    // -----------------------------------------------------------------
    // ESTRATO DE RETIRO (desenganche estructural)
    // -----------------------------------------------------------------

    /// Sucesor in-order de `item` dentro del árbol.
    fn next_in_order(&self, item: SlotIndex) -> Option<SlotIndex> {
        if let Some(mut cursor) = self.right(item) {
            while let Some(left_child) = self.left(cursor) {
                cursor = left_child;
            }
            return Some(cursor);
        }
        let mut cursor = item;
        while let Some(up) = self.parent(cursor) {
            if self.right(up) == Some(cursor) {
                cursor = up;
            } else {
                return Some(up);
            }
        }
        None
    }

    /// Desengancha `item` del árbol preservando el invariante AVL.
    fn unlink(&mut self, item: SlotIndex) {
        // Reemplazo directo cuando falta algún hijo.
        if self.left(item).is_none() || self.right(item).is_none() {
            let parent_cursor = self.parent(item);
            let replacement = self.left(item).or_else(|| self.right(item));
            if let Some(child) = replacement {
                self.set_parent(child, parent_cursor);
            }
            match parent_cursor {
                None => self.root = replacement,
                Some(parent) => {
                    if self.left(parent) == Some(item) {
                        self.set_left(parent, replacement);
                    } else {
                        self.set_right(parent, replacement);
                    }
                    self.delete_fix(replacement, parent);
                }
            }
            return;
        }

        // Reemplazo indirecto por el descendiente derecho más a la
        // izquierda (sucesor in-order), que hereda el balance del nodo.
        let relocated = self
            .next_in_order(item)
            .expect("INDEX_FAULT: nodo con dos hijos sin sucesor");
        let relocated_parent = self
            .parent(relocated)
            .expect("INDEX_FAULT: sucesor sin padre");
        let replacement = self.right(relocated);

        self.set_left(relocated, self.left(item));
        if let Some(child) = self.left(relocated) {
            self.set_parent(child, Some(relocated));
        }
        match self.parent(item) {
            None => self.root = Some(relocated),
            Some(parent) => {
                if self.left(parent) == Some(item) {
                    self.set_left(parent, Some(relocated));
                } else {
                    self.set_right(parent, Some(relocated));
                }
            }
        }

        let fix_parent: SlotIndex;
        if self.left(relocated_parent) == Some(relocated) {
            debug_assert_ne!(relocated_parent, item);
            self.set_left(relocated_parent, replacement);
            fix_parent = relocated_parent;
            if let Some(child) = replacement {
                self.set_parent(child, Some(relocated_parent));
            }
            self.set_right(relocated, self.right(item));
        } else {
            debug_assert_eq!(relocated_parent, item);
            self.set_right(relocated, replacement);
            fix_parent = relocated;
        }
        if let Some(child) = self.right(relocated) {
            self.set_parent(child, Some(relocated));
        }
        self.set_parent(relocated, self.parent(item));
        let inherited_balance = self.balance(item);
        self.set_balance(relocated, inherited_balance);
        self.delete_fix(replacement, fix_parent);
    }
}
