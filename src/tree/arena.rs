//! The window arena: ownership, order, traversal, recursive destruction.
//!
//! All windows live in a single slotmap; the children lists and the
//! non-owning parent back-references live in secondary maps keyed by the
//! same ids. A window therefore has exactly one owner, the back-reference
//! can never dangle (a stale id simply fails to resolve), and destroying a
//! subtree is one post-order sweep.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{Window, WindowId};
use crate::error::{Error, Result};
use crate::render::RegionId;

const NO_CHILDREN: &[WindowId] = &[];

/// Storage for every window in a root context.
#[derive(Debug, Default)]
pub struct Arena {
    nodes: SlotMap<WindowId, Window>,
    children: SecondaryMap<WindowId, Vec<WindowId>>,
    parent: SecondaryMap<WindowId, WindowId>,
}

impl Arena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a window with no parent link (top-level or menu-owned).
    pub fn insert(&mut self, window: Window) -> WindowId {
        let id = self.nodes.insert(window);
        self.children.insert(id, Vec::new());
        id
    }

    /// Insert a window as the last child of `parent`.
    ///
    /// Insertion order is declaration order, which is also the z-order
    /// tiebreak when siblings overlap. The parent must be a live parent
    /// window; on error nothing is constructed.
    pub fn insert_child(&mut self, parent: WindowId, window: Window) -> Result<WindowId> {
        match self.nodes.get(parent) {
            None => return Err(Error::StaleWindow),
            Some(w) if w.kind.is_text() => return Err(Error::NotAParent),
            Some(_) => {}
        }
        let id = self.nodes.insert(window);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children[parent].push(id);
        Ok(id)
    }

    /// Remove `id` and its whole subtree.
    ///
    /// Returns the backing region of every removed window in release order:
    /// children before their parent, so each node's resources go before its
    /// owner's. Removing a dead id returns nothing.
    pub fn remove(&mut self, id: WindowId) -> Vec<RegionId> {
        if !self.nodes.contains_key(id) {
            return Vec::new();
        }

        // Detach from the owning parent's child list.
        if let Some(p) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(p) {
                siblings.retain(|&c| c != id);
            }
        }

        let mut order = Vec::new();
        self.collect_post_order(id, &mut order);

        let mut regions = Vec::with_capacity(order.len());
        for node in order {
            self.children.remove(node);
            self.parent.remove(node);
            if let Some(w) = self.nodes.remove(node) {
                regions.push(w.region);
            }
        }
        regions
    }

    fn collect_post_order(&self, id: WindowId, out: &mut Vec<WindowId>) {
        for &child in self.children(id) {
            self.collect_post_order(child, out);
        }
        out.push(id);
    }

    /// Immutable access to a window.
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.nodes.get(id)
    }

    /// Mutable access to a window.
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.nodes.get_mut(id)
    }

    /// The owner of `id`, if it is a child window.
    pub fn parent(&self, id: WindowId) -> Option<WindowId> {
        self.parent.get(id).copied()
    }

    /// The children of `id` in declaration order. Empty for text leaves and
    /// dead ids.
    pub fn children(&self, id: WindowId) -> &[WindowId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(NO_CHILDREN)
    }

    /// Walk from `id` up to its top-level ancestor, starting with the
    /// immediate parent. Does not include `id` itself.
    pub fn ancestors(&self, id: WindowId) -> Vec<WindowId> {
        let mut out = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            out.push(p);
            current = p;
        }
        out
    }

    /// Whether `id` refers to a live window.
    pub fn contains(&self, id: WindowId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live windows.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no windows.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
