//! The root context: terminal size, top-level windows, menus, focus, the
//! creation and destruction entry points, key dispatch, and the run loop.
//!
//! A [`Tui`] owns everything reachable: the window arena, the canvas the
//! windows' regions live on, the menus, and (when not headless) the terminal
//! driver. Dropping it tears the whole tree down. Rendering always re-resolves
//! the full tree first; geometry is never carried between passes.

use std::any::Any;

use slotmap::SlotMap;
use tracing::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::event::{EventHook, HookTarget, Key};
use crate::geometry::Size;
use crate::layout;
use crate::render::{Canvas, Driver, Renderer, TermEvent};
use crate::tree::{Arena, MenuId, ParentConfig, TextConfig, Window, WindowId};

// ---------------------------------------------------------------------------
// TuiConfig
// ---------------------------------------------------------------------------

/// Root-level configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct TuiConfig {
    /// The color active at the start of every render pass.
    pub color: Color,
    /// Root event hook, last in dispatch order.
    pub event: Option<EventHook>,
}

impl TuiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base color (builder).
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the root event hook (builder).
    pub fn event(mut self, hook: EventHook) -> Self {
        self.event = Some(hook);
        self
    }
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// A named group of windows rendered above the top-level set while active.
#[derive(Debug)]
pub struct Menu {
    pub name: String,
    /// Owned windows, in declaration order.
    pub windows: Vec<WindowId>,
    pub event: Option<EventHook>,
}

// ---------------------------------------------------------------------------
// Tui
// ---------------------------------------------------------------------------

/// The root of a window tree and the engine driving it.
pub struct Tui {
    size: Size,
    arena: Arena,
    top_level: Vec<WindowId>,
    menus: SlotMap<MenuId, Menu>,
    active_menu: Option<MenuId>,
    focus: Option<WindowId>,
    event: Option<EventHook>,
    base_color: Color,
    running: bool,
    canvas: Canvas,
    driver: Option<Driver>,
}

impl Tui {
    /// Create over a real terminal.
    ///
    /// Driver initialization failure is reported here, once; there is no
    /// retry or degraded mode.
    pub fn new(config: TuiConfig) -> Result<Self> {
        let driver = Driver::new()?;
        let size = Driver::size()?;
        Ok(Self::build(config, size, Some(driver)))
    }

    /// Create without a terminal, for tests and embedding. The canvas is the
    /// only output.
    pub fn headless(size: Size, config: TuiConfig) -> Self {
        Self::build(config, size, None)
    }

    fn build(config: TuiConfig, size: Size, driver: Option<Driver>) -> Self {
        Self {
            size,
            arena: Arena::new(),
            top_level: Vec::new(),
            menus: SlotMap::with_key(),
            active_menu: None,
            focus: None,
            event: config.event,
            base_color: config.color,
            running: false,
            canvas: Canvas::new(size),
            driver,
        }
    }

    // -- accessors ----------------------------------------------------------

    /// The current terminal size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The canvas the tree renders onto.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Immutable access to a window.
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.arena.get(id)
    }

    /// Mutable access to a window's attributes.
    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.arena.get_mut(id)
    }

    /// The children of a window, in declaration order.
    pub fn children(&self, id: WindowId) -> &[WindowId] {
        self.arena.children(id)
    }

    /// The owner of a child window.
    pub fn parent_of(&self, id: WindowId) -> Option<WindowId> {
        self.arena.parent(id)
    }

    /// Top-level windows in declaration order.
    pub fn top_level(&self) -> &[WindowId] {
        &self.top_level
    }

    /// The window holding input focus.
    pub fn focus(&self) -> Option<WindowId> {
        self.focus
    }

    /// Move input focus. `None` clears it.
    pub fn set_focus(&mut self, focus: Option<WindowId>) {
        self.focus = focus.filter(|&id| self.arena.contains(id));
    }

    /// The active menu, if any.
    pub fn active_menu(&self) -> Option<MenuId> {
        self.active_menu
    }

    /// Activate a menu (rendered above all top-level windows), or none.
    pub fn set_active_menu(&mut self, menu: Option<MenuId>) -> Result<()> {
        if let Some(id) = menu {
            if !self.menus.contains_key(id) {
                return Err(Error::StaleMenu);
            }
        }
        self.active_menu = menu;
        Ok(())
    }

    /// Whether the run loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the run loop to stop (or keep running).
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    // -- creation -----------------------------------------------------------

    /// Create a top-level parent window.
    pub fn parent_create(&mut self, cfg: ParentConfig) -> WindowId {
        let region = self.canvas.alloc_region();
        let id = self.arena.insert(Window::parent(cfg, region));
        self.top_level.push(id);
        id
    }

    /// Create a top-level text window.
    pub fn text_create(&mut self, cfg: TextConfig) -> WindowId {
        let region = self.canvas.alloc_region();
        let id = self.arena.insert(Window::text(cfg, region));
        self.top_level.push(id);
        id
    }

    /// Create a parent window as the last child of `owner`.
    pub fn child_parent_create(&mut self, owner: WindowId, cfg: ParentConfig) -> Result<WindowId> {
        let region = self.canvas.alloc_region();
        match self.arena.insert_child(owner, Window::parent(cfg, region)) {
            Ok(id) => Ok(id),
            Err(e) => {
                self.canvas.release_region(region);
                Err(e)
            }
        }
    }

    /// Create a text window as the last child of `owner`.
    pub fn child_text_create(&mut self, owner: WindowId, cfg: TextConfig) -> Result<WindowId> {
        let region = self.canvas.alloc_region();
        match self.arena.insert_child(owner, Window::text(cfg, region)) {
            Ok(id) => Ok(id),
            Err(e) => {
                self.canvas.release_region(region);
                Err(e)
            }
        }
    }

    /// Create a menu.
    pub fn menu_create(&mut self, name: impl Into<String>, event: Option<EventHook>) -> MenuId {
        self.menus.insert(Menu { name: name.into(), windows: Vec::new(), event })
    }

    /// Create a parent window owned by a menu.
    pub fn menu_parent_create(&mut self, menu: MenuId, cfg: ParentConfig) -> Result<WindowId> {
        if !self.menus.contains_key(menu) {
            return Err(Error::StaleMenu);
        }
        let region = self.canvas.alloc_region();
        let id = self.arena.insert(Window::parent(cfg, region));
        self.menus[menu].windows.push(id);
        Ok(id)
    }

    /// Create a text window owned by a menu.
    pub fn menu_text_create(&mut self, menu: MenuId, cfg: TextConfig) -> Result<WindowId> {
        if !self.menus.contains_key(menu) {
            return Err(Error::StaleMenu);
        }
        let region = self.canvas.alloc_region();
        let id = self.arena.insert(Window::text(cfg, region));
        self.menus[menu].windows.push(id);
        Ok(id)
    }

    // -- destruction --------------------------------------------------------

    /// Destroy a window and its whole subtree: children first, each window's
    /// backing region released as it goes. The id (and every descendant id)
    /// is dead afterwards.
    pub fn window_destroy(&mut self, id: WindowId) {
        self.top_level.retain(|&w| w != id);
        for menu in self.menus.values_mut() {
            menu.windows.retain(|&w| w != id);
        }
        let regions = self.arena.remove(id);
        debug!(released = regions.len(), "window subtree destroyed");
        for region in regions {
            self.canvas.release_region(region);
        }
        self.drop_dead_focus();
    }

    /// Destroy a menu and every window it owns.
    pub fn menu_destroy(&mut self, id: MenuId) {
        let Some(menu) = self.menus.remove(id) else { return };
        if self.active_menu == Some(id) {
            self.active_menu = None;
        }
        for window in menu.windows {
            for region in self.arena.remove(window) {
                self.canvas.release_region(region);
            }
        }
        self.drop_dead_focus();
    }

    fn drop_dead_focus(&mut self) {
        if let Some(focus) = self.focus {
            if !self.arena.contains(focus) {
                self.focus = None;
            }
        }
    }

    // -- window state -------------------------------------------------------

    /// Replace a text window's string; the plain cache refreshes with it.
    pub fn set_text(&mut self, id: WindowId, string: impl Into<String>) -> Result<()> {
        let win = self.arena.get_mut(id).ok_or(Error::StaleWindow)?;
        let text = win.kind.as_text_mut().ok_or(Error::NotAText)?;
        text.set_string(string);
        Ok(())
    }

    /// Take the collaborator state out of a window's data slot.
    ///
    /// Pairs with [`Tui::put_data`]; hooks take the state out, work on it
    /// with full access to the tree, then put it back.
    pub fn take_data(&mut self, id: WindowId) -> Option<Box<dyn Any>> {
        self.arena.get_mut(id).and_then(|w| w.data.take())
    }

    /// Store collaborator state in a window's data slot.
    pub fn put_data(&mut self, id: WindowId, data: Box<dyn Any>) {
        if let Some(win) = self.arena.get_mut(id) {
            win.data = Some(data);
        }
    }

    /// Refresh the cached terminal size. The next resolution pass picks it
    /// up; nothing is patched incrementally.
    pub fn resize(&mut self, size: Size) {
        debug!(w = size.w, h = size.h, "terminal resized");
        self.size = size;
        self.canvas.resize(size);
    }

    // -- render -------------------------------------------------------------

    /// One full resolve-and-render pass: recompute every rect from current
    /// configuration and terminal size, repaint the whole visible tree, and
    /// (with a driver) flush the canvas to the terminal.
    pub fn render(&mut self) -> Result<()> {
        let screen = self.size.to_rect();
        layout::resolve_roots(&mut self.arena, &mut self.canvas, &self.top_level, screen)?;

        let menu_windows: Option<Vec<WindowId>> = self
            .active_menu
            .and_then(|id| self.menus.get(id))
            .map(|menu| menu.windows.clone());
        if let Some(windows) = &menu_windows {
            layout::resolve_roots(&mut self.arena, &mut self.canvas, windows, screen)?;
        }

        Renderer::new(&self.arena, &mut self.canvas, self.base_color)
            .render(&self.top_level, menu_windows.as_deref())?;

        if let Some(driver) = &mut self.driver {
            driver.present(&self.canvas)?;
        }
        Ok(())
    }

    // -- events -------------------------------------------------------------

    /// Offer a key to the hooks in dispatch order: the focused window, its
    /// ancestors, the active menu, then the root hook. The first consumer
    /// stops propagation. Returns whether anyone consumed it.
    pub fn dispatch(&mut self, key: Key) -> bool {
        if let Some(focus) = self.focus {
            let mut chain = vec![focus];
            chain.extend(self.arena.ancestors(focus));
            for id in chain {
                let Some(hook) = self.arena.get(id).and_then(|w| w.event) else {
                    continue;
                };
                if hook(self, HookTarget::Window(id), key) {
                    return true;
                }
            }
        }

        if let Some(menu_id) = self.active_menu {
            if let Some(hook) = self.menus.get(menu_id).and_then(|m| m.event) {
                if hook(self, HookTarget::Menu(menu_id), key) {
                    return true;
                }
            }
        }

        if let Some(hook) = self.event {
            if hook(self, HookTarget::Root, key) {
                return true;
            }
        }
        false
    }

    /// The blocking loop: render once, then one key read and one
    /// resolve-and-render pass per event until something stops it.
    /// The reserved interrupt codes always stop it.
    pub fn run(&mut self) -> Result<()> {
        self.running = true;
        self.render()?;
        while self.running {
            let event = match self.driver.as_mut() {
                Some(driver) => driver.read()?,
                None => break,
            };
            match event {
                TermEvent::Key(Key::CTRL_C) | TermEvent::Key(Key::CTRL_Z) => {
                    self.running = false;
                }
                TermEvent::Key(key) => {
                    self.dispatch(key);
                }
                TermEvent::Resize(size) => self.resize(size),
            }
            self.render()?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
