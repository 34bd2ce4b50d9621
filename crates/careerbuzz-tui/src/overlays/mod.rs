//! Overlay modules for the TUI.
//!
//! The landing page has one overlay: the chat drawer. While it is open it
//! takes over keyboard input.
//!
//! ## Module Structure
//!
//! - `chat_drawer.rs`: Drawer key handling and rendering
//! - `render_utils.rs`: Shared rendering utilities for panels and overlays

pub mod chat_drawer;
pub mod render_utils;

use crate::effects::UiEffect;

/// Ticks an enter or exit transition lasts.
pub const DRAWER_TRANSITION_TICKS: u8 = 6;

// ============================================================================
// OverlayTransition / OverlayUpdate
// ============================================================================

/// Transition returned by overlay key handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// OverlayController
// ============================================================================

/// Presentation phase of the drawer.
///
/// `Entering` and `Exiting` carry the elapsed ticks of the transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerPhase {
    #[default]
    Closed,
    Entering(u8),
    Open,
    Exiting(u8),
}

/// Visibility of the chat drawer.
///
/// Shared by every entry point (floating shortcut and the contact card). It
/// never touches the chat log: closing hides the drawer, it does not reset it.
#[derive(Debug, Default)]
pub struct OverlayController {
    phase: DrawerPhase,
}

impl OverlayController {
    pub fn phase(&self) -> DrawerPhase {
        self.phase
    }

    /// True while logically open (including the enter transition).
    pub fn is_open(&self) -> bool {
        matches!(self.phase, DrawerPhase::Entering(_) | DrawerPhase::Open)
    }

    /// True while the drawer should be drawn (open or exiting).
    pub fn is_mounted(&self) -> bool {
        self.phase != DrawerPhase::Closed
    }

    /// Opens the drawer. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.phase = DrawerPhase::Entering(0);
        true
    }

    /// Closes the drawer. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.phase = DrawerPhase::Exiting(0);
        true
    }

    /// Advances enter/exit transitions by one frame.
    pub fn tick(&mut self) {
        self.phase = match self.phase {
            DrawerPhase::Entering(t) if t + 1 >= DRAWER_TRANSITION_TICKS => DrawerPhase::Open,
            DrawerPhase::Entering(t) => DrawerPhase::Entering(t + 1),
            DrawerPhase::Exiting(t) if t + 1 >= DRAWER_TRANSITION_TICKS => DrawerPhase::Closed,
            DrawerPhase::Exiting(t) => DrawerPhase::Exiting(t + 1),
            other => other,
        };
    }

    /// Fraction of the drawer currently slid in, from 0.0 to 1.0.
    pub fn visible_fraction(&self) -> f32 {
        let ticks = f32::from(DRAWER_TRANSITION_TICKS);
        match self.phase {
            DrawerPhase::Closed => 0.0,
            DrawerPhase::Open => 1.0,
            DrawerPhase::Entering(t) => (f32::from(t) + 1.0) / ticks,
            DrawerPhase::Exiting(t) => 1.0 - (f32::from(t) + 1.0) / ticks,
        }
    }
}
