//! Context system for conditional keybindings
//!
//! The same matrix key means different things per mode, so most bindings
//! carry a mode condition.

/// Mode the controller is in, as far as key lookup is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeKind {
    #[default]
    Entry,
    Result,
    Settings,
    Table,
    Error,
}

/// Context extracted from the application model for keybinding evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub mode: ModeKind,
    /// Whether the table start field has focus (Settings only)
    pub start_focused: bool,
}

impl KeyContext {
    pub fn entry() -> Self {
        Self {
            mode: ModeKind::Entry,
            start_focused: false,
        }
    }

    pub fn settings(start_focused: bool) -> Self {
        Self {
            mode: ModeKind::Settings,
            start_focused,
        }
    }

    pub fn table() -> Self {
        Self {
            mode: ModeKind::Table,
            start_focused: false,
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Entry,
    Settings,
    Table,
    /// Settings with the start field focused
    StartFocused,
    /// Settings with the step field focused
    StepFocused,
}

impl Condition {
    /// Evaluate this condition against the current context
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::Entry => ctx.mode == ModeKind::Entry,
            Condition::Settings => ctx.mode == ModeKind::Settings,
            Condition::Table => ctx.mode == ModeKind::Table,
            Condition::StartFocused => ctx.mode == ModeKind::Settings && ctx.start_focused,
            Condition::StepFocused => ctx.mode == ModeKind::Settings && !ctx.start_focused,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}
