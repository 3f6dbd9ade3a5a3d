//! Editor session
//!
//! Owns the committed markup and everything derived from it: the component
//! tree, the flat list, the current selection and hover, the clipboard and the
//! undo history. Every edit goes through the same commit path:
//!
//! ```text
//! Clean(markup) --edit--> Validating --ok--> Clean(new markup)
//!                                    \-err-> Clean(markup), error surfaced
//! ```
//!
//! Code typed by the user is committed verbatim when it parses. Markup
//! produced by the mutation engine is committed with every allocated id
//! written back, so ids stay stable across later edits.

use crate::config::EditorConfig;
use crate::models::{BatchOp, Component, CopiedElement, FlatComponent, ReorderDirection, Selection};
use crate::mutation::{self, MutationError};
use crate::parse::{parse, parse_document, ParseError};
use crate::tree::{find_by_id, flatten};
use crate::undo::History;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Result of an edit request
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum EditOutcome {
    /// New markup was committed
    Committed,

    /// Nothing changed (no-op edit, unresolved id, boundary)
    Unchanged,

    /// The edit was refused; the previous markup stays committed
    Rejected(String),
}

impl EditOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, EditOutcome::Committed)
    }
}

/// Serializable view of the session for the UI
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub markup: String,
    pub components: Vec<Component>,
    pub flat: Vec<FlatComponent>,
    pub validation_error: Option<String>,
    pub selection: Selection,
    pub hovered_id: Option<String>,
    pub show_grid: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub clipboard_size: usize,
}

/// One open document in the editor
#[derive(Clone, Debug)]
pub struct EditorSession {
    config: EditorConfig,
    markup: String,
    components: Vec<Component>,
    flat: Vec<FlatComponent>,
    validation_error: Option<String>,
    selection: Selection,
    hovered_id: Option<String>,
    show_grid: bool,
    clipboard: Vec<CopiedElement>,
    history: History,
}

impl EditorSession {
    /// Open a session on the configured initial markup
    pub fn new(config: EditorConfig) -> Result<Self, ParseError> {
        let markup = config.initial_markup.clone();
        Self::with_markup(&markup, config)
    }

    /// Open a session on `markup`
    pub fn with_markup(markup: &str, config: EditorConfig) -> Result<Self, ParseError> {
        let components = parse(markup)?;
        let mut history = History::new(config.history_limit);
        history.reset(markup);

        Ok(Self {
            flat: flatten(&components),
            components,
            markup: markup.to_string(),
            validation_error: None,
            selection: Selection::new(),
            hovered_id: None,
            show_grid: config.show_grid,
            clipboard: Vec::new(),
            history,
            config,
        })
    }

    /// Replace the document wholesale (opening another file)
    ///
    /// Clears selection, hover and history; the clipboard survives.
    pub fn load(&mut self, markup: &str) -> Result<(), ParseError> {
        let components = parse(markup)?;
        self.history.reset(markup);
        self.selection.clear();
        self.hovered_id = None;
        self.install(markup.to_string(), components);
        Ok(())
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn flat(&self) -> &[FlatComponent] {
        &self.flat
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn clipboard(&self) -> &[CopiedElement] {
        &self.clipboard
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ========================================================================
    // Code editor
    // ========================================================================

    /// Commit markup typed in the code editor
    ///
    /// Invalid markup is refused: the last good markup stays committed and the
    /// parser message is kept in `validation_error` until valid code arrives.
    pub fn set_code(&mut self, markup: &str) -> EditOutcome {
        if markup == self.markup {
            self.validation_error = None;
            return EditOutcome::Unchanged;
        }

        match parse(markup) {
            Ok(components) => {
                self.history.record(markup);
                self.install(markup.to_string(), components);
                EditOutcome::Committed
            }
            Err(err) => {
                let message = err.to_string();
                log::debug!("set_code rejected: {}", message);
                self.validation_error = Some(message.clone());
                EditOutcome::Rejected(message)
            }
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub fn update_property(&mut self, id: &str, property: &str, value: &str) -> EditOutcome {
        let result = mutation::try_update_property(&self.markup, id, property, value);
        self.apply(result)
    }

    /// Set a property on every selected element
    pub fn update_selected(&mut self, property: &str, value: &str) -> EditOutcome {
        let updated = self
            .selection
            .ids()
            .iter()
            .fold(self.markup.clone(), |current, id| {
                mutation::update_property(&current, id, property, value)
            });
        self.apply(Ok(updated))
    }

    /// Duplicate one element and select the copy
    pub fn duplicate(&mut self, id: &str) -> EditOutcome {
        let result = mutation::try_duplicate(&self.markup, id, &self.config);
        self.apply_selecting_new(result)
    }

    /// Duplicate every selected element and select the copies
    pub fn duplicate_selection(&mut self) -> EditOutcome {
        let updated = self
            .selection
            .ids()
            .iter()
            .fold(self.markup.clone(), |current, id| {
                mutation::duplicate_with(&current, id, &self.config)
            });
        self.apply_selecting_new(Ok(updated))
    }

    pub fn reorder(&mut self, id: &str, direction: ReorderDirection) -> EditOutcome {
        let result = mutation::try_reorder(&self.markup, id, direction);
        self.apply(result)
    }

    pub fn reorder_selection(&mut self, direction: ReorderDirection) -> EditOutcome {
        let updated = mutation::reorder_many(&self.markup, self.selection.ids(), direction);
        self.apply(Ok(updated))
    }

    /// Delete every selected element
    pub fn remove_selection(&mut self) -> EditOutcome {
        let updated = self
            .selection
            .ids()
            .iter()
            .fold(self.markup.clone(), |current, id| mutation::remove(&current, id));
        self.apply(Ok(updated))
    }

    /// Numeric increase/decrease of a property across the selection
    pub fn batch_update(&mut self, property: &str, op: BatchOp, amount: f64) -> EditOutcome {
        let updated = mutation::batch_update(&self.markup, self.selection.ids(), property, op, amount);
        self.apply(Ok(updated))
    }

    /// Shared properties of the selection (`None` value when mixed)
    pub fn common_properties(&self) -> Option<BTreeMap<String, Option<String>>> {
        mutation::common_properties(self.selection.ids(), &self.components)
    }

    // ========================================================================
    // Selection and hover
    // ========================================================================

    /// Select a single element; ids that do not resolve are ignored
    ///
    /// A stale id is stored as the id of the element it resolves to.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(resolved) = self.resolve_id(id) else {
            return false;
        };
        self.selection.select(resolved);
        true
    }

    /// Add or remove an element from a multi-selection
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selection.contains(id) {
            self.selection.remove(id);
            return true;
        }
        let Some(resolved) = self.resolve_id(id) else {
            return false;
        };
        self.selection.toggle(&resolved);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn hover(&mut self, id: Option<&str>) {
        self.hovered_id = id.and_then(|id| self.resolve_id(id));
    }

    /// Current id of the component `id` resolves to (exact, then fallback)
    fn resolve_id(&self, id: &str) -> Option<String> {
        find_by_id(&self.components, id).map(|component| component.id.clone())
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// Copy the selected elements; returns how many were copied
    pub fn copy_selection(&mut self) -> usize {
        let copied: Vec<CopiedElement> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| mutation::copy_element(&self.markup, id))
            .collect();

        if !copied.is_empty() {
            self.clipboard = copied;
        }
        self.clipboard.len()
    }

    /// Append the clipboard under the svg root and select the pasted elements
    pub fn paste(&mut self) -> EditOutcome {
        if self.clipboard.is_empty() {
            return EditOutcome::Unchanged;
        }
        let updated = self
            .clipboard
            .iter()
            .fold(self.markup.clone(), |current, copied| {
                mutation::paste(&current, None, copied)
            });
        self.apply_selecting_new(Ok(updated))
    }

    // ========================================================================
    // History and view
    // ========================================================================

    pub fn undo(&mut self) -> bool {
        let Some(markup) = self.history.undo().map(str::to_string) else {
            return false;
        };
        self.restore(markup)
    }

    pub fn redo(&mut self) -> bool {
        let Some(markup) = self.history.redo().map(str::to_string) else {
            return false;
        };
        self.restore(markup)
    }

    pub fn toggle_grid(&mut self) -> bool {
        self.show_grid = !self.show_grid;
        self.show_grid
    }

    /// Committed markup with selection and hover outlines, for the preview
    pub fn preview_markup(&self) -> String {
        mutation::highlight(
            &self.markup,
            self.selection.ids(),
            self.hovered_id.as_deref(),
            &self.config.highlight,
        )
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            markup: self.markup.clone(),
            components: self.components.clone(),
            flat: self.flat.clone(),
            validation_error: self.validation_error.clone(),
            selection: self.selection.clone(),
            hovered_id: self.hovered_id.clone(),
            show_grid: self.show_grid,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            clipboard_size: self.clipboard.len(),
        }
    }

    // ========================================================================
    // Commit path
    // ========================================================================

    /// Commit a mutation result, or report why nothing changed
    fn apply(&mut self, result: Result<String, MutationError>) -> EditOutcome {
        let markup = match result {
            Ok(markup) => markup,
            Err(err) if err.is_soft_miss() => {
                log::debug!("edit skipped: {}", err);
                return EditOutcome::Unchanged;
            }
            Err(err) => {
                log::warn!("edit rejected: {}", err);
                return EditOutcome::Rejected(err.to_string());
            }
        };

        if markup == self.markup {
            return EditOutcome::Unchanged;
        }

        let committed = parse_document(&markup).and_then(|parsed| {
            let normalized = parsed.to_markup()?;
            Ok((normalized, parsed.components))
        });

        match committed {
            Ok((normalized, components)) => {
                self.history.record(&normalized);
                self.install(normalized, components);
                EditOutcome::Committed
            }
            Err(err) => {
                log::warn!("edit rejected: {}", err);
                EditOutcome::Rejected(err.to_string())
            }
        }
    }

    /// Commit, then select whatever elements the edit created
    fn apply_selecting_new(&mut self, result: Result<String, MutationError>) -> EditOutcome {
        let before: HashSet<String> = self.flat.iter().map(|entry| entry.id.clone()).collect();
        let outcome = self.apply(result);

        if outcome.is_committed() {
            let created: Vec<String> = self
                .flat
                .iter()
                .filter(|entry| !before.contains(&entry.id))
                .map(|entry| entry.id.clone())
                .collect();
            if !created.is_empty() {
                self.selection = Selection::from_ids(created);
            }
        }
        outcome
    }

    /// Install markup from history without recording a new step
    fn restore(&mut self, markup: String) -> bool {
        match parse(&markup) {
            Ok(components) => {
                self.install(markup, components);
                true
            }
            Err(err) => {
                log::warn!("history entry no longer parses: {}", err);
                false
            }
        }
    }

    fn install(&mut self, markup: String, components: Vec<Component>) {
        self.flat = flatten(&components);
        self.components = components;
        self.markup = markup;
        self.validation_error = None;

        // exact ids only: a deleted element's generated id may be taken over
        // by a sibling through the positional fallback
        let live: HashSet<&str> = self.flat.iter().map(|entry| entry.id.as_str()).collect();
        self.selection.retain(|id| live.contains(id));
        let hover_gone = self
            .hovered_id
            .as_deref()
            .map_or(false, |id| !live.contains(id));
        if hover_gone {
            self.hovered_id = None;
        }
    }
}
