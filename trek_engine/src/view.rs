//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed together before the next prompt.

mod icons;
mod render_action;
mod render_env;
mod render_system;
pub mod view_item;

use textwrap::termwidth;

use crate::style::GameStyle;

pub use view_item::ViewItem;

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items queued for one section, in the order they were pushed.
    pub fn section_items(&self, section: Section) -> impl Iterator<Item = &ViewItem> {
        self.items.iter().filter(move |item| item.section() == section)
    }

    fn has_section(&self, section: Section) -> bool {
        self.section_items(section).next().is_some()
    }

    /// Compose and display all queued messages, then clear the buffer.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        // First Section: where the player is and what they can do
        if self.has_section(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.environment();
        }
        // Second Section: immediate results of the player's command
        if self.has_section(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.direct_results();
        }
        // Third Section: menu, engine messages, end of game
        if self.has_section(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.system();
        }

        self.items.clear();
        println!();
    }

    // SECTION AGGREGATORS START HERE --------------------

    fn environment(&mut self) {
        render_env::location_description(self);
        render_env::visit_points(self);
        render_env::speed_boost(self);
        render_env::available_actions(self);
    }

    fn direct_results(&mut self) {
        render_system::inventory(self);
        render_system::score(self);

        render_action::action_success(self);
        render_action::action_failure(self);
        render_action::hints(self);
        render_action::points_awarded(self);
        render_action::errors(self);
    }

    fn system(&mut self) {
        render_system::menu_options(self);
        render_system::engine_message(self);
        render_system::end_summary(self);
    }
}

/// Sections of the screen output, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    Environment,
    DirectResult,
    System,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Direction};

    #[test]
    fn items_bin_into_sections() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("You picked up the Pen.".into()));
        view.push(ViewItem::LocationDescription {
            description: "A hall.".into(),
            first_visit: true,
        });
        view.push(ViewItem::AvailableActions(vec![Action::Go(Direction::North)]));
        view.push(ViewItem::MenuOptions(vec!["look".into()]));

        let env: Vec<_> = view.section_items(Section::Environment).collect();
        assert_eq!(env.len(), 2);
        assert!(env[0].is_location_description());
        assert_eq!(view.section_items(Section::DirectResult).count(), 1);
        assert_eq!(view.section_items(Section::System).count(), 1);
    }

    #[test]
    fn flush_clears_the_buffer() {
        let mut view = View::new();
        view.push(ViewItem::Error("something broke".into()));
        view.push(ViewItem::Inventory(vec![]));
        view.flush();
        assert!(view.is_empty());
    }
}
