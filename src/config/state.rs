// src/config/state.rs
use super::options::AppOptions;
use crate::analysis::SortKey;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Index into the post list
    pub selected_post: Option<usize>,
    /// Deck name picked in the combo box
    pub selected_deck: Option<String>,

    /// Class id baked into the share URL
    pub class_id: u32,

    /// Table sort: column and ascending flag. `None` keeps table order.
    pub sort: Option<(SortKey, bool)>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100.0,
            window_h: 720.0,
            selected_post: None,
            selected_deck: None,
            class_id: super::consts::DEFAULT_CLASS_ID,
            sort: None,
        }
    }
}

impl GuiState {
    /// Header click: new column sorts ascending, same column flips.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((k, asc)) if k == key => Some((key, !asc)),
            _ => Some((key, true)),
        };
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_toggles_per_column() {
        let mut gui = GuiState::default();
        gui.toggle_sort(SortKey::Average);
        assert_eq!(gui.sort, Some((SortKey::Average, true)));
        gui.toggle_sort(SortKey::Average);
        assert_eq!(gui.sort, Some((SortKey::Average, false)));
        gui.toggle_sort(SortKey::Name);
        assert_eq!(gui.sort, Some((SortKey::Name, true)));
    }
}
