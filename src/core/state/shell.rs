use crate::core::cmd::Cmd;
use crate::core::msg::shell::ShellMsg;
use crate::core::state::input::TextField;
use crate::domain::nav::nav_items;

/// Layout-shell state: menu cursor, sider collapse and the header search
/// field. The menu cursor is the hovered item; the selected marking always
/// follows the current route, not the cursor.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub menu_cursor: usize,
    pub sider_collapsed: bool,
    pub search: TextField,
    pub search_focused: bool,
}

impl ShellState {
    /// Shell-specific update function. `MenuSelect` is cross-cutting (it
    /// navigates) and is handled by the top-level update instead.
    pub fn update(&mut self, msg: ShellMsg) -> Vec<Cmd> {
        match msg {
            ShellMsg::MenuUp => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            ShellMsg::MenuDown => {
                self.menu_cursor = (self.menu_cursor + 1).min(nav_items().len() - 1);
            }
            ShellMsg::ToggleSider => {
                self.sider_collapsed = !self.sider_collapsed;
            }
            ShellMsg::FocusSearch => {
                self.search_focused = true;
            }
            ShellMsg::BlurSearch => {
                self.search_focused = false;
            }
            ShellMsg::EditSearch(edit) => {
                self.search.apply(edit);
            }
            ShellMsg::MenuSelect => {}
        }
        vec![]
    }
}
