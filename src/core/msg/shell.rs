use serde::{Deserialize, Serialize};

use crate::core::msg::InputEdit;

/// Messages for the persistent layout shell: side-menu movement, sider
/// collapse and the header search field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellMsg {
    MenuUp,
    MenuDown,
    /// Navigate to the menu item under the cursor.
    MenuSelect,
    ToggleSider,
    FocusSearch,
    BlurSearch,
    EditSearch(InputEdit),
}
