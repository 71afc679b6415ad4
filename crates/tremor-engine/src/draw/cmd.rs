use crate::draw::shapes::{CircleCmd, RectCmd, SpriteCmd, TextCmd};

/// Renderer-agnostic draw command.
///
/// Coordinates are screen space: the camera transform has already been
/// applied by the time a command is recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Sprite(SpriteCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Sprite(_) => "sprite",
            DrawCmd::Text(_) => "text",
        }
    }
}
