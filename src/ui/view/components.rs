//! 通用 UI 组件
//!
//! 弹窗框架与图片字符画

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 图片名对应的字符画
pub fn image_art(name: &str) -> &'static str {
    match name {
        "apple" => APPLE_ART,
        "egg" => EGG_ART,
        "dog" => DOG_ART,
        _ => "",
    }
}

/// [组件] 图片名对应的主色
pub fn image_color(name: &str) -> Color {
    match name {
        "apple" => Color::Red,
        "egg" => Color::White,
        "dog" => Color::Yellow,
        _ => Color::Gray,
    }
}

const APPLE_ART: &str = r#"
        ,(
      __/\__
    .'      '.
   /          \
  |            |
  |            |
   \          /
    '.______.'
"#;

const EGG_ART: &str = r#"
      .-""-.
     /      \
    |        |
    |        |
    |        |
     \      /
      '-..-'
"#;

const DOG_ART: &str = r#"
      /^ ^\
     / 0 0 \
     V\ Y /V
      / - \
     /    |
    V__)  ||
"#;
