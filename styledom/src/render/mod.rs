use crate::buffer::Buffer;
use crate::element::ElementKind;
use crate::layout::{LayoutNode, Rect, SWATCH_ROWS};
use crate::text::char_width;
use crate::theme::{resolve_color, Theme};
use crate::types::Rgb;

/// Glyph used where a swatch color could not be resolved.
const UNRESOLVED_FILL: char = '░';

#[derive(Debug, Clone, Copy)]
struct Inherited {
    fg: Rgb,
    bold: bool,
}

/// Paint a laid-out tree into a fresh buffer sized to fit it.
pub fn render(root: &LayoutNode, theme: &dyn Theme) -> Buffer {
    let fg = resolve_color(theme, &theme.foreground()).unwrap_or(Rgb::new(255, 255, 255));
    let bg = resolve_color(theme, &theme.background()).unwrap_or_default();

    let mut buf = Buffer::new(root.outer_width(), root.outer_height(), fg, bg);
    render_node(root, Inherited { fg, bold: false }, &mut buf);
    buf
}

fn render_node(node: &LayoutNode, inherited: Inherited, buf: &mut Buffer) {
    let fg = node.style.color.unwrap_or(inherited.fg);
    let bold = match node.style.font_weight {
        Some(_) => node.style.bold(),
        None => inherited.bold || matches!(node.kind, ElementKind::Heading(_)),
    };

    let mut text_top = node.content.y;
    if node.kind == ElementKind::Swatch {
        let block = Rect::new(node.content.x, node.content.y, node.content.width, SWATCH_ROWS);
        match node.style.bg {
            Some(color) => fill_rect(buf, block, color),
            None => fill_glyph(buf, block, UNRESOLVED_FILL, fg),
        }
        text_top = text_top.saturating_add(SWATCH_ROWS);
    } else if let Some(bg) = node.style.bg {
        fill_rect(buf, node.rect, bg);
    }

    for (i, line) in node.lines.iter().enumerate() {
        let y = text_top.saturating_add(i as u16);
        render_line(buf, line, node.content.x, y, node.content.right(), fg, bold);
    }

    let inherited = Inherited { fg, bold };
    for child in &node.children {
        render_node(child, inherited, buf);
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
                cell.char = ' ';
            }
        }
    }
}

fn fill_glyph(buf: &mut Buffer, rect: Rect, glyph: char, fg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = glyph;
                cell.fg = fg;
                cell.style.dim = true;
            }
        }
    }
}

fn render_line(buf: &mut Buffer, line: &str, x: u16, y: u16, right: u16, fg: Rgb, bold: bool) {
    let mut cursor = x;
    for ch in line.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if cursor.saturating_add(width) > right {
            break;
        }
        if let Some(cell) = buf.get_mut(cursor, y) {
            cell.char = ch;
            cell.fg = fg;
            cell.style.bold = bold;
        }
        cursor += width;
    }
}
