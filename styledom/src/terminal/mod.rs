use std::io::{self, Write};

use crossterm::{
    queue,
    style::{
        Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal,
};

use crate::buffer::Buffer;
use crate::types::{Rgb, TextStyle};

/// Current terminal width in columns, if stdout is a terminal.
pub fn terminal_width() -> Option<u16> {
    terminal::size().ok().map(|(width, _)| width)
}

/// Write a buffer as colored lines, one terminal row per buffer row.
///
/// Colors reset at the end of every line so the output can be piped or
/// scrolled without bleeding into the shell.
pub fn write_buffer<W: Write>(buf: &Buffer, out: &mut W) -> io::Result<()> {
    for y in 0..buf.height() {
        let mut last: Option<(Rgb, Rgb, TextStyle)> = None;
        for cell in buf.row(y) {
            let attrs = (cell.fg, cell.bg, cell.style);
            if last != Some(attrs) {
                queue!(
                    out,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(out, SetAttribute(Attribute::Dim))?;
                }
                last = Some(attrs);
            }
            queue!(out, Print(cell.char))?;
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor, Print('\n'))?;
    }
    out.flush()
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
