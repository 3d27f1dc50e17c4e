use std::fs;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

pub const RESOURCE_SPRITE_BOSS : &str = "resources/sprites/boss.txt";
pub const BOSS_SPRITE_SIZE : (u16, u16) = (30, 7);
pub const PARTY_SPRITE_SIZE : (u16, u16) = (14, 4);

pub fn party_sprite_path(index: usize) -> String {
    format!("resources/sprites/party/{}.txt", index + 1)
}

/*
    ASCII art read from a file and cut to a fixed size. Falls back to the combatant's name if the art is missing.
 */
#[derive(Clone, Debug)]
pub struct SpriteWidget {
    lines: Vec<String>,
    label: String,
    width: u16,
    height: u16,
    colour: Color
}

fn fit_lines(content: &str, width: u16, height: u16) -> Vec<String> {
    content.lines()
        .take(height as usize)
        .map(|line| {
            let cropped : String = line.chars().take(width as usize).collect();
            format!("{:<width$}", cropped, width = width as usize)
        })
        .collect()
}

impl SpriteWidget {
    pub fn load(path: &str, label: String, size: (u16, u16), colour: Color) -> SpriteWidget {
        let (width, height) = size;
        let lines = match fs::read_to_string(path) {
            Ok(content) => fit_lines(&content, width, height),
            Err(e) => {
                log::error!("Failed to load sprite {}: {}", path, e);
                Vec::new()
            }
        };
        SpriteWidget { lines, label, width, height, colour }
    }

    #[cfg(test)]
    pub fn from_lines(content: &str, label: String, size: (u16, u16), colour: Color) -> SpriteWidget {
        let (width, height) = size;
        SpriteWidget { lines: fit_lines(content, width, height), label, width, height, colour }
    }

    pub fn is_fallback(&self) -> bool {
        self.lines.is_empty()
    }

    #[cfg(test)]
    pub fn get_lines(&self) -> &Vec<String> {
        &self.lines
    }
}

impl Widget for SpriteWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = self.width.min(area.width);
        let x = area.x + (area.width - width) / 2;

        if self.is_fallback() {
            let style = Style::default().fg(self.colour).add_modifier(Modifier::BOLD);
            let label_width = (self.label.chars().count() as u16).min(area.width);
            let label_x = area.x + (area.width - label_width) / 2;
            let label_y = area.y + self.height.min(area.height) / 2;
            buf.set_stringn(label_x, label_y.min(area.y + area.height - 1), &self.label, area.width as usize, style);
            return;
        }

        let style = Style::default().fg(self.colour);
        for (row, line) in self.lines.iter().enumerate().take(area.height as usize) {
            buf.set_stringn(x, area.y + row as u16, line, width as usize, style);
        }
    }
}
