use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

pub const BOSS_BAR_COLOUR : Color = Color::Red;
pub const PARTY_BAR_COLOUR : Color = Color::Green;
const EMPTY_BAR_COLOUR : Color = Color::Black;

/*
    A single row bar filled in proportion to current / max health with "current/max" written over the middle
 */
#[derive(Clone, Debug)]
pub struct HealthBarWidget {
    current: u32,
    max: u32,
    colour: Color
}

impl HealthBarWidget {
    pub fn new(current: u32, max: u32, colour: Color) -> HealthBarWidget {
        HealthBarWidget { current, max, colour }
    }

    pub fn filled_width(&self, width: u16) -> u16 {
        if self.max == 0 {
            return 0;
        }
        let current = self.current.min(self.max) as u64;
        (width as u64 * current / self.max as u64) as u16
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.current, self.max)
    }
}

impl Widget for HealthBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let filled = self.filled_width(area.width);
        for x in 0..area.width {
            let colour = if x < filled { self.colour } else { EMPTY_BAR_COLOUR };
            buf[(area.x + x, area.y)].set_symbol(" ").set_bg(colour);
        }

        let label = self.label();
        let label_width = label.len() as u16;
        let label_x = area.x + area.width.saturating_sub(label_width) / 2;
        buf.set_stringn(label_x, area.y, label, area.width as usize, Style::default().fg(Color::White));
    }
}
