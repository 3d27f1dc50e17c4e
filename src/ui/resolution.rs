use ratatui::layout::Rect;

#[derive(Clone, Debug)]
pub struct Resolution {
    pub width : u16,
    pub height : u16
}

/// The smallest screen that fits the boss portrait, the party row and the battle log.
pub const MIN_RESOLUTION: Resolution = Resolution::new(80, 24);

impl Resolution {
    pub const fn new(width: u16, height: u16) -> Resolution {
        Resolution { width, height }
    }

    pub fn fits_within(&self, area: Rect) -> bool {
        area.width >= self.width && area.height >= self.height
    }
}
