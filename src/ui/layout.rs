use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Full-width strip of `height` rows, vertically centered in `area`.
pub fn centered_rows(height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}

/// Split `area` into a banner strip of `banner_height` rows and the rest.
pub fn split_banner(banner_height: u16, area: Rect) -> (Rect, Rect) {
    let banner_height = banner_height.min(area.height);
    let banner = Rect {
        height: banner_height,
        ..area
    };
    let rest = Rect {
        y: area.y + banner_height,
        height: area.height - banner_height,
        ..area
    };
    (banner, rest)
}
