//! Small formatting helpers shared by the renderers.

use ratatui::layout::Rect;

use crate::logic::{SortDirection, SortKey, SortSpec};

/// What: Center a `w` x `h` rectangle inside `area`.
///
/// Output:
/// - Rectangle clamped to `area`.
#[must_use]
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Header marker for a sortable column: arrow when active, neutral otherwise.
#[must_use]
pub fn sort_marker(sort: Option<SortSpec>, key: SortKey) -> &'static str {
    match sort {
        Some(s) if s.key == key => match s.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => " ⇅",
    }
}

/// Footer text such as `Page 1/2 · 7 flights`.
#[must_use]
pub fn page_indicator(page: usize, page_count: usize, rows: usize) -> String {
    let noun = if rows == 1 { "flight" } else { "flights" };
    format!("Page {}/{} · {rows} {noun}", page + 1, page_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Centered rects stay inside the area
    ///
    /// - Input: 20x10 in 100x30 at offset (2,3); oversize request
    /// - Output: Centered position; oversize clamps to the area
    fn centered_rect_clamps() {
        let area = Rect::new(2, 3, 100, 30);
        assert_eq!(centered_rect(area, 20, 10), Rect::new(42, 13, 20, 10));
        assert_eq!(centered_rect(area, 200, 50), area);
    }

    #[test]
    /// What: Sort marker reflects the active column and direction
    ///
    /// - Input: No sort; ascending and descending on flight number
    /// - Output: Neutral, up, down; other column neutral
    fn sort_markers() {
        let asc = Some(SortSpec::ascending(SortKey::FlightNumber));
        let desc = Some(SortSpec {
            key: SortKey::FlightNumber,
            direction: SortDirection::Descending,
        });
        assert_eq!(sort_marker(None, SortKey::FlightNumber), " ⇅");
        assert_eq!(sort_marker(asc, SortKey::FlightNumber), " ▲");
        assert_eq!(sort_marker(desc, SortKey::FlightNumber), " ▼");
        assert_eq!(sort_marker(asc, SortKey::EffectiveDate), " ⇅");
    }

    #[test]
    /// What: Page indicator is one-based and pluralizes
    ///
    /// - Input: Page 0 of 2 with 7 rows; empty view
    /// - Output: "Page 1/2 · 7 flights"; "Page 1/1 · 0 flights"
    fn page_indicator_text() {
        assert_eq!(page_indicator(0, 2, 7), "Page 1/2 · 7 flights");
        assert_eq!(page_indicator(0, 0, 0), "Page 1/1 · 0 flights");
        assert_eq!(page_indicator(0, 1, 1), "Page 1/1 · 1 flight");
    }
}
