//! Pagination Component
//!
//! A row of page buttons with prev/next arrows. Pages are zero-based
//! internally and one-based on the labels.

use eframe::egui;

use crate::egui_app::theme::colors;

/// Render the pager; returns the newly selected page if it changed
pub fn render(ui: &mut egui::Ui, page: usize, total_pages: usize) -> Option<usize> {
    if total_pages <= 1 {
        return None;
    }

    let mut selected = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(page > 0, egui::Button::new("<").frame(false))
            .clicked()
        {
            selected = Some(page - 1);
        }

        for candidate in 0..total_pages {
            let label = egui::RichText::new(format!("{}", candidate + 1)).size(13.0);
            let button = if candidate == page {
                egui::Button::new(label.color(colors::TEXT_LIGHT))
                    .fill(colors::ACCENT)
                    .corner_radius(egui::CornerRadius::same(4))
            } else {
                egui::Button::new(label.color(colors::TEXT_PRIMARY))
                    .fill(colors::SURFACE)
                    .corner_radius(egui::CornerRadius::same(4))
            };
            if ui.add(button).clicked() && candidate != page {
                selected = Some(candidate);
            }
        }

        if ui
            .add_enabled(page + 1 < total_pages, egui::Button::new(">").frame(false))
            .clicked()
        {
            selected = Some(page + 1);
        }
    });
    selected
}

/// Number of pages needed for `total` items at `per_page` each
pub fn page_count(total: usize, per_page: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(1, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(13, 6), 3);
    }
}
