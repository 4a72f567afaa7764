use chrono::Local;
use eframe::egui;

use crate::egui_app::components::{modal, pagination};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::limits;
use crate::shared::user::Role;

/// Admin: user table with deletion, plus the monthly signup chart
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.session.is_admin() {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.colored_label(colors::ERROR, "Admin privileges required");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Frame::new()
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("Admin")
                                .size(22.0)
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        if state.admin_loading || state.admin_deleting() {
                            ui.spinner();
                        }
                    });
                    if let Some(error) = &state.admin_error {
                        ui.colored_label(colors::ERROR, error);
                    }
                    ui.add_space(12.0);

                    render_user_table(ui, state);
                    ui.add_space(24.0);
                    render_signup_chart(ui, state);
                });
        });

    if let Some((user_id, nickname)) = state.admin_delete_target.clone() {
        match modal::confirm(
            ui.ctx(),
            "admin_delete_modal",
            "Delete this user?",
            &format!("'{}' will lose their account and room history.", nickname),
            "Delete",
            "Cancel",
        ) {
            Some(modal::ModalChoice::Confirm) => {
                state.admin_delete_target = None;
                state.delete_admin_user(user_id);
            }
            Some(modal::ModalChoice::Cancel) => state.admin_delete_target = None,
            None => {}
        }
    }
}

fn render_user_table(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new(format!("Users ({})", state.admin_users.len()))
            .size(16.0)
            .strong()
            .color(colors::TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    if state.admin_users.is_empty() {
        if !state.admin_loading {
            ui.colored_label(colors::TEXT_SECONDARY, "No users");
        }
        return;
    }

    let pages = pagination::page_count(state.admin_users.len(), limits::ADMIN_PAGE_SIZE);
    let page = state.admin_page.min(pages - 1);
    let page_users: Vec<_> = state
        .admin_users
        .iter()
        .skip(page * limits::ADMIN_PAGE_SIZE)
        .take(limits::ADMIN_PAGE_SIZE)
        .cloned()
        .collect();
    let my_id = state.session.user_id();
    let mut delete_target = None;

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("admin_user_grid")
            .num_columns(6)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in ["Email", "Nickname", "Job", "Role", "Joined", ""] {
                    ui.label(
                        egui::RichText::new(header)
                            .size(11.0)
                            .strong()
                            .color(colors::TEXT_SECONDARY),
                    );
                }
                ui.end_row();

                for user in &page_users {
                    ui.label(egui::RichText::new(&user.email).size(12.0));
                    ui.label(egui::RichText::new(&user.nickname).size(12.0));
                    ui.label(egui::RichText::new(&user.job).size(12.0));
                    ui.label(
                        egui::RichText::new(match user.role {
                            Role::Admin => "admin",
                            Role::User => "user",
                        })
                        .size(12.0)
                        .color(match user.role {
                            Role::Admin => colors::ACCENT_HOVER,
                            Role::User => colors::TEXT_SECONDARY,
                        }),
                    );
                    ui.label(
                        egui::RichText::new(
                            user.created_at
                                .with_timezone(&Local)
                                .format("%Y-%m-%d")
                                .to_string(),
                        )
                        .size(12.0)
                        .color(colors::TIMESTAMP),
                    );
                    // No deleting yourself out of the admin seat
                    if my_id != Some(user.id)
                        && ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new("Delete").size(11.0).color(colors::ERROR),
                                )
                                .frame(false),
                            )
                            .clicked()
                    {
                        delete_target = Some((user.id, user.nickname.clone()));
                    }
                    ui.end_row();
                }
            });
    });

    if delete_target.is_some() {
        state.admin_delete_target = delete_target;
    }

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        if let Some(new_page) = pagination::render(ui, page, pages) {
            state.admin_page = new_page;
        }
    });
}

fn render_signup_chart(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Monthly signups")
                .size(16.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );

        let selected_label = state
            .admin_year
            .map_or_else(|| "Year".to_string(), |y| y.to_string());
        let mut picked = None;
        egui::ComboBox::from_id_salt("admin_year_picker")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for year in &state.admin_years {
                    if ui
                        .selectable_label(state.admin_year == Some(*year), year.to_string())
                        .clicked()
                    {
                        picked = Some(*year);
                    }
                }
            });
        if let Some(year) = picked {
            state.select_admin_year(year);
        }
    });
    ui.add_space(8.0);

    if state.admin_year.is_none() {
        ui.colored_label(colors::TEXT_SECONDARY, "No signup data yet");
        return;
    }

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        draw_bars(ui, &state.admin_signups);
    });
}

/// Twelve bars, one per month, scaled to the busiest month
fn draw_bars(ui: &mut egui::Ui, series: &[u64; 12]) {
    let desired = egui::vec2(ui.available_width(), 140.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let max = series.iter().copied().max().unwrap_or(0).max(1);
    let bar_width = rect.width() / 12.0;
    let plot_height = rect.height() - 28.0;

    for (month_idx, count) in series.iter().enumerate() {
        let height = (*count as f32 / max as f32) * plot_height;
        let x0 = rect.left() + month_idx as f32 * bar_width + bar_width * 0.18;
        let x1 = rect.left() + (month_idx + 1) as f32 * bar_width - bar_width * 0.18;
        let y1 = rect.bottom() - 16.0;
        let y0 = y1 - height;

        painter.rect_filled(
            egui::Rect::from_min_max(egui::pos2(x0, y0), egui::pos2(x1, y1)),
            2.0,
            colors::CHART_BAR,
        );
        painter.text(
            egui::pos2((x0 + x1) / 2.0, rect.bottom() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{}", month_idx + 1),
            egui::FontId::proportional(10.0),
            colors::TEXT_SECONDARY,
        );
        if *count > 0 {
            painter.text(
                egui::pos2((x0 + x1) / 2.0, y0 - 2.0),
                egui::Align2::CENTER_BOTTOM,
                count.to_string(),
                egui::FontId::proportional(10.0),
                colors::TEXT_PRIMARY,
            );
        }
    }
}
