//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameResult, GameState};
use super::theme::*;
use crate::{ConfigError, Difficulty, GameConfig, Pos, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config)?,
            board_view: BoardView::default(),
            show_debug: false,
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play Black)").clicked() {
                        self.state.new_game(Stone::Black);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play White)").clicked() {
                        self.state.new_game(Stone::White);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.state.can_undo(), egui::Button::new("Undo"))
                        .clicked()
                    {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "You: {} - AI: {}",
                        self.state.human_color.name(),
                        self.state.agent.difficulty()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Project name with the board size and the tier currently playing
    fn render_title_card(&self, ui: &mut egui::Ui) {
        let size = self.state.board.size();
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
            ui.label(
                RichText::new(format!(
                    "{size}x{size} free-style, AI on {}",
                    self.state.agent.difficulty()
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Side to move, drawn as a stone, with what the session is waiting on
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let turn = self.state.current_turn();
        let (fill, rim) = match turn {
            Stone::White => (WHITE_STONE, WHITE_STONE_SHADOW),
            _ => (BLACK_STONE, BLACK_STONE_HIGHLIGHT),
        };
        let status = if self.state.game_over.is_some() {
            RichText::new("Game over").color(WIN_HIGHLIGHT)
        } else if self.state.is_ai_thinking() {
            RichText::new("AI is thinking").color(TIMER_WARNING)
        } else if self.state.is_human_turn() {
            RichText::new("Your move").color(TIMER_NORMAL)
        } else {
            RichText::new("Waiting for AI").color(TEXT_SECONDARY)
        };
        let last = self.state.last_move().map_or_else(
            || "No stones yet".to_string(),
            |pos| format!("Last: {}", cell_label(pos, self.state.board.size())),
        );

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (slot, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle(slot.center(), 17.0, fill, egui::Stroke::new(2.0, rim));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("{} to play", turn.name()))
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(status.size(12.0));
                    ui.label(RichText::new(last).size(10.0).color(TEXT_MUTED));
                });
            });
        });
    }

    /// Clock for the side to move, and how the agent's last reply was found
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        let (clock_label, clock, clock_color) = match self.state.ai_thinking_elapsed() {
            Some(waited) => ("AI", waited, TIMER_WARNING),
            None => ("You", self.state.move_timer.elapsed(), TEXT_PRIMARY),
        };
        let last_reply = self.state.move_timer.ai_thinking_time.zip(self.state.last_ai_result);

        Self::card_frame().show(ui, |ui| {
            egui::Grid::new("clock_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new(clock_label).size(11.0).color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{:.1}s", clock.as_secs_f32()))
                            .size(20.0)
                            .color(clock_color),
                    );
                    ui.end_row();

                    if let Some((waited, result)) = last_reply {
                        let step = result
                            .search_type
                            .map_or_else(|| "no move".to_string(), |t| format!("{t:?}"));
                        ui.label(RichText::new("Last reply").size(11.0).color(TEXT_MUTED));
                        ui.label(
                            RichText::new(format!("{step}, {:.2}s", waited.as_secs_f32()))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.end_row();
                    }
                });
        });
    }

    /// Difficulty selector, undo and move counter
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Difficulty").size(11.0).color(TEXT_SECONDARY));
                egui::ComboBox::from_id_salt("difficulty")
                    .selected_text(self.state.selected_difficulty.name())
                    .show_ui(ui, |ui| {
                        for d in Difficulty::ALL {
                            ui.selectable_value(&mut self.state.selected_difficulty, d, d.name());
                        }
                    });
            });
            if self.state.selected_difficulty != self.state.agent.difficulty() {
                ui.label(
                    RichText::new("Applies on New Game")
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let undo = egui::Button::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY))
                    .fill(BUTTON_BG);
                if ui.add_enabled(self.state.can_undo(), undo).clicked() {
                    self.state.undo();
                }

                let new_game =
                    egui::Button::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY))
                        .fill(BUTTON_BG);
                if ui.add(new_game).clicked() {
                    let human = self.state.human_color;
                    self.state.new_game(human);
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.board.stone_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last agent decision: cascade step, tier and timing
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        let size = self.state.board.size();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LAST DECISION").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            match &self.state.last_ai_result {
                None => {
                    ui.label(RichText::new("No agent move yet").size(10.0).color(TEXT_MUTED));
                }
                Some(result) => {
                    let rows = [
                        ("Step", result.search_type.map_or_else(|| "none".into(), |t| format!("{t:?}"))),
                        ("Cell", result.best_move.map_or_else(|| "-".into(), |p| cell_label(p, size))),
                        ("Tier", result.difficulty.to_string()),
                        ("Time", format!("{} ms", result.time_ms)),
                    ];
                    egui::Grid::new("decision_grid").num_columns(2).show(ui, |ui| {
                        for (key, value) in rows {
                            ui.label(RichText::new(key).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(value).size(11.0).color(TEXT_PRIMARY));
                            ui.end_row();
                        }
                    });
                }
            }
        });
    }

    /// Outcome banner with a button to play again as the same color
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let headline = match result.winner {
            None => "Board full: draw".to_string(),
            Some(w) if w == self.state.human_color => "You win".to_string(),
            Some(w) => format!("{} (AI) wins", w.name()),
        };
        let mut again = false;
        banner(GAME_OVER_BG).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(headline).size(18.0).strong().color(WIN_HIGHLIGHT));
                ui.add_space(8.0);
                again = ui.button(RichText::new("Play again").size(13.0)).clicked();
            });
        });
        if again {
            let human = self.state.human_color;
            self.state.new_game(human);
        }
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        banner(MESSAGE_BG).show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.game_over.and_then(|r| r.winning_line);
            let accept_input = self.state.is_human_turn() && !self.state.is_ai_thinking();

            let clicked = self
                .board_view
                .show(ui, &self.state.board, winning_line, accept_input);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            if i.key_pressed(egui::Key::N) {
                let human = self.state.human_color;
                self.state.new_game(human);
            }
        });
    }
}

/// Rounded, tinted frame for status banners
fn banner(fill: egui::Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(12.0)
}

/// Board coordinate as shown on the canvas labels: column letter, then the
/// row number counted from the bottom.
fn cell_label(pos: Pos, size: usize) -> String {
    let col = char::from(b'A' + pos.col);
    format!("{col}{}", size - pos.row as usize)
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || self.state.game_over.is_none() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_label_counts_rows_from_bottom() {
        assert_eq!(cell_label(Pos::new(7, 7), 15), "H8");
        assert_eq!(cell_label(Pos::new(0, 0), 15), "A15");
        assert_eq!(cell_label(Pos::new(8, 2), 9), "C1");
    }
}
