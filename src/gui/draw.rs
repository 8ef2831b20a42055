use super::{App, Config};
use eframe::egui::{pos2, Button, Rect, RichText, Sense, Stroke, Ui, Vec2};
use std::time::Instant;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui, now: Instant) {
        ui.horizontal(|ui| {
            let text = if self.sim.running() { "Stop" } else { "Start" };
            if ui.add(Self::new_button(text)).clicked() {
                self.sim.toggle_running(now);
            }

            if ui.add(Self::new_button("Clear all")).clicked() {
                self.sim.reset();
            }

            if ui.add(Self::new_button("Random")).clicked() {
                self.sim.randomize(None);
            }
        });

        ui.label(Self::new_text(&format!(
            "Generation: {}    Alive cells: {}",
            self.sim.generation(),
            self.sim.board().population()
        )));
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let board = self.sim.board();
        let (rows, columns) = (board.rows(), board.columns());
        let pitch = Config::CELL_SIZE + Config::CELL_GAP;
        let size = Vec2::new(
            pitch * columns as f32 - Config::CELL_GAP,
            pitch * rows as f32 - Config::CELL_GAP,
        );

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0., Config::BOARD_BACKGROUND);

        for r in 0..rows {
            for c in 0..columns {
                let min = pos2(origin.x + c as f32 * pitch, origin.y + r as f32 * pitch);
                let rect = Rect::from_min_size(min, Vec2::splat(Config::CELL_SIZE));
                let color = if board.alive(r, c) {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                painter.rect_filled(rect, Config::CELL_ROUNDING, color);
                painter.rect_stroke(
                    rect,
                    Config::CELL_ROUNDING,
                    Stroke::new(Config::CELL_STROKE_WIDTH, Config::CELL_STROKE_COLOR),
                );
            }
        }

        // Map the click back to a cell; the controller ignores edits while
        // running and out-of-range coordinates.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let c = ((pos.x - origin.x) / pitch).floor();
                let r = ((pos.y - origin.y) / pitch).floor();
                if r >= 0. && c >= 0. {
                    self.sim.toggle_cell(r as usize, c as usize);
                }
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui, now: Instant) {
        ui.vertical(|ui| {
            self.draw_controls(ui, now);

            ui.add_space(Config::WIDGET_GAP);

            self.draw_board(ui);
        });
    }
}
