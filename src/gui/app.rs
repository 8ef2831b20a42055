use super::Config;
use crate::Simulation;
use eframe::egui::{CentralPanel, Context, Frame, Key, Margin};
use std::time::Instant;

pub struct App {
    pub(super) sim: Simulation,
}

impl App {
    pub fn new() -> Self {
        Self {
            sim: Simulation::new(),
        }
    }

    fn handle_keys(&mut self, ctx: &Context, now: Instant) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.sim.toggle_running(now);
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.handle_keys(ctx, now);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::FRAME_FILL),
            )
            .show(ctx, |ui| {
                self.draw(ui, now);
            });

        if self.sim.poll(now) {
            ctx.request_repaint();
        }
        if self.sim.running() {
            if let Some(wait) = self.sim.until_next_tick(now) {
                ctx.request_repaint_after(wait);
            }
        }
    }
}
