//! eframe window for the event submission form.

pub mod decoration;

use anyhow::{Result, anyhow};
use eframe::egui::{
    self, Align, Color32, ColorImage, CornerRadius, FontId, Layout, Margin, RichText, Sense,
    Stroke, TextureHandle, TextureOptions, UiBuilder, vec2,
};
use tracing::{debug, info};

use crate::config::Configuration;
use crate::form::EventForm;
use crate::processing::thumbnail::Thumbnail;
use crate::tasks::notifier::{DialogNotifier, Notifier};
use crate::tasks::picker::{FileDialogPicker, ImagePicker};

const CARD_SIZE: [f32; 2] = [400.0, 200.0];
const CARD_RADIUS: u8 = 15;
const CARD_FILL: Color32 = Color32::from_rgb(255, 230, 235);
const CARD_BORDER: Color32 = Color32::from_rgb(255, 175, 175);
const SUBMIT_FILL: Color32 = Color32::from_rgb(100, 180, 255);
const NEWS_WIDTH: f32 = 400.0;
const NEWS_MAX_HEIGHT: f32 = 80.0;

/// Opens the dashboard window and blocks until it is closed.
pub fn run(cfg: Configuration) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(cfg.window_size)
            .with_title(cfg.window_title.as_str()),
        centered: true,
        ..Default::default()
    };
    let app_name = cfg.window_title.clone();
    info!(title = %app_name, "opening window");

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            let form = EventForm::new(cfg, FileDialogPicker, DialogNotifier);
            Ok(Box::new(DashboardApp::new(form)))
        }),
    )
    .map_err(|err| anyhow!("event dashboard window failed: {err}"))
}

pub struct DashboardApp<P, N> {
    form: EventForm<P, N>,
    textures: Vec<TextureHandle>,
    /// Session generation the cached textures belong to.
    texture_generation: u64,
}

impl<P: ImagePicker, N: Notifier> DashboardApp<P, N> {
    pub fn new(form: EventForm<P, N>) -> Self {
        let texture_generation = form.session().generation();
        Self {
            form,
            textures: Vec::new(),
            texture_generation,
        }
    }

    /// Uploads textures for thumbnails added since the last frame; drops them all after a reset.
    fn sync_textures(&mut self, ctx: &egui::Context) {
        let session = self.form.session();
        if session.generation() != self.texture_generation {
            debug!(dropped = self.textures.len(), "session reset; dropping textures");
            self.textures.clear();
            self.texture_generation = session.generation();
        }
        for thumb in session.uploaded().iter().skip(self.textures.len()) {
            self.textures.push(upload(ctx, thumb, self.textures.len()));
        }
    }

    fn upload_card(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(CARD_SIZE.into(), Sense::click());
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::same(CARD_RADIUS), CARD_FILL);
        decoration::paint_rounded_border(painter, rect, CARD_RADIUS, CARD_BORDER);

        let inner = rect.shrink(decoration::border_inset(CARD_RADIUS));
        let mut content = ui.new_child(
            UiBuilder::new()
                .max_rect(inner)
                .layout(Layout::left_to_right(Align::Min).with_main_wrap(true)),
        );
        content.spacing_mut().item_spacing = vec2(10.0, 10.0);

        if self.form.session().shows_placeholder() {
            content.label(
                RichText::new("Upload Photo")
                    .font(FontId::proportional(18.0))
                    .color(Color32::GRAY),
            );
        } else {
            let thumb = &self.form.config().thumbnail;
            let size = vec2(thumb.width as f32, thumb.height as f32);
            egui::ScrollArea::vertical()
                .id_salt("thumbnails")
                .auto_shrink([false, false])
                .drag_to_scroll(false)
                .show(&mut content, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for tex in &self.textures {
                            egui::Frame::default()
                                .stroke(Stroke::new(1.0, Color32::GRAY))
                                .show(ui, |ui| {
                                    ui.add(egui::Image::new(tex).fit_to_exact_size(size));
                                });
                        }
                    });
                });
        }
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

impl<P: ImagePicker, N: Notifier> eframe::App for DashboardApp<P, N> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_textures(ctx);

        let mut pick_clicked = false;
        let mut submit_clicked = false;

        let panel = egui::Frame::central_panel(&ctx.style())
            .fill(Color32::WHITE)
            .inner_margin(Margin::same(20));
        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(self.form.config().heading())
                        .font(FontId::proportional(24.0))
                        .strong(),
                );
                ui.add_space(40.0);

                pick_clicked = self.upload_card(ui).clicked();
                ui.add_space(30.0);

                ui.label(
                    RichText::new("Add News:")
                        .font(FontId::proportional(18.0))
                        .strong(),
                );
                ui.add_space(15.0);
                egui::ScrollArea::vertical()
                    .id_salt("news")
                    .max_width(NEWS_WIDTH)
                    .max_height(NEWS_MAX_HEIGHT)
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(self.form.news_text_mut())
                                .desired_rows(3)
                                .desired_width(NEWS_WIDTH)
                                .font(FontId::proportional(14.0)),
                        );
                    });
                ui.add_space(30.0);

                let submit = egui::Button::new(
                    RichText::new("Submit")
                        .font(FontId::proportional(16.0))
                        .strong(),
                )
                .fill(SUBMIT_FILL);
                submit_clicked = ui.add(submit).clicked();
            });
        });

        // dialogs are modal; run them after the frame's layout is done
        if pick_clicked {
            self.form.open_image_picker();
            ctx.request_repaint();
        }
        if submit_clicked {
            let _ = self.form.submit();
            ctx.request_repaint();
        }
    }
}

fn upload(ctx: &egui::Context, thumb: &Thumbnail, index: usize) -> TextureHandle {
    let image = ColorImage::from_rgba_unmultiplied(thumb.size(), &thumb.pixels);
    ctx.load_texture(format!("thumbnail-{index}"), image, TextureOptions::LINEAR)
}
