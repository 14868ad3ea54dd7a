use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const LINES: usize = 8;
const CHARS: usize = 32;

#[derive(Clone)]
struct MonitorWindow {
    lines: Arc<Mutex<[String; LINES]>>,
    frame_png: Arc<Mutex<Option<Vec<u8>>>>,
}

impl eframe::App for MonitorWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let lines = self.lines.lock().unwrap().clone();
        let frame_png = self.frame_png.lock().unwrap().clone();

        egui::SidePanel::right("status_panel")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                for line in lines.iter() {
                    ui.label(egui::RichText::new(line.clone()).monospace().size(16.0));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            match frame_png.as_deref().and_then(|png| image::load_from_memory(png).ok()) {
                Some(decoded) => {
                    let rgba = decoded.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                    let texture =
                        ctx.load_texture("annotated-frame", color_image, Default::default());
                    ui.centered_and_justified(|ui| {
                        ui.image(egui::load::SizedTexture::from_handle(&texture));
                    });
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Waiting for annotated frames...");
                    });
                }
            }
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    lines: Arc<Mutex<[String; LINES]>>,
    frame_png: Arc<Mutex<Option<Vec<u8>>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(std::array::from_fn(|_| String::new()))),
            frame_png: Arc::new(Mutex::new(None)),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = self.lines.clone();
        let frame_png = self.frame_png.clone();

        // The window blocks its own thread until closed
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 480.0]),
                ..Default::default()
            };

            let window = MonitorWindow { lines, frame_png };

            let _ = eframe::run_native(
                "Drowsiness Monitor",
                options,
                Box::new(|_cc| Box::new(window)),
            );
        });

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut lines = self.lines.lock().unwrap();
        for line in lines.iter_mut() {
            line.clear();
        }
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line as usize >= LINES {
            return Err("Invalid line number".into());
        }

        let mut lines = self.lines.lock().unwrap();
        lines[line as usize] = text.chars().take(CHARS).collect();
        Ok(())
    }

    fn show_frame(&mut self, png: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.frame_png.lock().unwrap() = Some(png.to_vec());
        Ok(())
    }

    fn num_lines(&self) -> u8 {
        LINES as u8
    }

    fn chars_per_line(&self) -> u8 {
        CHARS as u8
    }
}
