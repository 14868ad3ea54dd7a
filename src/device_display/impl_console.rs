use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

const LINES: usize = 8;
const CHARS: usize = 32;

pub struct DeviceDisplayConsole {
    display_buffer: [[char; CHARS]; LINES],
    last_frame_size: Option<usize>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: [[' '; CHARS]; LINES],
            last_frame_size: None,
        }
    }

    fn render_display(&self) {
        println!("┌{}┐", "─".repeat(CHARS));
        for row in &self.display_buffer {
            print!("│");
            for &c in row {
                print!("{}", c);
            }
            println!("│");
        }
        println!("└{}┘", "─".repeat(CHARS));
        if let Some(size) = self.last_frame_size {
            println!("[annotated frame: {} bytes]", size);
        }
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.display_buffer = [[' '; CHARS]; LINES];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line as usize >= LINES {
            return Err("Invalid line number".into());
        }

        self.display_buffer[line as usize] = [' '; CHARS];
        for (i, c) in text.chars().take(CHARS).enumerate() {
            self.display_buffer[line as usize][i] = c;
        }

        self.render_display();
        Ok(())
    }

    fn show_frame(&mut self, png: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.last_frame_size = Some(png.len());
        Ok(())
    }

    fn num_lines(&self) -> u8 {
        LINES as u8
    }

    fn chars_per_line(&self) -> u8 {
        CHARS as u8
    }
}
