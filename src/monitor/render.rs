use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::monitor::core::{AlarmState, AlertKind, CameraState, State};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    config: Config,
}

impl Render {
    pub fn new(
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        config: Config,
    ) -> Self {
        Self {
            device_display,
            config,
        }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        device_display.clear()?;

        match state {
            State::Connecting { camera } => match camera {
                CameraState::Disconnected => {
                    device_display.write_line(0, "Camera connecting...")?;
                }
                CameraState::Connected(time) => {
                    if time.elapsed() > Duration::from_secs(2) {
                        device_display.write_line(0, "Camera connected")?;
                    } else {
                        device_display.write_line(0, "Starting camera...")?;
                    }
                }
                CameraState::Failed(message) => {
                    device_display.write_line(0, &format!("Camera error: {}", message))?;
                }
            },
            State::Monitoring { session } => {
                device_display.write_line(0, &session.status.text())?;

                if let AlarmState::Cooldown { since } = &session.alarm {
                    let remaining = (self.config.alarm_cooldown.as_secs() as i64
                        - since.elapsed().as_secs() as i64)
                        .max(0);
                    device_display.write_line(1, &format!("Alert triggered ({}s)", remaining))?;
                } else if session.processing {
                    device_display.write_line(1, "Processing...")?;
                }

                let first_alert_line = 2u8;
                let available = device_display.num_lines().saturating_sub(first_alert_line);
                if session.alerts.is_empty() {
                    device_display.write_line(first_alert_line, "No alerts yet")?;
                } else {
                    for (i, alert) in session.alerts.iter().take(available as usize).enumerate() {
                        let label = match alert.kind {
                            AlertKind::Sleeping => "Sleeping alert",
                            AlertKind::Drowsy => "Drowsy alert",
                        };
                        device_display.write_line(
                            first_alert_line + i as u8,
                            &format!("{} {}", label, alert.at.format("%I:%M %p")),
                        )?;
                    }
                }

                if let Some(frame) = &session.annotated_frame {
                    device_display.show_frame(frame)?;
                }
            }
        }

        Ok(())
    }
}
