use config::Config;
use detector::impl_fake::DetectorFake;
use detector::impl_http::DetectorHttp;
use detector::interface::Detector;
use device_alarm::impl_console::DeviceAlarmConsole;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use monitor::main::Monitor;
use std::sync::{Arc, Mutex};

mod config;
mod detector;
mod device_alarm;
mod device_camera;
mod device_display;
mod library;
mod monitor;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let args: Vec<String> = std::env::args().collect();

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));

    let device_alarm = Arc::new(DeviceAlarmConsole::new(logger.clone()));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        if args.iter().any(|a| a == "--gui") {
            let mut display = DeviceDisplayGui::new();
            display.init()?;
            Arc::new(Mutex::new(display))
        } else {
            Arc::new(Mutex::new(DeviceDisplayConsole::new()))
        };

    let detector: Arc<dyn Detector + Send + Sync> = if args.iter().any(|a| a == "--fake-detector")
    {
        Arc::new(DetectorFake::new(logger.clone()))
    } else {
        Arc::new(DetectorHttp::new(&config, logger.clone()))
    };

    let monitor = Monitor::new(
        config,
        logger,
        device_camera,
        device_alarm,
        device_display,
        detector,
    );

    monitor.run()?;

    Ok(())
}
