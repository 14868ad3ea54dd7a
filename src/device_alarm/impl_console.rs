use crate::device_alarm::interface::DeviceAlarm;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct DeviceAlarmConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceAlarmConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("alarm").with_namespace("console"),
        }
    }
}

impl DeviceAlarm for DeviceAlarmConsole {
    fn prime(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Alarm primed")?;
        Ok(())
    }

    fn sound(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Terminal bell
        print!("\x07");
        self.logger.info("ALARM")?;
        Ok(())
    }

    fn silence(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Alarm silenced")?;
        Ok(())
    }
}
