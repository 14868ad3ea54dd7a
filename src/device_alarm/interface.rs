/// The audible alert surface. `prime` performs whatever warm-up the backend
/// needs before it may produce sound.
pub trait DeviceAlarm: Send + Sync {
    fn prime(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn sound(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn silence(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
