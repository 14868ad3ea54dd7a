use super::main::Monitor;
use crate::monitor::core::{init, transition, Effect};

impl Monitor {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init();
        *self.model.lock().unwrap() = current_model.clone();

        self.spawn_effects(effects);

        loop {
            let event = self.recv()?;

            let _ = self
                .logger
                .info(&format!("event: {}", event.to_display_string()));

            let (new_model, effects) = transition(&self.config, current_model, event);

            let _ = self.logger.info(&format!(
                "model: {} effects: [{}]",
                new_model.to_display_string(),
                effects
                    .iter()
                    .map(|e| e.to_display_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));

            current_model = new_model.clone();
            *self.model.lock().unwrap() = new_model;

            if let Err(e) = self.render.render(&current_model) {
                let _ = self.logger.info(&format!("render error: {}", e));
            }

            self.spawn_effects(effects);
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }
}
