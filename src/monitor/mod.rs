pub mod core;
mod interpret_effect;
pub mod main;
pub mod render;
mod run;

#[cfg(test)]
mod tests;
