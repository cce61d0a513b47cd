mod settings;

pub use settings::{AlarmConfig, FmsConfig, Settings};
