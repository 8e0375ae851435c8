pub mod calculator;
pub mod settings;
pub mod unlock;

pub use calculator::CalculatorPage;
pub use settings::SettingsPage;
pub use unlock::UnlockPage;
