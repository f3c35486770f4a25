mod battery;

pub use battery::BatteryQa;

use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> BackendBox {
        return Box::new(BatteryQa::default());
    }
}
