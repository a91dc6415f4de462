pub mod scripted;

use crate::domain::models::ResponderBox;

pub struct ResponderManager {}

impl ResponderManager {
    pub fn get() -> ResponderBox {
        return Box::<scripted::Scripted>::default();
    }
}
