//! Specifies logic to write the computed delivery schedule in transmodal json format.

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::{TransmodalSchedule, create_schedule_model};
