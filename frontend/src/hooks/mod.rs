pub mod use_entity_list;
pub mod use_session;

pub use use_entity_list::{use_entity_list, EntityList};
pub use use_session::{use_app, AppContext};
