pub mod confirm_dialog;
pub mod data_table;
pub mod fields;
pub mod header;
pub mod layout;
pub mod modal;
pub mod sidebar;
pub mod spinner;
pub mod stats_card;

pub use confirm_dialog::ConfirmDialog;
pub use data_table::DataTable;
pub use fields::{bind_field, CheckboxField, SelectField, TextAreaField, TextField};
pub use header::Header;
pub use layout::Layout;
pub use modal::Modal;
pub use sidebar::Sidebar;
pub use spinner::Spinner;
pub use stats_card::StatsCard;
