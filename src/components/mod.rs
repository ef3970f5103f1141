//! UI Components
//!
//! Screens and the dialogs they share.

mod confirm_dialog;
mod edit_dialog;
mod notice_dialog;
mod greeting;
mod search_field;
mod shop_card;
mod welcome;
mod note_list;
mod add_note;
mod shops_near_me;
mod drinks;
mod settings;

pub use confirm_dialog::ConfirmDialog;
pub use edit_dialog::EditDialog;
pub use notice_dialog::NoticeDialog;
pub use greeting::Greeting;
pub use search_field::SearchField;
pub use shop_card::ShopCard;
pub use welcome::Welcome;
pub use note_list::NoteList;
pub use add_note::AddNote;
pub use shops_near_me::ShopsNearMe;
pub use drinks::Drinks;
pub use settings::Settings;
