pub mod forms;
pub mod header;
pub mod history_list;
pub mod loading_overlay;
pub mod redeem_section;
pub mod result_panel;
