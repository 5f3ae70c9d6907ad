//! Reusable UI components shared by the pages.

pub mod sidebar;
pub mod stat_card;
pub mod text_field;
pub mod toast;
pub mod top_navbar;
