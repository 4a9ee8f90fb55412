pub mod activity_list;
pub mod sidebar;
pub mod stat_card;
pub mod top_bar;
