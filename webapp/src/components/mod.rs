pub mod modal;
pub mod navigation;
pub mod spotlight;
pub mod tech_detail;
pub mod tiles;
