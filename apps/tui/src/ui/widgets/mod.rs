pub mod charts;
pub mod legend;
pub mod popup;
pub mod status;
pub mod tables;
