//! Widget views

pub mod product_list;
pub mod search_bar;
pub mod theme;
