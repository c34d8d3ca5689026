pub mod browse;
pub mod catalog;
pub mod compare;
pub mod directory;
pub mod forms;
pub mod site;
pub mod theme;

pub use browse::{BrowseInput, present_browse_screen};
pub use catalog::{
    present_categories, present_category_tiles, present_featured, present_filter_counts,
    present_hero, present_sort_options,
};
pub use compare::{present_compare, present_comparison_table};
pub use directory::{present_card, present_detail, present_directory, present_list, present_show};
pub use forms::{present_submission, present_subscription};
pub use site::{SiteRequest, present_site, present_site_build};
pub use theme::present_theme;
