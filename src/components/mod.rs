pub mod add_data_form;
pub mod csv_upload;
pub mod prediction_table;
pub mod price_chart;
pub mod sidebar;
pub mod stat_card;
