pub mod band_card;
pub mod fields;
pub mod kpi_card;
pub mod product_editor;
pub mod toast;
