pub mod document_title;
pub mod icons;
