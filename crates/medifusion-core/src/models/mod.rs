pub mod payload;
pub mod report;
pub mod response;
pub mod view;
