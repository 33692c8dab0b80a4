pub mod confusion;
pub mod metric;
pub mod request;
pub mod roc;
