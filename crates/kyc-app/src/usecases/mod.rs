pub mod draft;
pub mod review;
pub mod wizard;
