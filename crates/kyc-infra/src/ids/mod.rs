mod sequential;

pub use sequential::SequentialApplicationIds;
