mod load_draft;
mod save_draft;

pub use load_draft::LoadDraft;
pub use save_draft::SaveDraft;
