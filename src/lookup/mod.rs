//! In-memory lookup pipeline: index → join → filter → render.

pub mod filter;
pub mod index;
pub mod join;
pub mod view;

pub use filter::FilterQuery;
pub use index::{build_index_by_key, build_index_by_number, AttachmentIndex};
pub use join::{join, JoinOutcome, JoinedRow};
pub use view::{render, render_with, LoadoutObserver, RenderedView, TableRow, ViewState};
