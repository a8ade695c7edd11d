mod editor_state;

pub use editor_state::{EditorBuffers, normalize_paste};
