pub mod column;
pub mod events;
pub mod export;
pub mod filter;
pub mod format;
pub mod grid;
pub mod row;
pub mod selection;
pub mod sort;
pub mod storage;
pub mod value;

pub use grid::Grid;

pub mod prelude {
    pub use crate::column::{Column, DataType};
    pub use crate::events::{EventResult, Modifiers};
    pub use crate::export::{ExportError, export_file_name};
    pub use crate::format::{BoolTokens, DEFAULT_DATE_FORMAT};
    pub use crate::grid::{ColumnLayout, Grid, MIN_COLUMN_WIDTH};
    pub use crate::row::Row;
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::sort::{SortDirection, SortSpec};
    pub use crate::storage::{FileStore, LayoutStore, MemoryStore, SharedMemoryStore, StorageError};
    pub use crate::value::CellValue;
}
