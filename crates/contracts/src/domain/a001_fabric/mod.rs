pub mod aggregate;
pub mod composition;

pub use aggregate::{
    CompositionItem, Fabric, FabricComposition, FabricDto, FabricListQuery, FabricListResponse,
    Pagination, SortOrder, Supplier,
};
pub use composition::CompositionEditor;
