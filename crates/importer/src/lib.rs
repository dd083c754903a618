pub mod error;
pub mod lenient;
pub mod linker;
pub mod movement_mapper;
pub mod pipeline;
pub mod projector;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use movement_mapper::{DisciplineMapper, MovementMapper};
pub use pipeline::build_snapshot;
pub use projector::{DocumentKind, Entity, EntityProjector, Projection};
pub use sources::RawDocument;
pub use sources::couch::{CouchClient, CouchDocumentSource};
pub use traits::DocumentSource;
