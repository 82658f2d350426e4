//! Core-Domänentypen: Koordinaten, Linientypen, Linien-Geometrie, Zonen.

pub mod bounds;
pub mod coordinate;
pub mod error;
pub mod line;
pub mod line_type;
pub mod zone;

pub use bounds::Bounds;
pub use coordinate::{format_point, Coordinate, DEFAULT_ZONE_TOLERANCE};
pub use error::{GeometryError, ParseError};
pub use line::{ContainerState, Handle, Line, LineLabels};
pub use line_type::{LineType, UnknownLineType};
pub use zone::{in_zone, Zone};
