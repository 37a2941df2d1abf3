//! Text serialization of mesh scalars as embeddable float literals, and the
//! single write of the resulting asset file.

mod format;
mod writer;

pub use format::{format_scalar, serialize_scalars};
pub use writer::{AssetError, write_mesh_asset};
